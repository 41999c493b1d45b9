// ============================================================================
// Decoder Configuration
// Scale validation policy and rendering style
// ============================================================================

use super::packed::MAX_SCALE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Scale Policy
// ============================================================================

/// What a decoder does when the scale bits exceed `max_scale`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScalePolicy {
    /// Apply whatever scale the bits hold and render anyway
    /// - Never fails
    /// - Use case: debuggers and log viewers that must not abort on bad data
    #[default]
    PassThrough,

    /// Reject values whose scale is out of range
    /// - Fails with `DecodeError::OutOfRangeScale`
    /// - Use case: file inspectors validating stored values
    Strict,
}

// ============================================================================
// Render Style
// ============================================================================

/// Output notation used by renderers built from a config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenderStyle {
    /// Positional notation with the exact encoded precision (`-123.45`)
    #[default]
    Plain,
    /// Scientific notation with a lowercase exponent (`-1.2345e2`)
    Scientific,
    /// Scientific notation with an uppercase exponent (`-1.2345E2`)
    ScientificUpper,
}

// ============================================================================
// Complete Decoder Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodeConfig {
    /// How out-of-range scales are handled
    pub scale_policy: ScalePolicy,

    /// Largest scale considered in range (the layout defines 28)
    pub max_scale: u8,

    /// Notation for renderers created from this config
    pub render_style: RenderStyle,
}

impl DecodeConfig {
    /// Pass-through policy, layout maximum, plain rendering
    pub const fn new() -> Self {
        Self {
            scale_policy: ScalePolicy::PassThrough,
            max_scale: MAX_SCALE,
            render_style: RenderStyle::Plain,
        }
    }

    /// Strict policy with the layout maximum
    pub const fn strict() -> Self {
        Self::new().with_scale_policy(ScalePolicy::Strict)
    }

    /// Builder method: Set scale policy
    pub const fn with_scale_policy(mut self, policy: ScalePolicy) -> Self {
        self.scale_policy = policy;
        self
    }

    /// Builder method: Set maximum in-range scale
    pub const fn with_max_scale(mut self, max_scale: u8) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Builder method: Set render style
    pub const fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    #[inline]
    pub const fn is_strict(&self) -> bool {
        matches!(self.scale_policy, ScalePolicy::Strict)
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new()
    }
}
