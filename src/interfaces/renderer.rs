// ============================================================================
// Renderer Interface
// The call a host inspection tool makes to display a packed decimal
// ============================================================================

use crate::domain::PackedDecimal;
use crate::engine::DecimalDecoder;

/// Turns a packed decimal into display text for a host tool.
///
/// A debugger or viewer shim holds a `Box<dyn DecimalRenderer>` and calls
/// [`DecimalRenderer::render`] with the words it extracted. Rendering never
/// fails; bad scales are shown best-effort.
pub trait DecimalRenderer: Send + Sync {
    /// Render a packed value
    fn render(&self, packed: &PackedDecimal) -> String;

    /// Get the renderer name for logging
    fn name(&self) -> &str;

    /// Render from the four raw words
    fn render_words(&self, low: u32, mid: u32, high: u32, flags: u32) -> String {
        self.render(&PackedDecimal::new(low, mid, high, flags))
    }
}

/// Positional notation: `-123.45`, `0.100`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer {
    decoder: DecimalDecoder,
}

impl PlainRenderer {
    pub fn new(decoder: DecimalDecoder) -> Self {
        Self { decoder }
    }
}

impl DecimalRenderer for PlainRenderer {
    fn render(&self, packed: &PackedDecimal) -> String {
        self.decoder.render(packed).to_string()
    }

    fn name(&self) -> &str {
        "plain"
    }
}

/// Scientific notation: `-1.2345e2`, or `-1.2345E2` when uppercase
#[derive(Debug, Clone, Copy, Default)]
pub struct ScientificRenderer {
    decoder: DecimalDecoder,
    uppercase: bool,
}

impl ScientificRenderer {
    pub fn new(decoder: DecimalDecoder, uppercase: bool) -> Self {
        Self { decoder, uppercase }
    }
}

impl DecimalRenderer for ScientificRenderer {
    fn render(&self, packed: &PackedDecimal) -> String {
        let decoded = self.decoder.render(packed);
        if self.uppercase {
            format!("{:E}", decoded)
        } else {
            format!("{:e}", decoded)
        }
    }

    fn name(&self) -> &str {
        if self.uppercase {
            "scientific-upper"
        } else {
            "scientific"
        }
    }
}
