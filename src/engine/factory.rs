// ============================================================================
// Renderer Factory
// Creates decoders and renderers with proper configuration
// ============================================================================

use crate::domain::config::{DecodeConfig, RenderStyle, ScalePolicy};
use crate::engine::DecimalDecoder;
use crate::interfaces::{DecimalRenderer, PlainRenderer, ScientificRenderer};

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a renderer from configuration
///
/// # Example
/// ```
/// use packed_decimal::domain::{DecodeConfig, RenderStyle};
/// use packed_decimal::engine::create_from_config;
///
/// let config = DecodeConfig::new().with_render_style(RenderStyle::Scientific);
/// let renderer = create_from_config(config);
/// assert_eq!(renderer.render_words(12345, 0, 0, 0x0002_0000), "1.2345e2");
/// ```
pub fn create_from_config(config: DecodeConfig) -> Box<dyn DecimalRenderer> {
    let decoder = DecimalDecoder::new(config);
    match config.render_style {
        RenderStyle::Plain => Box::new(PlainRenderer::new(decoder)),
        RenderStyle::Scientific => Box::new(ScientificRenderer::new(decoder, false)),
        RenderStyle::ScientificUpper => Box::new(ScientificRenderer::new(decoder, true)),
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for decoders and renderers with a fluent API
///
/// # Example
/// ```
/// use packed_decimal::engine::DecoderBuilder;
///
/// let decoder = DecoderBuilder::new().strict().max_scale(10).build();
/// assert!(decoder.decode_words(1, 0, 0, 0x000B_0000).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderBuilder {
    config: DecodeConfig,
}

impl DecoderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject scales above the maximum
    pub fn strict(mut self) -> Self {
        self.config.scale_policy = ScalePolicy::Strict;
        self
    }

    /// Render whatever scale the bits hold (default)
    pub fn pass_through(mut self) -> Self {
        self.config.scale_policy = ScalePolicy::PassThrough;
        self
    }

    pub fn max_scale(mut self, max_scale: u8) -> Self {
        self.config.max_scale = max_scale;
        self
    }

    pub fn render_style(mut self, style: RenderStyle) -> Self {
        self.config.render_style = style;
        self
    }

    pub fn config(&self) -> DecodeConfig {
        self.config
    }

    pub fn build(self) -> DecimalDecoder {
        DecimalDecoder::new(self.config)
    }

    pub fn build_renderer(self) -> Box<dyn DecimalRenderer> {
        create_from_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_config_styles() {
        let plain = create_from_config(DecodeConfig::new());
        assert_eq!(plain.name(), "plain");
        assert_eq!(plain.render_words(12345, 0, 0, 0x0002_0000), "123.45");

        let sci = create_from_config(DecodeConfig::new().with_render_style(RenderStyle::Scientific));
        assert_eq!(sci.name(), "scientific");

        let upper =
            create_from_config(DecodeConfig::new().with_render_style(RenderStyle::ScientificUpper));
        assert_eq!(upper.render_words(100, 0, 0, 0), "1E2");
    }

    #[test]
    fn test_builder() {
        let builder = DecoderBuilder::new().strict().max_scale(6);
        assert!(builder.config().is_strict());
        assert_eq!(builder.config().max_scale, 6);

        let decoder = builder.pass_through().build();
        assert!(!decoder.config().is_strict());
        assert_eq!(decoder.decode_words(1, 0, 0, 0x0007_0000), Ok("0.0000001".to_string()));
    }

    #[test]
    fn test_build_renderer() {
        let renderer = DecoderBuilder::new()
            .render_style(RenderStyle::Scientific)
            .build_renderer();
        assert_eq!(renderer.render_words(5, 0, 0, 0x0004_0000), "5e-4");
    }
}
