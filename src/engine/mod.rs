// ============================================================================
// Engine Module
// Contains the decoding logic and the renderer factory
// ============================================================================

mod decoder;

pub mod factory;

pub use decoder::{decode, DecimalDecoder};
pub use factory::{create_from_config, DecoderBuilder};
