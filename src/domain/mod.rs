// ============================================================================
// Domain Models Module
// Contains the packed input layout, the decoded value and configuration
// ============================================================================

pub mod config;
pub mod decoded;
pub mod packed;

pub use config::{DecodeConfig, RenderStyle, ScalePolicy};
pub use decoded::{DecodedDecimal, MAX_STR_BUFFER_SIZE};
pub use packed::{PackedDecimal, MAX_SCALE, PACKED_LEN, SCALE_MASK, SCALE_SHIFT, SIGN_MASK};
