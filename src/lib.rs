// ============================================================================
// Packed Decimal Library
// Exact rendering of 96-bit mantissa packed decimals for inspection tools
// ============================================================================

//! # Packed Decimal
//!
//! Decodes the 128-bit "96-bit mantissa + flags word" decimal layout into an
//! exact base-10 string, for debuggers, log viewers and file inspectors that
//! need to show such values without arbitrary-precision floating math.
//!
//! ## Layout
//!
//! - `low`, `mid`, `high`: mantissa limbs, least significant first
//! - `flags`: scale in bits 16-23, sign in bit 31, other bits reserved
//!
//! The value is `(high * 2^64 + mid * 2^32 + low) / 10^scale`, negated when
//! the sign bit is set and the mantissa is nonzero.
//!
//! ## Features
//!
//! - **Exact**: limb-wise integer division, never floating point
//! - **Total**: every input renders; out-of-range scales pass through unless
//!   a strict decoder is requested
//! - **Allocation-light**: digits and text are built in fixed stack buffers
//!
//! ## Example
//!
//! ```rust
//! use packed_decimal::prelude::*;
//!
//! // One-shot decode of raw words
//! assert_eq!(decode(12345, 0, 0, 0x8002_0000), "-123.45");
//!
//! // Strict decoding rejects scales above 28
//! let decoder = DecimalDecoder::strict();
//! assert!(decoder.decode_words(1, 0, 0, 0x001D_0000).is_err());
//!
//! // Values straight from rust_decimal
//! let packed = PackedDecimal::from(rust_decimal::Decimal::new(-5, 3));
//! assert_eq!(decoder.decode_to_string(&packed).unwrap(), "-0.005");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

pub use engine::decode;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DecodeConfig, DecodedDecimal, PackedDecimal, RenderStyle, ScalePolicy, MAX_SCALE,
    };
    pub use crate::engine::{create_from_config, decode, DecimalDecoder, DecoderBuilder};
    pub use crate::interfaces::{DecimalRenderer, PlainRenderer, ScientificRenderer};
    pub use crate::numeric::{DecodeError, DecodeResult, Mantissa96};
}
