// ============================================================================
// Numeric Module
// Exact integer arithmetic for decimal decoding
// ============================================================================
//
// This module provides:
// - Mantissa96: three-limb 96-bit unsigned integer with exact digit extraction
// - DecodeError: Error types for decoding
//
// Design principles:
// - No floating-point operations
// - Fixed-capacity buffers (no heap allocation while extracting digits)
// - Fallible operations return Result (no panics)

mod errors;
mod mantissa;

pub use errors::{DecodeError, DecodeResult};
pub use mantissa::{Digits, Mantissa96, MAX_DIGITS};
