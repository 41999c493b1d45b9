// ============================================================================
// Decode Errors
// Error types for packed decimal decoding
// ============================================================================

use std::fmt;

/// Errors that can occur while decoding a packed decimal.
///
/// The default pass-through policy never produces `OutOfRangeScale`; it only
/// surfaces when a decoder is configured with `ScalePolicy::Strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// Scale bits encode a value above the allowed maximum
    OutOfRangeScale { scale: u8, max: u8 },
    /// Byte buffer is not exactly one packed value long
    InvalidLength { expected: usize, actual: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::OutOfRangeScale { scale, max } => {
                write!(f, "scale out of range: {} exceeds maximum of {}", scale, max)
            },
            DecodeError::InvalidLength { expected, actual } => write!(
                f,
                "invalid length: expected {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type alias for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;
