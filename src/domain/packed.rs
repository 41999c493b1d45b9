// ============================================================================
// Packed Decimal
// The raw four-word 128-bit decimal layout
// ============================================================================

use crate::numeric::{DecodeError, DecodeResult, Mantissa96};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit 31 of the flags word: set for negative values
pub const SIGN_MASK: u32 = 0x8000_0000;

/// Bits 16-23 of the flags word: the scale
pub const SCALE_MASK: u32 = 0x00FF_0000;

/// Shift applied after masking to obtain the scale
pub const SCALE_SHIFT: u32 = 16;

/// Largest scale the layout defines (digits after the decimal point)
pub const MAX_SCALE: u8 = 28;

/// Size in bytes of one packed value
pub const PACKED_LEN: usize = 16;

/// A decimal in the 96-bit mantissa + flags word layout.
///
/// - `low`, `mid`, `high`: mantissa limbs, least significant first
/// - `flags`: scale in bits 16-23, sign in bit 31, everything else reserved
///
/// The struct is a plain carrier for the words as they were read. Nothing is
/// validated on construction; reserved bits are kept but never interpreted,
/// and a scale above [`MAX_SCALE`] is preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackedDecimal {
    pub low: u32,
    pub mid: u32,
    pub high: u32,
    pub flags: u32,
}

impl PackedDecimal {
    /// Create from the four raw words.
    #[inline]
    pub const fn new(low: u32, mid: u32, high: u32, flags: u32) -> Self {
        Self {
            low,
            mid,
            high,
            flags,
        }
    }

    /// Create from a mantissa, a scale and a sign.
    ///
    /// # Example
    /// ```
    /// use packed_decimal::domain::PackedDecimal;
    /// use packed_decimal::numeric::Mantissa96;
    ///
    /// let packed = PackedDecimal::from_parts(Mantissa96::new(12345, 0, 0), 2, true);
    /// assert_eq!(packed.flags, 0x8002_0000);
    /// ```
    #[inline]
    pub const fn from_parts(mantissa: Mantissa96, scale: u8, negative: bool) -> Self {
        let [low, mid, high] = mantissa.limbs();
        let sign = if negative { SIGN_MASK } else { 0 };
        Self::new(low, mid, high, sign | (scale as u32) << SCALE_SHIFT)
    }

    // ========================================================================
    // Field Extraction
    // ========================================================================

    /// The 96-bit mantissa.
    #[inline]
    pub const fn mantissa(&self) -> Mantissa96 {
        Mantissa96::new(self.low, self.mid, self.high)
    }

    /// Scale bits, unvalidated.
    #[inline]
    pub const fn scale(&self) -> u8 {
        ((self.flags & SCALE_MASK) >> SCALE_SHIFT) as u8
    }

    /// Raw sign bit. Note that zero can carry it.
    #[inline]
    pub const fn is_sign_negative(&self) -> bool {
        self.flags & SIGN_MASK != 0
    }

    #[inline]
    pub const fn is_scale_in_range(&self) -> bool {
        self.scale() <= MAX_SCALE
    }

    // ========================================================================
    // Byte Layout
    // ========================================================================

    /// Read from 16 little-endian bytes in word order `low, mid, high, flags`.
    pub const fn from_le_bytes(bytes: [u8; PACKED_LEN]) -> Self {
        Self::new(
            u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        )
    }

    /// Inverse of [`PackedDecimal::from_le_bytes`].
    pub fn to_le_bytes(&self) -> [u8; PACKED_LEN] {
        let mut out = [0u8; PACKED_LEN];
        for (chunk, word) in out
            .chunks_exact_mut(4)
            .zip([self.low, self.mid, self.high, self.flags])
        {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

impl TryFrom<&[u8]> for PackedDecimal {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> DecodeResult<Self> {
        let array: [u8; PACKED_LEN] = bytes.try_into().map_err(|_| DecodeError::InvalidLength {
            expected: PACKED_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self::from_le_bytes(array))
    }
}

// ============================================================================
// Conversion from rust_decimal
// ============================================================================

impl From<rust_decimal::Decimal> for PackedDecimal {
    /// Capture the words of a `rust_decimal::Decimal`.
    ///
    /// Its mantissa is at most 96 bits and its scale at most 28, so this is
    /// always exact.
    fn from(d: rust_decimal::Decimal) -> Self {
        let magnitude = d.mantissa().unsigned_abs();
        let mantissa = Mantissa96::new(
            magnitude as u32,
            (magnitude >> 32) as u32,
            (magnitude >> 64) as u32,
        );
        Self::from_parts(mantissa, d.scale() as u8, d.is_sign_negative())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_field_extraction() {
        let packed = PackedDecimal::new(12345, 0, 0, 0x8002_0000);
        assert_eq!(packed.mantissa().to_u128(), 12345);
        assert_eq!(packed.scale(), 2);
        assert!(packed.is_sign_negative());
        assert!(packed.is_scale_in_range());
    }

    #[test]
    fn test_reserved_bits_ignored() {
        // Low 16 bits and bits 24-30 are reserved
        let packed = PackedDecimal::new(1, 0, 0, 0x7F03_FFFF);
        assert_eq!(packed.scale(), 3);
        assert!(!packed.is_sign_negative());
    }

    #[test]
    fn test_out_of_range_scale_preserved() {
        let packed = PackedDecimal::new(1, 0, 0, 0x00FF_0000);
        assert_eq!(packed.scale(), 255);
        assert!(!packed.is_scale_in_range());
    }

    #[test]
    fn test_from_parts() {
        let packed = PackedDecimal::from_parts(Mantissa96::MAX, 28, false);
        assert_eq!(packed.low, u32::MAX);
        assert_eq!(packed.mid, u32::MAX);
        assert_eq!(packed.high, u32::MAX);
        assert_eq!(packed.flags, 0x001C_0000);
    }

    #[test]
    fn test_le_bytes() {
        let packed = PackedDecimal::new(0x0403_0201, 0x0807_0605, 0x0C0B_0A09, 0x8002_0000);
        let bytes = packed.to_le_bytes();
        assert_eq!(
            bytes,
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 0, 0, 2, 0x80]
        );
        assert_eq!(PackedDecimal::from_le_bytes(bytes), packed);
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = [0u8; 16];
        assert_eq!(
            PackedDecimal::try_from(&bytes[..]),
            Ok(PackedDecimal::default())
        );

        let result = PackedDecimal::try_from(&bytes[..15]);
        assert_eq!(
            result,
            Err(DecodeError::InvalidLength {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_from_rust_decimal() {
        let d = Decimal::from_str("-123.45").unwrap();
        let packed = PackedDecimal::from(d);
        assert_eq!(packed.mantissa().to_u128(), 12345);
        assert_eq!(packed.scale(), 2);
        assert!(packed.is_sign_negative());

        let packed = PackedDecimal::from(Decimal::MAX);
        assert_eq!(packed.mantissa(), Mantissa96::MAX);
        assert_eq!(packed.scale(), 0);
        assert!(!packed.is_sign_negative());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let packed = PackedDecimal::new(1, 2, 3, 0x8001_0000);
        let json = serde_json::to_string(&packed).unwrap();
        assert_eq!(json, r#"{"low":1,"mid":2,"high":3,"flags":2147549184}"#);
        let back: PackedDecimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, packed);
    }
}
