// ============================================================================
// 96-bit Mantissa
// Exact three-limb unsigned integer with digit extraction
// ============================================================================

use arrayvec::ArrayVec;
use std::fmt;

/// Number of decimal digits in the largest 96-bit value (2^96 - 1).
pub const MAX_DIGITS: usize = 29;

/// Fixed-capacity buffer of ASCII digits, most significant first.
pub type Digits = ArrayVec<u8, MAX_DIGITS>;

/// Unsigned 96-bit integer stored as three 32-bit limbs.
///
/// Limbs are ordered least to most significant: `[low, mid, high]`, so the
/// value is `high * 2^64 + mid * 2^32 + low`.
///
/// All operations are integer-only. Digit extraction divides the limbs by 10
/// in place, carrying the remainder from the high limb down, so no value in
/// the 96-bit range ever loses precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mantissa96([u32; 3]);

impl Mantissa96 {
    /// Zero
    pub const ZERO: Self = Self([0; 3]);

    /// Largest representable value, 2^96 - 1
    pub const MAX: Self = Self([u32::MAX; 3]);

    /// Build from the three limbs, least significant first.
    #[inline]
    pub const fn new(low: u32, mid: u32, high: u32) -> Self {
        Self([low, mid, high])
    }

    /// Build from a `u128`.
    ///
    /// Returns `None` if the value does not fit in 96 bits.
    #[inline]
    pub const fn from_u128(value: u128) -> Option<Self> {
        if value >> 96 != 0 {
            return None;
        }
        Some(Self([
            value as u32,
            (value >> 32) as u32,
            (value >> 64) as u32,
        ]))
    }

    #[inline]
    pub const fn limbs(self) -> [u32; 3] {
        self.0
    }

    /// Widen to `u128`. Always exact.
    #[inline]
    pub const fn to_u128(self) -> u128 {
        (self.0[2] as u128) << 64 | (self.0[1] as u128) << 32 | self.0[0] as u128
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0
    }

    /// Divide in place by a small non-zero divisor, returning the remainder.
    #[inline]
    fn div_rem_small(&mut self, divisor: u32) -> u32 {
        debug_assert!(divisor != 0);
        let divisor = u64::from(divisor);
        let mut remainder = 0u64;
        for limb in self.0.iter_mut().rev() {
            let temp = (remainder << 32) | u64::from(*limb);
            *limb = (temp / divisor) as u32;
            remainder = temp % divisor;
        }
        remainder as u32
    }

    /// Decimal digits of the value as ASCII bytes, most significant first.
    ///
    /// Zero yields an empty buffer; callers decide how zero is spelled.
    pub fn digits(self) -> Digits {
        let mut working = self;
        let mut digits = Digits::new();
        while !working.is_zero() {
            let rem = working.div_rem_small(10);
            // At most MAX_DIGITS iterations for any 96-bit value.
            digits.push(b'0' + rem as u8);
        }
        digits.reverse();
        digits
    }

    /// Number of significant decimal digits (zero has none).
    pub fn digit_count(self) -> usize {
        self.digits().len()
    }
}

impl From<[u32; 3]> for Mantissa96 {
    #[inline]
    fn from(limbs: [u32; 3]) -> Self {
        Self(limbs)
    }
}

impl fmt::Display for Mantissa96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.digits();
        if digits.is_empty() {
            return f.pad_integral(true, "", "0");
        }
        // Digits are always ASCII.
        let s = std::str::from_utf8(&digits).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Mantissa96::ZERO.to_u128(), 0);
        assert_eq!(Mantissa96::MAX.to_u128(), (1u128 << 96) - 1);
        assert_eq!(Mantissa96::MAX.digit_count(), MAX_DIGITS);
    }

    #[test]
    fn test_limb_order() {
        let m = Mantissa96::new(1, 0, 0);
        assert_eq!(m.to_u128(), 1);

        let m = Mantissa96::new(0, 1, 0);
        assert_eq!(m.to_u128(), 1u128 << 32);

        let m = Mantissa96::new(0, 0, 1);
        assert_eq!(m.to_u128(), 1u128 << 64);
    }

    #[test]
    fn test_from_u128() {
        let value = 0x0123_4567_89ab_cdef_0011_2233u128;
        let m = Mantissa96::from_u128(value).unwrap();
        assert_eq!(m.limbs(), [0x0011_2233, 0x89ab_cdef, 0x0123_4567]);
        assert_eq!(m.to_u128(), value);

        assert_eq!(Mantissa96::from_u128(1u128 << 96), None);
        assert_eq!(Mantissa96::from_u128((1u128 << 96) - 1), Some(Mantissa96::MAX));
    }

    #[test]
    fn test_digits() {
        assert!(Mantissa96::ZERO.digits().is_empty());
        assert_eq!(&Mantissa96::new(7, 0, 0).digits()[..], b"7");
        assert_eq!(&Mantissa96::new(12345, 0, 0).digits()[..], b"12345");
        assert_eq!(
            &Mantissa96::MAX.digits()[..],
            b"79228162514264337593543950335"
        );
    }

    #[test]
    fn test_digits_across_limbs() {
        // 2^64 = 18446744073709551616
        let m = Mantissa96::new(0, 0, 1);
        assert_eq!(&m.digits()[..], b"18446744073709551616");

        // 2^32 = 4294967296
        let m = Mantissa96::new(0, 1, 0);
        assert_eq!(&m.digits()[..], b"4294967296");
    }

    #[test]
    fn test_digits_match_u128() {
        let values = [
            1u128,
            9,
            10,
            u32::MAX as u128,
            u64::MAX as u128,
            1_000_000_000_000_000_000_000_000_000,
            (1u128 << 96) - 2,
        ];
        for value in values {
            let m = Mantissa96::from_u128(value).unwrap();
            assert_eq!(
                std::str::from_utf8(&m.digits()).unwrap(),
                value.to_string()
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Mantissa96::ZERO.to_string(), "0");
        assert_eq!(Mantissa96::new(42, 0, 0).to_string(), "42");
        assert_eq!(format!("{:>5}", Mantissa96::new(42, 0, 0)), "   42");
    }
}
