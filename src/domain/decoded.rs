// ============================================================================
// Decoded Decimal
// Exact sign / digits / scale view of a packed decimal, with formatting
// ============================================================================

use super::packed::{PackedDecimal, MAX_SCALE};
use crate::numeric::{Digits, Mantissa96};
use arrayvec::ArrayString;
use std::fmt::{self, Write};

/// Longest unsigned positional rendering: `"0."` followed by a scale of 255.
pub const MAX_STR_BUFFER_SIZE: usize = 2 + u8::MAX as usize;

/// Longest unsigned scientific rendering: 29 digits, a point and `e-255`.
const MAX_SCI_BUFFER_SIZE: usize = 40;

/// A decoded decimal value: `mantissa / 10^scale`, negated when `negative`.
///
/// Nothing here is ever approximated. The digits come from exact division of
/// the 96-bit mantissa, and the scale is kept as encoded, so trailing zeros
/// survive (`100` at scale 3 renders as `0.100`).
///
/// `negative` is only set for nonzero values; a sign bit on zero is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedDecimal {
    negative: bool,
    mantissa: Mantissa96,
    digits: Digits,
    scale: u8,
}

impl DecodedDecimal {
    /// Decode without any scale validation.
    pub fn new(packed: &PackedDecimal) -> Self {
        let mantissa = packed.mantissa();
        Self {
            negative: packed.is_sign_negative() && !mantissa.is_zero(),
            mantissa,
            digits: mantissa.digits(),
            scale: packed.scale(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    #[inline]
    pub fn scale(&self) -> u8 {
        self.scale
    }

    #[inline]
    pub fn mantissa(&self) -> Mantissa96 {
        self.mantissa
    }

    /// Significant digits as ASCII, most significant first. Empty for zero.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[inline]
    pub fn is_scale_in_range(&self) -> bool {
        self.scale <= MAX_SCALE
    }

    /// Digits left of the decimal point, unsigned (`"0"` when there are none).
    pub fn integer_part(&self) -> String {
        let split = self.digits.len().saturating_sub(self.scale as usize);
        if split == 0 {
            "0".to_string()
        } else {
            ascii(&self.digits[..split]).to_string()
        }
    }

    /// Exactly `scale` digits right of the decimal point, zero-padded on the left.
    pub fn fractional_part(&self) -> String {
        let scale = self.scale as usize;
        let len = self.digits.len();
        let mut out = String::with_capacity(scale);
        for _ in len..scale {
            out.push('0');
        }
        out.push_str(ascii(&self.digits[len.saturating_sub(scale)..]));
        out
    }

    /// Exact conversion to `rust_decimal::Decimal`.
    ///
    /// Returns `None` when the scale is beyond what that type can carry.
    pub fn to_rust_decimal(&self) -> Option<rust_decimal::Decimal> {
        if !self.is_scale_in_range() {
            return None;
        }
        let [low, mid, high] = self.mantissa.limbs();
        Some(rust_decimal::Decimal::from_parts(
            low,
            mid,
            high,
            self.negative,
            self.scale as u32,
        ))
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Unsigned positional form into a stack buffer.
    fn write_plain(&self, buf: &mut ArrayString<MAX_STR_BUFFER_SIZE>) {
        let scale = self.scale as usize;
        let len = self.digits.len();

        // Capacity covers "0." plus 255 fraction digits, and 29 digits when
        // the scale is smaller than the digit count.
        if len > scale {
            buf.push_str(ascii(&self.digits[..len - scale]));
        } else {
            buf.push('0');
        }

        if scale > 0 {
            buf.push('.');
            for _ in len..scale {
                buf.push('0');
            }
            buf.push_str(ascii(&self.digits[len.saturating_sub(scale)..]));
        }
    }

    fn fmt_scientific(&self, exponent_symbol: char, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rep = ArrayString::<MAX_SCI_BUFFER_SIZE>::new();
        let len = self.digits.len();
        let exponent = len as isize - 1 - self.scale as isize;

        match self.digits.split_first() {
            None => {
                rep.push('0');
                write!(rep, "{}{}", exponent_symbol, -(self.scale as isize))?;
                return f.pad_integral(true, "", &rep);
            },
            Some((first, rest)) if rest.iter().all(|&d| d == b'0') => {
                rep.push(char::from(*first));
            },
            Some((first, rest)) => {
                rep.push(char::from(*first));
                rep.push('.');
                rep.push_str(ascii(rest));
            },
        }

        write!(rep, "{}{}", exponent_symbol, exponent)?;
        f.pad_integral(!self.negative, "", &rep)
    }
}

/// Digit buffers only ever hold `b'0'..=b'9'`.
#[inline]
fn ascii(digits: &[u8]) -> &str {
    std::str::from_utf8(digits).unwrap_or_default()
}

impl From<PackedDecimal> for DecodedDecimal {
    #[inline]
    fn from(packed: PackedDecimal) -> Self {
        Self::new(&packed)
    }
}

// ============================================================================
// Display and Scientific Notation
// ============================================================================

impl fmt::Display for DecodedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rep = ArrayString::<MAX_STR_BUFFER_SIZE>::new();
        self.write_plain(&mut rep);
        f.pad_integral(!self.negative, "", &rep)
    }
}

impl fmt::LowerExp for DecodedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_scientific('e', f)
    }
}

impl fmt::UpperExp for DecodedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_scientific('E', f)
    }
}
