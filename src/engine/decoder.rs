// ============================================================================
// Decimal Decoder
// Turns packed words into exact decimal strings
// ============================================================================

use crate::domain::{DecodeConfig, DecodedDecimal, PackedDecimal, ScalePolicy};
use crate::numeric::{DecodeError, DecodeResult};
use tracing::{debug, trace, warn};

/// Decode four packed words into their exact decimal string.
///
/// This is total: every input renders. A scale above 28 is applied as-is.
///
/// # Example
/// ```
/// use packed_decimal::decode;
///
/// assert_eq!(decode(12345, 0, 0, 0x8002_0000), "-123.45");
/// assert_eq!(decode(100, 0, 0, 0x0003_0000), "0.100");
/// ```
pub fn decode(low: u32, mid: u32, high: u32, flags: u32) -> String {
    let packed = PackedDecimal::new(low, mid, high, flags);
    DecimalDecoder::default().render(&packed).to_string()
}

/// Stateless decoder bound to a [`DecodeConfig`].
///
/// Holds configuration only, so one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalDecoder {
    config: DecodeConfig,
}

impl DecimalDecoder {
    pub const fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    /// Decoder that rejects scales above 28
    pub const fn strict() -> Self {
        Self::new(DecodeConfig::strict())
    }

    #[inline]
    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Best-effort decode that ignores the scale policy.
    ///
    /// Inspection tools should use this when a bad value must still be shown.
    pub fn render(&self, packed: &PackedDecimal) -> DecodedDecimal {
        trace!(
            low = packed.low,
            mid = packed.mid,
            high = packed.high,
            flags = packed.flags,
            "decoding packed decimal"
        );

        let scale = packed.scale();
        if scale > self.config.max_scale {
            debug!(
                scale,
                max = self.config.max_scale,
                "passing through out-of-range scale"
            );
        }

        DecodedDecimal::new(packed)
    }

    /// Decode under the configured scale policy.
    ///
    /// # Errors
    /// Returns `OutOfRangeScale` under `ScalePolicy::Strict` when the scale
    /// exceeds `max_scale`. Pass-through never fails.
    pub fn decode_packed(&self, packed: &PackedDecimal) -> DecodeResult<DecodedDecimal> {
        self.check_scale(packed)?;
        Ok(self.render(packed))
    }

    /// [`DecimalDecoder::decode_packed`] straight to a string.
    pub fn decode_to_string(&self, packed: &PackedDecimal) -> DecodeResult<String> {
        self.decode_packed(packed).map(|d| d.to_string())
    }

    /// Decode four raw words under the configured policy.
    pub fn decode_words(&self, low: u32, mid: u32, high: u32, flags: u32) -> DecodeResult<String> {
        self.decode_to_string(&PackedDecimal::new(low, mid, high, flags))
    }

    /// Decode a 16-byte little-endian buffer (`low, mid, high, flags`).
    ///
    /// # Errors
    /// - `InvalidLength` if `bytes` is not exactly 16 bytes
    /// - `OutOfRangeScale` as for [`DecimalDecoder::decode_packed`]
    pub fn decode_bytes(&self, bytes: &[u8]) -> DecodeResult<DecodedDecimal> {
        let packed = PackedDecimal::try_from(bytes)?;
        self.decode_packed(&packed)
    }

    fn check_scale(&self, packed: &PackedDecimal) -> DecodeResult<()> {
        let scale = packed.scale();
        let max = self.config.max_scale;
        match self.config.scale_policy {
            ScalePolicy::Strict if scale > max => {
                warn!(scale, max, flags = packed.flags, "rejecting out-of-range scale");
                Err(DecodeError::OutOfRangeScale { scale, max })
            },
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
