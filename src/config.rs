//! Decoder configuration
//!
//! Limits that bound how far a decoder trusts counts and lengths read from the stream itself.

/// Configuration for resource decoding
///
/// Every `decode_*` function in this crate uses [`DecoderConfig::default`]; the `decode_*_with`
/// twins accept an explicit configuration.
///
/// Structural bounds checking is always on. The limits here only decide how early an implausible
/// declared count is rejected and whether an overlong string-table entry is clamped or refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Upper bound for element counts read from the stream (dialog items, message blocks, font
    /// entries, overlay entries). Larger counts fail with [`crate::Error::LimitExceeded`].
    pub max_declared_count: u32,

    /// Clamp string-table entries whose declared length runs past the end of the buffer
    /// (with a warning) instead of failing with [`crate::Error::OutOfBounds`]
    pub clamp_string_lengths: bool,

    /// Upper bound for the number of ids a single message-table block may span
    pub max_message_ids_per_block: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_declared_count: 0x1_0000,
            clamp_string_lengths: true,
            max_message_ids_per_block: 0x1_0000,
        }
    }
}

impl DecoderConfig {
    /// Creates a strict configuration
    ///
    /// Small count limits and no clamping; any length overrun is an error.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_declared_count: 0x1000,
            clamp_string_lengths: false,
            max_message_ids_per_block: 0x1000,
        }
    }

    /// Creates a lenient configuration
    ///
    /// Accepts any count the buffer can physically hold and clamps overlong strings.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_declared_count: u32::MAX,
            clamp_string_lengths: true,
            max_message_ids_per_block: u32::MAX,
        }
    }

    /// Fail with [`crate::Error::LimitExceeded`] if `declared` is above `max_declared_count`.
    pub(crate) fn check_count(&self, what: &'static str, declared: u32) -> crate::Result<()> {
        if declared > self.max_declared_count {
            return Err(crate::Error::LimitExceeded {
                what,
                declared: u64::from(declared),
                limit: u64::from(self.max_declared_count),
            });
        }
        Ok(())
    }

    /// Fail with [`crate::Error::LimitExceeded`] if a collection that grows while decoding
    /// already holds `len` elements and `len` is above `max_declared_count`.
    pub(crate) fn check_len(&self, what: &'static str, len: usize) -> crate::Result<()> {
        let declared = u64::try_from(len).unwrap_or(u64::MAX);
        if declared > u64::from(self.max_declared_count) {
            return Err(crate::Error::LimitExceeded {
                what,
                declared,
                limit: u64::from(self.max_declared_count),
            });
        }
        Ok(())
    }
}
