// ABOUTME: Builder for configuring an SmsEncoder's reference source, reference width and part limit
// ABOUTME: Defaults to random 8-bit references and the 255 part maximum

use crate::codec::{CodecError, Result};
use crate::encoder::{RandomReference, ReferenceGenerator, SmsEncoder};
use crate::pdu::{ConcatReference, MAX_PARTS};
use std::sync::Arc;

/// Configures an [`SmsEncoder`]
///
/// # Examples
///
/// ```rust
/// use smscodec::{SequentialReference, SmsEncoder};
///
/// let encoder = SmsEncoder::builder()
///     .reference_generator(SequentialReference::new(1))
///     .sixteen_bit_reference()
///     .max_parts(10)
///     .build()?;
/// # Ok::<(), smscodec::CodecError>(())
/// ```
pub struct EncoderBuilder {
    references: Arc<dyn ReferenceGenerator>,
    width: ConcatReference,
    max_parts: u8,
}

impl EncoderBuilder {
    pub fn new() -> Self {
        Self {
            references: Arc::new(RandomReference),
            width: ConcatReference::EightBit,
            max_parts: MAX_PARTS,
        }
    }

    /// Use this source for concatenation references
    pub fn reference_generator(mut self, references: impl ReferenceGenerator + 'static) -> Self {
        self.references = Arc::new(references);
        self
    }

    /// Share an existing source between encoders
    pub fn shared_reference_generator(mut self, references: Arc<dyn ReferenceGenerator>) -> Self {
        self.references = references;
        self
    }

    /// Use 16-bit concatenation references (one more header octet per part)
    pub fn sixteen_bit_reference(mut self) -> Self {
        self.width = ConcatReference::SixteenBit;
        self
    }

    /// Refuse messages that would need more than `max_parts` parts
    pub fn max_parts(mut self, max_parts: u8) -> Self {
        self.max_parts = max_parts;
        self
    }

    pub fn build(self) -> Result<SmsEncoder> {
        if self.max_parts == 0 {
            return Err(CodecError::invalid_argument("max_parts must be at least 1"));
        }
        Ok(SmsEncoder {
            references: self.references,
            width: self.width,
            max_parts: self.max_parts,
        })
    }
}

impl Default for EncoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
