// ABOUTME: Thread-safe entry point turning messages into ordered, ready-to-send PDUs
// ABOUTME: Owns the injected reference source and the concatenation settings

mod builder;
mod reference;

pub use builder::EncoderBuilder;
pub use reference::{RandomReference, ReferenceGenerator, SequentialReference};

use crate::codec::Result;
use crate::datatypes::{UdhElement, UserData};
use crate::message::Message;
use crate::pdu::{self, ConcatReference, MAX_PARTS, SmsPdu};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Encodes messages into one or more PDUs.
///
/// The encoder is immutable once built and can be shared across threads;
/// the only shared state is its reference source.
///
/// # Examples
///
/// ```rust
/// use smscodec::{SmsEncoder, TextMessage};
///
/// let encoder = SmsEncoder::new();
/// let parts = encoder.encode(&TextMessage::new("Hello, World!"))?;
/// assert_eq!(parts.len(), 1);
/// # Ok::<(), smscodec::CodecError>(())
/// ```
#[derive(Clone)]
pub struct SmsEncoder {
    pub(crate) references: Arc<dyn ReferenceGenerator>,
    pub(crate) width: ConcatReference,
    pub(crate) max_parts: u8,
}

impl SmsEncoder {
    /// Random 8-bit references, up to 255 parts
    pub fn new() -> Self {
        Self {
            references: Arc::new(RandomReference),
            width: ConcatReference::EightBit,
            max_parts: MAX_PARTS,
        }
    }

    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::new()
    }

    /// Encodes a message into its parts, in sending order
    pub fn encode<M: Message + ?Sized>(&self, message: &M) -> Result<Vec<SmsPdu>> {
        let user_data = message.user_data()?;
        let udh = message.udh_elements();
        let parts = self.split(&udh, &user_data)?;
        debug!(
            "Encoded message into {} part(s), DCS 0x{:02X}",
            parts.len(),
            user_data.dcs().to_byte()
        );
        Ok(parts)
    }

    /// Splits prepared user data, adding concatenation when it does not fit
    pub fn split(&self, udh: &[UdhElement], user_data: &UserData) -> Result<Vec<SmsPdu>> {
        pdu::split(
            udh,
            user_data,
            self.references.as_ref(),
            self.width,
            self.max_parts,
        )
    }

    pub fn reference_width(&self) -> ConcatReference {
        self.width
    }

    pub fn max_parts(&self) -> u8 {
        self.max_parts
    }
}

impl Default for SmsEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SmsEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmsEncoder")
            .field("width", &self.width)
            .field("max_parts", &self.max_parts)
            .finish_non_exhaustive()
    }
}
