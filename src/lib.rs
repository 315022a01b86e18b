pub mod charset;
pub mod codec;
pub mod datatypes;
pub mod encoder;
pub mod message;
pub mod pdu;
pub mod septet;


// Re-export codec types for direct access
pub use codec::{CodecError, Encodable, MAX_USER_DATA_OCTETS};

// Re-export the main encoding API for easy access
pub use datatypes::{
    Address, AddressError, Alphabet, DataCoding, MessageClass, MwiProfile, MwiType, UdhElement,
    UserData,
};
pub use encoder::{
    EncoderBuilder, RandomReference, ReferenceGenerator, SequentialReference, SmsEncoder,
};
pub use message::{Message, MwiMessage, PortAddressedMessage, TextMessage};
pub use pdu::{ConcatReference, SmsPdu, SmsSubmit, ValidityPeriod};

/// A specialized `Result` type for encoding operations.
///
/// This is defined as a convenience.
///
/// # Examples
///
/// ## Splitting a long text
///
/// Text longer than one message is split into concatenated parts, each
/// carrying a header that tells the handset how to reassemble them:
///
/// ```rust
/// use smscodec::{SmsEncoder, TextMessage};
///
/// fn main() -> smscodec::Result<()> {
///     let encoder = SmsEncoder::new();
///     let parts = encoder.encode(&TextMessage::new("x".repeat(200)))?;
///
///     assert_eq!(parts.len(), 2);
///     assert_eq!(parts[0].user_data().length(), 153);
///     assert_eq!(parts[1].user_data().length(), 47);
///     Ok(())
/// }
/// ```
///
/// ## Building SMS-SUBMIT TPDUs for a modem
///
/// ```rust
/// use smscodec::{Address, SmsEncoder, SmsSubmit, TextMessage, ValidityPeriod};
///
/// fn main() -> smscodec::Result<()> {
///     let parts = SmsEncoder::new().encode(&TextMessage::new("hellohello"))?;
///
///     let submit = SmsSubmit::new(Address::new("+46708251358")?)
///         .with_validity(ValidityPeriod::relative(0xAA));
///     let tpdus = submit.encode_parts(&parts)?;
///
///     let hex: String = tpdus[0].iter().map(|b| format!("{b:02X}")).collect();
///     assert_eq!(hex, "0011000B916407281553F80000AA0AE8329BFD4697D9EC37");
///     Ok(())
/// }
/// ```
pub type Result<T> = codec::Result<T>;
