// SMS user-data codec primitives
//
// Every type that ends up on the wire (UDH elements, assembled PDUs,
// SMS-SUBMIT TPDUs) implements `Encodable`, writing into a shared `BytesMut`
// so callers can concatenate sections without intermediate allocations.

use crate::datatypes::{AddressError, Alphabet, DataCoding};
use bytes::{Bytes, BytesMut};
use thiserror::Error;

/// Maximum size of the TP-User-Data field of a single short message, in octets.
pub const MAX_USER_DATA_OCTETS: usize = 140;

/// Trait for types that can be encoded to bytes
pub trait Encodable {
    /// Encode this value into the buffer
    fn encode(&self, buf: &mut BytesMut) -> Result<()>;

    /// Calculate the encoded size without keeping the output
    fn encoded_size(&self) -> usize {
        let mut buf = BytesMut::new();
        self.encode(&mut buf).map(|_| buf.len()).unwrap_or(0)
    }

    /// Convert this value to bytes (convenience method)
    fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }
}

/// Codec errors with enough context to tell the caller what to fix
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported alphabet for data coding scheme {0:?}")]
    UnsupportedAlphabet(DataCoding),

    #[error("Character {character:?} cannot be represented in the {alphabet:?} alphabet")]
    UnmappableCharacter { character: char, alphabet: Alphabet },

    #[error("Message needs {parts} parts, at most {max_parts} can be concatenated")]
    MessageTooLong { parts: usize, max_parts: u8 },

    #[error("User data header of {octets} octets leaves no room for user data")]
    UdhTooLong { octets: usize },

    #[error("User data field of {octets} octets exceeds the 140 octet limit")]
    UserDataTooLong { octets: usize },
}

impl CodecError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        CodecError::InvalidArgument(reason.into())
    }
}

/// A specialized `Result` type for encoding operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BufMut;

    struct Fixed(&'static [u8]);

    impl Encodable for Fixed {
        fn encode(&self, buf: &mut BytesMut) -> Result<()> {
            buf.put_slice(self.0);
            Ok(())
        }
    }

    struct Failing;

    impl Encodable for Failing {
        fn encode(&self, _buf: &mut BytesMut) -> Result<()> {
            Err(CodecError::UserDataTooLong { octets: 141 })
        }
    }

    #[test]
    fn encodable_defaults() {
        let fixed = Fixed(&[0x01, 0x02, 0x03]);
        assert_eq!(fixed.encoded_size(), 3);
        assert_eq!(fixed.to_bytes().unwrap().as_ref(), &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn encodable_failure_propagates() {
        assert_eq!(Failing.encoded_size(), 0);
        assert!(matches!(
            Failing.to_bytes(),
            Err(CodecError::UserDataTooLong { octets: 141 })
        ));
    }

    #[test]
    fn error_messages() {
        let err = CodecError::MessageTooLong {
            parts: 300,
            max_parts: 255,
        };
        assert_eq!(
            err.to_string(),
            "Message needs 300 parts, at most 255 can be concatenated"
        );

        let err = CodecError::UnmappableCharacter {
            character: '€',
            alphabet: Alphabet::Latin1,
        };
        assert_eq!(
            err.to_string(),
            "Character '€' cannot be represented in the Latin1 alphabet"
        );
    }
}
