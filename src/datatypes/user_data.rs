// ABOUTME: SMS user data payload in its final on-wire encoding with its logical length and DCS
// ABOUTME: Checks that the byte count agrees with the length unit implied by the alphabet

use crate::codec::{CodecError, Result};
use crate::datatypes::{Alphabet, DataCoding};
use crate::septet::packed_len;
use bytes::Bytes;

/// The payload of a short message.
///
/// `length` is counted in septets for GSM 7-bit data and in octets for every
/// other alphabet. `bytes` is already packed (GSM 7-bit) or encoded
/// (8-bit, UCS-2) and is never re-encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserData {
    bytes: Bytes,
    length: usize,
    dcs: DataCoding,
}

impl UserData {
    /// Creates user data, checking `bytes` against `length`.
    ///
    /// GSM 7-bit needs at least `ceil(length * 7 / 8)` bytes; octet alphabets
    /// need exactly `length`. A DCS with no decidable alphabet is accepted
    /// as octets, and fails later if it has to be split.
    pub fn new(bytes: impl Into<Bytes>, length: usize, dcs: DataCoding) -> Result<Self> {
        let bytes = bytes.into();
        match dcs.alphabet() {
            Some(Alphabet::Gsm7) => {
                if bytes.len() < packed_len(length) {
                    return Err(CodecError::invalid_argument(format!(
                        "{length} septets need {} packed bytes, got {}",
                        packed_len(length),
                        bytes.len()
                    )));
                }
            }
            _ => {
                if bytes.len() != length {
                    return Err(CodecError::invalid_argument(format!(
                        "length {length} does not match {} payload bytes",
                        bytes.len()
                    )));
                }
            }
        }
        Ok(Self { bytes, length, dcs })
    }

    /// Creates octet-counted user data whose length is the byte count.
    pub fn octets(bytes: impl Into<Bytes>, dcs: DataCoding) -> Result<Self> {
        let bytes = bytes.into();
        let length = bytes.len();
        Self::new(bytes, length, dcs)
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Logical length: septets for GSM 7-bit, octets otherwise
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn dcs(&self) -> DataCoding {
        self.dcs
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}
