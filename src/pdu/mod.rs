// ABOUTME: Assembles header elements and one user data block into a single short message PDU
// ABOUTME: Produces the TP-UD field and TP-UDL value, repacking GSM 7-bit text behind the header

pub mod concat;
pub mod submit;

pub use concat::{ConcatReference, MAX_PARTS, split};
pub use submit::{SmsSubmit, ValidityPeriod};

use crate::codec::{CodecError, Encodable, MAX_USER_DATA_OCTETS, Result};
use crate::datatypes::udh::encode_udh;
use crate::datatypes::{Alphabet, DataCoding, UdhElement, UserData};
use crate::septet::{fill_bits_for, pack_septets_with_fill, packed_len, udh_septets, unpack_septets};
use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

/// One short message: its header elements and user data.
///
/// The encoded header is computed once at construction, so a PDU whose
/// header cannot fit in a message is never built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmsPdu {
    udh: Vec<UdhElement>,
    header: Option<Bytes>,
    user_data: UserData,
}

impl SmsPdu {
    pub fn new(udh: Vec<UdhElement>, user_data: UserData) -> Result<Self> {
        let header = if udh.is_empty() {
            None
        } else {
            Some(encode_udh(&udh)?)
        };
        trace!(
            "Assembled PDU: {} header octets, {} user data units",
            header.as_ref().map_or(0, Bytes::len),
            user_data.length()
        );
        Ok(Self {
            udh,
            header,
            user_data,
        })
    }

    pub fn udh_elements(&self) -> &[UdhElement] {
        &self.udh
    }

    pub fn user_data(&self) -> &UserData {
        &self.user_data
    }

    /// Encoded user data header (UDHL and elements), or `None` without elements
    pub fn user_data_headers(&self) -> Option<Bytes> {
        self.header.clone()
    }

    pub fn dcs(&self) -> DataCoding {
        self.user_data.dcs()
    }

    pub fn has_udh(&self) -> bool {
        self.header.is_some()
    }

    fn header_octets(&self) -> usize {
        self.header.as_ref().map_or(0, Bytes::len)
    }

    fn is_gsm7(&self) -> bool {
        self.dcs().alphabet() == Some(Alphabet::Gsm7)
    }

    /// Size of the TP-UD field in octets, header included
    pub fn user_data_octets(&self) -> usize {
        let header = self.header_octets();
        if self.is_gsm7() {
            packed_len(udh_septets(header) + self.user_data.length())
        } else {
            header + self.user_data.length()
        }
    }

    /// TP-UDL: septets for GSM 7-bit (the header counted in septets,
    /// fill bits included), octets otherwise.
    pub fn user_data_length(&self) -> Result<u8> {
        let octets = self.user_data_octets();
        if octets > MAX_USER_DATA_OCTETS {
            return Err(CodecError::UserDataTooLong { octets });
        }
        let header = self.header_octets();
        let length = if self.is_gsm7() {
            udh_septets(header) + self.user_data.length()
        } else {
            header + self.user_data.length()
        };
        Ok(length as u8)
    }
}

/// Writes the TP-UD field: header, fill bits for GSM 7-bit, then the payload.
impl Encodable for SmsPdu {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        let octets = self.user_data_octets();
        if octets > MAX_USER_DATA_OCTETS {
            return Err(CodecError::UserDataTooLong { octets });
        }

        let payload = self.user_data.bytes();
        let length = self.user_data.length();
        if let Some(header) = &self.header {
            buf.put_slice(header);
        }

        if self.is_gsm7() {
            let header = self.header_octets();
            let fill = fill_bits_for(header);
            if fill == 0 {
                buf.put_slice(&payload[..packed_len(length)]);
            } else {
                let septets = unpack_septets(payload, length);
                buf.put_slice(&pack_septets_with_fill(&septets, fill));
            }
        } else {
            buf.put_slice(&payload[..length]);
        }
        Ok(())
    }

    fn encoded_size(&self) -> usize {
        self.user_data_octets()
    }
}
