// ABOUTME: Application port addressed payloads for WAP push, vCard, vCalendar and vendor formats
// ABOUTME: Adds an 8-bit or 16-bit port addressing element ahead of arbitrary user data

use crate::codec::{CodecError, Result};
use crate::datatypes::{DataCoding, UdhElement, UserData};
use crate::message::Message;
use bytes::Bytes;

/// Well-known application port numbers
pub mod ports {
    /// WAP push connectionless session service
    pub const WAP_PUSH: u16 = 2948;
    /// WAP connectionless session service (WSP)
    pub const WAP_WSP: u16 = 9200;
    pub const VCARD: u16 = 9204;
    pub const VCALENDAR: u16 = 9205;
    pub const NOKIA_RING_TONE: u16 = 5505;
    pub const NOKIA_OPERATOR_LOGO: u16 = 5506;
    pub const NOKIA_CLI_LOGO: u16 = 5507;
    pub const NOKIA_PICTURE_MESSAGE: u16 = 5514;
}

/// A payload addressed to an application port on the handset
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortAddressedMessage {
    destination_port: u16,
    originator_port: u16,
    eight_bit: bool,
    user_data: UserData,
}

impl PortAddressedMessage {
    /// Wraps prepared user data, addressed with 16-bit ports
    pub fn new(destination_port: u16, originator_port: u16, user_data: UserData) -> Self {
        Self {
            destination_port,
            originator_port,
            eight_bit: false,
            user_data,
        }
    }

    /// Binary payload sent as 8-bit data
    pub fn from_bytes(
        destination_port: u16,
        originator_port: u16,
        payload: impl Into<Bytes>,
    ) -> Result<Self> {
        let user_data = UserData::octets(payload, DataCoding::OCTET)?;
        Ok(Self::new(destination_port, originator_port, user_data))
    }

    /// Switch to 8-bit port addressing; both ports must fit in one octet
    pub fn with_8bit_ports(mut self) -> Result<Self> {
        if self.destination_port > 0xFF || self.originator_port > 0xFF {
            return Err(CodecError::invalid_argument(format!(
                "ports {} and {} do not fit 8-bit addressing",
                self.destination_port, self.originator_port
            )));
        }
        self.eight_bit = true;
        Ok(self)
    }

    pub fn destination_port(&self) -> u16 {
        self.destination_port
    }

    pub fn originator_port(&self) -> u16 {
        self.originator_port
    }
}

impl Message for PortAddressedMessage {
    fn user_data(&self) -> Result<UserData> {
        Ok(self.user_data.clone())
    }

    fn udh_elements(&self) -> Vec<UdhElement> {
        let element = if self.eight_bit {
            UdhElement::application_port_8bit(
                self.destination_port as u8,
                self.originator_port as u8,
            )
        } else {
            UdhElement::application_port_16bit(self.destination_port, self.originator_port)
        };
        vec![element]
    }
}
