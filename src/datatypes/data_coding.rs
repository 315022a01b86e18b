// ABOUTME: TS 23.038 data coding scheme byte with derived group, alphabet and message class views
// ABOUTME: Builds general, message-waiting and data-coding/message-class DCS values

use crate::codec::{CodecError, Result};
use num_enum::TryFromPrimitive;
use std::fmt;

/// A single data coding scheme octet.
///
/// The byte is stored as-is; group, alphabet, class and the message waiting
/// fields are computed from it on demand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataCoding(u8);

/// Character alphabet, as encoded in bits 3-2 of a general DCS
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Alphabet {
    /// GSM 7-bit default alphabet
    Gsm7 = 0b00,
    /// 8-bit data, used for Latin-1 text and binary payloads
    Latin1 = 0b01,
    /// UCS-2 (big-endian 16-bit units)
    Ucs2 = 0b10,
    Reserved = 0b11,
}

/// Message class (bits 1-0 when the class is present)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MessageClass {
    /// Class 0, flash message: displayed immediately, not stored
    Class0 = 0,
    /// Class 1, mobile equipment specific
    Class1 = 1,
    /// Class 2, SIM specific
    Class2 = 2,
    /// Class 3, terminal equipment specific
    Class3 = 3,
}

/// Coding group selected by the high bits of the DCS
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DcsGroup {
    /// `00xx xxxx`
    General,
    /// `1100 xxxx`
    MessageWaitingDiscard,
    /// `1101 xxxx`
    MessageWaitingStoreGsm,
    /// `1110 xxxx`
    MessageWaitingStoreUcs2,
    /// `1111 xxxx`
    DataCodingMessage,
    /// Automatic deletion and reserved groups
    Unknown,
}

/// Indication type carried by the message waiting DCS groups (bits 1-0)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MessageWaitingType {
    Voicemail = 0b00,
    Fax = 0b01,
    Email = 0b10,
    Other = 0b11,
}

impl DataCoding {
    /// GSM 7-bit, no message class
    pub const GSM7: DataCoding = DataCoding(0x00);
    /// 8-bit data, no message class
    pub const OCTET: DataCoding = DataCoding(0x04);
    /// UCS-2, no message class
    pub const UCS2: DataCoding = DataCoding(0x08);

    /// Wraps a raw DCS octet
    pub const fn from_byte(value: u8) -> Self {
        DataCoding(value)
    }

    /// Returns the raw octet for the wire
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Builds a general data coding DCS (`00xx xxxx`).
    ///
    /// Bits 3-2 carry the alphabet. With a class, bit 4 is set and bits 1-0
    /// carry it; without one the class bits stay clear.
    pub fn general(alphabet: Alphabet, class: Option<MessageClass>) -> Self {
        let mut value = (alphabet as u8) << 2;
        if let Some(class) = class {
            value |= 0x10 | class as u8;
        }
        DataCoding(value)
    }

    /// Like [`DataCoding::general`], from raw alphabet and class values.
    pub fn try_general(alphabet: u8, class: Option<u8>) -> Result<Self> {
        let alphabet = Alphabet::try_from(alphabet).map_err(|_| {
            CodecError::invalid_argument(format!("unknown alphabet value {alphabet}"))
        })?;
        let class = class
            .map(|raw| {
                MessageClass::try_from(raw).map_err(|_| {
                    CodecError::invalid_argument(format!("unknown message class {raw}"))
                })
            })
            .transpose()?;
        Ok(Self::general(alphabet, class))
    }

    /// Builds one of the three message waiting indication groups.
    ///
    /// Bit 3 sets the indication active, bits 1-0 carry its type.
    pub fn message_waiting(
        group: DcsGroup,
        active: bool,
        kind: MessageWaitingType,
    ) -> Result<Self> {
        let base = match group {
            DcsGroup::MessageWaitingDiscard => 0xC0,
            DcsGroup::MessageWaitingStoreGsm => 0xD0,
            DcsGroup::MessageWaitingStoreUcs2 => 0xE0,
            other => {
                return Err(CodecError::invalid_argument(format!(
                    "{other:?} is not a message waiting group"
                )));
            }
        };
        let active = if active { 0x08 } else { 0x00 };
        Ok(DataCoding(base | active | kind as u8))
    }

    /// Builds a data coding/message class DCS (`1111 0Acc`).
    ///
    /// Only GSM 7-bit and 8-bit data can be expressed in this group.
    pub fn data_coding_message(alphabet: Alphabet, class: MessageClass) -> Result<Self> {
        let alphabet_bit = match alphabet {
            Alphabet::Gsm7 => 0x00,
            Alphabet::Latin1 => 0x04,
            other => {
                return Err(CodecError::invalid_argument(format!(
                    "{other:?} cannot be used in the data coding/message class group"
                )));
            }
        };
        Ok(DataCoding(0xF0 | alphabet_bit | class as u8))
    }

    /// Decodes the coding group. Unrecognised groups are `Unknown`, never an error.
    pub fn group(self) -> DcsGroup {
        if self.0 & 0xC0 == 0x00 {
            return DcsGroup::General;
        }
        match self.0 & 0xF0 {
            0xC0 => DcsGroup::MessageWaitingDiscard,
            0xD0 => DcsGroup::MessageWaitingStoreGsm,
            0xE0 => DcsGroup::MessageWaitingStoreUcs2,
            0xF0 => DcsGroup::DataCodingMessage,
            _ => DcsGroup::Unknown,
        }
    }

    /// Decodes the alphabet, or `None` when the group does not define one.
    pub fn alphabet(self) -> Option<Alphabet> {
        match self.group() {
            DcsGroup::General => {
                if self.0 == 0x00 {
                    return Some(Alphabet::Gsm7);
                }
                Alphabet::try_from((self.0 >> 2) & 0x03).ok()
            }
            DcsGroup::MessageWaitingStoreGsm => Some(Alphabet::Gsm7),
            DcsGroup::MessageWaitingStoreUcs2 => Some(Alphabet::Ucs2),
            DcsGroup::DataCodingMessage => {
                if self.0 & 0x04 == 0 {
                    Some(Alphabet::Gsm7)
                } else {
                    Some(Alphabet::Latin1)
                }
            }
            DcsGroup::MessageWaitingDiscard | DcsGroup::Unknown => None,
        }
    }

    /// Decodes the message class, if this DCS carries one
    pub fn message_class(self) -> Option<MessageClass> {
        let carries_class = match self.group() {
            DcsGroup::General => self.0 & 0x10 != 0,
            DcsGroup::DataCodingMessage => true,
            _ => false,
        };
        if carries_class {
            MessageClass::try_from(self.0 & 0x03).ok()
        } else {
            None
        }
    }

    /// Returns true if the general group's compression bit is set
    pub fn is_compressed(self) -> bool {
        self.group() == DcsGroup::General && self.0 & 0x20 != 0
    }

    /// Returns true if this is a message waiting group with the indication set active
    pub fn is_message_waiting_active(self) -> bool {
        self.message_waiting_type().is_some() && self.0 & 0x08 != 0
    }

    /// Returns the indication type for the message waiting groups
    pub fn message_waiting_type(self) -> Option<MessageWaitingType> {
        match self.group() {
            DcsGroup::MessageWaitingDiscard
            | DcsGroup::MessageWaitingStoreGsm
            | DcsGroup::MessageWaitingStoreUcs2 => MessageWaitingType::try_from(self.0 & 0x03).ok(),
            _ => None,
        }
    }
}

impl Alphabet {
    /// Returns the character set name for this alphabet
    pub fn charset_name(&self) -> &'static str {
        match self {
            Alphabet::Gsm7 => "GSM 7-bit Default",
            Alphabet::Latin1 => "8-bit",
            Alphabet::Ucs2 => "UCS-2",
            Alphabet::Reserved => "Reserved",
        }
    }
}

impl MessageClass {
    /// Returns a human-readable description of the message class
    pub fn description(&self) -> &'static str {
        match self {
            MessageClass::Class0 => "Flash SMS (immediate display)",
            MessageClass::Class1 => "Mobile Equipment specific",
            MessageClass::Class2 => "SIM card storage",
            MessageClass::Class3 => "Terminal Equipment specific",
        }
    }
}

impl fmt::Display for DataCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alphabet() {
            Some(alphabet) => write!(f, "{}", alphabet.charset_name())?,
            None => write!(f, "Undecidable")?,
        }
        if let Some(class) = self.message_class() {
            write!(f, " ({})", class.description())?;
        }
        Ok(())
    }
}

impl fmt::Debug for DataCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataCoding::{:?}(0x{:02X})", self.group(), self.0)
    }
}

impl From<u8> for DataCoding {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<DataCoding> for u8 {
    fn from(data_coding: DataCoding) -> Self {
        data_coding.to_byte()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABETS: [Alphabet; 4] = [
        Alphabet::Gsm7,
        Alphabet::Latin1,
        Alphabet::Ucs2,
        Alphabet::Reserved,
    ];

    const CLASSES: [Option<MessageClass>; 5] = [
        None,
        Some(MessageClass::Class0),
        Some(MessageClass::Class1),
        Some(MessageClass::Class2),
        Some(MessageClass::Class3),
    ];

    #[test]
    fn general_bit_layout() {
        assert_eq!(DataCoding::general(Alphabet::Gsm7, None).to_byte(), 0x00);
        assert_eq!(DataCoding::general(Alphabet::Latin1, None).to_byte(), 0x04);
        assert_eq!(DataCoding::general(Alphabet::Ucs2, None).to_byte(), 0x08);
        assert_eq!(DataCoding::general(Alphabet::Reserved, None).to_byte(), 0x0C);
        assert_eq!(
            DataCoding::general(Alphabet::Gsm7, Some(MessageClass::Class0)).to_byte(),
            0x10
        );
        assert_eq!(
            DataCoding::general(Alphabet::Ucs2, Some(MessageClass::Class2)).to_byte(),
            0x1A
        );
        assert_eq!(
            DataCoding::general(Alphabet::Latin1, Some(MessageClass::Class1)).to_byte(),
            0x15
        );
    }

    #[test]
    fn general_decodes_what_it_encodes() {
        for alphabet in ALPHABETS {
            for class in CLASSES {
                let dcs = DataCoding::general(alphabet, class);
                assert_eq!(dcs.group(), DcsGroup::General, "{dcs:?}");
                assert_eq!(dcs.alphabet(), Some(alphabet), "{dcs:?}");
                assert_eq!(dcs.message_class(), class, "{dcs:?}");
                assert!(!dcs.is_compressed());
            }
        }
    }

    #[test]
    fn raw_general_rejects_unknown_values() {
        assert_eq!(
            DataCoding::try_general(0b10, Some(1)).unwrap(),
            DataCoding::general(Alphabet::Ucs2, Some(MessageClass::Class1))
        );
        assert!(matches!(
            DataCoding::try_general(4, None),
            Err(CodecError::InvalidArgument(_))
        ));
        assert!(matches!(
            DataCoding::try_general(0, Some(7)),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn group_decoding() {
        assert_eq!(DataCoding::from_byte(0x00).group(), DcsGroup::General);
        assert_eq!(DataCoding::from_byte(0x3F).group(), DcsGroup::General);
        assert_eq!(DataCoding::from_byte(0x40).group(), DcsGroup::Unknown);
        assert_eq!(DataCoding::from_byte(0x8F).group(), DcsGroup::Unknown);
        assert_eq!(DataCoding::from_byte(0xC3).group(), DcsGroup::MessageWaitingDiscard);
        assert_eq!(DataCoding::from_byte(0xD8).group(), DcsGroup::MessageWaitingStoreGsm);
        assert_eq!(DataCoding::from_byte(0xE0).group(), DcsGroup::MessageWaitingStoreUcs2);
        assert_eq!(DataCoding::from_byte(0xF5).group(), DcsGroup::DataCodingMessage);
    }

    #[test]
    fn alphabet_per_group() {
        assert_eq!(DataCoding::from_byte(0xD0).alphabet(), Some(Alphabet::Gsm7));
        assert_eq!(DataCoding::from_byte(0xE0).alphabet(), Some(Alphabet::Ucs2));
        assert_eq!(DataCoding::from_byte(0xF0).alphabet(), Some(Alphabet::Gsm7));
        assert_eq!(DataCoding::from_byte(0xF4).alphabet(), Some(Alphabet::Latin1));
        assert_eq!(DataCoding::from_byte(0xC0).alphabet(), None);
        assert_eq!(DataCoding::from_byte(0x45).alphabet(), None);
    }

    #[test]
    fn message_class_per_group() {
        assert_eq!(DataCoding::from_byte(0x01).message_class(), None);
        assert_eq!(
            DataCoding::from_byte(0x11).message_class(),
            Some(MessageClass::Class1)
        );
        assert_eq!(
            DataCoding::from_byte(0xF3).message_class(),
            Some(MessageClass::Class3)
        );
        assert_eq!(DataCoding::from_byte(0xD3).message_class(), None);
    }

    #[test]
    fn compression_flag() {
        assert!(DataCoding::from_byte(0x20).is_compressed());
        assert!(!DataCoding::from_byte(0xE0).is_compressed());
    }

    #[test]
    fn message_waiting_groups() {
        let dcs = DataCoding::message_waiting(
            DcsGroup::MessageWaitingStoreGsm,
            true,
            MessageWaitingType::Voicemail,
        )
        .unwrap();
        assert_eq!(dcs.to_byte(), 0xD8);
        assert!(dcs.is_message_waiting_active());
        assert_eq!(dcs.message_waiting_type(), Some(MessageWaitingType::Voicemail));
        assert_eq!(dcs.alphabet(), Some(Alphabet::Gsm7));

        let dcs = DataCoding::message_waiting(
            DcsGroup::MessageWaitingDiscard,
            false,
            MessageWaitingType::Fax,
        )
        .unwrap();
        assert_eq!(dcs.to_byte(), 0xC1);
        assert!(!dcs.is_message_waiting_active());

        assert!(matches!(
            DataCoding::message_waiting(DcsGroup::General, true, MessageWaitingType::Email),
            Err(CodecError::InvalidArgument(_))
        ));
        assert_eq!(DataCoding::GSM7.message_waiting_type(), None);
    }

    #[test]
    fn data_coding_message_group() {
        let dcs = DataCoding::data_coding_message(Alphabet::Latin1, MessageClass::Class1).unwrap();
        assert_eq!(dcs.to_byte(), 0xF5);
        assert_eq!(dcs.alphabet(), Some(Alphabet::Latin1));
        assert_eq!(dcs.message_class(), Some(MessageClass::Class1));

        assert!(matches!(
            DataCoding::data_coding_message(Alphabet::Ucs2, MessageClass::Class0),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", DataCoding::GSM7), "GSM 7-bit Default");
        assert_eq!(
            format!("{}", DataCoding::general(Alphabet::Gsm7, Some(MessageClass::Class0))),
            "GSM 7-bit Default (Flash SMS (immediate display))"
        );
        assert_eq!(format!("{}", DataCoding::from_byte(0x45)), "Undecidable");
        assert_eq!(format!("{:?}", DataCoding::UCS2), "DataCoding::General(0x08)");
    }

    #[test]
    fn u8_conversions() {
        let dcs = DataCoding::UCS2;
        let byte: u8 = dcs.into();
        assert_eq!(DataCoding::from(byte), dcs);
    }
}
