// ABOUTME: User data header information elements (TS 23.040 section 9.2.3.24)
// ABOUTME: Element constructors for concatenation, port addressing, message waiting and text formatting

use crate::codec::{CodecError, Encodable, MAX_USER_DATA_OCTETS, Result};
use bytes::{BufMut, Bytes, BytesMut};
use num_enum::TryFromPrimitive;

/// Information element identifiers assigned in TS 23.040
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum InformationElementId {
    ConcatenatedShortMessages8Bit = 0x00,
    SpecialSmsMessageIndication = 0x01,
    ApplicationPort8Bit = 0x04,
    ApplicationPort16Bit = 0x05,
    SmscControlParameters = 0x06,
    UdhSourceIndicator = 0x07,
    ConcatenatedShortMessages16Bit = 0x08,
    WirelessControlMessageProtocol = 0x09,
    TextFormatting = 0x0A,
    PredefinedSound = 0x0B,
    UserDefinedSound = 0x0C,
    PredefinedAnimation = 0x0D,
    LargeAnimation = 0x0E,
    SmallAnimation = 0x0F,
    LargePicture = 0x10,
    SmallPicture = 0x11,
    VariablePicture = 0x12,
    UserPromptIndicator = 0x13,
    ExtendedObject = 0x14,
    ReplyAddress = 0x22,
    NationalLanguageSingleShift = 0x24,
    NationalLanguageLockingShift = 0x25,
}

impl From<InformationElementId> for u8 {
    fn from(iei: InformationElementId) -> Self {
        iei as u8
    }
}

/// Indication type for the special SMS message indication element
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MwiType {
    Voice = 0x00,
    Fax = 0x01,
    Email = 0x02,
    Other = 0x03,
    /// Extended indication type: video message waiting
    Video = 0x07,
}

/// Multiple subscriber profile (bits 6-5 of the indication octet)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MwiProfile {
    #[default]
    Profile1 = 0,
    Profile2 = 1,
    Profile3 = 2,
    Profile4 = 3,
}

/// A single information element.
///
/// A positioned element carries an extra leading octet (a character offset
/// into the text, for instance) between its length and its data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UdhElement {
    iei: u8,
    position: Option<u8>,
    data: Bytes,
}

impl UdhElement {
    /// Creates an element with an arbitrary identifier.
    ///
    /// Fails if `data` does not fit the one-octet length field.
    pub fn new(iei: impl Into<u8>, data: impl Into<Bytes>) -> Result<Self> {
        let data = data.into();
        if data.len() > usize::from(u8::MAX) {
            return Err(CodecError::invalid_argument(format!(
                "information element data of {} octets exceeds 255",
                data.len()
            )));
        }
        Ok(Self {
            iei: iei.into(),
            position: None,
            data,
        })
    }

    /// Creates a positioned element: `iei, len(data)+1, position, data`.
    pub fn positioned(iei: impl Into<u8>, position: u8, data: impl Into<Bytes>) -> Result<Self> {
        let data = data.into();
        if data.len() >= usize::from(u8::MAX) {
            return Err(CodecError::invalid_argument(format!(
                "positioned element data of {} octets exceeds 254",
                data.len()
            )));
        }
        Ok(Self {
            iei: iei.into(),
            position: Some(position),
            data,
        })
    }

    fn fixed(iei: InformationElementId, data: Vec<u8>) -> Self {
        Self {
            iei: iei.into(),
            position: None,
            data: Bytes::from(data),
        }
    }

    /// Concatenation with an 8-bit reference: `00 03 REF TOTAL SEQ`
    pub fn concatenated_8bit(reference: u8, total: u8, sequence: u8) -> Self {
        Self::fixed(
            InformationElementId::ConcatenatedShortMessages8Bit,
            vec![reference, total, sequence],
        )
    }

    /// Concatenation with a 16-bit reference: `08 04 REF_HI REF_LO TOTAL SEQ`
    pub fn concatenated_16bit(reference: u16, total: u8, sequence: u8) -> Self {
        let [hi, lo] = reference.to_be_bytes();
        Self::fixed(
            InformationElementId::ConcatenatedShortMessages16Bit,
            vec![hi, lo, total, sequence],
        )
    }

    /// 8-bit application port addressing: `04 02 DEST ORIG`
    pub fn application_port_8bit(destination: u8, originator: u8) -> Self {
        Self::fixed(
            InformationElementId::ApplicationPort8Bit,
            vec![destination, originator],
        )
    }

    /// 16-bit application port addressing: `05 04 DEST_HI DEST_LO ORIG_HI ORIG_LO`
    pub fn application_port_16bit(destination: u16, originator: u16) -> Self {
        let mut data = Vec::with_capacity(4);
        data.extend_from_slice(&destination.to_be_bytes());
        data.extend_from_slice(&originator.to_be_bytes());
        Self::fixed(InformationElementId::ApplicationPort16Bit, data)
    }

    /// Special SMS message indication: `01 02 TYPE|PROFILE<<5|STORE<<7 COUNT`.
    ///
    /// Counts above 255 are clamped to 255.
    pub fn message_waiting(kind: MwiType, count: u32, profile: MwiProfile, store: bool) -> Self {
        let indication = kind as u8 | (profile as u8) << 5 | u8::from(store) << 7;
        let count = u8::try_from(count).unwrap_or(u8::MAX);
        Self::fixed(
            InformationElementId::SpecialSmsMessageIndication,
            vec![indication, count],
        )
    }

    /// Text formatting: positioned at `start`, data `[length, format]`.
    pub fn text_formatting(start: u8, length: u8, format: u8) -> Self {
        Self {
            iei: InformationElementId::TextFormatting.into(),
            position: Some(start),
            data: Bytes::from(vec![length, format]),
        }
    }

    pub fn iei(&self) -> u8 {
        self.iei
    }

    /// The identifier, if it is one TS 23.040 names
    pub fn known_iei(&self) -> Option<InformationElementId> {
        InformationElementId::try_from(self.iei).ok()
    }

    pub fn position(&self) -> Option<u8> {
        self.position
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn is_positioned(&self) -> bool {
        self.position.is_some()
    }

    /// Returns true for either concatenation element
    pub fn is_concatenation(&self) -> bool {
        matches!(
            self.known_iei(),
            Some(
                InformationElementId::ConcatenatedShortMessages8Bit
                    | InformationElementId::ConcatenatedShortMessages16Bit
            )
        )
    }

    /// Octets this element occupies in the header, identifier and length included
    pub fn total_length(&self) -> usize {
        match self.position {
            Some(_) => self.data.len() + 3,
            None => self.data.len() + 2,
        }
    }
}

impl Encodable for UdhElement {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        buf.put_u8(self.iei);
        match self.position {
            Some(position) => {
                buf.put_u8((self.data.len() + 1) as u8);
                buf.put_u8(position);
            }
            None => buf.put_u8(self.data.len() as u8),
        }
        buf.put_slice(&self.data);
        Ok(())
    }

    fn encoded_size(&self) -> usize {
        self.total_length()
    }
}

/// Sum of the elements' total lengths, excluding the UDHL octet.
pub fn total_size(elements: &[UdhElement]) -> usize {
    elements.iter().map(UdhElement::total_length).sum()
}

/// Octets the encoded header occupies in the user data, UDHL included.
pub fn header_size(elements: &[UdhElement]) -> usize {
    if elements.is_empty() {
        0
    } else {
        total_size(elements) + 1
    }
}

/// Encodes a user data header: the UDHL octet followed by every element.
///
/// An empty list encodes to nothing. A header that does not fit in a single
/// short message fails with `UdhTooLong`.
pub fn encode_udh(elements: &[UdhElement]) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(header_size(elements));
    elements.encode(&mut buf)?;
    Ok(buf.freeze())
}

impl Encodable for [UdhElement] {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        let octets = header_size(self);
        if octets > MAX_USER_DATA_OCTETS {
            return Err(CodecError::UdhTooLong { octets });
        }
        buf.put_u8(total_size(self) as u8);
        for element in self {
            element.encode(buf)?;
        }
        Ok(())
    }

    fn encoded_size(&self) -> usize {
        header_size(self)
    }
}
