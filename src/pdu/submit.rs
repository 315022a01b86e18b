// ABOUTME: SMS-SUBMIT TPDU encoder (TS 23.040 section 9.2.2.2) for modem and AT-command transports
// ABOUTME: Wraps assembled PDUs with SMSC, first octet, reference, destination, PID, DCS and validity fields

use crate::charset::encode_gsm7;
use crate::codec::{CodecError, Encodable, Result};
use crate::datatypes::Address;
use crate::pdu::SmsPdu;
use crate::septet::pack_septets;
use bytes::{BufMut, Bytes, BytesMut};
use std::time::Duration;
use tracing::debug;

const MTI_SUBMIT: u8 = 0x01;
const REJECT_DUPLICATES: u8 = 0x04;
const VPF_RELATIVE: u8 = 0x10;
const STATUS_REPORT_REQUEST: u8 = 0x20;
const UDH_INDICATOR: u8 = 0x40;
const REPLY_PATH: u8 = 0x80;

/// Relative validity period (TP-VP, relative format).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValidityPeriod(u8);

impl ValidityPeriod {
    /// Wraps a raw TP-VP octet
    pub const fn relative(raw: u8) -> Self {
        ValidityPeriod(raw)
    }

    /// Smallest relative validity period covering `duration`.
    ///
    /// Anything longer than 63 weeks is capped at 63 weeks.
    pub fn from_duration(duration: Duration) -> Self {
        let minutes = duration.as_secs().div_ceil(60);
        let raw = match minutes {
            0..=720 => minutes.div_ceil(5).saturating_sub(1),
            721..=1440 => 143 + (minutes - 720).div_ceil(30),
            _ => {
                let days = minutes.div_ceil(1440);
                if days <= 30 {
                    166 + days
                } else {
                    (192 + minutes.div_ceil(10080)).min(255)
                }
            }
        };
        ValidityPeriod(raw as u8)
    }

    pub const fn as_raw(self) -> u8 {
        self.0
    }

    /// The period this value stands for
    pub fn period(self) -> Duration {
        let raw = u64::from(self.0);
        let minutes = match raw {
            0..=143 => (raw + 1) * 5,
            144..=167 => 720 + (raw - 143) * 30,
            168..=196 => (raw - 166) * 1440,
            _ => (raw - 192) * 10080,
        };
        Duration::from_secs(minutes * 60)
    }
}

impl Default for ValidityPeriod {
    /// One day
    fn default() -> Self {
        ValidityPeriod(0xA7)
    }
}

/// SMS-SUBMIT options for one destination.
///
/// # Examples
///
/// ```rust
/// use smscodec::{Address, SmsSubmit, ValidityPeriod};
///
/// let submit = SmsSubmit::new(Address::new("+46708251358")?)
///     .with_validity(ValidityPeriod::relative(0xAA))
///     .with_status_report();
/// # Ok::<(), smscodec::CodecError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SmsSubmit {
    destination: Address,
    smsc: Option<Address>,
    message_reference: u8,
    validity: Option<ValidityPeriod>,
    status_report_request: bool,
    reject_duplicates: bool,
    reply_path: bool,
    protocol_id: u8,
}

impl SmsSubmit {
    pub fn new(destination: Address) -> Self {
        Self {
            destination,
            smsc: None,
            message_reference: 0,
            validity: None,
            status_report_request: false,
            reject_duplicates: false,
            reply_path: false,
            protocol_id: 0,
        }
    }

    /// Prefix the TPDU with this service centre address instead of `00`
    pub fn with_smsc(mut self, smsc: Address) -> Self {
        self.smsc = Some(smsc);
        self
    }

    /// TP-MR of the first (or only) message
    pub fn with_message_reference(mut self, reference: u8) -> Self {
        self.message_reference = reference;
        self
    }

    pub fn with_validity(mut self, validity: ValidityPeriod) -> Self {
        self.validity = Some(validity);
        self
    }

    /// Request a delivery status report
    pub fn with_status_report(mut self) -> Self {
        self.status_report_request = true;
        self
    }

    pub fn with_reject_duplicates(mut self) -> Self {
        self.reject_duplicates = true;
        self
    }

    pub fn with_reply_path(mut self) -> Self {
        self.reply_path = true;
        self
    }

    pub fn with_protocol_id(mut self, protocol_id: u8) -> Self {
        self.protocol_id = protocol_id;
        self
    }

    pub fn destination(&self) -> &Address {
        &self.destination
    }

    /// Encodes one PDU as a complete SMS-SUBMIT, SMSC field first.
    pub fn encode(&self, pdu: &SmsPdu) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(176);
        self.encode_into(pdu, self.message_reference, &mut buf)?;
        Ok(buf.freeze())
    }

    /// Encodes every part with consecutive message references.
    pub fn encode_parts(&self, pdus: &[SmsPdu]) -> Result<Vec<Bytes>> {
        pdus.iter()
            .enumerate()
            .map(|(index, pdu)| {
                let mut buf = BytesMut::with_capacity(176);
                let reference = self.message_reference.wrapping_add(index as u8);
                self.encode_into(pdu, reference, &mut buf)?;
                Ok(buf.freeze())
            })
            .collect()
    }

    fn first_octet(&self, pdu: &SmsPdu) -> u8 {
        let mut octet = MTI_SUBMIT;
        if self.reject_duplicates {
            octet |= REJECT_DUPLICATES;
        }
        if self.validity.is_some() {
            octet |= VPF_RELATIVE;
        }
        if self.status_report_request {
            octet |= STATUS_REPORT_REQUEST;
        }
        if pdu.has_udh() {
            octet |= UDH_INDICATOR;
        }
        if self.reply_path {
            octet |= REPLY_PATH;
        }
        octet
    }

    fn encode_into(&self, pdu: &SmsPdu, reference: u8, buf: &mut BytesMut) -> Result<()> {
        let user_data_length = pdu.user_data_length()?;

        match &self.smsc {
            Some(smsc) => encode_smsc(smsc, buf)?,
            None => buf.put_u8(0x00),
        }
        let tpdu_start = buf.len();

        buf.put_u8(self.first_octet(pdu));
        buf.put_u8(reference);
        encode_destination(&self.destination, buf)?;
        buf.put_u8(self.protocol_id);
        buf.put_u8(pdu.dcs().to_byte());
        if let Some(validity) = self.validity {
            buf.put_u8(validity.as_raw());
        }
        buf.put_u8(user_data_length);
        pdu.encode(buf)?;

        debug!(
            "Encoded SMS-SUBMIT to {} (MR {}, {} TPDU octets)",
            self.destination,
            reference,
            buf.len() - tpdu_start
        );
        Ok(())
    }
}

/// Packs digits two per octet, low nibble first, padding with `F`.
fn semi_octets(digits: &str) -> Vec<u8> {
    let nibbles: Vec<u8> = digits
        .chars()
        .map(|c| match c {
            '*' => 0x0A,
            '#' => 0x0B,
            'a' => 0x0C,
            'b' => 0x0D,
            digit => digit.to_digit(10).unwrap_or(0x0F) as u8,
        })
        .collect();
    nibbles
        .chunks(2)
        .map(|pair| pair[0] | pair.get(1).copied().unwrap_or(0x0F) << 4)
        .collect()
}

/// Service centre address: length in octets (type octet included), type, digits
fn encode_smsc(smsc: &Address, buf: &mut BytesMut) -> Result<()> {
    if smsc.is_alphanumeric() {
        return Err(CodecError::invalid_argument(format!(
            "service centre address {smsc} must be numeric"
        )));
    }
    let digits = semi_octets(smsc.value());
    buf.put_u8((digits.len() + 1) as u8);
    buf.put_u8(smsc.type_octet());
    buf.put_slice(&digits);
    Ok(())
}

/// TP-DA: length in useful semi-octets, type, then digits or packed GSM 7-bit text
fn encode_destination(address: &Address, buf: &mut BytesMut) -> Result<()> {
    if address.is_alphanumeric() {
        let septets = encode_gsm7(address.value())?;
        let packed = pack_septets(&septets);
        buf.put_u8((septets.len() * 7).div_ceil(4) as u8);
        buf.put_u8(address.type_octet());
        buf.put_slice(&packed);
    } else {
        buf.put_u8(address.value().len() as u8);
        buf.put_u8(address.type_octet());
        buf.put_slice(&semi_octets(address.value()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{DataCoding, UdhElement, UserData};

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02X}")).collect()
    }

    fn gsm7_pdu(text: &[u8]) -> SmsPdu {
        let ud = UserData::new(pack_septets(text), text.len(), DataCoding::GSM7).unwrap();
        SmsPdu::new(vec![], ud).unwrap()
    }

    #[test]
    fn classic_submit_vector() {
        let submit = SmsSubmit::new(Address::new("+46708251358").unwrap())
            .with_validity(ValidityPeriod::relative(0xAA));
        let tpdu = submit.encode(&gsm7_pdu(b"hellohello")).unwrap();
        assert_eq!(
            hex(&tpdu),
            "0011000B916407281553F80000AA0AE8329BFD4697D9EC37"
        );
    }

    #[test]
    fn smsc_prefix() {
        let submit = SmsSubmit::new(Address::new("+46708251358").unwrap())
            .with_smsc(Address::new("+46708251358").unwrap());
        let tpdu = submit.encode(&gsm7_pdu(b"HELLO")).unwrap();
        assert_eq!(&hex(&tpdu)[..16], "07916407281553F8");
        // no validity period: VPF clear
        assert_eq!(tpdu[8], 0x01);
    }

    #[test]
    fn alphanumeric_smsc_is_rejected() {
        let submit = SmsSubmit::new(Address::new("12345").unwrap())
            .with_smsc(Address::new("CENTRE").unwrap());
        assert!(matches!(
            submit.encode(&gsm7_pdu(b"x")),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn alphanumeric_destination() {
        let mut buf = BytesMut::new();
        encode_destination(&Address::new("MYCOMPANY").unwrap(), &mut buf).unwrap();
        // 9 septets pack into 8 octets, announced as 16 semi-octets
        assert_eq!(hex(&buf), "10D0CDECF0D984069D59");
        assert_eq!(buf.len(), 2 + 8);
    }

    #[test]
    fn service_code_digits() {
        assert_eq!(semi_octets("*100#"), vec![0x1A, 0x00, 0xFB]);
        assert_eq!(semi_octets("ab"), vec![0xDC]);
    }

    #[test]
    fn first_octet_flags() {
        let submit = SmsSubmit::new(Address::new("123").unwrap())
            .with_reject_duplicates()
            .with_status_report()
            .with_reply_path()
            .with_validity(ValidityPeriod::default());
        let ud = UserData::new(pack_septets(b"hi"), 2, DataCoding::GSM7).unwrap();
        let pdu = SmsPdu::new(vec![UdhElement::concatenated_8bit(1, 2, 1)], ud).unwrap();
        assert_eq!(submit.first_octet(&pdu), 0xF5);
        assert_eq!(submit.first_octet(&gsm7_pdu(b"hi")), 0xB5);
    }

    #[test]
    fn protocol_id_and_dcs_fields() {
        let submit = SmsSubmit::new(Address::new("1").unwrap()).with_protocol_id(0x41);
        let ud = UserData::octets(vec![0x00, 0x41], DataCoding::UCS2).unwrap();
        let tpdu = submit.encode(&SmsPdu::new(vec![], ud).unwrap()).unwrap();
        // 00 | 01 00 | 01 91 F1 | 41 | 08 | 02 0041
        assert_eq!(hex(&tpdu), "0001000191F14108020041");
    }

    #[test]
    fn parts_get_consecutive_references() {
        let submit = SmsSubmit::new(Address::new("1").unwrap()).with_message_reference(0xFF);
        let parts = submit
            .encode_parts(&[gsm7_pdu(b"a"), gsm7_pdu(b"b")])
            .unwrap();
        assert_eq!(parts[0][2], 0xFF);
        assert_eq!(parts[1][2], 0x00);
    }

    #[test]
    fn validity_period_mapping() {
        let hours = |h: u64| Duration::from_secs(h * 3600);
        assert_eq!(ValidityPeriod::from_duration(Duration::from_secs(0)).as_raw(), 0);
        assert_eq!(ValidityPeriod::from_duration(Duration::from_secs(300)).as_raw(), 0);
        assert_eq!(ValidityPeriod::from_duration(hours(1)).as_raw(), 11);
        assert_eq!(ValidityPeriod::from_duration(hours(12)).as_raw(), 143);
        assert_eq!(ValidityPeriod::from_duration(hours(24)).as_raw(), 167);
        assert_eq!(ValidityPeriod::from_duration(hours(72)).as_raw(), 169);
        assert_eq!(ValidityPeriod::from_duration(hours(24 * 35)).as_raw(), 197);
        assert_eq!(ValidityPeriod::from_duration(hours(24 * 7 * 100)).as_raw(), 255);

        assert_eq!(ValidityPeriod::relative(11).period(), hours(1));
        assert_eq!(ValidityPeriod::relative(167).period(), hours(24));
        assert_eq!(ValidityPeriod::relative(0xAA).period(), hours(96));
        assert_eq!(ValidityPeriod::default().period(), hours(24));
    }

    #[test]
    fn validity_round_trips_on_exact_periods() {
        for raw in 0..=255u8 {
            let vp = ValidityPeriod::relative(raw);
            assert_eq!(ValidityPeriod::from_duration(vp.period()), vp, "raw {raw}");
        }
    }
}
