// ABOUTME: Splits user data that exceeds one short message into concatenated parts
// ABOUTME: Computes per-part capacity from the header budget and stamps each part with a concatenation element

use crate::charset::ESCAPE;
use crate::codec::{CodecError, MAX_USER_DATA_OCTETS, Result};
use crate::datatypes::udh::{header_size, total_size};
use crate::datatypes::{Alphabet, UdhElement, UserData};
use crate::encoder::ReferenceGenerator;
use crate::pdu::SmsPdu;
use crate::septet::{pack_septets, septets_in, unpack_septets};
use bytes::Bytes;
use tracing::debug;

/// Most parts a concatenated message can have
pub const MAX_PARTS: u8 = u8::MAX;

/// Width of the concatenation reference number
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ConcatReference {
    /// IEI `0x00`, one reference octet
    #[default]
    EightBit,
    /// IEI `0x08`, two reference octets
    SixteenBit,
}

impl ConcatReference {
    /// Header octets a lone concatenation element costs, UDHL included
    pub const fn overhead(self) -> usize {
        match self {
            ConcatReference::EightBit => 6,
            ConcatReference::SixteenBit => 7,
        }
    }

    fn element(self, reference: u16, total: u8, sequence: u8) -> UdhElement {
        match self {
            ConcatReference::EightBit => {
                UdhElement::concatenated_8bit((reference & 0xFF) as u8, total, sequence)
            }
            ConcatReference::SixteenBit => {
                UdhElement::concatenated_16bit(reference, total, sequence)
            }
        }
    }
}

/// Capacity of one message, in user data units, after `header_octets` of header
fn capacity(alphabet: Alphabet, header_octets: usize) -> usize {
    let octets = MAX_USER_DATA_OCTETS.saturating_sub(header_octets);
    match alphabet {
        Alphabet::Gsm7 => septets_in(octets),
        // never split a UTF-16 unit
        Alphabet::Ucs2 => octets & !1,
        Alphabet::Latin1 | Alphabet::Reserved => octets,
    }
}

/// Cuts unpacked septets into runs of at most `per_part`, never ending a run
/// on an escape that would be cut off from its extension septet.
fn septet_chunks(septets: &[u8], per_part: usize) -> Vec<&[u8]> {
    let mut chunks = Vec::with_capacity(septets.len().div_ceil(per_part));
    let mut start = 0;
    while start < septets.len() {
        let mut end = (start + per_part).min(septets.len());
        if end < septets.len() && end - start > 1 && septets[end - 1] == ESCAPE {
            end -= 1;
        }
        chunks.push(&septets[start..end]);
        start = end;
    }
    chunks
}

/// Splits `user_data` into as many PDUs as it needs.
///
/// Data that fits in one message comes back as a single PDU carrying the
/// caller's elements unchanged. Otherwise every part gets a fresh element
/// list: a concatenation element (one reference per call, drawn from
/// `references`) followed by the caller's elements.
pub fn split(
    udh: &[UdhElement],
    user_data: &UserData,
    references: &dyn ReferenceGenerator,
    width: ConcatReference,
    max_parts: u8,
) -> Result<Vec<SmsPdu>> {
    let dcs = user_data.dcs();
    let alphabet = match dcs.alphabet() {
        Some(alphabet) if alphabet != Alphabet::Reserved => alphabet,
        _ => return Err(CodecError::UnsupportedAlphabet(dcs)),
    };

    let single = header_size(udh);
    if single > MAX_USER_DATA_OCTETS {
        return Err(CodecError::UdhTooLong { octets: single });
    }
    let length = user_data.length();
    if length <= capacity(alphabet, single) {
        return Ok(vec![SmsPdu::new(udh.to_vec(), user_data.clone())?]);
    }

    let per_part_header = total_size(udh) + width.overhead();
    let per_part = capacity(alphabet, per_part_header);
    if per_part == 0 {
        return Err(CodecError::UdhTooLong {
            octets: per_part_header,
        });
    }

    let chunks: Vec<UserData> = match alphabet {
        Alphabet::Gsm7 => {
            let septets = unpack_septets(user_data.bytes(), length);
            septet_chunks(&septets, per_part)
                .into_iter()
                .map(|chunk| UserData::new(pack_septets(chunk), chunk.len(), dcs))
                .collect::<Result<_>>()?
        }
        _ => {
            let bytes = user_data.bytes();
            (0..length)
                .step_by(per_part)
                .map(|start| {
                    let end = (start + per_part).min(length);
                    UserData::octets(Bytes::slice(bytes, start..end), dcs)
                })
                .collect::<Result<_>>()?
        }
    };

    let parts = chunks.len();
    if parts > usize::from(max_parts) {
        return Err(CodecError::MessageTooLong { parts, max_parts });
    }
    let total = parts as u8;
    let reference = references.next_reference();
    debug!(
        "Splitting {} {:?} units into {} parts of up to {} (reference {})",
        length, alphabet, parts, per_part, reference
    );

    chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let mut elements = Vec::with_capacity(udh.len() + 1);
            elements.push(width.element(reference, total, index as u8 + 1));
            elements.extend_from_slice(udh);
            SmsPdu::new(elements, chunk)
        })
        .collect()
}
