// ABOUTME: GSM 03.38 default alphabet and extension table plus Latin-1 and UCS-2 text encoders
// ABOUTME: Converts text into the unpacked septets or octets carried as SMS user data

use crate::codec::{CodecError, Result};
use crate::datatypes::Alphabet;

/// Escape septet that selects the extension table for the following septet.
pub const ESCAPE: u8 = 0x1B;

/// GSM 03.38 default alphabet, indexed by septet value.
///
/// Position 0x1B is the escape to the extension table and never maps to a
/// character on its own.
const DEFAULT_ALPHABET: [char; 128] = [
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å', //
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', '\u{1B}', 'Æ', 'æ', 'ß', 'É', //
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', //
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?', //
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', //
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§', //
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', //
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à', //
];

/// GSM 03.38 extension table: (character, septet following the escape).
const EXTENSION_TABLE: [(char, u8); 10] = [
    ('\u{0C}', 0x0A),
    ('^', 0x14),
    ('{', 0x28),
    ('}', 0x29),
    ('\\', 0x2F),
    ('[', 0x3C),
    ('~', 0x3D),
    (']', 0x3E),
    ('|', 0x40),
    ('€', 0x65),
];

fn default_septet(c: char) -> Option<u8> {
    if c == '\u{1B}' {
        return None;
    }
    DEFAULT_ALPHABET
        .iter()
        .position(|&entry| entry == c)
        .map(|index| index as u8)
}

fn extension_septet(c: char) -> Option<u8> {
    EXTENSION_TABLE
        .iter()
        .find(|(entry, _)| *entry == c)
        .map(|(_, septet)| *septet)
}

/// Appends the septets for `c`, returning `false` if it has no GSM 7-bit form.
fn push_gsm7(c: char, dest: &mut Vec<u8>) -> bool {
    if let Some(septet) = default_septet(c) {
        dest.push(septet);
        true
    } else if let Some(septet) = extension_septet(c) {
        dest.push(ESCAPE);
        dest.push(septet);
        true
    } else {
        false
    }
}

/// Returns true if every character of `text` is in the GSM default alphabet
/// or its extension table.
pub fn is_gsm7(text: &str) -> bool {
    gsm7_len(text).is_some()
}

/// Number of septets `text` occupies in GSM 7-bit, counting extension
/// characters as two.
pub fn gsm7_len(text: &str) -> Option<usize> {
    text.chars().try_fold(0usize, |len, c| {
        if default_septet(c).is_some() {
            Some(len + 1)
        } else if extension_septet(c).is_some() {
            Some(len + 2)
        } else {
            None
        }
    })
}

/// Encodes text into unpacked GSM 7-bit septets.
pub fn encode_gsm7(text: &str) -> Result<Vec<u8>> {
    let mut septets = Vec::with_capacity(gsm7_len(text).unwrap_or(text.len()));
    for c in text.chars() {
        if !push_gsm7(c, &mut septets) {
            return Err(CodecError::UnmappableCharacter {
                character: c,
                alphabet: Alphabet::Gsm7,
            });
        }
    }
    Ok(septets)
}

/// Decodes unpacked GSM 7-bit septets back into text.
///
/// Septets outside the tables decode to `?`; a dangling escape at the end is
/// dropped.
pub fn decode_gsm7(septets: &[u8]) -> String {
    let mut text = String::with_capacity(septets.len());
    let mut iter = septets.iter().map(|s| s & 0x7F);
    while let Some(septet) = iter.next() {
        if septet == ESCAPE {
            if let Some(next) = iter.next() {
                let c = EXTENSION_TABLE
                    .iter()
                    .find(|(_, value)| *value == next)
                    .map(|(c, _)| *c)
                    .unwrap_or('?');
                text.push(c);
            }
        } else {
            text.push(DEFAULT_ALPHABET[usize::from(septet)]);
        }
    }
    text
}

/// Encodes text as ISO-8859-1, one octet per character.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| {
            u8::try_from(u32::from(c)).map_err(|_| CodecError::UnmappableCharacter {
                character: c,
                alphabet: Alphabet::Latin1,
            })
        })
        .collect()
}

/// Encodes text as big-endian UTF-16 (characters outside the BMP become
/// surrogate pairs).
pub fn encode_ucs2(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// Picks the most compact alphabet able to carry `text`: GSM 7-bit when every
/// character is representable, UCS-2 otherwise.
pub fn best_alphabet(text: &str) -> Alphabet {
    if is_gsm7(text) {
        Alphabet::Gsm7
    } else {
        Alphabet::Ucs2
    }
}
