// ABOUTME: Bit packing between 7-bit GSM septets and octets (TS 23.038 section 6.1.2.1)
// ABOUTME: Includes fill-bit aware variants used when a user data header precedes GSM 7-bit text

/// Number of octets needed to hold `count` packed septets.
pub const fn packed_len(count: usize) -> usize {
    (count * 7).div_ceil(8)
}

/// Number of septets that fit into `octets` octets.
pub const fn septets_in(octets: usize) -> usize {
    octets * 8 / 7
}

/// Number of septet positions a user data header of `udh_octets` occupies,
/// including the fill bits that realign the text on a septet boundary.
pub const fn udh_septets(udh_octets: usize) -> usize {
    (udh_octets * 8).div_ceil(7)
}

/// Fill bits inserted between a user data header of `udh_octets` octets and
/// the first GSM 7-bit character.
pub const fn fill_bits_for(udh_octets: usize) -> usize {
    (7 - (udh_octets * 8) % 7) % 7
}

/// Packs septets into octets.
///
/// Septet `i` occupies bits `7i..7i+6` of the bit stream, least significant
/// bit first. Only the low 7 bits of each input value are used.
pub fn pack_septets(septets: &[u8]) -> Vec<u8> {
    pack_septets_with_fill(septets, 0)
}

/// Packs septets into octets after `fill_bits` leading zero bits.
pub fn pack_septets_with_fill(septets: &[u8], fill_bits: usize) -> Vec<u8> {
    let total_bits = fill_bits + septets.len() * 7;
    let mut out = vec![0u8; total_bits.div_ceil(8)];

    for (i, &septet) in septets.iter().enumerate() {
        let bit = fill_bits + i * 7;
        let (index, shift) = (bit / 8, bit % 8);
        let value = u16::from(septet & 0x7F) << shift;

        out[index] |= value as u8;
        // A septet starting at bit 2 or later spills into the next octet
        if shift > 1 {
            out[index + 1] |= (value >> 8) as u8;
        }
    }

    out
}

/// Unpacks exactly `count` septets from packed octets.
///
/// Trailing pad bits are never returned as a character, so a packed buffer of
/// seven septets is not mistaken for eight when the last octet holds padding.
/// Unpacking stops early if `bytes` is too short for `count` septets.
pub fn unpack_septets(bytes: &[u8], count: usize) -> Vec<u8> {
    unpack_septets_with_fill(bytes, 0, count)
}

/// Unpacks exactly `count` septets that start after `fill_bits` bits.
pub fn unpack_septets_with_fill(bytes: &[u8], fill_bits: usize, count: usize) -> Vec<u8> {
    (0..count)
        .map_while(|i| {
            let bit = fill_bits + i * 7;
            let (index, shift) = (bit / 8, bit % 8);
            let low = u16::from(*bytes.get(index)?);
            let high = if shift > 1 {
                u16::from(*bytes.get(index + 1)?)
            } else {
                0
            };
            Some((((high << 8) | low) >> shift) as u8 & 0x7F)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_known_vector() {
        assert_eq!(
            pack_septets(b"hellohello"),
            vec![0xE8, 0x32, 0x9B, 0xFD, 0x46, 0x97, 0xD9, 0xEC, 0x37]
        );
    }

    #[test]
    fn pack_hello_uppercase() {
        let packed = pack_septets(b"HELLO");
        assert_eq!(packed, vec![0xC8, 0x22, 0x93, 0xF9, 0x04]);
        assert_eq!(packed.len(), packed_len(5));
    }

    #[test]
    fn pack_eight_septets_fill_seven_octets() {
        // 8 * 7 = 56 bits, an exact multiple of 8: no padding
        let packed = pack_septets(b"12345678");
        assert_eq!(packed, vec![0x31, 0xD9, 0x8C, 0x56, 0xB3, 0xDD, 0x70]);
        assert_eq!(unpack_septets(&packed, 8), b"12345678".to_vec());
    }

    #[test]
    fn pack_seven_septets_pads_last_octet() {
        // 7 * 7 = 49 bits, padded with zeros to 56
        let packed = pack_septets(b"1234567");
        assert_eq!(packed, vec![0x31, 0xD9, 0x8C, 0x56, 0xB3, 0xDD, 0x00]);

        // The 7 pad bits look like '@' (0x00) but must not be returned
        let unpacked = unpack_septets(&packed, 7);
        assert_eq!(unpacked, b"1234567".to_vec());
        assert_eq!(unpacked.len(), 7);
    }

    #[test]
    fn trailing_at_sign_needs_the_count() {
        let with_at = pack_septets(&[b'1', b'2', b'3', b'4', b'5', b'6', b'7', 0x00]);
        let without = pack_septets(b"1234567");
        assert_eq!(with_at, without);
        assert_eq!(unpack_septets(&with_at, 8).len(), 8);
        assert_eq!(unpack_septets(&with_at, 8)[7], 0x00);
    }

    #[test]
    fn round_trip_all_lengths() {
        let source: Vec<u8> = (0..=127u8).collect();
        for n in 0..=source.len() {
            let packed = pack_septets(&source[..n]);
            assert_eq!(packed.len(), packed_len(n));
            assert_eq!(unpack_septets(&packed, n), source[..n].to_vec(), "n = {n}");
        }
    }

    #[test]
    fn high_bit_is_ignored() {
        assert_eq!(pack_septets(&[0xC1]), pack_septets(&[0x41]));
    }

    #[test]
    fn empty_input() {
        assert!(pack_septets(&[]).is_empty());
        assert!(unpack_septets(&[], 0).is_empty());
    }

    #[test]
    fn unpack_stops_when_input_runs_out() {
        let packed = pack_septets(b"HELLO");
        assert_eq!(unpack_septets(&packed, 20), b"HELLO".to_vec());
    }

    #[test]
    fn fill_bits_for_common_headers() {
        // concatenation header: UDHL + 5 octets
        assert_eq!(fill_bits_for(6), 1);
        assert_eq!(udh_septets(6), 7);
        // 16-bit port addressing: UDHL + 6 octets
        assert_eq!(fill_bits_for(7), 0);
        assert_eq!(udh_septets(7), 8);
        assert_eq!(fill_bits_for(0), 0);
    }

    #[test]
    fn pack_with_fill() {
        let packed = pack_septets_with_fill(b"hello", 1);
        assert_eq!(packed, vec![0xD0, 0x65, 0x36, 0xFB, 0x0D]);
        assert_eq!(unpack_septets_with_fill(&packed, 1, 5), b"hello".to_vec());
    }

    #[test]
    fn round_trip_with_every_fill() {
        let text = b"The quick brown fox";
        for fill in 0..7 {
            let packed = pack_septets_with_fill(text, fill);
            assert_eq!(packed.len(), (fill + text.len() * 7).div_ceil(8));
            assert_eq!(
                unpack_septets_with_fill(&packed, fill, text.len()),
                text.to_vec()
            );
        }
    }

    #[test]
    fn capacity_helpers() {
        assert_eq!(septets_in(140), 160);
        assert_eq!(septets_in(134), 153);
        assert_eq!(packed_len(160), 140);
        assert_eq!(packed_len(153), 134);
    }
}
