//! Precomputed lookup tables for UTF-8 lead byte classification.
//!
//! `UTF8_CHAR_WIDTH` gives, for every byte value, the total length of the
//! sequence that byte would start. A width of 0 means the byte can never start
//! a sequence: bare continuation bytes (0x80-0xBF), the overlong leads 0xC0 and
//! 0xC1, and 0xFE/0xFF. Widths 5 and 6 are the obsolete pre-Unicode-3.1 forms,
//! which are structurally decodable but never produce a scalar value.
//!
//! The handful of lead bytes whose first continuation byte has a narrower
//! range than 0x80-0xBF are covered by [`first_continuation_bounds`].

/// Sequence width indexed by lead byte value.
///
/// Table size: 256 bytes
#[rustfmt::skip]
pub static UTF8_CHAR_WIDTH: [u8; 256] = [
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1, // 0x1F
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1, // 0x3F
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1, // 0x5F
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1, // 0x7F
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, // 0x9F
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, // 0xBF
    0,0,2,2,2,2,2,2,2,2,2,2,2,2,2,2,
    2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2, // 0xDF
    3,3,3,3,3,3,3,3,3,3,3,3,3,3,3,3, // 0xEF
    4,4,4,4,4,5,5,5,5,5,5,5,6,6,0,0, // 0xFF
];

/// Mask of the value bits of a continuation byte.
pub const CONT_MASK: u8 = 0b0011_1111;

/// Value of the tag bits (tag mask is !CONT_MASK) of a continuation byte.
pub const TAG_CONT_U8: u8 = 0b1000_0000;

/// Get the expected sequence length from a lead byte.
///
/// Returns 0 for bytes that can never start a sequence.
#[inline]
pub fn sequence_length(lead_byte: u8) -> usize {
    UTF8_CHAR_WIDTH[lead_byte as usize] as usize
}

/// Inclusive bounds for the first continuation byte after `lead_byte`.
///
/// Only 0xE0 (overlong), 0xED (surrogates), 0xF0 (overlong) and 0xF4
/// (above U+10FFFF) are narrower than the generic continuation range.
#[inline]
pub fn first_continuation_bounds(lead_byte: u8) -> (u8, u8) {
    match lead_byte {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

/// Value bits carried by a lead byte of a `width`-byte sequence.
#[inline]
pub fn lead_value_bits(lead_byte: u8, width: usize) -> u32 {
    match width {
        1 => lead_byte as u32,
        // 110xxxxx, 1110xxxx, 11110xxx, 111110xx, 1111110x
        2..=6 => (lead_byte & (0x7F >> width)) as u32,
        _ => 0,
    }
}

/// Check if a byte is a continuation byte (0x80-0xBF).
#[inline(always)]
pub fn is_continuation_byte(byte: u8) -> bool {
    (byte & !CONT_MASK) == TAG_CONT_U8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        for byte in 0x00..=0x7Fu8 {
            assert_eq!(sequence_length(byte), 1, "byte=0x{:02X}", byte);
        }
    }

    #[test]
    fn test_continuation_bytes_have_no_width() {
        for byte in 0x80..=0xBFu8 {
            assert_eq!(sequence_length(byte), 0, "byte=0x{:02X}", byte);
            assert!(is_continuation_byte(byte));
        }
    }

    #[test]
    fn test_multibyte_widths() {
        assert_eq!(sequence_length(0xC0), 0);
        assert_eq!(sequence_length(0xC1), 0);
        for byte in 0xC2..=0xDFu8 {
            assert_eq!(sequence_length(byte), 2);
        }
        for byte in 0xE0..=0xEFu8 {
            assert_eq!(sequence_length(byte), 3);
        }
        for byte in 0xF0..=0xF4u8 {
            assert_eq!(sequence_length(byte), 4);
        }
    }

    #[test]
    fn test_legacy_widths() {
        for byte in 0xF5..=0xFBu8 {
            assert_eq!(sequence_length(byte), 5, "byte=0x{:02X}", byte);
        }
        assert_eq!(sequence_length(0xFC), 6);
        assert_eq!(sequence_length(0xFD), 6);
        assert_eq!(sequence_length(0xFE), 0);
        assert_eq!(sequence_length(0xFF), 0);
    }

    #[test]
    fn test_first_continuation_bounds() {
        assert_eq!(first_continuation_bounds(0xE0), (0xA0, 0xBF));
        assert_eq!(first_continuation_bounds(0xED), (0x80, 0x9F));
        assert_eq!(first_continuation_bounds(0xF0), (0x90, 0xBF));
        assert_eq!(first_continuation_bounds(0xF4), (0x80, 0x8F));
        for lead in [0xC2, 0xDF, 0xE1, 0xEC, 0xEE, 0xEF, 0xF1, 0xF3, 0xF8, 0xFC] {
            assert_eq!(first_continuation_bounds(lead), (0x80, 0xBF));
        }
    }

    #[test]
    fn test_lead_value_bits() {
        assert_eq!(lead_value_bits(b'A', 1), 0x41);
        assert_eq!(lead_value_bits(0xC3, 2), 0x03);
        assert_eq!(lead_value_bits(0xE2, 3), 0x02);
        assert_eq!(lead_value_bits(0xF4, 4), 0x04);
        assert_eq!(lead_value_bits(0xF8, 5), 0x00);
        assert_eq!(lead_value_bits(0xFB, 5), 0x03);
        assert_eq!(lead_value_bits(0xFD, 6), 0x01);
    }
}
