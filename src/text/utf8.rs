//! Byte-accurate UTF-8 decoding and validation.
//!
//! [`Decoder`] walks a byte buffer and yields one [`DecodedUnit`] per
//! character or per malformed byte. It never fails: malformation is data,
//! represented by [`Unit::Invalid`] and [`Unit::Legacy`] units, and the units
//! always tile the input exactly (no gaps, no overlap, in byte order).
//!
//! ## Lead Byte Classification
//!
//! | Lead byte     | Length | First continuation byte |
//! |---------------|--------|-------------------------|
//! | `00`-`7F`     | 1      | -                       |
//! | `C2`-`DF`     | 2      | `80`-`BF`               |
//! | `E0`          | 3      | `A0`-`BF` (no overlong) |
//! | `E1`-`EC`     | 3      | `80`-`BF`               |
//! | `ED`          | 3      | `80`-`9F` (no surrogate)|
//! | `EE`-`EF`     | 3      | `80`-`BF`               |
//! | `F0`          | 4      | `90`-`BF` (no overlong) |
//! | `F1`-`F3`     | 4      | `80`-`BF`               |
//! | `F4`          | 4      | `80`-`8F` (<= U+10FFFF) |
//! | `F5`-`FB`     | 5      | `80`-`BF` (legacy)      |
//! | `FC`-`FD`     | 6      | `80`-`BF` (legacy)      |
//!
//! `80`-`BF` as a lead is an orphan continuation byte; `C0`, `C1`, `FE` and
//! `FF` can never start a sequence.
//!
//! ## Resynchronization
//!
//! When a lead byte is not followed by its full set of in-range continuation
//! bytes, exactly one byte (the lead) is reported invalid and scanning resumes
//! at the next byte. The would-be continuation bytes are examined on their own,
//! so `C3 28` decodes as an invalid unit followed by `(`.

use alloc::string::String;
use core::fmt;
use core::iter::FusedIterator;

use crate::table::{
    first_continuation_bounds, is_continuation_byte, lead_value_bits, sequence_length, CONT_MASK,
};

/// Why a single byte could not start a well-formed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidKind {
    /// A continuation byte (0x80-0xBF) where a lead byte was expected.
    Orphan,
    /// A lead byte whose continuation bytes are missing, truncated or out of
    /// range.
    BadLead,
    /// 0xC0 or 0xC1, which could only ever encode an overlong form.
    Overlong,
    /// 0xFE or 0xFF, which never appear in any UTF-8 variant.
    Forbidden,
}

impl InvalidKind {
    /// Whether the byte looked like the start of a sequence.
    ///
    /// Repair replaces such bytes and silently drops orphans.
    #[inline]
    pub fn is_lead(self) -> bool {
        !matches!(self, Self::Orphan)
    }
}

/// The decoded value of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A Unicode scalar value.
    Scalar(char),
    /// A structurally complete 5- or 6-byte sequence. The assembled value is
    /// kept for diagnostics; it is never a Unicode scalar.
    Legacy(u32),
    /// A single byte that does not start a well-formed sequence.
    Invalid(InvalidKind),
}

impl Unit {
    /// Returns the scalar value, if this unit is one.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Scalar(c) => Some(c),
            _ => None,
        }
    }

    /// Whether this unit is a Unicode scalar value.
    #[inline]
    pub fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

/// One step of the decoder: a run of bytes and what it decoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedUnit {
    /// Byte offset of the first byte of the unit.
    pub offset: usize,
    /// Number of bytes consumed (1-6).
    pub len: u8,
    /// The decoded value.
    pub unit: Unit,
}

impl DecodedUnit {
    /// Whether the unit is a valid Unicode scalar value.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.unit.is_scalar()
    }

    /// Byte offset one past the end of the unit.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len as usize
    }

    /// The bytes of `input` covered by this unit.
    ///
    /// `input` must be the buffer the unit was decoded from.
    #[inline]
    pub fn bytes<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.offset..self.end()]
    }
}

/// Lazy decoder over a byte buffer.
///
/// Holds only the buffer and a cursor; clone it to restart from the current
/// position.
///
/// ```
/// use utf8scrub::text::utf8::{decode, InvalidKind, Unit};
///
/// let units: Vec<Unit> = decode(&[0xC3, 0x28]).map(|u| u.unit).collect();
/// assert_eq!(units, vec![Unit::Invalid(InvalidKind::BadLead), Unit::Scalar('(')]);
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Create a decoder positioned at the start of `input`.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unit to be decoded.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet decoded.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }
}

impl Iterator for Decoder<'_> {
    type Item = DecodedUnit;

    #[inline]
    fn next(&mut self) -> Option<DecodedUnit> {
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }
        let (unit, len) = decode_unit(rest);
        let decoded = DecodedUnit {
            offset: self.pos,
            len: len as u8,
            unit,
        };
        self.pos += len;
        Some(decoded)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.input.len() - self.pos;
        (remaining.div_ceil(6), Some(remaining))
    }
}

impl FusedIterator for Decoder<'_> {}

/// Decode `input` lazily into units.
#[inline]
pub fn decode(input: &[u8]) -> Decoder<'_> {
    Decoder::new(input)
}

/// Decode the unit at the start of a non-empty slice.
///
/// Returns the unit and the number of bytes it consumed.
#[inline]
pub(crate) fn decode_unit(input: &[u8]) -> (Unit, usize) {
    let lead = input[0];
    let width = sequence_length(lead);

    match width {
        0 => {
            let kind = match lead {
                0x80..=0xBF => InvalidKind::Orphan,
                0xC0 | 0xC1 => InvalidKind::Overlong,
                _ => InvalidKind::Forbidden,
            };
            (Unit::Invalid(kind), 1)
        }
        1 => (Unit::Scalar(lead as char), 1),
        _ => match well_formed_prefix(input, width) {
            n if n < width => (Unit::Invalid(InvalidKind::BadLead), 1),
            _ => {
                let value = input[1..width].iter().fold(lead_value_bits(lead, width), |cp, &b| {
                    (cp << 6) | (b & CONT_MASK) as u32
                });
                // The first-continuation bounds exclude surrogates, overlongs
                // and values above U+10FFFF for widths up to 4.
                match char::from_u32(value) {
                    Some(c) if width <= 4 => (Unit::Scalar(c), width),
                    _ => (Unit::Legacy(value), width),
                }
            }
        },
    }
}

/// Length of the leading run of a `width`-byte sequence whose bytes are in
/// range. Equals `width` for a well-formed sequence; otherwise it indexes the
/// first byte that is missing or out of range.
#[inline]
fn well_formed_prefix(input: &[u8], width: usize) -> usize {
    let (lo, hi) = first_continuation_bounds(input[0]);
    1 + (1..width)
        .take_while(|&i| match input.get(i) {
            None => false,
            Some(&b) if i == 1 => (lo..=hi).contains(&b),
            Some(&b) => is_continuation_byte(b),
        })
        .count()
}

/// Returns `true` iff every unit of `input` is a Unicode scalar value.
///
/// Agrees exactly with [`core::str::from_utf8`].
///
/// ```
/// use utf8scrub::text::utf8::is_valid_utf8;
///
/// assert!(is_valid_utf8("déjà vu".as_bytes()));
/// assert!(!is_valid_utf8(&[0xA0, 0xA1]));
/// assert!(is_valid_utf8(b""));
/// ```
pub fn is_valid_utf8(input: &[u8]) -> bool {
    decode(input).all(|u| u.is_valid())
}

/// Returns `true` if every byte is 7-bit ASCII.
#[inline]
pub fn is_ascii(input: &[u8]) -> bool {
    input.is_ascii()
}

/// Error information for UTF-8 validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utf8Error {
    /// The byte offset where the error occurred (0-indexed).
    pub offset: usize,
    /// The line number where the error occurred (1-indexed).
    pub line: usize,
    /// The column (byte position within the line, 1-indexed).
    pub column: usize,
    /// The kind of UTF-8 error.
    pub kind: Utf8ErrorKind,
}

impl fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at byte {}, line {}, column {}",
            self.kind, self.offset, self.line, self.column
        )
    }
}

/// The specific type of UTF-8 validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8ErrorKind {
    /// A continuation byte (0x80-0xBF), or 0xFE/0xFF, where a lead byte was
    /// expected.
    InvalidLeadByte,

    /// A byte outside the range 0x80-0xBF where a continuation byte was expected.
    InvalidContinuationByte,

    /// A character encoded using more bytes than necessary, e.g. `C0 81` for `A`.
    OverlongEncoding,

    /// An encoded surrogate code point (U+D800-U+DFFF).
    SurrogateCodepoint,

    /// A value above U+10FFFF, including the legacy 5- and 6-byte forms.
    OutOfRangeCodepoint,

    /// A multi-byte sequence cut off at the end of input.
    TruncatedSequence,
}

impl fmt::Display for Utf8ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLeadByte => write!(f, "invalid UTF-8 lead byte"),
            Self::InvalidContinuationByte => write!(f, "invalid UTF-8 continuation byte"),
            Self::OverlongEncoding => write!(f, "overlong UTF-8 encoding"),
            Self::SurrogateCodepoint => write!(f, "surrogate code point in UTF-8"),
            Self::OutOfRangeCodepoint => write!(f, "code point above U+10FFFF"),
            Self::TruncatedSequence => write!(f, "truncated UTF-8 sequence"),
        }
    }
}

/// Validate that the input is valid UTF-8.
///
/// Returns `Ok(())` if the input is valid UTF-8, or an `Err(Utf8Error)`
/// describing the first invalid unit.
///
/// # Examples
///
/// ```
/// use utf8scrub::text::utf8::{validate_utf8, Utf8ErrorKind};
///
/// assert!(validate_utf8("日本語".as_bytes()).is_ok());
///
/// let err = validate_utf8(b"ok\n\x80").unwrap_err();
/// assert_eq!(err.kind, Utf8ErrorKind::InvalidLeadByte);
/// assert_eq!((err.offset, err.line, err.column), (3, 2, 1));
/// ```
pub fn validate_utf8(input: &[u8]) -> Result<(), Utf8Error> {
    let failure = decode(input).find_map(|u| match u.unit {
        Unit::Scalar(_) => None,
        Unit::Legacy(_) => Some((u.offset, Utf8ErrorKind::OutOfRangeCodepoint)),
        Unit::Invalid(kind) => Some(classify_invalid(input, u.offset, kind)),
    });
    match failure {
        None => Ok(()),
        Some((offset, kind)) => {
            let (line, column) = line_and_column(input, offset);
            Err(Utf8Error {
                offset,
                line,
                column,
                kind,
            })
        }
    }
}

/// Reportable offset and error kind for an invalid unit starting at `pos`.
fn classify_invalid(input: &[u8], pos: usize, kind: InvalidKind) -> (usize, Utf8ErrorKind) {
    match kind {
        InvalidKind::Orphan | InvalidKind::Forbidden => (pos, Utf8ErrorKind::InvalidLeadByte),
        InvalidKind::Overlong => (pos, Utf8ErrorKind::OverlongEncoding),
        InvalidKind::BadLead => {
            let rest = &input[pos..];
            let lead = rest[0];
            let width = sequence_length(lead);
            if width > 4 {
                return (pos, Utf8ErrorKind::OutOfRangeCodepoint);
            }
            match well_formed_prefix(rest, width) {
                i if i >= rest.len() => (pos, Utf8ErrorKind::TruncatedSequence),
                1 if is_continuation_byte(rest[1]) => {
                    let kind = match lead {
                        0xED => Utf8ErrorKind::SurrogateCodepoint,
                        0xF4 => Utf8ErrorKind::OutOfRangeCodepoint,
                        _ => Utf8ErrorKind::OverlongEncoding,
                    };
                    (pos, kind)
                }
                i => (pos + i, Utf8ErrorKind::InvalidContinuationByte),
            }
        }
    }
}

/// 1-indexed line and byte column of `offset`.
fn line_and_column(input: &[u8], offset: usize) -> (usize, usize) {
    let before = &input[..offset];
    let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    (line, offset - line_start + 1)
}

/// Decode a UTF-8 code point from the start of a byte slice.
///
/// Returns `None` if the input is empty or does not start with a well-formed
/// scalar. On success, returns the code point and the number of bytes consumed.
///
/// # Examples
///
/// ```
/// use utf8scrub::text::utf8::decode_code_point;
///
/// assert_eq!(decode_code_point(b"A"), Some(('A' as u32, 1)));
/// assert_eq!(decode_code_point("日".as_bytes()), Some((0x65E5, 3)));
/// assert_eq!(decode_code_point(b""), None);
/// ```
pub fn decode_code_point(input: &[u8]) -> Option<(u32, usize)> {
    if input.is_empty() {
        return None;
    }
    match decode_unit(input) {
        (Unit::Scalar(c), len) => Some((c as u32, len)),
        _ => None,
    }
}

/// Encode a Unicode code point as UTF-8.
///
/// Returns `None` for surrogates and values above U+10FFFF.
///
/// ```
/// use utf8scrub::text::utf8::encode_code_point;
///
/// let (bytes, len) = encode_code_point(0x1F389).unwrap();
/// assert_eq!(&bytes[..len], "🎉".as_bytes());
/// assert!(encode_code_point(0xD800).is_none());
/// ```
pub fn encode_code_point(cp: u32) -> Option<([u8; 4], usize)> {
    let c = char::from_u32(cp)?;
    let mut buf = [0u8; 4];
    let len = c.encode_utf8(&mut buf).len();
    Some((buf, len))
}

/// Format a byte as a human-readable string for error messages.
pub fn format_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        alloc::format!("0x{:02X} ({:?})", byte, byte as char)
    } else {
        alloc::format!("0x{:02X}", byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn units(input: &[u8]) -> Vec<(usize, u8, Unit)> {
        decode(input).map(|u| (u.offset, u.len, u.unit)).collect()
    }

    // =========================================================================
    // Decoder Unit Tests
    // =========================================================================

    mod decoder_units {
        use super::*;

        #[test]
        fn empty_input() {
            assert!(units(b"").is_empty());
        }

        #[test]
        fn ascii_units() {
            assert_eq!(
                units(b"ab"),
                vec![(0, 1, Unit::Scalar('a')), (1, 1, Unit::Scalar('b'))]
            );
        }

        #[test]
        fn lead_failure_resynchronizes() {
            assert_eq!(
                units(&[0xC3, 0x28]),
                vec![
                    (0, 1, Unit::Invalid(InvalidKind::BadLead)),
                    (1, 1, Unit::Scalar('(')),
                ]
            );
        }

        #[test]
        fn orphans_are_single_units() {
            assert_eq!(
                units(&[0xA0, 0xA1]),
                vec![
                    (0, 1, Unit::Invalid(InvalidKind::Orphan)),
                    (1, 1, Unit::Invalid(InvalidKind::Orphan)),
                ]
            );
        }

        #[test]
        fn overlong_legacy_is_not_a_scalar() {
            assert_eq!(
                units(&[0xF8, 0x80, 0x80, 0x80, 0x80]),
                vec![(0, 5, Unit::Legacy(0))]
            );
        }

        #[test]
        fn well_formed_prefix_stops_at_first_bad_byte() {
            assert_eq!(well_formed_prefix(&[0xE2, 0x82, 0xAC], 3), 3);
            assert_eq!(well_formed_prefix(&[0xE2, 0x82], 3), 2);
            assert_eq!(well_formed_prefix(&[0xE0, 0x80, 0x80], 3), 1);
            assert_eq!(well_formed_prefix(&[0xF0, 0x90, b'A', 0x80], 4), 2);
        }

        #[test]
        fn four_byte_scalar() {
            assert_eq!(
                units(&[0xF0, 0x90, 0x8C, 0xBC]),
                vec![(0, 4, Unit::Scalar('\u{1033C}'))]
            );
        }

        #[test]
        fn failed_four_byte_rescans_continuations() {
            assert_eq!(
                units(&[0xF0, 0x28, 0x8C, 0xBC]),
                vec![
                    (0, 1, Unit::Invalid(InvalidKind::BadLead)),
                    (1, 1, Unit::Scalar('(')),
                    (2, 1, Unit::Invalid(InvalidKind::Orphan)),
                    (3, 1, Unit::Invalid(InvalidKind::Orphan)),
                ]
            );
        }

        #[test]
        fn failed_three_byte_in_third_octet() {
            assert_eq!(
                units(&[0xE2, 0x82, 0x28]),
                vec![
                    (0, 1, Unit::Invalid(InvalidKind::BadLead)),
                    (1, 1, Unit::Invalid(InvalidKind::Orphan)),
                    (2, 1, Unit::Scalar('(')),
                ]
            );
        }

        #[test]
        fn overlong_and_forbidden_leads() {
            assert_eq!(units(&[0xC0])[0].2, Unit::Invalid(InvalidKind::Overlong));
            assert_eq!(units(&[0xC1])[0].2, Unit::Invalid(InvalidKind::Overlong));
            assert_eq!(units(&[0xFE])[0].2, Unit::Invalid(InvalidKind::Forbidden));
            assert_eq!(units(&[0xFF])[0].2, Unit::Invalid(InvalidKind::Forbidden));
        }

        #[test]
        fn legacy_five_byte() {
            let got = units(&[0xF8, 0xA1, 0xA1, 0xA1, 0xA1]);
            assert_eq!(got.len(), 1);
            assert_eq!(got[0].0, 0);
            assert_eq!(got[0].1, 5);
            assert!(matches!(got[0].2, Unit::Legacy(v) if v == 0x0086_1861));
        }

        #[test]
        fn legacy_six_byte() {
            let got = units(&[0xFC, 0xA1, 0xA1, 0xA1, 0xA1, 0xA1]);
            assert_eq!(got.len(), 1);
            assert_eq!(got[0].1, 6);
            assert!(matches!(got[0].2, Unit::Legacy(_)));
        }

        #[test]
        fn truncated_legacy_is_bad_lead() {
            assert_eq!(
                units(&[0xFC, 0xA1]),
                vec![
                    (0, 1, Unit::Invalid(InvalidKind::BadLead)),
                    (1, 1, Unit::Invalid(InvalidKind::Orphan)),
                ]
            );
        }

        #[test]
        fn units_tile_the_input() {
            let input = b"a\xC3\xA9\xE2\x28\xA1\xF0\x9F\x98\x80\xF8\xA1\xA1\xA1\xA1\xFFz";
            let mut expected_offset = 0;
            for unit in decode(input) {
                assert_eq!(unit.offset, expected_offset);
                assert!((1..=6).contains(&unit.len));
                expected_offset = unit.end();
            }
            assert_eq!(expected_offset, input.len());
        }

        #[test]
        fn decoder_is_restartable() {
            let input = "héllo".as_bytes();
            let mut decoder = decode(input);
            decoder.next();
            let snapshot = decoder.clone();
            let a: Vec<_> = decoder.collect();
            let b: Vec<_> = snapshot.collect();
            assert_eq!(a, b);
            assert_eq!(a[0].offset, 1);
            assert_eq!(a[0].bytes(input), "é".as_bytes());
        }

        #[test]
        fn size_hint_bounds() {
            let decoder = decode(b"abcdef");
            assert_eq!(decoder.size_hint(), (1, Some(6)));
            assert_eq!(decode(b"").size_hint(), (0, Some(0)));
        }

        #[test]
        fn invalid_kind_lead_classification() {
            assert!(!InvalidKind::Orphan.is_lead());
            assert!(InvalidKind::BadLead.is_lead());
            assert!(InvalidKind::Overlong.is_lead());
            assert!(InvalidKind::Forbidden.is_lead());
        }
    }

    // =========================================================================
    // Valid UTF-8 Tests
    // =========================================================================

    mod valid_utf8 {
        use super::*;

        #[test]
        fn empty_input() {
            assert!(validate_utf8(b"").is_ok());
            assert!(is_valid_utf8(b""));
        }

        #[test]
        fn ascii_single_byte() {
            for byte in 0x00..=0x7F {
                assert!(
                    validate_utf8(&[byte]).is_ok(),
                    "ASCII byte 0x{:02X} should be valid",
                    byte
                );
            }
        }

        #[test]
        fn multibyte_scripts() {
            for text in ["κόσμε", "中文空白", "정, 병호", "أحبك", "биологическом", "𐌼", "😀"] {
                assert!(is_valid_utf8(text.as_bytes()), "{}", text);
            }
        }

        #[test]
        fn boundary_code_points() {
            assert!(validate_utf8(&[0x00]).is_ok()); // U+0000
            assert!(validate_utf8(&[0xC2, 0x80]).is_ok()); // U+0080
            assert!(validate_utf8(&[0xE0, 0xA0, 0x80]).is_ok()); // U+0800
            assert!(validate_utf8(&[0xF0, 0x90, 0x80, 0x80]).is_ok()); // U+10000

            assert!(validate_utf8(&[0x7F]).is_ok()); // U+007F
            assert!(validate_utf8(&[0xDF, 0xBF]).is_ok()); // U+07FF
            assert!(validate_utf8(&[0xEF, 0xBF, 0xBF]).is_ok()); // U+FFFF
            assert!(validate_utf8(&[0xF4, 0x8F, 0xBF, 0xBF]).is_ok()); // U+10FFFF
        }

        #[test]
        fn around_surrogates() {
            assert!(validate_utf8(&[0xED, 0x9F, 0xBF]).is_ok()); // U+D7FF
            assert!(validate_utf8(&[0xEE, 0x80, 0x80]).is_ok()); // U+E000
        }

        #[test]
        fn byte_order_mark() {
            assert!(validate_utf8(&[0xEF, 0xBB, 0xBF]).is_ok());
        }
    }

    // =========================================================================
    // Invalid Lead Byte Tests
    // =========================================================================

    mod invalid_lead_byte {
        use super::*;

        #[test]
        fn continuation_byte_as_lead() {
            for byte in 0x80..=0xBF {
                let err = validate_utf8(&[byte]).unwrap_err();
                assert_eq!(err.kind, Utf8ErrorKind::InvalidLeadByte);
                assert_eq!(err.offset, 0);
            }
        }

        #[test]
        fn continuation_byte_after_valid() {
            let err = validate_utf8(&[b'A', 0x80]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidLeadByte);
            assert_eq!(err.offset, 1);
        }

        #[test]
        fn fe_ff_bytes() {
            assert_eq!(
                validate_utf8(&[0xFE]).unwrap_err().kind,
                Utf8ErrorKind::InvalidLeadByte
            );
            assert_eq!(
                validate_utf8(&[0xFF]).unwrap_err().kind,
                Utf8ErrorKind::InvalidLeadByte
            );
        }
    }

    // =========================================================================
    // Invalid Continuation Byte Tests
    // =========================================================================

    mod invalid_continuation {
        use super::*;

        #[test]
        fn missing_continuation_2byte() {
            let err = validate_utf8(&[0xC2, b'A']).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidContinuationByte);
            assert_eq!(err.offset, 1);
        }

        #[test]
        fn missing_continuation_3byte_second() {
            let err = validate_utf8(&[0xE0, 0xA0, b'A']).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidContinuationByte);
            assert_eq!(err.offset, 2);
        }

        #[test]
        fn missing_continuation_4byte() {
            assert_eq!(validate_utf8(&[0xF0, b'A', 0x80, 0x80]).unwrap_err().offset, 1);
            assert_eq!(validate_utf8(&[0xF0, 0x90, b'A', 0x80]).unwrap_err().offset, 2);
            assert_eq!(validate_utf8(&[0xF0, 0x90, 0x80, b'A']).unwrap_err().offset, 3);
        }

        #[test]
        fn every_two_byte_input_agrees_with_std() {
            for a in 0..=0xFFu8 {
                for b in 0..=0xFFu8 {
                    let input = [a, b];
                    let ours = validate_utf8(&input);
                    match core::str::from_utf8(&input) {
                        Ok(_) => assert!(ours.is_ok(), "{:02X?}", input),
                        Err(e) => assert!(ours.unwrap_err().offset >= e.valid_up_to()),
                    }
                }
            }
        }

        #[test]
        fn continuation_is_another_lead() {
            let err = validate_utf8(&[0xC2, 0xC2]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidContinuationByte);
        }
    }

    // =========================================================================
    // Overlong, Surrogate and Range Tests
    // =========================================================================

    mod narrowed_ranges {
        use super::*;

        #[test]
        fn overlong_2byte() {
            for lead in [0xC0, 0xC1] {
                for cont in 0x80..=0xBF {
                    let err = validate_utf8(&[lead, cont]).unwrap_err();
                    assert_eq!(err.kind, Utf8ErrorKind::OverlongEncoding);
                }
            }
        }

        #[test]
        fn overlong_3byte() {
            for input in [[0xE0, 0x80, 0x80], [0xE0, 0x81, 0xBF], [0xE0, 0x9F, 0xBF]] {
                let err = validate_utf8(&input).unwrap_err();
                assert_eq!(err.kind, Utf8ErrorKind::OverlongEncoding);
                assert_eq!(err.offset, 0);
            }
        }

        #[test]
        fn overlong_4byte() {
            let err = validate_utf8(&[0xF0, 0x8F, 0xBF, 0xBF]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::OverlongEncoding);
        }

        #[test]
        fn surrogates() {
            for cp in [0xD800u32, 0xDBFF, 0xDC00, 0xDFFF] {
                let bytes = [
                    0xE0 | ((cp >> 12) as u8),
                    0x80 | (((cp >> 6) & 0x3F) as u8),
                    0x80 | ((cp & 0x3F) as u8),
                ];
                let err = validate_utf8(&bytes).unwrap_err();
                assert_eq!(err.kind, Utf8ErrorKind::SurrogateCodepoint, "U+{:04X}", cp);
            }
        }

        #[test]
        fn surrogate_in_middle_of_valid() {
            let mut input = Vec::from(&b"Hello "[..]);
            input.extend_from_slice(&[0xED, 0xA0, 0x80]);
            input.extend_from_slice(b" world");
            let err = validate_utf8(&input).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::SurrogateCodepoint);
            assert_eq!(err.offset, 6);
        }

        #[test]
        fn above_max() {
            let err = validate_utf8(&[0xF4, 0x90, 0x80, 0x80]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::OutOfRangeCodepoint);
            let err = validate_utf8(&[0xF7, 0xBF, 0xBF, 0xBF]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::OutOfRangeCodepoint);
        }

        #[test]
        fn legacy_sequences_are_out_of_range() {
            let err = validate_utf8(&[0xF8, 0xA1, 0xA1, 0xA1, 0xA1]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::OutOfRangeCodepoint);
            let err = validate_utf8(&[0xFC, 0xA1, 0xA1, 0xA1, 0xA1, 0xA1]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::OutOfRangeCodepoint);
        }
    }

    // =========================================================================
    // Truncated Sequence Tests
    // =========================================================================

    mod truncated_sequences {
        use super::*;

        #[test]
        fn truncated_leads() {
            for input in [&[0xC2][..], &[0xE0][..], &[0xE0, 0xA0][..], &[0xF0, 0x90, 0x80][..]] {
                let err = validate_utf8(input).unwrap_err();
                assert_eq!(err.kind, Utf8ErrorKind::TruncatedSequence, "{:02X?}", input);
                assert_eq!(err.offset, 0);
            }
        }

        #[test]
        fn truncated_after_valid() {
            let err = validate_utf8(b"Hello \xC2").unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::TruncatedSequence);
            assert_eq!(err.offset, 6);
        }
    }

    // =========================================================================
    // Error Position Tests
    // =========================================================================

    mod error_positions {
        use super::*;

        #[test]
        fn line_and_column_first_byte() {
            let err = validate_utf8(&[0x80]).unwrap_err();
            assert_eq!((err.offset, err.line, err.column), (0, 1, 1));
        }

        #[test]
        fn line_and_column_second_line() {
            let err = validate_utf8(b"Hello\nWorld\x80").unwrap_err();
            assert_eq!((err.offset, err.line, err.column), (11, 2, 6));
        }

        #[test]
        fn line_and_column_after_multibyte() {
            let mut input = "日本".as_bytes().to_vec();
            input.push(0x80);
            let err = validate_utf8(&input).unwrap_err();
            assert_eq!((err.offset, err.line, err.column), (6, 1, 7));
        }

        #[test]
        fn multiple_newlines() {
            let err = validate_utf8(b"\n\n\n\n\x80").unwrap_err();
            assert_eq!((err.offset, err.line, err.column), (4, 5, 1));
        }

        #[test]
        fn display() {
            let err = validate_utf8(b"ab\xFF").unwrap_err();
            assert_eq!(
                alloc::format!("{}", err),
                "invalid UTF-8 lead byte at byte 2, line 1, column 3"
            );
        }
    }

    // =========================================================================
    // Decode/Encode Tests
    // =========================================================================

    mod decode_encode {
        use super::*;

        #[test]
        fn decode_multibyte() {
            assert_eq!(decode_code_point(&[0xC2, 0x80]), Some((0x80, 2)));
            assert_eq!(decode_code_point("€".as_bytes()), Some((0x20AC, 3)));
            assert_eq!(decode_code_point("🎉".as_bytes()), Some((0x1F389, 4)));
        }

        #[test]
        fn decode_invalid() {
            assert_eq!(decode_code_point(&[0x80]), None);
            assert_eq!(decode_code_point(&[0xC2]), None);
            assert_eq!(decode_code_point(&[0xC2, 0x00]), None);
            assert_eq!(decode_code_point(&[0xF8, 0xA1, 0xA1, 0xA1, 0xA1]), None);
        }

        #[test]
        fn encode_invalid() {
            assert!(encode_code_point(0xDFFF).is_none());
            assert!(encode_code_point(0x110000).is_none());
        }

        #[test]
        fn format_byte_printable() {
            assert_eq!(format_byte(b'('), "0x28 ('(')");
            assert_eq!(format_byte(0xC3), "0xC3");
        }
    }
}
