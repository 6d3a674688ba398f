//! Literal byte vectors for validation and cleanup.

use utf8scrub::text::utf8::Utf8ErrorKind;
use utf8scrub::{
    clean, clean_with, clean_with_report, decode, is_valid_utf8, validate_utf8,
    whitespace_codepoints, CleanOptions, CleanReport, Unit,
};

const FFFD: &str = "\u{FFFD}";

// ============================================================================
// Lead replacement vs orphan drop
// ============================================================================

#[test]
fn test_bad_lead_replaced_next_byte_kept() {
    assert_eq!(clean(&[0xC3, 0x28], false, false), "\u{FFFD}(");
}

#[test]
fn test_orphans_dropped() {
    assert_eq!(clean(&[0xA0, 0xA1], false, false), "");
    assert_eq!(clean(&[b'a', 0x80, 0xBF, b'b'], false, false), "ab");
}

#[test]
fn test_valid_four_byte_unchanged() {
    let input = [0xF0, 0x90, 0x8C, 0xBC];
    assert_eq!(clean(&input, false, false).as_bytes(), &input);
}

#[test]
fn test_legacy_five_byte_single_replacement() {
    assert_eq!(clean(&[0xF8, 0xA1, 0xA1, 0xA1, 0xA1], false, false), FFFD);
    assert_eq!(clean(&[0xF5, 0x80, 0x80, 0x80, 0x80], false, false), FFFD);
}

#[test]
fn test_legacy_six_byte_single_replacement() {
    assert_eq!(clean(&[0xFC, 0x84, 0x80, 0x80, 0x80, 0x80], false, false), FFFD);
}

#[test]
fn test_truncated_legacy_falls_back() {
    // Lead replaced, stray continuations dropped
    assert_eq!(clean(&[0xF8, 0xA1, 0xA1], false, false), FFFD);
}

#[test]
fn test_truncated_sequences() {
    assert_eq!(clean(&[0xE2, 0x82], false, false), FFFD);
    assert_eq!(clean(&[0xF0, 0x9F, 0x98], false, false), FFFD);
    assert_eq!(clean(b"abc\xC3", false, false), "abc\u{FFFD}");
}

#[test]
fn test_overlong_surrogate_and_out_of_range() {
    assert_eq!(clean(&[0xC0, 0xAF], false, false), FFFD);
    assert_eq!(clean(&[0xE0, 0x80, 0xAF], false, false), FFFD);
    assert_eq!(clean(&[0xED, 0xA0, 0x80], false, false), FFFD);
    assert_eq!(clean(&[0xF4, 0x90, 0x80, 0x80], false, false), FFFD);
}

#[test]
fn test_forbidden_bytes_each_replaced() {
    assert_eq!(clean(&[0xFE, 0xFF], false, false), "\u{FFFD}\u{FFFD}");
}

#[test]
fn test_empty_input() {
    assert_eq!(clean(b"", false, false), "");
    assert_eq!(clean(b"", true, true), "");
    assert!(is_valid_utf8(b""));
    assert_eq!(decode(b"").count(), 0);
}

// ============================================================================
// Whitespace and byte-order marks
// ============================================================================

#[test]
fn test_every_whitespace_codepoint_normalizes() {
    for w in whitespace_codepoints() {
        let mut buf = [0u8; 4];
        let input = w.encode_utf8(&mut buf).as_bytes();
        assert_eq!(clean(input, true, false), " ", "U+{:04X}", w as u32);
    }
}

#[test]
fn test_whitespace_left_alone_by_default() {
    let input = "a\u{3000}b\u{00A0}c";
    assert_eq!(clean(input.as_bytes(), false, false), input);
}

#[test]
fn test_repair_then_whitespace() {
    let mut input = b"\xC3\x28".to_vec();
    input.extend_from_slice("\u{2003}x".as_bytes());
    assert_eq!(clean(&input, true, false), "\u{FFFD}( x");
}

#[test]
fn test_leading_bom_stripped() {
    assert_eq!(clean(b"\xEF\xBB\xBFabc", false, true), "abc");
    assert_eq!(clean(b"\xEF\xBB\xBFabc", false, false), "\u{FEFF}abc");
}

#[test]
fn test_inner_bom_kept() {
    assert_eq!(clean("a\u{FEFF}b".as_bytes(), false, true), "a\u{FEFF}b");
}

#[test]
fn test_repeated_leading_bom_stripped() {
    assert_eq!(clean(b"\xEF\xBB\xBF\xEF\xBB\xBFx", false, true), "x");
}

// ============================================================================
// Extended options
// ============================================================================

#[test]
fn test_drop_mode() {
    let options = CleanOptions::default().with_replace_invalid(false);
    assert_eq!(clean_with(b"tes\xE9ting", &options), "testing");
    assert_eq!(clean_with(&[0xF8, 0xA1, 0xA1, 0xA1, 0xA1], &options), "");
    assert_eq!(clean_with(&[0xC3, 0x28], &options), "(");
}

#[test]
fn test_custom_replacement() {
    let options = CleanOptions::default().with_replacement('?');
    assert_eq!(clean_with(&[b'a', 0xFF, b'b'], &options), "a?b");
}

#[test]
fn test_msword_punctuation() {
    let options = CleanOptions::default().with_normalize_msword(true);
    let input = "\u{201C}Hello\u{201D} \u{2013} \u{2018}world\u{2019}\u{2026} «ok»";
    assert_eq!(clean_with(input.as_bytes(), &options), "\"Hello\" - 'world'... \"ok\"");
}

#[test]
fn test_remove_invisible_keeps_tab_and_newlines() {
    let options = CleanOptions::default().with_remove_invisible(true);
    assert_eq!(clean_with(b"a\x00b\x7Fc\td\r\n\x1B", &options), "abc\td\r\n");
}

#[test]
fn test_keep_nbsp() {
    let options = CleanOptions::default()
        .with_normalize_whitespace(true)
        .with_keep_nbsp(true);
    let input = "a\u{00A0}b\u{2003}c";
    assert_eq!(clean_with(input.as_bytes(), &options), "a\u{00A0}b c");
}

#[test]
fn test_report_counts() {
    let options = CleanOptions::default()
        .with_normalize_whitespace(true)
        .with_strip_bom(true);
    let mut input = b"\xEF\xBB\xBFa\xC3\x28\xA0 ".to_vec();
    input.extend_from_slice("\u{2003}".as_bytes());

    let (text, report) = clean_with_report(&input, &options);
    assert_eq!(text, "a\u{FFFD}(  ");
    assert_eq!(
        report,
        CleanReport {
            replaced: 1,
            dropped: 1,
            bom_stripped: 1,
            whitespace_normalized: 1,
            ..CleanReport::default()
        }
    );
    assert!(report.changed());
}

#[test]
fn test_report_unchanged_for_valid_input() {
    let (text, report) = clean_with_report("héllo wörld".as_bytes(), &CleanOptions::default());
    assert_eq!(text, "héllo wörld");
    assert!(!report.changed());
}

// ============================================================================
// Decoder and validator
// ============================================================================

#[test]
fn test_decoder_resyncs_after_bad_lead() {
    let units: Vec<(usize, u8)> = decode(&[0xC3, 0x28]).map(|u| (u.offset, u.len)).collect();
    assert_eq!(units, vec![(0, 1), (1, 1)]);
}

#[test]
fn test_decoder_consumes_legacy_whole() {
    let units: Vec<_> = decode(&[0xF8, 0xA1, 0xA1, 0xA1, 0xA1, b'x']).collect();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].len, 5);
    assert!(matches!(units[0].unit, Unit::Legacy(_)));
    assert_eq!(units[1].unit, Unit::Scalar('x'));
}

#[test]
fn test_validator_reports_first_error() {
    let err = validate_utf8(b"ok\n\xE2\x82").unwrap_err();
    assert_eq!(err.kind, Utf8ErrorKind::TruncatedSequence);
    assert_eq!((err.offset, err.line, err.column), (3, 2, 1));

    let err = validate_utf8(&[0xED, 0xA0, 0x80]).unwrap_err();
    assert_eq!(err.kind, Utf8ErrorKind::SurrogateCodepoint);

    let err = validate_utf8(&[0xF8, 0xA1, 0xA1, 0xA1, 0xA1]).unwrap_err();
    assert_eq!(err.kind, Utf8ErrorKind::OutOfRangeCodepoint);
}

#[test]
fn test_is_valid_matches_std_on_vectors() {
    let vectors: [&[u8]; 10] = [
        b"",
        b"plain",
        "日本語".as_bytes(),
        &[0xC3, 0x28],
        &[0xA0, 0xA1],
        &[0xF0, 0x90, 0x8C, 0xBC],
        &[0xF8, 0xA1, 0xA1, 0xA1, 0xA1],
        &[0xED, 0x9F, 0xBF],
        &[0xED, 0xA0, 0x80],
        &[0xF4, 0x8F, 0xBF, 0xBF],
    ];
    for v in vectors {
        assert_eq!(is_valid_utf8(v), core::str::from_utf8(v).is_ok(), "{:02X?}", v);
    }
}
