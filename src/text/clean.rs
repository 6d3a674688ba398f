//! Repair of arbitrary bytes into valid UTF-8.
//!
//! The cleanup engine folds the [`Decoder`](super::utf8::Decoder) units into a
//! `String` in a single left-to-right pass:
//!
//! - Scalars pass through unchanged.
//! - A lead byte that failed continuation validation, and a whole legacy
//!   5/6-byte sequence, become one replacement character.
//! - Orphan continuation bytes are dropped.
//!
//! The optional steps of [`CleanOptions`] are applied to each resulting
//! character in the order BOM removal, invisible control removal, whitespace
//! normalization, typographic punctuation normalization.
//!
//! ```
//! use utf8scrub::text::clean::clean;
//!
//! assert_eq!(clean(&[0xC3, 0x28], false, false), "\u{FFFD}(");
//! assert_eq!(clean(&[0xA0, 0xA1], false, false), "");
//! assert_eq!(clean("a\u{3000}b".as_bytes(), true, false), "a b");
//! ```

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::config::CleanOptions;
use super::utf8::{decode, Unit};
use super::whitespace::{is_invisible_control, is_whitespace};

/// The byte-order mark codepoint.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Counts of what a cleanup pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CleanReport {
    /// Invalid sequences replaced by the replacement character.
    pub replaced: usize,
    /// Invalid bytes or sequences dropped.
    pub dropped: usize,
    /// Leading byte-order marks removed.
    pub bom_stripped: usize,
    /// Invisible controls removed.
    pub invisible_removed: usize,
    /// Whitespace codepoints rewritten to `' '`.
    pub whitespace_normalized: usize,
    /// Typographic punctuation rewritten to ASCII.
    pub msword_normalized: usize,
}

impl CleanReport {
    /// Whether the output differs from the input.
    pub fn changed(&self) -> bool {
        *self != Self::default()
    }
}

/// Repair `input` into valid UTF-8.
///
/// Shorthand for [`clean_with`] with only the two named options set.
pub fn clean(input: &[u8], normalize_whitespace: bool, strip_bom: bool) -> String {
    let options = CleanOptions::default()
        .with_normalize_whitespace(normalize_whitespace)
        .with_strip_bom(strip_bom);
    clean_with(input, &options)
}

/// Repair `input` into valid UTF-8 using `options`.
pub fn clean_with(input: &[u8], options: &CleanOptions) -> String {
    clean_with_report(input, options).0
}

/// Repair `input` and report what was changed.
pub fn clean_with_report(input: &[u8], options: &CleanOptions) -> (String, CleanReport) {
    let mut out = String::with_capacity(input.len());
    let mut report = CleanReport::default();

    for decoded in decode(input) {
        let c = match decoded.unit {
            Unit::Scalar(c) => c,
            Unit::Invalid(kind) if !kind.is_lead() => {
                report.dropped += 1;
                continue;
            }
            Unit::Invalid(_) | Unit::Legacy(_) => {
                if !options.replace_invalid {
                    report.dropped += 1;
                    continue;
                }
                report.replaced += 1;
                options.replacement
            }
        };
        push_char(&mut out, c, options, &mut report);
    }

    if report.changed() {
        log_debug!(
            input_len = input.len(),
            output_len = out.len(),
            replaced = report.replaced,
            dropped = report.dropped,
            "cleaned input"
        );
    }

    (out, report)
}

/// Apply the per-character steps and append the result.
#[inline]
fn push_char(out: &mut String, c: char, options: &CleanOptions, report: &mut CleanReport) {
    if options.strip_bom && c == BYTE_ORDER_MARK && out.is_empty() {
        report.bom_stripped += 1;
        return;
    }
    if options.remove_invisible && is_invisible_control(c) {
        report.invisible_removed += 1;
        return;
    }
    if options.normalize_whitespace
        && c != ' '
        && is_whitespace(c)
        && !(options.keep_nbsp && c == '\u{A0}')
    {
        report.whitespace_normalized += 1;
        out.push(' ');
        return;
    }
    if options.normalize_msword {
        if let Some(ascii) = msword_replacement(c) {
            report.msword_normalized += 1;
            out.push_str(ascii);
            return;
        }
    }
    out.push(c);
}

/// ASCII stand-ins for typographic punctuation.
fn msword_replacement(c: char) -> Option<&'static str> {
    match c {
        '\u{AB}' | '\u{BB}' | '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => Some("\""),
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2039}' | '\u{203A}' => Some("'"),
        '\u{2013}' | '\u{2014}' => Some("-"),
        '\u{2026}' => Some("..."),
        _ => None,
    }
}

/// Remove leading byte-order marks from already valid text.
pub fn strip_bom(text: &str) -> &str {
    text.trim_start_matches(BYTE_ORDER_MARK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::whitespace::whitespace_codepoints;

    fn repair(input: &[u8]) -> String {
        clean(input, false, false)
    }

    fn drop_invalid(input: &[u8]) -> String {
        clean_with(input, &CleanOptions::default().with_replace_invalid(false))
    }

    mod repair_policy {
        use super::*;

        #[test]
        fn valid_text_unchanged() {
            assert_eq!(repair("κόσμε".as_bytes()), "κόσμε");
            assert_eq!(repair(b"a"), "a");
            assert_eq!(repair(b"\xc3\xb1"), "ñ");
            assert_eq!(repair(b"\xe2\x82\xa1"), "₡");
            assert_eq!(repair(b"\xf0\x90\x8c\xbc"), "𐌼");
        }

        #[test]
        fn empty_input() {
            assert_eq!(repair(b""), "");
            assert_eq!(clean(b"", true, true), "");
        }

        #[test]
        fn orphans_dropped() {
            assert_eq!(repair(b"\xa0\xa1"), "");
            assert_eq!(repair(b"a\xa0\xa1-\xc3\xb6"), "a-ö");
            let mut input = "κόσμε".as_bytes().to_vec();
            input.extend_from_slice(b"\xa0\xa1-");
            assert_eq!(repair(&input), "κόσμε-");
        }

        #[test]
        fn lead_failures_replaced() {
            assert_eq!(repair(b"\xc3\x28"), "\u{FFFD}(");
            assert_eq!(repair(b"\xe2\x28\xa1"), "\u{FFFD}(");
            assert_eq!(repair(b"\xe2\x82\x28"), "\u{FFFD}(");
            assert_eq!(repair(b"\xf0\x28\x8c\xbc"), "\u{FFFD}(");
            assert_eq!(repair(b"\xf0\x90\x28\xbc"), "\u{FFFD}(");
            assert_eq!(repair(b"\xf0\x28\x8c\x28"), "\u{FFFD}((");
        }

        #[test]
        fn overlong_and_forbidden_leads_replaced() {
            assert_eq!(repair(b"\xc0\xaf"), "\u{FFFD}");
            assert_eq!(repair(b"x\xfey\xff"), "x\u{FFFD}y\u{FFFD}");
            assert_eq!(repair(b"\xed\xa0\x80"), "\u{FFFD}");
        }

        #[test]
        fn legacy_sequences_replaced_once() {
            assert_eq!(repair(b"\xf8\xa1\xa1\xa1\xa1"), "\u{FFFD}");
            assert_eq!(repair(b"\xfc\xa1\xa1\xa1\xa1\xa1"), "\u{FFFD}");
        }

        #[test]
        fn truncated_sequence_at_end() {
            assert_eq!(repair(b"abc\xe2\x82"), "abc\u{FFFD}");
        }

        #[test]
        fn custom_replacement() {
            let opts = CleanOptions::default().with_replacement('?');
            assert_eq!(clean_with(b"\xc3\x28", &opts), "?(");
        }
    }

    mod drop_policy {
        use super::*;

        #[test]
        fn lead_failures_dropped() {
            assert_eq!(drop_invalid(b"\xc3\x28"), "(");
            assert_eq!(drop_invalid(b"\xe2\x28\xa1"), "(");
            assert_eq!(drop_invalid(b"\xe2\x82\x28"), "(");
            assert_eq!(drop_invalid(b"\xf0\x28\x8c\xbc"), "(");
            assert_eq!(drop_invalid(b"\xf0\x90\x28\xbc"), "(");
            assert_eq!(drop_invalid(b"\xf0\x28\x8c\x28"), "((");
        }

        #[test]
        fn legacy_sequences_dropped() {
            assert_eq!(drop_invalid(b"\xf8\xa1\xa1\xa1\xa1"), "");
            assert_eq!(drop_invalid(b"\xfc\xa1\xa1\xa1\xa1\xa1"), "");
        }

        #[test]
        fn valid_text_unchanged() {
            assert_eq!(drop_invalid("ñ₡𐌼".as_bytes()), "ñ₡𐌼");
        }
    }

    mod optional_steps {
        use super::*;

        #[test]
        fn every_whitespace_codepoint_normalized() {
            for w in whitespace_codepoints() {
                let mut buf = [0u8; 4];
                let input = w.encode_utf8(&mut buf).as_bytes();
                assert_eq!(clean(input, true, false), " ", "U+{:04X}", w as u32);
            }
        }

        #[test]
        fn whitespace_untouched_when_disabled() {
            assert_eq!(repair("a\u{2003}b".as_bytes()), "a\u{2003}b");
        }

        #[test]
        fn keep_nbsp() {
            let opts = CleanOptions::default()
                .with_normalize_whitespace(true)
                .with_keep_nbsp(true);
            assert_eq!(clean_with("a\u{A0}b\u{3000}c".as_bytes(), &opts), "a\u{A0}b c");
        }

        #[test]
        fn bom_stripped_only_at_start() {
            assert_eq!(clean(b"\xef\xbb\xbfabc", false, true), "abc");
            assert_eq!(clean(b"\xef\xbb\xbfabc", false, false), "\u{FEFF}abc");
            assert_eq!(clean(b"a\xef\xbb\xbfb", false, true), "a\u{FEFF}b");
        }

        #[test]
        fn repeated_and_uncovered_boms_stripped() {
            assert_eq!(clean(b"\xef\xbb\xbf\xef\xbb\xbfx", false, true), "x");
            assert_eq!(clean(b"\x80\xef\xbb\xbfx", false, true), "x");
        }

        #[test]
        fn repair_then_whitespace() {
            assert_eq!(clean(b"\xc3\x28\xe3\x80\x80\xa0", true, false), "\u{FFFD}( ");
        }

        #[test]
        fn invisible_controls_removed() {
            let opts = CleanOptions::default().with_remove_invisible(true);
            assert_eq!(clean_with(b"a\x00b\x07c\td\ne\x7f", &opts), "abc\td\ne");
        }

        #[test]
        fn msword_punctuation() {
            let opts = CleanOptions::default().with_normalize_msword(true);
            let input = "\u{201C}quoted\u{201D} \u{2018}it\u{2019}s\u{2019} a \u{2013} b\u{2026}";
            assert_eq!(clean_with(input.as_bytes(), &opts), "\"quoted\" 'it's' a - b...");
        }

        #[test]
        fn before_transliteration_profile() {
            let opts = CleanOptions::before_transliteration();
            assert_eq!(clean_with(b"\xef\xbb\xbftes\xe9ting\x00!", &opts), "testing!");
        }

        #[test]
        fn strip_bom_on_text() {
            assert_eq!(strip_bom("\u{FEFF}\u{FEFF}abc"), "abc");
            assert_eq!(strip_bom("abc"), "abc");
        }
    }

    mod reports {
        use super::*;

        #[test]
        fn counts() {
            let opts = CleanOptions::default()
                .with_normalize_whitespace(true)
                .with_strip_bom(true);
            let (out, report) =
                clean_with_report(b"\xef\xbb\xbf\xc3\x28\xa0\xa1\xe2\x80\x83x", &opts);
            assert_eq!(out, "\u{FFFD}( x");
            assert_eq!(
                report,
                CleanReport {
                    replaced: 1,
                    dropped: 2,
                    bom_stripped: 1,
                    invisible_removed: 0,
                    whitespace_normalized: 1,
                    msword_normalized: 0,
                }
            );
            assert!(report.changed());
        }

        #[test]
        fn clean_input_reports_nothing() {
            let (out, report) = clean_with_report("déjà vu".as_bytes(), &CleanOptions::default());
            assert_eq!(out, "déjà vu");
            assert!(!report.changed());
        }
    }
}
