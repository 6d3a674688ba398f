//! Property tests for the decoder, cleanup and transliteration.

use proptest::prelude::*;
use utf8scrub::{
    clean, clean_with, decode, is_valid_utf8, to_ascii, to_ascii_bytes, validate_utf8,
    CleanOptions, Transliterator,
};

/// Valid text interleaved with malformed byte runs.
fn arb_dirty_bytes() -> impl Strategy<Value = Vec<u8>> {
    let piece = prop_oneof![
        3 => any::<char>().prop_map(|c| c.to_string().into_bytes()),
        1 => prop::collection::vec(0x80u8..=0xFF, 1..6),
        1 => Just(vec![0xF8, 0xA1, 0xA1, 0xA1, 0xA1]),
        1 => Just("\u{FEFF}".as_bytes().to_vec()),
        1 => Just("\u{3000}".as_bytes().to_vec()),
    ];
    prop::collection::vec(piece, 0..48).prop_map(|pieces| pieces.concat())
}

fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![prop::collection::vec(any::<u8>(), 0..256), arb_dirty_bytes()]
}

fn arb_clean_options() -> impl Strategy<Value = CleanOptions> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![Just('\u{FFFD}'), Just('?'), Just(' ')],
    )
        .prop_map(
            |(whitespace, bom, replace, invisible, msword, nbsp, replacement)| {
                CleanOptions::default()
                    .with_normalize_whitespace(whitespace)
                    .with_strip_bom(bom)
                    .with_replace_invalid(replace)
                    .with_remove_invisible(invisible)
                    .with_normalize_msword(msword)
                    .with_keep_nbsp(nbsp)
                    .with_replacement(replacement)
            },
        )
}

proptest! {
    #[test]
    fn prop_clean_is_idempotent(input in arb_bytes(), ws in any::<bool>(), bom in any::<bool>()) {
        let once = clean(&input, ws, bom);
        let twice = clean(once.as_bytes(), ws, bom);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_clean_with_is_idempotent(input in arb_bytes(), options in arb_clean_options()) {
        let once = clean_with(&input, &options);
        prop_assert_eq!(clean_with(once.as_bytes(), &options), once);
    }

    #[test]
    fn prop_clean_output_is_valid(input in arb_bytes(), options in arb_clean_options()) {
        let out = clean_with(&input, &options);
        prop_assert!(is_valid_utf8(out.as_bytes()));
    }

    #[test]
    fn prop_valid_text_round_trips(text in any::<String>()) {
        prop_assert_eq!(clean(text.as_bytes(), false, false), text);
    }

    #[test]
    fn prop_validity_agrees_with_std(input in arb_bytes()) {
        let ours = validate_utf8(&input);
        match core::str::from_utf8(&input) {
            Ok(_) => prop_assert!(ours.is_ok()),
            Err(e) => {
                let err = ours.unwrap_err();
                // The first bad unit starts where std stops
                let first_bad = decode(&input).find(|u| !u.is_valid()).unwrap();
                prop_assert_eq!(first_bad.offset, e.valid_up_to());
                prop_assert!(err.offset >= e.valid_up_to());
            }
        }
        prop_assert_eq!(is_valid_utf8(&input), core::str::from_utf8(&input).is_ok());
    }

    #[test]
    fn prop_units_tile_input(input in arb_bytes()) {
        let mut expected = 0;
        for unit in decode(&input) {
            prop_assert_eq!(unit.offset, expected);
            prop_assert!((1..=6).contains(&unit.len));
            expected = unit.end();
        }
        prop_assert_eq!(expected, input.len());
    }

    #[test]
    fn prop_valid_units_match_chars(text in any::<String>()) {
        let decoded: Vec<char> = decode(text.as_bytes())
            .map(|u| u.unit.as_char().unwrap())
            .collect();
        let expected: Vec<char> = text.chars().collect();
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn prop_to_ascii_closure(text in any::<String>()) {
        prop_assert!(to_ascii(&text).is_ascii());
    }

    #[test]
    fn prop_to_ascii_idempotent(text in any::<String>()) {
        let once = to_ascii(&text);
        prop_assert_eq!(to_ascii(&once), once);
    }

    #[test]
    fn prop_to_ascii_bytes_closure(input in arb_bytes()) {
        let out = to_ascii_bytes(&input, &Transliterator::default());
        prop_assert!(out.is_ascii());
    }
}
