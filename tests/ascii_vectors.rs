//! Literal transliteration vectors.

use utf8scrub::{
    to_ascii, to_ascii_bytes, to_ascii_with, AsciiOptions, Error, Transliterator,
};

// ============================================================================
// Loose mode
// ============================================================================

#[test]
fn test_latin() {
    assert_eq!(to_ascii("déjà vu"), "deja vu");
    assert_eq!(to_ascii("testiñg"), "testing");
    assert_eq!(to_ascii("Ɓtest"), "Btest");
    assert_eq!(to_ascii("déjà σσς iıii"), "deja sss iiii");
    assert_eq!(to_ascii("\u{2019}"), "'");
}

#[test]
fn test_cp1252_controls() {
    assert_eq!(to_ascii("\u{80}"), "EUR");
    assert_eq!(to_ascii("\u{87}"), "++");
}

#[test]
fn test_greek() {
    assert_eq!(to_ascii("κόσμε"), "kosme");
    assert_eq!(to_ascii("Αυτή είναι μια δοκιμή"), "Aute einai mia dokime");
}

#[test]
fn test_cyrillic() {
    assert_eq!(to_ascii("биологическом"), "biologicheskom");
}

#[test]
fn test_arabic() {
    assert_eq!(to_ascii("أحبك"), "aHbk");
    assert_eq!(to_ascii("أبز"), "abz");
}

#[test]
fn test_kana() {
    assert_eq!(to_ascii("キャンパス"), "kiyanpasu");
    assert_eq!(to_ascii("ますだ, よしひこ"), "masuda, yosihiko");
}

#[test]
fn test_hangul() {
    assert_eq!(to_ascii("정, 병호"), "jeong, byeongho");
}

#[test]
fn test_devanagari() {
    assert_eq!(to_ascii("मोनिच"), "monic");
    assert_eq!(to_ascii("क्षȸ"), "kssdb");
}

#[test]
fn test_han() {
    assert_eq!(to_ascii("中文空白"), "Zhong Wen Kong Bai ");
    assert_eq!(to_ascii("  -ABC-中文空白-  "), "  -ABC-Zhong Wen Kong Bai -  ");
}

#[test]
fn test_han_beyond_common_characters() {
    assert_eq!(to_ascii("猫と龍"), "Mao toLong ");
    assert_eq!(to_ascii("鬱"), "Yu ");
}

#[test]
fn test_is_ascii_reexported() {
    assert!(utf8scrub::is_ascii(b"plain"));
    assert!(!utf8scrub::text::ascii::is_ascii("é".as_bytes()));
}

#[test]
fn test_symbols() {
    assert_eq!(to_ascii("∀ i ∈ ℕ"), "[?] i [?] N");
    assert_eq!(to_ascii("€"), "EUR");
    assert_eq!(to_ascii("a ≠ b"), "a != b");
}

#[test]
fn test_emoji_use_placeholder() {
    assert_eq!(to_ascii("😀"), "?");
    assert_eq!(to_ascii("👍 💩 😄 ❤ 👍 💩 😄 ❤أحبك"), "? ? ?  ? ? ? aHbk");
}

#[test]
fn test_empty() {
    assert_eq!(to_ascii(""), "");
    assert_eq!(to_ascii_bytes(b"", &Transliterator::default()), "");
}

// ============================================================================
// Placeholders and configuration
// ============================================================================

#[test]
fn test_custom_placeholder() {
    assert_eq!(to_ascii_with("😀 ∀", "*", false).unwrap(), "* [*]");
    assert_eq!(to_ascii_with("😀x", "", false).unwrap(), "x");
    assert_eq!(to_ascii_with("😀", "(unknown)", false).unwrap(), "(unknown)");
}

#[test]
fn test_non_ascii_placeholder_rejected() {
    assert!(matches!(
        to_ascii_with("abc", "é", false),
        Err(Error::NonAsciiPlaceholder { .. })
    ));
    assert!(Transliterator::new(AsciiOptions::default().with_placeholder("\u{FFFD}")).is_err());
}

#[test]
fn test_strict_mode_always_ascii() {
    let text = "déjà vu 中文空白 ∀ i ∈ ℕ 😀 정 أحبك биологическом";
    let out = to_ascii_with(text, "?", true).unwrap();
    assert!(out.is_ascii(), "{:?}", out);
    assert!(out.starts_with("deja vu zhong wen kong bai  [?] i [?] N ? "), "{:?}", out);
}

#[test]
fn test_strict_lowercases_han_and_arabic() {
    assert_eq!(to_ascii_with("中文空白", "?", true).unwrap(), "zhong wen kong bai ");
    assert_eq!(
        to_ascii_with("  -ABC-中文空白-  ", "?", true).unwrap(),
        "  -ABC-zhong wen kong bai -  "
    );
    assert_eq!(to_ascii_with("أحبك", "?", true).unwrap(), "ahbk");
}

// ============================================================================
// Strict mode with the deunicode backend
// ============================================================================

#[cfg(feature = "deunicode")]
fn strict(text: &str) -> String {
    Transliterator::new(AsciiOptions::strict().with_require_strict_backend(true))
        .unwrap()
        .transliterate(text)
}

#[cfg(feature = "deunicode")]
#[test]
fn test_strict_symbols_and_emoji() {
    assert_eq!(strict("∀ i ∈ ℕ"), "[?] i [?] N");
    assert_eq!(strict("😀"), "?");
    assert_eq!(strict("أحبك 😀"), "ahbk ?");
    assert_eq!(strict("👍 💩 😄 ❤ 👍 💩 😄 ❤أحبك"), "? ? ?  ? ? ? ahbk");
}

#[cfg(feature = "deunicode")]
#[test]
fn test_strict_scripts() {
    assert_eq!(strict("中文空白"), "zhong wen kong bai ");
    assert_eq!(strict("Ɓtest"), "Btest");
    assert_eq!(strict("\u{2019}"), "'");
    assert_eq!(strict("déjà σσς iıii"), "deja sss iiii");
    assert_eq!(strict("Αυτή είναι μια δοκιμή"), "Aute einai mia dokime");
    assert_eq!(strict("      - abc- \u{87}"), "      - abc- ++");
    assert_eq!(
        strict("5.99€ 日一国会人年大十 $5.99"),
        "5.99EUR ri yi guo hui ren nian da shi  $5.99"
    );
}

#[cfg(feature = "deunicode")]
#[test]
fn test_strict_backend_available() {
    let translit =
        Transliterator::new(AsciiOptions::strict().with_require_strict_backend(true)).unwrap();
    assert_eq!(translit.backend_name(), "deunicode");
}

#[cfg(not(feature = "deunicode"))]
#[test]
fn test_strict_backend_required_but_missing() {
    let options = AsciiOptions::strict().with_require_strict_backend(true);
    assert_eq!(
        Transliterator::new(options).unwrap_err(),
        Error::StrictBackendUnavailable
    );
}

// ============================================================================
// Untrusted bytes
// ============================================================================

#[test]
fn test_bytes_cleaned_first() {
    let translit = Transliterator::default();
    assert_eq!(to_ascii_bytes(b"tes\xE9ting", &translit), "testing");
    assert_eq!(to_ascii_bytes("a\u{0}ñ\u{0}c".as_bytes(), &translit), "anc");
    assert_eq!(to_ascii_bytes(b"\xEF\xBB\xBFcaf\xC3\xA9", &translit), "cafe");
}

// ============================================================================
// Snapshot
// ============================================================================

#[test]
fn test_multi_script_paragraph() {
    let paragraph =
        "Café «naïve» — 日本語 κόσμε, биологическом; 정, 병호 أحبك ∀x ≠ 😀 €5";
    insta::assert_snapshot!(
        to_ascii(paragraph),
        @"Cafe <<naive>> -- Ri Ben Yu  kosme, biologicheskom; jeong, byeongho aHbk [?]x != ? EUR5"
    );
}
