//! Transliteration of valid text to ASCII.
//!
//! A [`Transliterator`] walks the codepoints of a `&str` and appends, for
//! each one:
//!
//! 1. the codepoint itself when it is ASCII,
//! 2. otherwise the mapping from the active table,
//! 3. otherwise the placeholder.
//!
//! Loose mode uses the built-in [`StaticTable`]. Strict mode routes each
//! codepoint by block ([`strict_route`]): C1 controls, symbols, math and
//! emoji stay on the static table, Han, Hebrew and Arabic get the static romanization in
//! lowercase, and the remaining scripts prefer the `deunicode` backend
//! (behind the `deunicode` feature) with the static table as fallback.
//! Either way every output byte is below 0x80.
//!
//! ```
//! use utf8scrub::text::ascii::to_ascii;
//!
//! assert_eq!(to_ascii("déjà vu"), "deja vu");
//! assert_eq!(to_ascii("中文空白"), "Zhong Wen Kong Bai ");
//! assert_eq!(to_ascii("∀ i ∈ ℕ"), "[?] i [?] N");
//! assert_eq!(to_ascii("😀"), "?");
//! ```

use alloc::string::String;

use super::clean::clean_with;
use super::config::{AsciiOptions, CleanOptions};
use super::translit::{strict_route, Cell, StaticTable, StrictRoute};
pub use super::utf8::is_ascii;
use crate::error::{check_placeholder, Error, Result};

/// A source of ASCII renderings for individual codepoints.
pub trait CharMapper {
    /// Append the ASCII rendering of `c` to `out`.
    ///
    /// `placeholder` is available for mappings that embed it (the bracketed
    /// form). Returns `false` and leaves `out` untouched if `c` is unmapped.
    fn map_char(&self, c: char, out: &mut String, placeholder: &str) -> bool;
}

/// Strict-mode mapper backed by the `deunicode` crate.
///
/// Non-ASCII output from the backend is treated as unmapped.
#[cfg(feature = "deunicode")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeunicodeBackend;

#[cfg(feature = "deunicode")]
impl CharMapper for DeunicodeBackend {
    fn map_char(&self, c: char, out: &mut String, _placeholder: &str) -> bool {
        match deunicode::deunicode_char(c) {
            Some(text) if text.is_ascii() => {
                out.push_str(text);
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Static,
    #[cfg(feature = "deunicode")]
    Deunicode,
}

impl Backend {
    fn strict() -> Option<Self> {
        #[cfg(feature = "deunicode")]
        {
            Some(Self::Deunicode)
        }
        #[cfg(not(feature = "deunicode"))]
        {
            None
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            #[cfg(feature = "deunicode")]
            Self::Deunicode => "deunicode",
        }
    }
}

/// A validated transliteration configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transliterator {
    placeholder: String,
    strict: bool,
    backend: Backend,
}

impl Default for Transliterator {
    /// Loose mode with the `"?"` placeholder.
    fn default() -> Self {
        Self {
            placeholder: String::from("?"),
            strict: false,
            backend: Backend::Static,
        }
    }
}

impl Transliterator {
    /// Validate `options` and pick the backend.
    ///
    /// # Errors
    ///
    /// - [`Error::NonAsciiPlaceholder`] if the placeholder is not ASCII.
    /// - [`Error::StrictBackendUnavailable`] if strict mode is requested with
    ///   `require_strict_backend` and no strict backend is compiled in.
    ///
    /// Without `require_strict_backend`, strict mode quietly uses the static
    /// table when no backend is available.
    pub fn new(options: AsciiOptions) -> Result<Self> {
        check_placeholder(&options.placeholder)?;

        let backend = if options.strict {
            match Backend::strict() {
                Some(backend) => backend,
                None if options.require_strict_backend => {
                    return Err(Error::StrictBackendUnavailable)
                }
                None => {
                    log_debug!("no strict transliteration backend, using the static table");
                    Backend::Static
                }
            }
        } else {
            Backend::Static
        };

        log_debug!(
            strict = options.strict,
            backend = backend.name(),
            "built transliterator"
        );

        Ok(Self {
            placeholder: options.placeholder,
            strict: options.strict,
            backend,
        })
    }

    /// The placeholder emitted for unmapped codepoints.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether strict mode was requested.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Name of the backend in use: `"static"` or `"deunicode"`.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Transliterate valid text.
    pub fn transliterate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii() {
                out.push(c);
            } else if !self.map_non_ascii(c, &mut out) {
                log_trace!(codepoint = c as u32, "no transliteration");
                out.push_str(&self.placeholder);
            }
        }
        out
    }

    fn map_non_ascii(&self, c: char, out: &mut String) -> bool {
        if !self.strict {
            return StaticTable.map_char(c, out, &self.placeholder);
        }
        match strict_route(c) {
            StrictRoute::Table => StaticTable.map_char(c, out, &self.placeholder),
            StrictRoute::LowercaseTable => match StaticTable.cell(c) {
                Some(Cell::Text(text)) => {
                    let start = out.len();
                    out.push_str(text);
                    out[start..].make_ascii_lowercase();
                    true
                }
                _ => false,
            },
            StrictRoute::Backend => self.map_with_backend(c, out),
        }
    }

    fn map_with_backend(&self, c: char, out: &mut String) -> bool {
        match self.backend {
            Backend::Static => StaticTable.map_char(c, out, &self.placeholder),
            #[cfg(feature = "deunicode")]
            Backend::Deunicode => {
                DeunicodeBackend.map_char(c, out, &self.placeholder)
                    || StaticTable.map_char(c, out, &self.placeholder)
            }
        }
    }
}

/// Transliterate with the default placeholder in loose mode.
pub fn to_ascii(text: &str) -> String {
    Transliterator::default().transliterate(text)
}

/// Transliterate with an explicit placeholder and mode.
///
/// ```
/// use utf8scrub::text::ascii::to_ascii_with;
///
/// assert_eq!(to_ascii_with("a😀b", "", false).unwrap(), "ab");
/// assert!(to_ascii_with("x", "\u{FFFD}", false).is_err());
/// ```
pub fn to_ascii_with(text: &str, placeholder: &str, strict: bool) -> Result<String> {
    let options = AsciiOptions::default()
        .with_placeholder(placeholder)
        .with_strict(strict);
    Ok(Transliterator::new(options)?.transliterate(text))
}

/// Clean arbitrary bytes, then transliterate them.
///
/// Invalid bytes, a leading byte-order mark and invisible controls are
/// dropped first ([`CleanOptions::before_transliteration`]).
///
/// ```
/// use utf8scrub::text::ascii::{to_ascii_bytes, Transliterator};
///
/// let translit = Transliterator::default();
/// assert_eq!(to_ascii_bytes(b"tes\xE9ting", &translit), "testing");
/// assert_eq!(to_ascii_bytes(b"a\x00\xC3\xB1\x00c", &translit), "anc");
/// ```
pub fn to_ascii_bytes(input: &[u8], transliterator: &Transliterator) -> String {
    let cleaned = clean_with(input, &CleanOptions::before_transliteration());
    transliterator.transliterate(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Loose Mode
    // =========================================================================

    mod loose {
        use super::*;

        #[test]
        fn ascii_unchanged() {
            assert_eq!(to_ascii(""), "");
            assert_eq!(to_ascii("Hello, world!\n"), "Hello, world!\n");
        }

        #[test]
        fn latin_diacritics() {
            assert_eq!(to_ascii("déjà vu"), "deja vu");
            assert_eq!(to_ascii("testiñg"), "testing");
            assert_eq!(to_ascii("Un été brûlant sur la côte"), "Un ete brulant sur la cote");
        }

        #[test]
        fn unmapped_uses_placeholder() {
            assert_eq!(to_ascii("😀"), "?");
            assert_eq!(to_ascii_with("😀", "<?>", false).unwrap(), "<?>");
        }

        #[test]
        fn bracketed_uses_placeholder() {
            assert_eq!(to_ascii("∀ i ∈ ℕ"), "[?] i [?] N");
            assert_eq!(to_ascii_with("∀", "*", false).unwrap(), "[*]");
        }

        #[test]
        fn empty_mappings() {
            assert_eq!(to_ascii("\u{2764}"), "");
            assert_eq!(to_ascii("\u{FFFD}"), "");
        }

        #[test]
        fn c1_controls() {
            assert_eq!(to_ascii("\u{80}"), "EUR");
            assert_eq!(to_ascii("\u{87}"), "++");
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    mod configuration {
        use super::*;

        #[test]
        fn non_ascii_placeholder_rejected() {
            let err = Transliterator::new(AsciiOptions::default().with_placeholder("¿")).unwrap_err();
            assert!(matches!(err, Error::NonAsciiPlaceholder { offset: 0, .. }));
        }

        #[test]
        fn default_is_loose() {
            let translit = Transliterator::default();
            assert!(!translit.is_strict());
            assert_eq!(translit.placeholder(), "?");
            assert_eq!(translit.backend_name(), "static");
            assert_eq!(Transliterator::new(AsciiOptions::loose()).unwrap(), translit);
        }

        #[cfg(not(feature = "deunicode"))]
        #[test]
        fn strict_without_backend_falls_back() {
            let translit = Transliterator::new(AsciiOptions::strict()).unwrap();
            assert!(translit.is_strict());
            assert_eq!(translit.backend_name(), "static");
            assert_eq!(translit.transliterate("déjà"), "deja");
        }

        #[cfg(not(feature = "deunicode"))]
        #[test]
        fn required_backend_missing() {
            let options = AsciiOptions::strict().with_require_strict_backend(true);
            assert_eq!(Transliterator::new(options).unwrap_err(), Error::StrictBackendUnavailable);
        }

        #[test]
        fn require_without_strict_is_ignored() {
            let options = AsciiOptions::loose().with_require_strict_backend(true);
            assert!(Transliterator::new(options).is_ok());
        }
    }

    // =========================================================================
    // Strict Routing
    // =========================================================================

    mod strict_routing {
        use super::*;

        fn strict() -> Transliterator {
            Transliterator::new(AsciiOptions::strict()).unwrap()
        }

        #[test]
        fn han_lowercased() {
            assert_eq!(strict().transliterate("中文空白"), "zhong wen kong bai ");
            assert_eq!(strict().transliterate("日本"), "ri ben ");
        }

        #[test]
        fn arabic_lowercased() {
            assert_eq!(strict().transliterate("أحبك"), "ahbk");
        }

        #[test]
        fn symbols_keep_brackets() {
            assert_eq!(strict().transliterate("∀ i ∈ ℕ"), "[?] i [?] N");
            let translit =
                Transliterator::new(AsciiOptions::strict().with_placeholder("X")).unwrap();
            assert_eq!(translit.transliterate("∀"), "[X]");
        }

        #[test]
        fn emoji_get_placeholder() {
            assert_eq!(strict().transliterate("😀"), "?");
            assert_eq!(strict().transliterate("a👍b"), "a?b");
        }

        #[test]
        fn c1_controls_as_windows_1252() {
            assert_eq!(strict().transliterate("- \u{87}"), "- ++");
            assert_eq!(strict().transliterate("\u{80}"), "EUR");
        }

        #[test]
        fn loose_mode_keeps_case() {
            assert_eq!(to_ascii("中文 أحبك"), "Zhong Wen  aHbk");
        }
    }

    // =========================================================================
    // Strict Mode
    // =========================================================================

    #[cfg(feature = "deunicode")]
    mod strict {
        use super::*;

        fn strict() -> Transliterator {
            Transliterator::new(AsciiOptions::strict().with_require_strict_backend(true)).unwrap()
        }

        #[test]
        fn uses_deunicode() {
            assert_eq!(strict().backend_name(), "deunicode");
            assert_eq!(strict().transliterate("Æneid"), "AEneid");
        }

        #[test]
        fn other_scripts_use_backend() {
            assert_eq!(strict().transliterate("déjà σσς iıii"), "deja sss iiii");
            assert_eq!(strict().transliterate("биологическом"), "biologicheskom");
            assert_eq!(strict().transliterate("정, 병호"), "jeong, byeongho");
        }

        #[test]
        fn output_is_ascii() {
            let text = "👍 💩 😄 ❤ 中文 ∀ ℕ 정 أحبك \u{E000}";
            assert!(strict().transliterate(text).is_ascii());
        }
    }

    // =========================================================================
    // Byte Input
    // =========================================================================

    mod bytes {
        use super::*;

        #[test]
        fn invalid_bytes_dropped_before_mapping() {
            let translit = Transliterator::default();
            assert_eq!(to_ascii_bytes(b"tes\xE9ting", &translit), "testing");
            let mut input = b"test\x80-\xBF".to_vec();
            input.extend_from_slice("öäü".as_bytes());
            assert_eq!(to_ascii_bytes(&input, &translit), "test-oau");
        }

        #[test]
        fn controls_dropped() {
            let input = "a\u{0}ñ\u{0}c".as_bytes();
            assert_eq!(to_ascii_bytes(input, &Transliterator::default()), "anc");
        }

        #[test]
        fn is_ascii_bytes() {
            assert!(is_ascii(b"abc"));
            assert!(is_ascii(b""));
            assert!(!is_ascii("é".as_bytes()));
        }
    }
}
