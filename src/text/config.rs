//! Configuration for cleanup and transliteration.

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The Unicode replacement character, U+FFFD.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Options for [`clean_with`](super::clean::clean_with).
///
/// The default repairs invalid bytes and changes nothing else, so already
/// valid input passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CleanOptions {
    /// Rewrite every whitespace table codepoint to `' '` (default: false)
    pub normalize_whitespace: bool,
    /// Drop byte-order marks at the start of the output (default: false)
    pub strip_bom: bool,
    /// Replace lead-byte failures and legacy sequences rather than dropping
    /// them (default: true). Orphan continuation bytes are always dropped.
    pub replace_invalid: bool,
    /// Character substituted for invalid sequences (default: U+FFFD)
    pub replacement: char,
    /// Drop C0 controls other than TAB, LF and CR, and DEL (default: false)
    pub remove_invisible: bool,
    /// Rewrite typographic quotes, dashes and ellipses to ASCII (default: false)
    pub normalize_msword: bool,
    /// Leave U+00A0 alone when normalizing whitespace (default: false)
    pub keep_nbsp: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            normalize_whitespace: false,
            strip_bom: false,
            replace_invalid: true,
            replacement: REPLACEMENT_CHARACTER,
            remove_invisible: false,
            normalize_msword: false,
            keep_nbsp: false,
        }
    }
}

impl CleanOptions {
    /// Options applied to untrusted bytes before transliteration: invalid
    /// bytes, byte-order marks and invisible controls are all dropped.
    pub fn before_transliteration() -> Self {
        Self {
            strip_bom: true,
            replace_invalid: false,
            remove_invisible: true,
            ..Self::default()
        }
    }

    /// Set whitespace normalization.
    pub fn with_normalize_whitespace(mut self, enabled: bool) -> Self {
        self.normalize_whitespace = enabled;
        self
    }

    /// Set leading byte-order mark removal.
    pub fn with_strip_bom(mut self, enabled: bool) -> Self {
        self.strip_bom = enabled;
        self
    }

    /// Choose between replacing and dropping invalid sequences.
    pub fn with_replace_invalid(mut self, enabled: bool) -> Self {
        self.replace_invalid = enabled;
        self
    }

    /// Set the replacement character.
    pub fn with_replacement(mut self, replacement: char) -> Self {
        self.replacement = replacement;
        self
    }

    /// Set invisible control removal.
    pub fn with_remove_invisible(mut self, enabled: bool) -> Self {
        self.remove_invisible = enabled;
        self
    }

    /// Set typographic punctuation normalization.
    pub fn with_normalize_msword(mut self, enabled: bool) -> Self {
        self.normalize_msword = enabled;
        self
    }

    /// Keep non-breaking spaces during whitespace normalization.
    pub fn with_keep_nbsp(mut self, enabled: bool) -> Self {
        self.keep_nbsp = enabled;
        self
    }
}

/// Options for a [`Transliterator`](super::ascii::Transliterator).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AsciiOptions {
    /// Emitted for codepoints no table can map (default: "?")
    pub placeholder: String,
    /// Prefer the richer strict-mode backend (default: false)
    pub strict: bool,
    /// Treat a missing strict-mode backend as a configuration error instead
    /// of falling back to the static table (default: false)
    pub require_strict_backend: bool,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self {
            placeholder: String::from("?"),
            strict: false,
            require_strict_backend: false,
        }
    }
}

impl AsciiOptions {
    /// Loose mode with the default placeholder.
    pub fn loose() -> Self {
        Self::default()
    }

    /// Strict mode with the default placeholder.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Set the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Require the strict-mode backend to be compiled in.
    pub fn with_require_strict_backend(mut self, required: bool) -> Self {
        self.require_strict_backend = required;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_defaults_only_repair() {
        let opts = CleanOptions::default();
        assert!(opts.replace_invalid);
        assert_eq!(opts.replacement, REPLACEMENT_CHARACTER);
        assert!(!opts.normalize_whitespace);
        assert!(!opts.strip_bom);
        assert!(!opts.remove_invisible);
        assert!(!opts.normalize_msword);
    }

    #[test]
    fn test_clean_builder() {
        let opts = CleanOptions::default()
            .with_normalize_whitespace(true)
            .with_strip_bom(true)
            .with_replacement('?');
        assert!(opts.normalize_whitespace);
        assert!(opts.strip_bom);
        assert_eq!(opts.replacement, '?');
    }

    #[test]
    fn test_before_transliteration_profile() {
        let opts = CleanOptions::before_transliteration();
        assert!(!opts.replace_invalid);
        assert!(opts.strip_bom);
        assert!(opts.remove_invisible);
        assert!(!opts.normalize_whitespace);
    }

    #[test]
    fn test_ascii_builder() {
        let opts = AsciiOptions::strict().with_placeholder("*");
        assert!(opts.strict);
        assert_eq!(opts.placeholder, "*");
        assert!(!AsciiOptions::loose().strict);
    }
}
