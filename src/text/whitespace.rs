//! Unicode whitespace and invisible control tables.
//!
//! [`WHITESPACE_TABLE`] lists the space separators that whitespace
//! normalization rewrites to a single ASCII space. [`INVISIBLE_CONTROLS`]
//! lists the C0 controls (minus TAB, LF and CR) and DEL that invisible
//! character removal drops.

#[cfg(feature = "serde")]
use serde::Serialize;

/// A named whitespace codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct WhitespaceEntry {
    /// Unicode character name.
    pub name: &'static str,
    /// The codepoint.
    pub codepoint: char,
}

impl WhitespaceEntry {
    const fn new(name: &'static str, codepoint: char) -> Self {
        Self { name, codepoint }
    }
}

/// Space separators, in codepoint order.
pub static WHITESPACE_TABLE: [WhitespaceEntry; 21] = [
    WhitespaceEntry::new("SPACE", '\u{0020}'),
    WhitespaceEntry::new("NO-BREAK SPACE", '\u{00A0}'),
    WhitespaceEntry::new("OGHAM SPACE MARK", '\u{1680}'),
    WhitespaceEntry::new("MONGOLIAN VOWEL SEPARATOR", '\u{180E}'),
    WhitespaceEntry::new("EN QUAD", '\u{2000}'),
    WhitespaceEntry::new("EM QUAD", '\u{2001}'),
    WhitespaceEntry::new("EN SPACE", '\u{2002}'),
    WhitespaceEntry::new("EM SPACE", '\u{2003}'),
    WhitespaceEntry::new("THREE-PER-EM SPACE", '\u{2004}'),
    WhitespaceEntry::new("FOUR-PER-EM SPACE", '\u{2005}'),
    WhitespaceEntry::new("SIX-PER-EM SPACE", '\u{2006}'),
    WhitespaceEntry::new("FIGURE SPACE", '\u{2007}'),
    WhitespaceEntry::new("PUNCTUATION SPACE", '\u{2008}'),
    WhitespaceEntry::new("THIN SPACE", '\u{2009}'),
    WhitespaceEntry::new("HAIR SPACE", '\u{200A}'),
    WhitespaceEntry::new("ZERO WIDTH SPACE", '\u{200B}'),
    WhitespaceEntry::new("LINE SEPARATOR", '\u{2028}'),
    WhitespaceEntry::new("PARAGRAPH SEPARATOR", '\u{2029}'),
    WhitespaceEntry::new("NARROW NO-BREAK SPACE", '\u{202F}'),
    WhitespaceEntry::new("MEDIUM MATHEMATICAL SPACE", '\u{205F}'),
    WhitespaceEntry::new("IDEOGRAPHIC SPACE", '\u{3000}'),
];

/// C0 controls removed by invisible character removal (TAB, LF and CR are kept).
#[rustfmt::skip]
pub static INVISIBLE_CONTROLS: [char; 30] = [
    '\u{00}', '\u{01}', '\u{02}', '\u{03}', '\u{04}', '\u{05}', '\u{06}', '\u{07}',
    '\u{08}', '\u{0B}', '\u{0C}', '\u{0E}', '\u{0F}', '\u{10}', '\u{11}', '\u{12}',
    '\u{13}', '\u{14}', '\u{15}', '\u{16}', '\u{17}', '\u{18}', '\u{19}', '\u{1A}',
    '\u{1B}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{1F}', '\u{7F}',
];

/// The whitespace codepoints, in ascending order.
///
/// ```
/// use utf8scrub::text::whitespace::whitespace_codepoints;
///
/// let spaces: Vec<char> = whitespace_codepoints().collect();
/// assert_eq!(spaces.first(), Some(&' '));
/// assert_eq!(spaces.last(), Some(&'\u{3000}'));
/// ```
pub fn whitespace_codepoints() -> impl ExactSizeIterator<Item = char> + Clone {
    WHITESPACE_TABLE.iter().map(|entry| entry.codepoint)
}

/// Whether `c` is in the whitespace table.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    match c {
        ' ' => true,
        _ if (c as u32) < 0xA0 => false,
        _ => WHITESPACE_TABLE
            .binary_search_by_key(&c, |entry| entry.codepoint)
            .is_ok(),
    }
}

/// Whether `c` is an invisible control character eligible for removal.
#[inline]
pub fn is_invisible_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in WHITESPACE_TABLE.windows(2) {
            assert!(pair[0].codepoint < pair[1].codepoint, "{:?}", pair);
        }
    }

    #[test]
    fn test_every_entry_is_whitespace() {
        for c in whitespace_codepoints() {
            assert!(is_whitespace(c), "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn test_common_non_whitespace() {
        for c in ['a', '\t', '\n', '\r', '\u{85}', '\u{FEFF}', '中'] {
            assert!(!is_whitespace(c), "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn test_invisible_table_matches_predicate() {
        for c in INVISIBLE_CONTROLS {
            assert!(is_invisible_control(c), "U+{:04X}", c as u32);
        }
        let count = (0u32..0x80)
            .filter_map(char::from_u32)
            .filter(|&c| is_invisible_control(c))
            .count();
        assert_eq!(count, INVISIBLE_CONTROLS.len());
    }

    #[test]
    fn test_tab_newline_kept() {
        assert!(!is_invisible_control('\t'));
        assert!(!is_invisible_control('\n'));
        assert!(!is_invisible_control('\r'));
        assert!(!is_invisible_control(' '));
    }
}
