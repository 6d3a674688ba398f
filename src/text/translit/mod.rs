//! Static transliteration tables.
//!
//! [`StaticTable`] is the loose-mode mapper. It dispatches each codepoint to
//! the table for its Unicode block:
//!
//! | Module      | Blocks |
//! |-------------|--------|
//! | `latin`     | Latin-1 Supplement (and the C1 controls), Latin Extended-A/B, Latin Extended Additional, spacing modifiers, combining diacritics |
//! | `greek`     | Greek and Coptic, Greek Extended |
//! | `cyrillic`  | Cyrillic |
//! | `semitic`   | Hebrew, Arabic |
//! | `indic`     | Devanagari |
//! | `kana`      | Hiragana, Katakana |
//! | `hangul`    | Hangul Syllables (computed from jamo) |
//! | `han`       | CJK Unified Ideographs |
//! | `symbols`   | punctuation, currency, letterlike, arrows, math, box drawing, dingbats, CJK punctuation, fullwidth forms |
//!
//! Every table entry is ASCII, possibly empty.

mod cyrillic;
mod greek;
mod han;
mod hangul;
mod indic;
mod kana;
mod latin;
mod semitic;
mod symbols;

use alloc::string::String;

use super::ascii::CharMapper;

/// Where strict mode looks up a codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrictRoute {
    /// C1 controls (read as Windows-1252), symbols, math and emoji. Only the
    /// static table is consulted, so bracketed cells and the placeholder
    /// behave as in loose mode.
    Table,
    /// Han, Hebrew and Arabic. The static table's romanization, lowercased.
    LowercaseTable,
    /// Everything else asks the strict backend first.
    Backend,
}

/// Pick the strict-mode route for a non-ASCII codepoint.
///
/// ```
/// use utf8scrub::text::translit::{strict_route, StrictRoute};
///
/// assert_eq!(strict_route('∀'), StrictRoute::Table);
/// assert_eq!(strict_route('😀'), StrictRoute::Table);
/// assert_eq!(strict_route('中'), StrictRoute::LowercaseTable);
/// assert_eq!(strict_route('é'), StrictRoute::Backend);
/// ```
pub fn strict_route(c: char) -> StrictRoute {
    match c as u32 {
        0x0590..=0x06FF | 0x4E00..=0x9FFF => StrictRoute::LowercaseTable,
        0x0080..=0x009F
        | 0x2000..=0x27BF
        | 0x3000..=0x303F
        | 0xFE00..=0xFFFF
        | 0x1F000.. => StrictRoute::Table,
        _ => StrictRoute::Backend,
    }
}

/// What a table says about one codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Replace with this ASCII text.
    Text(&'static str),
    /// Replace with `[` + placeholder + `]`.
    Bracketed,
}

/// The built-in transliteration table.
///
/// ```
/// use utf8scrub::text::ascii::CharMapper;
/// use utf8scrub::text::translit::StaticTable;
///
/// let mut out = String::new();
/// assert!(StaticTable.map_char('é', &mut out, "?"));
/// assert!(StaticTable.map_char('∀', &mut out, "?"));
/// assert!(!StaticTable.map_char('😀', &mut out, "?"));
/// assert_eq!(out, "e[?]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticTable;

impl StaticTable {
    /// Look up a codepoint with a fixed table cell.
    ///
    /// Returns `None` for ASCII, for Hangul syllables (which are computed
    /// rather than stored) and for unmapped codepoints.
    pub fn cell(&self, c: char) -> Option<Cell> {
        match c as u32 {
            0x0080..=0x036F | 0x1E00..=0x1EFF => latin::lookup(c).map(Cell::Text),
            0x0370..=0x03FF | 0x1F00..=0x1FFF => greek::lookup(c).map(Cell::Text),
            0x0400..=0x04FF => cyrillic::lookup(c).map(Cell::Text),
            0x0590..=0x06FF => semitic::lookup(c).map(Cell::Text),
            0x0900..=0x097F => indic::lookup(c).map(Cell::Text),
            0x3040..=0x30FF => kana::lookup(c).map(Cell::Text),
            0x4E00..=0x9FFF => han::lookup(c).map(Cell::Text),
            0x2000..=0x27BF | 0x3000..=0x303F | 0xFE00..=0xFFFF => symbols::lookup(c),
            _ => None,
        }
    }
}

impl CharMapper for StaticTable {
    fn map_char(&self, c: char, out: &mut String, placeholder: &str) -> bool {
        if c.is_ascii() {
            out.push(c);
            return true;
        }
        if hangul::romanize(c, out) {
            return true;
        }
        match self.cell(c) {
            Some(Cell::Text(text)) => out.push_str(text),
            Some(Cell::Bracketed) => {
                out.push('[');
                out.push_str(placeholder);
                out.push(']');
            }
            None => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(s: &str) -> String {
        let mut out = String::new();
        for c in s.chars() {
            if !StaticTable.map_char(c, &mut out, "?") {
                out.push('?');
            }
        }
        out
    }

    #[test]
    fn test_every_codepoint_maps_to_ascii() {
        let mut out = String::new();
        for c in (0..=0x10FFFFu32).filter_map(char::from_u32) {
            out.clear();
            StaticTable.map_char(c, &mut out, "?");
            assert!(out.is_ascii(), "U+{:04X} -> {:?}", c as u32, out);
        }
    }

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(map("plain ASCII ~!"), "plain ASCII ~!");
        assert_eq!(StaticTable.cell('a'), None);
    }

    #[test]
    fn test_dispatch_reaches_every_table() {
        assert_eq!(map("é"), "e");
        assert_eq!(map("ω"), "o");
        assert_eq!(map("ж"), "zh");
        assert_eq!(map("ب"), "b");
        assert_eq!(map("क"), "k");
        assert_eq!(map("カ"), "ka");
        assert_eq!(map("한"), "han");
        assert_eq!(map("中"), "Zhong ");
        assert_eq!(map("€"), "EUR");
    }

    #[test]
    fn test_bracketed_uses_placeholder() {
        let mut out = String::new();
        assert!(StaticTable.map_char('∀', &mut out, "unknown"));
        assert_eq!(out, "[unknown]");
    }

    #[test]
    fn test_strict_routes() {
        assert_eq!(strict_route('\u{87}'), StrictRoute::Table);
        assert_eq!(strict_route('ℕ'), StrictRoute::Table);
        assert_eq!(strict_route('\u{3000}'), StrictRoute::Table);
        assert_eq!(strict_route('\u{FF21}'), StrictRoute::Table);
        assert_eq!(strict_route('👍'), StrictRoute::Table);
        assert_eq!(strict_route('ح'), StrictRoute::LowercaseTable);
        assert_eq!(strict_route('ש'), StrictRoute::LowercaseTable);
        assert_eq!(strict_route('ж'), StrictRoute::Backend);
        assert_eq!(strict_route('한'), StrictRoute::Backend);
    }

    #[test]
    fn test_lowercased_blocks_hold_only_text() {
        let blocks = (0x0590..=0x06FFu32).chain(0x4E00..=0x9FFF);
        for c in blocks.filter_map(char::from_u32) {
            assert_ne!(StaticTable.cell(c), Some(Cell::Bracketed), "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn test_hangul_has_no_cell() {
        assert_eq!(StaticTable.cell('한'), None);
    }

    #[test]
    fn test_unmapped_appends_nothing() {
        let mut out = String::from("x");
        assert!(!StaticTable.map_char('😀', &mut out, "?"));
        assert!(!StaticTable.map_char('\u{E000}', &mut out, "?"));
        assert_eq!(out, "x");
    }
}
