//! Punctuation, symbols and compatibility forms.
//!
//! Covers General Punctuation, super- and subscripts, currency, letterlike
//! symbols, number forms, arrows, mathematical operators, box drawing,
//! dingbats, CJK punctuation, variation selectors and fullwidth ASCII.
//! Mathematical operators without an ASCII spelling map to the bracketed
//! placeholder.

use super::Cell;

/// Printable ASCII, U+0021-U+007E, sliced for the fullwidth forms.
const PRINTABLE_ASCII: &str =
    "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

static DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

#[rustfmt::skip]
static ROMAN_NUMERALS: [&str; 16] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII",
    "IX", "X", "XI", "XII", "L", "C", "D", "M",
];

pub(super) fn lookup(c: char) -> Option<Cell> {
    let cp = c as u32;
    let text = match cp {
        0x2000..=0x206F => general_punctuation(c)?,
        0x2070..=0x209F => script_form(c)?,
        0x20A0..=0x20CF => currency(c)?,
        // Combining marks for symbols.
        0x20D0..=0x20FF => "",
        0x2100..=0x214F => letterlike(c)?,
        0x2150..=0x215F => vulgar_fraction(c)?,
        0x2160..=0x216F => ROMAN_NUMERALS[(cp - 0x2160) as usize],
        0x2170..=0x217F => roman_lower(cp - 0x2170),
        0x2190..=0x21FF => arrow(c)?,
        0x2200..=0x22FF => return Some(math_operator(c).map_or(Cell::Bracketed, Cell::Text)),
        0x2500..=0x257F => box_drawing(c),
        0x2700..=0x27BF => "",
        0x3000..=0x303F => cjk_punctuation(c)?,
        0xFE00..=0xFE0F | 0xFEFF | 0xFFFD => "",
        0xFF01..=0xFF5E => {
            let index = (cp - 0xFF01) as usize;
            &PRINTABLE_ASCII[index..index + 1]
        }
        _ => return None,
    };
    Some(Cell::Text(text))
}

fn general_punctuation(c: char) -> Option<&'static str> {
    let s = match c {
        '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' => " ",
        '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2060}'..='\u{206F}' => "",
        '\u{2010}'..='\u{2013}' | '\u{2043}' => "-",
        '\u{2014}' | '\u{2015}' => "--",
        '\u{2016}' => "||",
        '\u{2017}' => "_",
        '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' => "'",
        '\u{201A}' => ",",
        '\u{201C}' | '\u{201D}' | '\u{201F}' | '\u{2033}' => "\"",
        '\u{201E}' => ",,",
        '\u{2020}' => "+",
        '\u{2021}' => "++",
        '\u{2022}' | '\u{2027}' => "*",
        '\u{2023}' => "*>",
        '\u{2024}' => ".",
        '\u{2025}' => "..",
        '\u{2026}' => "...",
        '\u{2028}' => "\n",
        '\u{2029}' => "\n\n",
        '\u{2030}' => "%0",
        '\u{2031}' => "%00",
        '\u{2034}' => "'''",
        '\u{2035}' => "`",
        '\u{2036}' => "``",
        '\u{2037}' => "```",
        '\u{2039}' => "<",
        '\u{203A}' => ">",
        '\u{203C}' => "!!",
        '\u{2044}' => "/",
        '\u{2047}' => "??",
        '\u{2048}' => "?!",
        '\u{2049}' => "!?",
        _ => return None,
    };
    Some(s)
}

/// Superscripts and subscripts.
fn script_form(c: char) -> Option<&'static str> {
    let cp = c as u32;
    let s = match cp {
        0x2070 => "0",
        0x2071 => "i",
        0x2074..=0x2079 => DIGITS[(cp - 0x2070) as usize],
        0x2080..=0x2089 => DIGITS[(cp - 0x2080) as usize],
        0x207A | 0x208A => "+",
        0x207B | 0x208B => "-",
        0x207C | 0x208C => "=",
        0x207D | 0x208D => "(",
        0x207E | 0x208E => ")",
        0x207F => "n",
        _ => return None,
    };
    Some(s)
}

fn currency(c: char) -> Option<&'static str> {
    let s = match c {
        '\u{20A0}' => "ECU",
        '\u{20A1}' => "CL",
        '\u{20A2}' => "Cr",
        '\u{20A3}' => "FF",
        '\u{20A4}' => "L",
        '\u{20A5}' => "mil",
        '\u{20A6}' => "N",
        '\u{20A7}' => "Pts",
        '\u{20A8}' | '\u{20B9}' => "Rs",
        '\u{20A9}' => "W",
        '\u{20AA}' => "NS",
        '\u{20AB}' => "D",
        '\u{20AC}' => "EUR",
        '\u{20AD}' => "K",
        '\u{20AE}' => "T",
        '\u{20AF}' => "Dr",
        '\u{20B1}' => "P",
        '\u{20B4}' => "UAH",
        '\u{20BA}' => "TL",
        '\u{20BD}' => "RUB",
        '\u{20BF}' => "BTC",
        _ => return None,
    };
    Some(s)
}

fn letterlike(c: char) -> Option<&'static str> {
    let s = match c {
        '\u{2100}' => "a/c",
        '\u{2101}' => "a/s",
        '\u{2102}' | '\u{212D}' => "C",
        '\u{2103}' => "degC",
        '\u{2105}' => "c/o",
        '\u{2106}' => "c/u",
        '\u{2109}' => "degF",
        '\u{210A}' => "g",
        '\u{210B}'..='\u{210D}' => "H",
        '\u{210E}' => "h",
        '\u{2110}' | '\u{2111}' => "I",
        '\u{2112}' => "L",
        '\u{2113}' => "l",
        '\u{2115}' => "N",
        '\u{2116}' => "No.",
        '\u{2117}' => "(p)",
        '\u{2119}' => "P",
        '\u{211A}' => "Q",
        '\u{211B}'..='\u{211D}' => "R",
        '\u{2120}' => "(sm)",
        '\u{2121}' => "TEL",
        '\u{2122}' => "(tm)",
        '\u{2124}' | '\u{2128}' => "Z",
        '\u{2126}' => "Ohm",
        '\u{212A}' => "K",
        '\u{212B}' => "A",
        '\u{212C}' => "B",
        '\u{212E}' | '\u{212F}' => "e",
        '\u{2130}' => "E",
        '\u{2131}' => "F",
        '\u{2133}' => "M",
        '\u{2134}' => "o",
        _ => return None,
    };
    Some(s)
}

fn vulgar_fraction(c: char) -> Option<&'static str> {
    let s = match c {
        '\u{2153}' => " 1/3",
        '\u{2154}' => " 2/3",
        '\u{2155}' => " 1/5",
        '\u{2156}' => " 2/5",
        '\u{2157}' => " 3/5",
        '\u{2158}' => " 4/5",
        '\u{2159}' => " 1/6",
        '\u{215A}' => " 5/6",
        '\u{215B}' => " 1/8",
        '\u{215C}' => " 3/8",
        '\u{215D}' => " 5/8",
        '\u{215E}' => " 7/8",
        '\u{215F}' => " 1/",
        _ => return None,
    };
    Some(s)
}

fn roman_lower(index: u32) -> &'static str {
    #[rustfmt::skip]
    static LOWER: [&str; 16] = [
        "i", "ii", "iii", "iv", "v", "vi", "vii", "viii",
        "ix", "x", "xi", "xii", "l", "c", "d", "m",
    ];
    LOWER[index as usize]
}

fn arrow(c: char) -> Option<&'static str> {
    let s = match c {
        '\u{2190}' => "<-",
        '\u{2191}' => "^",
        '\u{2192}' => "->",
        '\u{2193}' => "v",
        '\u{2194}' => "<->",
        '\u{21D0}' => "<=",
        '\u{21D2}' => "=>",
        '\u{21D4}' => "<=>",
        _ => return None,
    };
    Some(s)
}

fn math_operator(c: char) -> Option<&'static str> {
    let s = match c {
        '\u{2212}' => "-",
        '\u{2215}' => "/",
        '\u{2216}' => "\\",
        '\u{2217}' => "*",
        '\u{2223}' => "|",
        '\u{2236}' => ":",
        '\u{223C}' => "~",
        '\u{2260}' => "!=",
        '\u{2264}' => "<=",
        '\u{2265}' => ">=",
        _ => return None,
    };
    Some(s)
}

fn box_drawing(c: char) -> &'static str {
    match c {
        '\u{2500}' | '\u{2501}' | '\u{2504}' | '\u{2505}' | '\u{2508}' | '\u{2509}'
        | '\u{254C}' | '\u{254D}' | '\u{2550}' => "-",
        '\u{2502}' | '\u{2503}' | '\u{2506}' | '\u{2507}' | '\u{250A}' | '\u{250B}'
        | '\u{254E}' | '\u{254F}' | '\u{2551}' => "|",
        _ => "+",
    }
}

fn cjk_punctuation(c: char) -> Option<&'static str> {
    let s = match c {
        '\u{3000}' => " ",
        '\u{3001}' => ",",
        '\u{3002}' => ".",
        '\u{3003}' => "\"",
        '\u{3005}' | '\u{3006}' | '\u{302A}'..='\u{302F}' => "",
        '\u{3007}' => "0",
        '\u{3008}' => "<",
        '\u{3009}' => ">",
        '\u{300A}' => "<<",
        '\u{300B}' => ">>",
        '\u{300C}' | '\u{3014}' | '\u{3016}' | '\u{301A}' => "[",
        '\u{300D}' | '\u{3015}' | '\u{3017}' | '\u{301B}' => "]",
        '\u{300E}' => "{",
        '\u{300F}' => "}",
        '\u{3010}' => "[(",
        '\u{3011}' => ")]",
        '\u{301C}' => "~",
        '\u{301D}' | '\u{301E}' | '\u{301F}' => "\"",
        '\u{3020}' => "@",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(c: char) -> Option<&'static str> {
        match lookup(c) {
            Some(Cell::Text(s)) => Some(s),
            _ => None,
        }
    }

    #[test]
    fn test_quotes_and_dashes() {
        assert_eq!(text('\u{2019}'), Some("'"));
        assert_eq!(text('\u{201C}'), Some("\""));
        assert_eq!(text('\u{2014}'), Some("--"));
        assert_eq!(text('\u{2026}'), Some("..."));
    }

    #[test]
    fn test_currency() {
        assert_eq!(text('€'), Some("EUR"));
        assert_eq!(text('₹'), Some("Rs"));
        assert_eq!(text('\u{20B0}'), None);
    }

    #[test]
    fn test_letterlike() {
        assert_eq!(text('ℕ'), Some("N"));
        assert_eq!(text('™'), Some("(tm)"));
        assert_eq!(text('№'), Some("No."));
    }

    #[test]
    fn test_math_operators_bracketed() {
        assert_eq!(lookup('∀'), Some(Cell::Bracketed));
        assert_eq!(lookup('∈'), Some(Cell::Bracketed));
        assert_eq!(text('≠'), Some("!="));
    }

    #[test]
    fn test_dingbats_vanish() {
        assert_eq!(text('\u{2764}'), Some(""));
        assert_eq!(text('\u{2702}'), Some(""));
    }

    #[test]
    fn test_fullwidth_ascii() {
        assert_eq!(text('\u{FF01}'), Some("!"));
        assert_eq!(text('Ａ'), Some("A"));
        assert_eq!(text('ｚ'), Some("z"));
        assert_eq!(text('\u{FF5E}'), Some("~"));
        assert_eq!(PRINTABLE_ASCII.len(), 0x7E - 0x21 + 1);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(text('Ⅻ'), Some("XII"));
        assert_eq!(text('ⅳ'), Some("iv"));
        assert_eq!(text('²'), None);
        assert_eq!(text('⁵'), Some("5"));
        assert_eq!(text('₃'), Some("3"));
    }

    #[test]
    fn test_emoji_unmapped() {
        assert_eq!(lookup('😀'), None);
        assert_eq!(lookup('👍'), None);
    }
}
