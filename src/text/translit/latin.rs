//! Latin-script blocks: Latin-1 Supplement, Latin Extended-A and -B, Latin
//! Extended Additional, spacing modifier letters and combining diacritics.
//!
//! Accented letters fold to their base letter with the case preserved.

/// U+0080-U+009F, read as the Windows-1252 glyphs they are usually mistaken for.
#[rustfmt::skip]
static C1_CONTROLS: [&str; 32] = [
    "EUR", "", ",", "f", ",,", "...", "+", "++", // U+0080
    "^", "%0", "S", "<", "OE", "", "Z", "", // U+0088
    "", "'", "'", "\"", "\"", "*", "-", "--", // U+0090
    "~", "tm", "s", ">", "oe", "", "z", "Y", // U+0098
];

/// U+00A0-U+00FF.
#[rustfmt::skip]
static LATIN_1_SUPPLEMENT: [&str; 96] = [
    " ", "!", "C/", "PS", "$?", "Y=", "|", "SS", // U+00A0
    "\"", "(c)", "a", "<<", "!", "", "(r)", "-", // U+00A8
    "deg", "+-", "2", "3", "'", "u", "P", "*", // U+00B0
    ",", "1", "o", ">>", " 1/4", " 1/2", " 3/4", "?", // U+00B8
    "A", "A", "A", "A", "A", "A", "AE", "C", // U+00C0
    "E", "E", "E", "E", "I", "I", "I", "I", // U+00C8
    "D", "N", "O", "O", "O", "O", "O", "x", // U+00D0
    "O", "U", "U", "U", "U", "Y", "Th", "ss", // U+00D8
    "a", "a", "a", "a", "a", "a", "ae", "c", // U+00E0
    "e", "e", "e", "e", "i", "i", "i", "i", // U+00E8
    "d", "n", "o", "o", "o", "o", "o", "/", // U+00F0
    "o", "u", "u", "u", "u", "y", "th", "y", // U+00F8
];

/// U+0100-U+017F.
#[rustfmt::skip]
static LATIN_EXTENDED_A: [&str; 128] = [
    "A", "a", "A", "a", "A", "a", "C", "c", // U+0100
    "C", "c", "C", "c", "C", "c", "D", "d", // U+0108
    "D", "d", "E", "e", "E", "e", "E", "e", // U+0110
    "E", "e", "E", "e", "G", "g", "G", "g", // U+0118
    "G", "g", "G", "g", "H", "h", "H", "h", // U+0120
    "I", "i", "I", "i", "I", "i", "I", "i", // U+0128
    "I", "i", "IJ", "ij", "J", "j", "K", "k", // U+0130
    "k", "L", "l", "L", "l", "L", "l", "L", // U+0138
    "l", "L", "l", "N", "n", "N", "n", "N", // U+0140
    "n", "'n", "NG", "ng", "O", "o", "O", "o", // U+0148
    "O", "o", "OE", "oe", "R", "r", "R", "r", // U+0150
    "R", "r", "S", "s", "S", "s", "S", "s", // U+0158
    "S", "s", "T", "t", "T", "t", "T", "t", // U+0160
    "U", "u", "U", "u", "U", "u", "U", "u", // U+0168
    "U", "u", "U", "u", "W", "w", "Y", "y", // U+0170
    "Y", "Z", "z", "Z", "z", "Z", "z", "s", // U+0178
];

/// U+0180-U+024F.
#[rustfmt::skip]
static LATIN_EXTENDED_B: [&str; 208] = [
    "b", "B", "B", "b", "6", "6", "O", "C", // U+0180
    "c", "D", "D", "D", "d", "d", "3", "@", // U+0188
    "E", "F", "f", "G", "G", "hv", "I", "I", // U+0190
    "K", "k", "l", "l", "W", "N", "n", "O", // U+0198
    "O", "o", "OI", "oi", "P", "p", "YR", "2", // U+01A0
    "2", "SH", "sh", "t", "T", "t", "T", "U", // U+01A8
    "u", "Y", "V", "Y", "y", "Z", "z", "ZH", // U+01B0
    "ZH", "zh", "zh", "2", "5", "5", "ts", "w", // U+01B8
    "|", "||", "|=", "!", "DZ", "Dz", "dz", "LJ", // U+01C0
    "Lj", "lj", "NJ", "Nj", "nj", "A", "a", "I", // U+01C8
    "i", "O", "o", "U", "u", "U", "u", "U", // U+01D0
    "u", "U", "u", "U", "u", "@", "A", "a", // U+01D8
    "A", "a", "AE", "ae", "G", "g", "G", "g", // U+01E0
    "K", "k", "O", "o", "O", "o", "ZH", "zh", // U+01E8
    "j", "DZ", "Dz", "dz", "G", "g", "HV", "W", // U+01F0
    "N", "n", "A", "a", "AE", "ae", "O", "o", // U+01F8
    "A", "a", "A", "a", "E", "e", "E", "e", // U+0200
    "I", "i", "I", "i", "O", "o", "O", "o", // U+0208
    "R", "r", "R", "r", "U", "u", "U", "u", // U+0210
    "S", "s", "T", "t", "Y", "y", "H", "h", // U+0218
    "N", "d", "OU", "ou", "Z", "z", "A", "a", // U+0220
    "E", "e", "O", "o", "O", "o", "O", "o", // U+0228
    "O", "o", "Y", "y", "l", "n", "t", "j", // U+0230
    "db", "qp", "A", "C", "c", "L", "T", "s", // U+0238
    "z", "?", "?", "B", "U", "V", "E", "e", // U+0240
    "J", "j", "Q", "q", "R", "r", "Y", "y", // U+0248
];

/// Runs of Latin Extended Additional letters, alternating upper and lower case
/// starting at an uppercase letter: `(first, last, upper, lower)`.
#[rustfmt::skip]
static LATIN_EXTENDED_ADDITIONAL: [(u32, u32, &str, &str); 31] = [
    (0x1E00, 0x1E01, "A", "a"), (0x1E02, 0x1E07, "B", "b"), (0x1E08, 0x1E09, "C", "c"),
    (0x1E0A, 0x1E13, "D", "d"), (0x1E14, 0x1E1D, "E", "e"), (0x1E1E, 0x1E1F, "F", "f"),
    (0x1E20, 0x1E21, "G", "g"), (0x1E22, 0x1E2B, "H", "h"), (0x1E2C, 0x1E2F, "I", "i"),
    (0x1E30, 0x1E35, "K", "k"), (0x1E36, 0x1E3D, "L", "l"), (0x1E3E, 0x1E43, "M", "m"),
    (0x1E44, 0x1E4B, "N", "n"), (0x1E4C, 0x1E53, "O", "o"), (0x1E54, 0x1E57, "P", "p"),
    (0x1E58, 0x1E5F, "R", "r"), (0x1E60, 0x1E69, "S", "s"), (0x1E6A, 0x1E71, "T", "t"),
    (0x1E72, 0x1E7B, "U", "u"), (0x1E7C, 0x1E7F, "V", "v"), (0x1E80, 0x1E89, "W", "w"),
    (0x1E8A, 0x1E8D, "X", "x"), (0x1E8E, 0x1E8F, "Y", "y"), (0x1E90, 0x1E95, "Z", "z"),
    // Vietnamese
    (0x1EA0, 0x1EB7, "A", "a"), (0x1EB8, 0x1EC7, "E", "e"), (0x1EC8, 0x1ECB, "I", "i"),
    (0x1ECC, 0x1EE3, "O", "o"), (0x1EE4, 0x1EF1, "U", "u"), (0x1EF2, 0x1EF9, "Y", "y"),
    (0x1EFA, 0x1EFF, "", ""),
];

pub(super) fn lookup(c: char) -> Option<&'static str> {
    let cp = c as u32;
    match cp {
        0x0080..=0x009F => Some(C1_CONTROLS[(cp - 0x80) as usize]),
        0x00A0..=0x00FF => Some(LATIN_1_SUPPLEMENT[(cp - 0xA0) as usize]),
        0x0100..=0x017F => Some(LATIN_EXTENDED_A[(cp - 0x100) as usize]),
        0x0180..=0x024F => Some(LATIN_EXTENDED_B[(cp - 0x180) as usize]),
        0x02B0..=0x02FF => Some(spacing_modifier(c)),
        // Combining diacritical marks vanish with the accent they carry.
        0x0300..=0x036F => Some(""),
        0x1E96..=0x1E9F => extended_additional_tail(c),
        0x1E00..=0x1EFF => extended_additional(cp),
        _ => None,
    }
}

fn spacing_modifier(c: char) -> &'static str {
    match c {
        '\u{02B9}' | '\u{02BB}' | '\u{02BC}' | '\u{02C8}' | '\u{02CA}' => "'",
        '\u{02BA}' => "\"",
        '\u{02C6}' => "^",
        '\u{02CB}' => "`",
        '\u{02CD}' => "_",
        '\u{02D0}' => ":",
        '\u{02DA}' => "o",
        '\u{02DC}' => "~",
        _ => "",
    }
}

fn extended_additional(cp: u32) -> Option<&'static str> {
    let index = LATIN_EXTENDED_ADDITIONAL
        .binary_search_by(|&(first, last, _, _)| {
            if last < cp {
                core::cmp::Ordering::Less
            } else if first > cp {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .ok()?;
    let (first, _, upper, lower) = LATIN_EXTENDED_ADDITIONAL[index];
    Some(if (cp - first) % 2 == 0 { upper } else { lower })
}

fn extended_additional_tail(c: char) -> Option<&'static str> {
    let s = match c {
        '\u{1E96}' => "h",
        '\u{1E97}' => "t",
        '\u{1E98}' => "w",
        '\u{1E99}' => "y",
        '\u{1E9A}' => "a",
        '\u{1E9B}' => "s",
        '\u{1E9E}' => "SS",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(s: &str) -> alloc::string::String {
        let mut out = alloc::string::String::new();
        for c in s.chars() {
            if c.is_ascii() {
                out.push(c);
            } else {
                out.push_str(lookup(c).unwrap_or("?"));
            }
        }
        out
    }

    #[test]
    fn test_diacritics_fold_to_base_letter() {
        assert_eq!(map("éàüñçø"), "eaunco");
        assert_eq!(map("ÉÀÜÑÇØ"), "EAUNCO");
        assert_eq!(map("őŁžș"), "oLzs");
    }

    #[test]
    fn test_ligatures_and_special_letters() {
        assert_eq!(map("æßþ"), "aessth");
        assert_eq!(map("ŒĲ"), "OEIJ");
        assert_eq!(map("\u{0181}\u{0238}\u{0131}"), "Bdbi");
    }

    #[test]
    fn test_c1_controls_as_windows_1252() {
        assert_eq!(lookup('\u{80}'), Some("EUR"));
        assert_eq!(lookup('\u{87}'), Some("++"));
        assert_eq!(lookup('\u{99}'), Some("tm"));
        assert_eq!(lookup('\u{81}'), Some(""));
    }

    #[test]
    fn test_latin_1_symbols() {
        assert_eq!(lookup('£'), Some("PS"));
        assert_eq!(lookup('¥'), Some("Y="));
        assert_eq!(lookup('©'), Some("(c)"));
        assert_eq!(lookup('\u{AD}'), Some(""));
    }

    #[test]
    fn test_extended_additional_alternates_case() {
        assert_eq!(map("ḂḃṠṡẀẁ"), "BbSsWw");
        assert_eq!(map("Việt Nam ỹ"), "Viet Nam y");
        assert_eq!(lookup('ẞ'), Some("SS"));
    }

    #[test]
    fn test_extended_additional_runs_are_contiguous() {
        for pair in LATIN_EXTENDED_ADDITIONAL.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
        for &(first, last, _, _) in &LATIN_EXTENDED_ADDITIONAL {
            assert_eq!((last - first) % 2, 1, "U+{:04X}", first);
        }
    }

    #[test]
    fn test_combining_marks_vanish() {
        assert_eq!(map("e\u{0301}a\u{0300}"), "ea");
    }

    #[test]
    fn test_outside_latin_blocks() {
        assert_eq!(lookup('κ'), None);
        assert_eq!(lookup('\u{0250}'), None);
    }
}
