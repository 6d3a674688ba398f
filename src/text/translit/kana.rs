//! Hiragana (U+3040-U+309F) and Katakana (U+30A0-U+30FF).
//!
//! Kunrei-style syllables (`si`, `ti`, `tu`, `hu`). Small kana romanize like
//! their full-size forms, so `キャ` is `kiya`. Katakana shares the Hiragana
//! syllable table at an offset of 0x60.

/// U+3041-U+3096.
#[rustfmt::skip]
static SYLLABLES: [&str; 86] = [
    "a", "a", "i", "i", "u", "u", "e", // U+3041
    "e", "o", "o", "ka", "ga", "ki", "gi", "ku", // U+3048
    "gu", "ke", "ge", "ko", "go", "sa", "za", "si", // U+3050
    "zi", "su", "zu", "se", "ze", "so", "zo", "ta", // U+3058
    "da", "ti", "di", "tu", "tu", "du", "te", "de", // U+3060
    "to", "do", "na", "ni", "nu", "ne", "no", "ha", // U+3068
    "ba", "pa", "hi", "bi", "pi", "hu", "bu", "pu", // U+3070
    "he", "be", "pe", "ho", "bo", "po", "ma", "mi", // U+3078
    "mu", "me", "mo", "ya", "ya", "yu", "yu", "yo", // U+3080
    "yo", "ra", "ri", "ru", "re", "ro", "wa", "wa", // U+3088
    "wi", "we", "wo", "n", "vu", "ka", "ke", // U+3090
];

const HIRAGANA_FIRST: u32 = 0x3041;
const KATAKANA_OFFSET: u32 = 0x60;

pub(super) fn lookup(c: char) -> Option<&'static str> {
    let cp = c as u32;
    let s = match cp {
        0x3041..=0x3096 => SYLLABLES[(cp - HIRAGANA_FIRST) as usize],
        0x30A1..=0x30F6 => SYLLABLES[(cp - KATAKANA_OFFSET - HIRAGANA_FIRST) as usize],
        0x3099..=0x309A => "",
        0x309B | 0x309C => "\"",
        0x309D | 0x309E | 0x30FD | 0x30FE => "",
        0x30A0 => "=",
        0x30F7 => "va",
        0x30F8 => "vi",
        0x30F9 => "ve",
        0x30FA => "vo",
        0x30FB => "",
        0x30FC => "-",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn map(s: &str) -> String {
        s.chars()
            .map(|c| match c {
                ',' | ' ' => c.to_string(),
                _ => lookup(c).unwrap_or("?").to_string(),
            })
            .collect()
    }

    #[test]
    fn test_katakana_with_small_kana() {
        assert_eq!(map("キャンパス"), "kiyanpasu");
    }

    #[test]
    fn test_hiragana() {
        assert_eq!(map("ますだ, よしひこ"), "masuda, yosihiko");
    }

    #[test]
    fn test_scripts_share_syllables() {
        for cp in 0x3041..=0x3096u32 {
            let hiragana = char::from_u32(cp).unwrap();
            let katakana = char::from_u32(cp + KATAKANA_OFFSET).unwrap();
            assert_eq!(lookup(hiragana), lookup(katakana), "U+{:04X}", cp);
        }
    }

    #[test]
    fn test_long_vowel_mark() {
        assert_eq!(map("コーヒー"), "ko-hi-");
    }
}
