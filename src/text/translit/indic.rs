//! Devanagari (U+0900-U+097F).
//!
//! Consonants romanize without the inherent vowel, vowel signs add their
//! vowel and the virama vanishes, so conjuncts come out as consonant runs.

#[rustfmt::skip]
static DEVANAGARI: [&str; 128] = [
    "N", "N", "N", "H", "", "a", "aa", "i", // U+0900
    "ii", "u", "uu", "R", "L", "eN", "e", "e", // U+0908
    "ai", "oN", "o", "o", "au", "k", "kh", "g", // U+0910
    "gh", "ng", "c", "ch", "j", "jh", "ny", "tt", // U+0918
    "tth", "dd", "ddh", "nn", "t", "th", "d", "dh", // U+0920
    "n", "nnn", "p", "ph", "b", "bh", "m", "y", // U+0928
    "r", "rr", "l", "l", "lll", "v", "sh", "ss", // U+0930
    "s", "h", "", "", "", "'", "aa", "i", // U+0938
    "ii", "u", "uu", "R", "RR", "eN", "e", "e", // U+0940
    "ai", "oN", "o", "o", "au", "", "e", "aw", // U+0948
    "AUM", "", "", "", "", "e", "ue", "ue", // U+0950
    "q", "khh", "ghh", "z", "dddh", "rh", "f", "yy", // U+0958
    "RR", "LL", "L", "LL", " / ", " // ", "0", "1", // U+0960
    "2", "3", "4", "5", "6", "7", "8", "9", // U+0968
    ".", "", "a", "aa", "aw", "ue", "ue", "uue", // U+0970
    "g", "z", "dd", "", "zh", "j", "dd", "bb", // U+0978
];

pub(super) fn lookup(c: char) -> Option<&'static str> {
    let cp = c as u32;
    match cp {
        0x0900..=0x097F => Some(DEVANAGARI[(cp - 0x900) as usize]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn map(s: &str) -> String {
        s.chars().map(|c| lookup(c).unwrap_or("?")).collect()
    }

    #[test]
    fn test_vowel_signs_and_bare_consonants() {
        assert_eq!(map("मोनिच"), "monic");
    }

    #[test]
    fn test_virama_joins_consonants() {
        assert_eq!(map("क्ष"), "kss");
        assert_eq!(map("नमस्ते"), "nmste");
    }

    #[test]
    fn test_independent_vowels_and_digits() {
        assert_eq!(map("आ"), "aa");
        assert_eq!(map("१२३"), "123");
        assert_eq!(map("ॐ"), "AUM");
    }
}
