//! Cyrillic (U+0400-U+045F and the common letters of U+0460-U+04FF).

/// U+0410-U+042F; the lowercase block U+0430-U+044F romanizes identically
/// apart from case.
#[rustfmt::skip]
static BASIC_UPPER: [&str; 32] = [
    "A", "B", "V", "G", "D", "E", "Zh", "Z", // U+0410
    "I", "I", "K", "L", "M", "N", "O", "P", // U+0418
    "R", "S", "T", "U", "F", "Kh", "Ts", "Ch", // U+0420
    "Sh", "Shch", "\"", "Y", "'", "E", "Iu", "Ia", // U+0428
];

#[rustfmt::skip]
static BASIC_LOWER: [&str; 32] = [
    "a", "b", "v", "g", "d", "e", "zh", "z", // U+0430
    "i", "i", "k", "l", "m", "n", "o", "p", // U+0438
    "r", "s", "t", "u", "f", "kh", "ts", "ch", // U+0440
    "sh", "shch", "\"", "y", "'", "e", "iu", "ia", // U+0448
];

/// U+0400-U+040F; U+0450-U+045F are the lowercase forms.
#[rustfmt::skip]
static EXTENDED_UPPER: [&str; 16] = [
    "Ie", "Io", "Dj", "Gj", "Ie", "Dz", "I", "Yi", // U+0400
    "J", "Lj", "Nj", "Tsh", "Kj", "I", "U", "Dzh", // U+0408
];

#[rustfmt::skip]
static EXTENDED_LOWER: [&str; 16] = [
    "ie", "io", "dj", "gj", "ie", "dz", "i", "yi", // U+0450
    "j", "lj", "nj", "tsh", "kj", "i", "u", "dzh", // U+0458
];

pub(super) fn lookup(c: char) -> Option<&'static str> {
    let cp = c as u32;
    let s = match cp {
        0x0400..=0x040F => EXTENDED_UPPER[(cp - 0x400) as usize],
        0x0410..=0x042F => BASIC_UPPER[(cp - 0x410) as usize],
        0x0430..=0x044F => BASIC_LOWER[(cp - 0x430) as usize],
        0x0450..=0x045F => EXTENDED_LOWER[(cp - 0x450) as usize],
        _ => return supplementary(c),
    };
    Some(s)
}

/// Letters of the non-Russian alphabets that are still in everyday use.
fn supplementary(c: char) -> Option<&'static str> {
    let s = match c {
        'Ґ' => "G",
        'ґ' => "g",
        'Ғ' => "Gh",
        'ғ' => "gh",
        'Җ' => "Zh",
        'җ' => "zh",
        'Қ' => "Q",
        'қ' => "q",
        'Ң' => "Ng",
        'ң' => "ng",
        'Ү' | 'Ұ' => "U",
        'ү' | 'ұ' => "u",
        'Һ' => "H",
        'һ' => "h",
        'Ә' => "A",
        'ә' => "a",
        'Ө' => "O",
        'ө' => "o",
        '\u{04C0}' => "I",
        '\u{04CF}' => "i",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn map(s: &str) -> String {
        s.chars().map(|c| lookup(c).unwrap_or("?")).collect()
    }

    #[test]
    fn test_russian() {
        assert_eq!(map("биологическом"), "biologicheskom");
        assert_eq!(map("Щука"), "Shchuka");
        assert_eq!(map("Юлия"), "Iuliia");
    }

    #[test]
    fn test_case_tables_agree() {
        for (upper, lower) in BASIC_UPPER.iter().zip(BASIC_LOWER.iter()) {
            assert_eq!(upper.to_lowercase(), *lower);
        }
        for (upper, lower) in EXTENDED_UPPER.iter().zip(EXTENDED_LOWER.iter()) {
            assert_eq!(upper.to_lowercase(), *lower);
        }
    }

    #[test]
    fn test_other_alphabets() {
        assert_eq!(map("Їжак"), "Yizhak");
        assert_eq!(map("ґанок"), "ganok");
        assert_eq!(map("Қазақ"), "Qazaq");
        assert_eq!(map("Љубљана"), "Ljubljana");
    }

    #[test]
    fn test_unmapped() {
        assert_eq!(lookup('\u{0460}'), None);
    }
}
