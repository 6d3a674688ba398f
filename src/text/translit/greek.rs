//! Greek and Coptic (U+0370-U+03FF) and Greek Extended (U+1F00-U+1FFF).
//!
//! Letter-by-letter romanization. Accents, breathings and iota subscripts are
//! dropped, so polytonic and monotonic spellings romanize alike.

pub(super) fn lookup(c: char) -> Option<&'static str> {
    let s = match c {
        'Α' | 'Ά' => "A",
        'α' | 'ά' => "a",
        'Β' => "B",
        'β' | 'ϐ' => "b",
        'Γ' => "G",
        'γ' => "g",
        'Δ' => "D",
        'δ' => "d",
        'Ε' | 'Έ' | 'Η' | 'Ή' => "E",
        'ε' | 'έ' | 'η' | 'ή' | 'ϵ' => "e",
        'Ζ' => "Z",
        'ζ' => "z",
        'Θ' | 'ϴ' => "Th",
        'θ' | 'ϑ' => "th",
        'Ι' | 'Ί' | 'Ϊ' => "I",
        'ι' | 'ί' | 'ϊ' | 'ΐ' => "i",
        'Κ' | 'Ϗ' => "K",
        'κ' | 'ϰ' => "k",
        'Λ' => "L",
        'λ' => "l",
        'Μ' => "M",
        'μ' => "m",
        'Ν' => "N",
        'ν' => "n",
        'Ξ' => "X",
        'ξ' => "x",
        'Ο' | 'Ό' | 'Ω' | 'Ώ' => "O",
        'ο' | 'ό' | 'ω' | 'ώ' => "o",
        'Π' => "P",
        'π' | 'ϖ' => "p",
        'Ρ' => "R",
        'ρ' | 'ϱ' => "r",
        'Σ' | 'Ϲ' => "S",
        'σ' | 'ς' | 'ϲ' => "s",
        'Τ' => "T",
        'τ' => "t",
        'Υ' | 'Ύ' | 'Ϋ' | 'ϒ' | 'ϓ' | 'ϔ' => "U",
        'υ' | 'ύ' | 'ϋ' | 'ΰ' => "u",
        'Φ' => "Ph",
        'φ' | 'ϕ' => "ph",
        'Χ' => "Kh",
        'χ' => "kh",
        'Ψ' => "Ps",
        'ψ' => "ps",
        '\u{0374}' | '\u{0384}' | '\u{0385}' => "'",
        '\u{037E}' | '\u{0387}' => ";",
        '\u{037A}' => "",
        _ => return extended(c),
    };
    Some(s)
}

/// Polytonic letters: every precomposed form reduces to its base vowel.
fn extended(c: char) -> Option<&'static str> {
    let s = match c as u32 {
        0x1F00..=0x1F07 | 0x1F70..=0x1F71 | 0x1F80..=0x1F87 | 0x1FB0..=0x1FB4 | 0x1FB6..=0x1FB7 => {
            "a"
        }
        0x1F08..=0x1F0F | 0x1F88..=0x1F8F | 0x1FB8..=0x1FBC => "A",
        0x1F10..=0x1F15 | 0x1F20..=0x1F27 | 0x1F72..=0x1F75 | 0x1F90..=0x1F97 => "e",
        0x1FC2..=0x1FC4 | 0x1FC6..=0x1FC7 => "e",
        0x1F18..=0x1F1D | 0x1F28..=0x1F2F | 0x1F98..=0x1F9F | 0x1FC8..=0x1FCC => "E",
        0x1F30..=0x1F37 | 0x1F76..=0x1F77 | 0x1FD0..=0x1FD3 | 0x1FD6..=0x1FD7 => "i",
        0x1F38..=0x1F3F | 0x1FD8..=0x1FDB => "I",
        0x1F40..=0x1F45 | 0x1F60..=0x1F67 | 0x1F78..=0x1F79 | 0x1F7C..=0x1F7D => "o",
        0x1FA0..=0x1FA7 | 0x1FF2..=0x1FF4 | 0x1FF6..=0x1FF7 => "o",
        0x1F48..=0x1F4D | 0x1F68..=0x1F6F | 0x1FA8..=0x1FAF | 0x1FF8..=0x1FFC => "O",
        0x1F50..=0x1F57 | 0x1F7A..=0x1F7B | 0x1FE0..=0x1FE3 | 0x1FE6..=0x1FE7 => "u",
        0x1F59 | 0x1F5B | 0x1F5D | 0x1F5F | 0x1FE8..=0x1FEB => "U",
        0x1FE4..=0x1FE5 => "r",
        0x1FEC => "R",
        0x1FBD | 0x1FBF | 0x1FFD | 0x1FFE => "'",
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
            .map(|c| if c.is_ascii() { c.to_string() } else { lookup(c).unwrap_or("?").to_string() })
            .collect()
    }

    #[test]
    fn test_monotonic() {
        assert_eq!(map("κόσμε"), "kosme");
        assert_eq!(map("Αυτή είναι μια δοκιμή"), "Aute einai mia dokime");
    }

    #[test]
    fn test_final_sigma() {
        assert_eq!(map("σσς"), "sss");
    }

    #[test]
    fn test_digraph_letters() {
        assert_eq!(map("θεός χάος ψυχή φως"), "theos khaos psukhe phos");
        assert_eq!(map("ΘΦΧΨ"), "ThPhKhPs");
    }

    #[test]
    fn test_polytonic_matches_monotonic() {
        assert_eq!(map("ἄνθρωπος"), map("άνθρωπος"));
        assert_eq!(map("ᾠδή"), "ode");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(lookup('\u{037E}'), Some(";"));
        assert_eq!(lookup('\u{0387}'), Some(";"));
    }

    #[test]
    fn test_unassigned() {
        assert_eq!(lookup('\u{03A2}'), None);
        assert_eq!(lookup('\u{1F16}'), None);
    }
}
