//! Hebrew (U+0590-U+05FF) and Arabic (U+0600-U+06FF).
//!
//! Consonantal spelling: vowel points and harakat are dropped, and letters
//! without a Latin counterpart use the conventional case-marked forms
//! (`H` for hah, `S` for sad).

pub(super) fn lookup(c: char) -> Option<&'static str> {
    match c as u32 {
        0x0590..=0x05FF => hebrew(c),
        0x0600..=0x06FF => arabic(c),
        _ => None,
    }
}

fn hebrew(c: char) -> Option<&'static str> {
    let s = match c {
        // Cantillation marks and vowel points.
        '\u{0591}'..='\u{05BD}' | '\u{05BF}' | '\u{05C1}' | '\u{05C2}' | '\u{05C4}'..='\u{05C7}' => "",
        '\u{05BE}' => "-",
        '\u{05C0}' => "|",
        '\u{05C3}' => ":",
        'א' => "A",
        'ב' => "b",
        'ג' => "g",
        'ד' => "d",
        'ה' => "h",
        'ו' => "v",
        'ז' => "z",
        'ח' => "KH",
        'ט' => "t",
        'י' => "y",
        'ך' | 'כ' => "k",
        'ל' => "l",
        'ם' | 'מ' => "m",
        'ן' | 'נ' => "n",
        'ס' => "s",
        'ע' => "`",
        'ף' | 'פ' => "p",
        'ץ' | 'צ' => "TS",
        'ק' => "q",
        'ר' => "r",
        'ש' => "SH",
        'ת' => "t",
        '\u{05F0}' => "V",
        '\u{05F1}' => "oy",
        '\u{05F2}' => "i",
        '\u{05F3}' => "'",
        '\u{05F4}' => "\"",
        _ => return None,
    };
    Some(s)
}

fn arabic(c: char) -> Option<&'static str> {
    let cp = c as u32;
    let s = match cp {
        // Harakat, tanwin, shadda, sukun and the superscript alef.
        0x064B..=0x065F | 0x0670 => "",
        0x0660..=0x0669 => DIGITS[(cp - 0x660) as usize],
        0x06F0..=0x06F9 => DIGITS[(cp - 0x6F0) as usize],
        _ => match c {
            '\u{060C}' => ",",
            '\u{061B}' => ";",
            '\u{061F}' => "?",
            '\u{066A}' => "%",
            '\u{066B}' => ".",
            '\u{066C}' => ",",
            '\u{06D4}' => ".",
            'ء' => "'",
            'آ' | 'أ' | 'ا' | 'ى' | 'ٱ' => "a",
            'ؤ' => "w",
            'إ' => "i",
            'ئ' | 'ي' | 'ی' => "y",
            'ب' => "b",
            'ة' => "h",
            'ت' => "t",
            'ث' => "th",
            'ج' => "j",
            'ح' => "H",
            'خ' => "kh",
            'د' => "d",
            'ذ' => "dh",
            'ر' => "r",
            'ز' => "z",
            'س' => "s",
            'ش' => "sh",
            'ص' => "S",
            'ض' => "D",
            'ط' => "T",
            'ظ' => "Z",
            'ع' => "`",
            'غ' => "G",
            'ـ' => "",
            'ف' => "f",
            'ق' => "q",
            'ك' | 'ک' => "k",
            'ل' => "l",
            'م' => "m",
            'ن' => "n",
            'ه' | 'ہ' | 'ھ' => "h",
            'و' => "w",
            'پ' => "p",
            'چ' => "ch",
            'ژ' => "zh",
            'گ' => "g",
            _ => return None,
        },
    };
    Some(s)
}

static DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn map(s: &str) -> String {
        s.chars().map(|c| lookup(c).unwrap_or("?")).collect()
    }

    #[test]
    fn test_arabic_letters() {
        assert_eq!(map("أحبك"), "aHbk");
        assert_eq!(map("أبز"), "abz");
    }

    #[test]
    fn test_arabic_diacritics_dropped() {
        // kataba with fatha on every letter
        assert_eq!(map("كَتَبَ"), "ktb");
        assert_eq!(map("مُحَمَّد"), "mHmd");
    }

    #[test]
    fn test_arabic_digits() {
        assert_eq!(map("٢٠٢٤"), "2024");
        assert_eq!(map("۱۹"), "19");
    }

    #[test]
    fn test_hebrew() {
        assert_eq!(map("שלום"), "SHlvm");
        assert_eq!(map("בְּרֵאשִׁית"), "brASHyt");
    }

    #[test]
    fn test_outside_blocks() {
        assert_eq!(lookup('a'), None);
        assert_eq!(lookup('\u{0700}'), None);
    }
}
