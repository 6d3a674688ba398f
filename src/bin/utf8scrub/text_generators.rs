//! Synthetic text generators for benchmarking and testing.
//!
//! Every pattern except [`TextPattern::Garbage`] produces valid UTF-8.
//! Malformed sequences are mixed in afterwards at a chosen density.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pattern types for text generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPattern {
    /// Pure ASCII (7-bit, single-byte sequences)
    Ascii,
    /// Latin characters with diacritics (2-byte sequences)
    Latin,
    /// Greek and Cyrillic (2-byte sequences)
    GreekCyrillic,
    /// Chinese/Japanese/Korean (3-byte sequences)
    Cjk,
    /// Arabic, Hebrew and Devanagari words
    RightToLeft,
    /// Emoji and symbols (4-byte sequences)
    Emoji,
    /// Words separated by assorted Unicode whitespace
    Whitespace,
    /// Mixed realistic content (prose with occasional non-ASCII)
    Mixed,
    /// Uniform mix of all sequence lengths (1-4 bytes)
    AllLengths,
    /// Malformed sequences only
    Garbage,
}

impl TextPattern {
    /// All patterns, in the order the benchmark reports them.
    pub const ALL: [TextPattern; 10] = [
        TextPattern::Ascii,
        TextPattern::Latin,
        TextPattern::GreekCyrillic,
        TextPattern::Cjk,
        TextPattern::RightToLeft,
        TextPattern::Emoji,
        TextPattern::Whitespace,
        TextPattern::Mixed,
        TextPattern::AllLengths,
        TextPattern::Garbage,
    ];

    /// Directory-friendly name.
    pub fn name(self) -> &'static str {
        match self {
            TextPattern::Ascii => "ascii",
            TextPattern::Latin => "latin",
            TextPattern::GreekCyrillic => "greek_cyrillic",
            TextPattern::Cjk => "cjk",
            TextPattern::RightToLeft => "right_to_left",
            TextPattern::Emoji => "emoji",
            TextPattern::Whitespace => "whitespace",
            TextPattern::Mixed => "mixed",
            TextPattern::AllLengths => "all_lengths",
            TextPattern::Garbage => "garbage",
        }
    }
}

const SENTENCES: [&str; 8] = [
    "The quick brown fox jumps over the lazy dog.",
    "Pack my box with five dozen liquor jugs.",
    "How vexingly quick daft zebras jump!",
    "The five boxing wizards jump quickly.",
    "Sphinx of black quartz, judge my vow.",
    "Two driven jocks help fax my big quiz.",
    "A wizard's job is to vex chumps quickly in fog.",
    "Watch Jeopardy!, Alex Trebek's fun TV quiz game.",
];

const LATIN: [&str; 20] = [
    "café", "résumé", "naïve", "über", "fiancée", "déjà", "façade", "jalapeño", "señor",
    "mañana", "Ångström", "smörgåsbord", "Müller", "Größe", "Köln", "Zürich", "Ærø", "Øresund",
    "Łódź", "Wrocław",
];

const GREEK_CYRILLIC: [&str; 16] = [
    "άλφα", "βήτα", "γάμμα", "δέλτα", "λάμδα", "σίγμα", "ωμέγα", "Ελλάδα", "Москва",
    "привет", "спасибо", "жизнь", "щука", "Україна", "Київ", "ёлка",
];

const CJK: [&str; 16] = [
    "中文", "日本語", "你好", "世界", "北京", "東京", "学生", "大学", "ひらがな", "カタカナ",
    "ありがとう", "コンピュータ", "한국어", "안녕하세요", "서울", "감사합니다",
];

const RIGHT_TO_LEFT: [&str; 12] = [
    "مرحبا", "العربية", "كتاب", "سلام", "שלום", "עברית", "ספר", "בראשית", "नमस्ते",
    "हिन्दी", "भारत", "संस्कृत",
];

const EMOJI: [&str; 16] = [
    "😀", "😂", "🥰", "😎", "🤔", "👍", "🎉", "🔥", "💯", "🚀", "🌍", "🍕", "🐍", "🦀",
    "❤️", "✨",
];

/// Every entry of the whitespace table except ASCII space.
const SPACES: [char; 20] = [
    '\u{00A0}', '\u{1680}', '\u{180E}', '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}',
    '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}', '\u{200A}',
    '\u{200B}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}',
];

/// Malformed byte sequences, one per failure class.
const MALFORMED: [&[u8]; 12] = [
    &[0x80],                         // orphan continuation
    &[0xBF, 0xBF],                   // orphan run
    &[0xC3],                         // truncated 2-byte
    &[0xE2, 0x82],                   // truncated 3-byte
    &[0xF0, 0x9F, 0x98],             // truncated 4-byte
    &[0xC0, 0xAF],                   // overlong '/'
    &[0xE0, 0x80, 0xAF],             // overlong 3-byte
    &[0xED, 0xA0, 0x80],             // surrogate
    &[0xF4, 0x90, 0x80, 0x80],       // above U+10FFFF
    &[0xFE],                         // forbidden
    &[0xFF, 0xFE],                   // UTF-16 LE mark
    &[0xF8, 0x88, 0x80, 0x80, 0x80], // legacy 5-byte
];

/// Generate text of exactly `target_size` bytes.
///
/// With `invalid_density > 0` that fraction of characters is followed by a
/// malformed sequence, and the result is truncated to `target_size`.
pub fn generate_text(
    target_size: usize,
    pattern: TextPattern,
    seed: Option<u64>,
    invalid_density: f64,
) -> Vec<u8> {
    let mut rng = seed.map(ChaCha8Rng::seed_from_u64);

    let mut result = match pattern {
        TextPattern::Ascii => fill_words(target_size, &SENTENCES, &mut rng),
        TextPattern::Latin => fill_words(target_size, &LATIN, &mut rng),
        TextPattern::GreekCyrillic => fill_words(target_size, &GREEK_CYRILLIC, &mut rng),
        TextPattern::Cjk => fill_words(target_size, &CJK, &mut rng),
        TextPattern::RightToLeft => fill_words(target_size, &RIGHT_TO_LEFT, &mut rng),
        TextPattern::Emoji => fill_words(target_size, &EMOJI, &mut rng),
        TextPattern::Whitespace => generate_whitespace(target_size, &mut rng),
        TextPattern::Mixed => generate_mixed(target_size, &mut rng),
        TextPattern::AllLengths => generate_all_lengths(target_size, &mut rng),
        TextPattern::Garbage => generate_garbage(target_size, &mut rng),
    };

    if invalid_density > 0.0 && pattern != TextPattern::Garbage {
        // Injection always needs randomness; fall back to a fixed seed
        let mut inject_rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or(0x5EED));
        result = inject_invalid(&result, invalid_density, &mut inject_rng);
        result.truncate(target_size);
    }
    result
}

fn pick<'a, T>(items: &'a [T], rng: &mut Option<ChaCha8Rng>, fallback: usize) -> &'a T {
    let idx = rng
        .as_mut()
        .map(|r| r.gen_range(0..items.len()))
        .unwrap_or(fallback % items.len());
    &items[idx]
}

/// Words joined by spaces and wrapped at 80 bytes, padded with spaces.
fn fill_words(target_size: usize, words: &[&str], rng: &mut Option<ChaCha8Rng>) -> Vec<u8> {
    let mut result = Vec::with_capacity(target_size);
    let mut line_len = 0;
    let mut n = 0;

    while result.len() < target_size {
        let word = pick(words, rng, n).as_bytes();
        n += 1;

        let sep = usize::from(line_len > 0);
        if result.len() + sep + word.len() > target_size {
            break;
        }
        if line_len > 0 && line_len + word.len() + 1 > 80 {
            result.push(b'\n');
            line_len = 0;
        } else if line_len > 0 {
            result.push(b' ');
            line_len += 1;
        }
        result.extend_from_slice(word);
        line_len += word.len();
    }

    result.resize(target_size, b' ');
    result
}

fn generate_whitespace(target_size: usize, rng: &mut Option<ChaCha8Rng>) -> Vec<u8> {
    let mut result = Vec::with_capacity(target_size);
    let mut buf = [0u8; 4];
    let mut n = 0;

    while result.len() < target_size {
        let word = pick(&LATIN, rng, n).as_bytes();
        let space = pick(&SPACES, rng, n).encode_utf8(&mut buf).as_bytes();
        n += 1;
        if result.len() + word.len() + space.len() > target_size {
            break;
        }
        result.extend_from_slice(word);
        result.extend_from_slice(space);
    }

    result.resize(target_size, b' ');
    result
}

fn generate_mixed(target_size: usize, rng: &mut Option<ChaCha8Rng>) -> Vec<u8> {
    let mut result = Vec::with_capacity(target_size);
    let mut n = 0;

    while result.len() < target_size {
        let chunk: &str = match n % 7 {
            2 => *pick(&LATIN, rng, n),
            4 => *pick(&CJK, rng, n),
            6 => *pick(&EMOJI, rng, n),
            _ => *pick(&SENTENCES, rng, n),
        };
        n += 1;
        if result.len() + chunk.len() + 1 > target_size {
            break;
        }
        result.extend_from_slice(chunk.as_bytes());
        result.push(if n % 5 == 0 { b'\n' } else { b' ' });
    }

    result.resize(target_size, b' ');
    result
}

fn generate_all_lengths(target_size: usize, rng: &mut Option<ChaCha8Rng>) -> Vec<u8> {
    const RANGES: [(u32, u32); 4] = [
        (0x21, 0x7E),
        (0xC0, 0x17F),
        (0x4E00, 0x9FFF),
        (0x1F600, 0x1F64F),
    ];

    let mut result = Vec::with_capacity(target_size);
    let mut buf = [0u8; 4];
    let mut n: u32 = 0;

    loop {
        let (lo, hi) = RANGES[n as usize % RANGES.len()];
        let cp = match rng.as_mut() {
            Some(r) => r.gen_range(lo..=hi),
            None => lo + n % (hi - lo + 1),
        };
        n = n.wrapping_add(1);
        let Some(c) = char::from_u32(cp) else {
            continue;
        };
        let encoded = c.encode_utf8(&mut buf).as_bytes();
        if result.len() + encoded.len() > target_size {
            break;
        }
        result.extend_from_slice(encoded);
    }

    result.resize(target_size, b' ');
    result
}

fn generate_garbage(target_size: usize, rng: &mut Option<ChaCha8Rng>) -> Vec<u8> {
    let mut result = Vec::with_capacity(target_size + 5);
    let mut n = 0;
    while result.len() < target_size {
        result.extend_from_slice(*pick(&MALFORMED, rng, n));
        n += 1;
    }
    result.truncate(target_size);
    result
}

/// Insert malformed sequences after roughly `density` of the characters.
fn inject_invalid(input: &[u8], density: f64, rng: &mut ChaCha8Rng) -> Vec<u8> {
    let mut result = Vec::with_capacity(input.len() + input.len() / 8);
    for (i, &byte) in input.iter().enumerate() {
        result.push(byte);
        let at_boundary = input.get(i + 1).map_or(true, |&next| next & 0xC0 != 0x80);
        if at_boundary && rng.gen_bool(density) {
            result.extend_from_slice(MALFORMED[rng.gen_range(0..MALFORMED.len())]);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use utf8scrub::is_valid_utf8;

    #[test]
    fn test_exact_size_and_valid() {
        for pattern in TextPattern::ALL {
            for size in [0, 1, 7, 100, 4096] {
                let text = generate_text(size, pattern, Some(42), 0.0);
                assert_eq!(text.len(), size, "{:?} at {}", pattern, size);
                if pattern != TextPattern::Garbage {
                    assert!(is_valid_utf8(&text), "{:?} at {}", pattern, size);
                }
            }
        }
    }

    #[test]
    fn test_unseeded_is_deterministic() {
        for pattern in TextPattern::ALL {
            let a = generate_text(1000, pattern, None, 0.0);
            let b = generate_text(1000, pattern, None, 0.0);
            assert_eq!(a, b, "{:?}", pattern);
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let a = generate_text(2048, TextPattern::Mixed, Some(7), 0.05);
        let b = generate_text(2048, TextPattern::Mixed, Some(7), 0.05);
        assert_eq!(a, b);
    }

    #[test]
    fn test_injection_makes_invalid() {
        let text = generate_text(4096, TextPattern::Cjk, Some(1), 0.1);
        assert_eq!(text.len(), 4096);
        assert!(!is_valid_utf8(&text));
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(!is_valid_utf8(&generate_text(64, TextPattern::Garbage, None, 0.0)));
    }

    #[test]
    fn test_malformed_samples_are_invalid() {
        for sample in MALFORMED {
            assert!(!is_valid_utf8(sample), "{:02X?}", sample);
        }
    }

    #[test]
    fn test_spaces_match_library_table() {
        let table: Vec<char> = utf8scrub::whitespace_codepoints().filter(|&c| c != ' ').collect();
        assert_eq!(table, SPACES);
    }
}
