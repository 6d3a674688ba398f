//! Hangul syllables (U+AC00-U+D7A3), romanized from their jamo.
//!
//! A precomposed syllable is `SYLLABLE_BASE + (initial * 21 + medial) * 28 + final`;
//! each jamo index selects a fragment and the fragments are concatenated.

use alloc::string::String;

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;

#[rustfmt::skip]
static INITIALS: [&str; 19] = [
    "g", "gg", "n", "d", "dd", "r", "m", "b", "bb", "s",
    "ss", "", "j", "jj", "c", "k", "t", "p", "h",
];

#[rustfmt::skip]
static MEDIALS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae",
    "oe", "yo", "u", "weo", "we", "wi", "yu", "eu", "yi", "i",
];

#[rustfmt::skip]
static FINALS: [&str; 28] = [
    "", "g", "gg", "gs", "n", "nj", "nh", "d", "l", "lg",
    "lm", "lb", "ls", "lt", "lp", "lh", "m", "b", "bs", "s",
    "ss", "ng", "j", "c", "k", "t", "p", "h",
];

/// Whether `c` is a precomposed Hangul syllable.
#[inline]
pub(super) fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Append the romanization of a precomposed syllable to `out`.
///
/// Returns `false`, appending nothing, if `c` is not a syllable.
pub(super) fn romanize(c: char, out: &mut String) -> bool {
    if !is_syllable(c) {
        return false;
    }
    let index = c as u32 - SYLLABLE_BASE;
    let initial = index / (MEDIAL_COUNT * FINAL_COUNT);
    let medial = (index % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT;
    let last = index % FINAL_COUNT;
    out.push_str(INITIALS[initial as usize]);
    out.push_str(MEDIALS[medial as usize]);
    out.push_str(FINALS[last as usize]);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(s: &str) -> String {
        let mut out = String::new();
        for c in s.chars() {
            if !romanize(c, &mut out) {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_names() {
        assert_eq!(map("정, 병호"), "jeong, byeongho");
    }

    #[test]
    fn test_block_bounds() {
        assert_eq!(map("\u{AC00}"), "ga");
        assert_eq!(map("\u{D7A3}"), "hih");
        assert!(!is_syllable('\u{ABFF}'));
        assert!(!is_syllable('\u{D7A4}'));
    }

    #[test]
    fn test_silent_initial() {
        assert_eq!(map("아이"), "ai");
        assert_eq!(map("한국어"), "hangugeo");
    }

    #[test]
    fn test_index_arithmetic_covers_tables() {
        assert_eq!(
            (SYLLABLE_LAST - SYLLABLE_BASE + 1) as usize,
            INITIALS.len() * MEDIALS.len() * FINALS.len()
        );
    }
}
