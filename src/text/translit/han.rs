//! CJK Unified Ideographs (U+4E00-U+9FFF).
//!
//! Every assigned ideograph in the block, simplified and traditional forms
//! alike, romanized as capitalized Mandarin pinyin without tone marks
//! followed by a space so that runs of ideographs read as separate syllables.
//! A few frequent characters carry their everyday reading (`了` as `Le`,
//! `万` as `Wan`) rather than the literary one.

mod table;

use table::IDEOGRAPHS;

pub(super) fn lookup(c: char) -> Option<&'static str> {
    if !('\u{4E00}'..='\u{9FFF}').contains(&c) {
        return None;
    }
    IDEOGRAPHS
        .binary_search_by_key(&c, |&(ideograph, _)| ideograph)
        .ok()
        .map(|index| IDEOGRAPHS[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn map(s: &str) -> String {
        s.chars().map(|c| lookup(c).unwrap_or("?")).collect()
    }

    #[test]
    fn test_table_is_sorted() {
        for pair in IDEOGRAPHS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?}", pair);
        }
    }

    #[test]
    fn test_entries_are_capitalized_syllables() {
        for &(ideograph, romanized) in IDEOGRAPHS.iter() {
            assert!(romanized.ends_with(' '), "{}", ideograph);
            assert!(romanized.starts_with(|c: char| c.is_ascii_uppercase()), "{}", ideograph);
            assert!(romanized.is_ascii());
        }
    }

    #[test]
    fn test_common_words() {
        assert_eq!(map("中文空白"), "Zhong Wen Kong Bai ");
        assert_eq!(map("日本"), "Ri Ben ");
        assert_eq!(map("北京"), "Bei Jing ");
    }

    #[test]
    fn test_traditional_and_simplified_agree() {
        assert_eq!(lookup('國'), lookup('国'));
        assert_eq!(lookup('長'), lookup('长'));
        assert_eq!(lookup('電'), lookup('电'));
    }

    #[test]
    fn test_whole_block_covered() {
        assert_eq!(map("猫龍丁鬱"), "Mao Long Ding Yu ");
        assert_eq!(map("桜寿"), "Ying Shou ");
        assert_eq!(lookup('\u{9FA5}'), Some("Yu "));
        let mapped = ('\u{4E00}'..='\u{9FA5}').filter(|&c| lookup(c).is_some()).count();
        assert_eq!(mapped, 0x9FA5 - 0x4E00 + 1);
    }

    #[test]
    fn test_everyday_readings() {
        assert_eq!(map("了万种"), "Le Wan Zhong ");
    }

    #[test]
    fn test_unassigned_tail_unmapped() {
        assert_eq!(lookup('\u{9FFF}'), None);
        assert_eq!(lookup('a'), None);
    }
}
