//! Static syllabary tables.
//!
//! The two gojūon tables (46 basic characters each) are the only card
//! source in the system. They are fixed at compile time and row-aligned:
//! `HIRAGANA[i]` and `KATAKANA[i]` share the same reading.

use crate::types::{CharacterEntry, StudyMode};
use once_cell::sync::Lazy;

const fn entry(glyph: &'static str, romaji: &'static str) -> CharacterEntry {
    CharacterEntry { glyph, romaji }
}

/// The 46 basic hiragana in gojūon order
const HIRAGANA: &[CharacterEntry] = &[
    entry("あ", "a"),
    entry("い", "i"),
    entry("う", "u"),
    entry("え", "e"),
    entry("お", "o"),
    entry("か", "ka"),
    entry("き", "ki"),
    entry("く", "ku"),
    entry("け", "ke"),
    entry("こ", "ko"),
    entry("さ", "sa"),
    entry("し", "shi"),
    entry("す", "su"),
    entry("せ", "se"),
    entry("そ", "so"),
    entry("た", "ta"),
    entry("ち", "chi"),
    entry("つ", "tsu"),
    entry("て", "te"),
    entry("と", "to"),
    entry("な", "na"),
    entry("に", "ni"),
    entry("ぬ", "nu"),
    entry("ね", "ne"),
    entry("の", "no"),
    entry("は", "ha"),
    entry("ひ", "hi"),
    entry("ふ", "fu"),
    entry("へ", "he"),
    entry("ほ", "ho"),
    entry("ま", "ma"),
    entry("み", "mi"),
    entry("む", "mu"),
    entry("め", "me"),
    entry("も", "mo"),
    entry("や", "ya"),
    entry("ゆ", "yu"),
    entry("よ", "yo"),
    entry("ら", "ra"),
    entry("り", "ri"),
    entry("る", "ru"),
    entry("れ", "re"),
    entry("ろ", "ro"),
    entry("わ", "wa"),
    entry("を", "wo"),
    entry("ん", "n"),
];

/// The 46 basic katakana in gojūon order
const KATAKANA: &[CharacterEntry] = &[
    entry("ア", "a"),
    entry("イ", "i"),
    entry("ウ", "u"),
    entry("エ", "e"),
    entry("オ", "o"),
    entry("カ", "ka"),
    entry("キ", "ki"),
    entry("ク", "ku"),
    entry("ケ", "ke"),
    entry("コ", "ko"),
    entry("サ", "sa"),
    entry("シ", "shi"),
    entry("ス", "su"),
    entry("セ", "se"),
    entry("ソ", "so"),
    entry("タ", "ta"),
    entry("チ", "chi"),
    entry("ツ", "tsu"),
    entry("テ", "te"),
    entry("ト", "to"),
    entry("ナ", "na"),
    entry("ニ", "ni"),
    entry("ヌ", "nu"),
    entry("ネ", "ne"),
    entry("ノ", "no"),
    entry("ハ", "ha"),
    entry("ヒ", "hi"),
    entry("フ", "fu"),
    entry("ヘ", "he"),
    entry("ホ", "ho"),
    entry("マ", "ma"),
    entry("ミ", "mi"),
    entry("ム", "mu"),
    entry("メ", "me"),
    entry("モ", "mo"),
    entry("ヤ", "ya"),
    entry("ユ", "yu"),
    entry("ヨ", "yo"),
    entry("ラ", "ra"),
    entry("リ", "ri"),
    entry("ル", "ru"),
    entry("レ", "re"),
    entry("ロ", "ro"),
    entry("ワ", "wa"),
    entry("ヲ", "wo"),
    entry("ン", "n"),
];

/// Cached concatenation for mixed mode - built once and reused
static MIXED: Lazy<Vec<CharacterEntry>> = Lazy::new(|| {
    let mut cards = Vec::with_capacity(HIRAGANA.len() + KATAKANA.len());
    cards.extend_from_slice(HIRAGANA);
    cards.extend_from_slice(KATAKANA);
    cards
});

/// The hiragana table in original order
pub fn hiragana() -> &'static [CharacterEntry] {
    HIRAGANA
}

/// The katakana table in original order
pub fn katakana() -> &'static [CharacterEntry] {
    KATAKANA
}

/// Hiragana followed by katakana
pub fn mixed() -> &'static [CharacterEntry] {
    &MIXED
}

/// Source table for a study mode
pub fn for_mode(mode: StudyMode) -> &'static [CharacterEntry] {
    match mode {
        StudyMode::Hiragana => hiragana(),
        StudyMode::Katakana => katakana(),
        StudyMode::Mixed => mixed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_have_46_characters() {
        assert_eq!(hiragana().len(), 46);
        assert_eq!(katakana().len(), 46);
        assert_eq!(mixed().len(), 92);
    }

    #[test]
    fn test_no_empty_glyphs_or_readings() {
        for entry in mixed() {
            assert!(!entry.glyph.is_empty());
            assert!(!entry.romaji.is_empty());
        }
    }

    #[test]
    fn test_glyphs_unique_per_table() {
        for table in [hiragana(), katakana()] {
            let glyphs: HashSet<_> = table.iter().map(|e| e.glyph).collect();
            assert_eq!(glyphs.len(), table.len());
        }
    }

    #[test]
    fn test_tables_are_romaji_aligned() {
        for (h, k) in hiragana().iter().zip(katakana().iter()) {
            assert_eq!(
                h.romaji, k.romaji,
                "rows {} and {} disagree on reading",
                h.glyph, k.glyph
            );
        }
    }

    #[test]
    fn test_for_mode_selects_expected_table() {
        assert_eq!(for_mode(StudyMode::Hiragana)[0].glyph, "あ");
        assert_eq!(for_mode(StudyMode::Katakana)[0].glyph, "ア");
        assert_eq!(for_mode(StudyMode::Mixed).len(), 92);
    }
}
