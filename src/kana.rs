//! Katakana and hiragana

const KATAKANA_FIRST: char = 'ァ';
const KATAKANA_LAST: char = 'ン';
const HIRAGANA_FIRST: char = 'ぁ';
const HIRAGANA_LAST: char = 'ん';
/// Distance between a katakana and its hiragana code point
const OFFSET: u32 = KATAKANA_FIRST as u32 - HIRAGANA_FIRST as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KanaStyle {
    #[default]
    Katakana,
    Hiragana,
}

impl KanaStyle {
    pub fn apply(&self, text: &str) -> String {
        match self {
            KanaStyle::Katakana => text.to_string(),
            KanaStyle::Hiragana => to_hiragana(text),
        }
    }
}

/// Shift ァ..ン to ぁ..ん. Everything else, including ー and ヴ, is kept.
pub fn to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            KATAKANA_FIRST..=KATAKANA_LAST => char::from_u32(c as u32 - OFFSET).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Shift ぁ..ん to ァ..ン.
pub fn to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            HIRAGANA_FIRST..=HIRAGANA_LAST => char::from_u32(c as u32 + OFFSET).unwrap_or(c),
            _ => c,
        })
        .collect()
}
