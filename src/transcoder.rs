//! Unicode braille to katakana
//!
//! The [`Transcoder`] walks the cells left to right. At each position
//! [`Transcoder::step`] looks at the current cell and decides, with at most
//! two cells of look-ahead in the top level grammar, what it stands for:
//! a kana, a punctuation mark, or a prefix that opens one of the
//! sub-grammars
//! * [`numeric`]: numbers after ⠼
//! * [`roman`]: Roman letters after ⠰
//! * [`quote`]: English braille between ⠦ and ⠴
//! * [`annotation`]: information processing braille between ⠠⠦ and ⠠⠴
//!
//! Every transition is a pure function of the cells and a start index and
//! returns a [`Step`] with the produced text and the index of the first
//! cell it did not consume. Mode state such as [`Capitals`] lives inside
//! the sub-grammar that owns it.

use crate::{
    cell::BrailleDocument,
    tables::{TableId, Tables},
};

pub mod annotation;
pub mod numeric;
pub mod quote;
pub mod roman;

/// Numeric prefix ⠼
pub const NUMERIC: char = '⠼';
/// Roman letter prefix ⠰, also the 、 mark before a separator
pub const ROMAN: char = '⠰';
/// Opening mark of foreign text ⠦
pub const QUOTE_OPEN: char = '⠦';
/// Closing mark of foreign text ⠴
pub const QUOTE_CLOSE: char = '⠴';
/// Capital sign ⠠, the semi-voiced prefix in kana context
pub const CAPITAL: char = '⠠';
/// First kagi bracket ⠤
pub const KAGI: char = '⠤';
/// The blank cell
pub const BLANK: char = '⠀';

/// Cells that count as a word boundary after ⠰
pub const SEPARATORS: [char; 4] = [BLANK, KAGI, '\r', '\n'];

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Width of the digits a numeric run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    /// Fullwidth digits, `、` between number groups
    #[default]
    Full,
    /// ASCII digits, `,` between number groups
    Half,
}

impl Width {
    pub fn digit_table(&self) -> TableId {
        match self {
            Width::Full => TableId::Digits,
            Width::Half => TableId::InfoDigits,
        }
    }

    pub fn separator(&self) -> &'static str {
        match self {
            Width::Full => "、",
            Width::Half => ",",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeOptions {
    /// Digits after a top level ⠼
    pub digits: Width,
    /// Digits inside foreign quotes and annotations
    pub embedded_digits: Width,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            digits: Width::Full,
            embedded_digits: Width::Half,
        }
    }
}

impl TranscodeOptions {
    pub fn with_digits(self, digits: Width) -> Self {
        Self { digits, ..self }
    }

    pub fn with_embedded_digits(self, embedded_digits: Width) -> Self {
        Self {
            embedded_digits,
            ..self
        }
    }
}

/// Capitalisation state of the letter sub-grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capitals {
    #[default]
    None,
    /// Capitalise the next letter only
    Next,
    /// Capitalise until the mode is reset
    All,
}

impl Capitals {
    /// State after a capital sign. A doubled sign switches to [`Capitals::All`],
    /// a single one does not downgrade it.
    pub fn after_sign(self, doubled: bool) -> Self {
        match (self, doubled) {
            (_, true) | (Capitals::All, false) => Capitals::All,
            _ => Capitals::Next,
        }
    }
}

/// The result of one transition
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Step {
    /// Text produced by the transition
    pub output: String,
    /// Index of the first cell not consumed
    pub next: usize,
}

impl Step {
    pub fn new(output: impl Into<String>, next: usize) -> Self {
        Self {
            output: output.into(),
            next,
        }
    }

    /// Consume cells without output.
    pub fn skip(next: usize) -> Self {
        Self::new(String::new(), next)
    }
}

/// Cells with a meaning of their own at the top level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Numeric,
    Roman,
    ForeignQuote,
    Kagi,
    /// ⠲: 。 or a voiced special sound
    Period,
    /// ⠢: ？ or a special sound
    Question,
    Dots456,
    YouonHandakuten,
    YouonDakuten,
    Youon,
    /// ⠠: semi-voiced sound, ＞ or an annotation
    Handakuten,
    /// ⠐: voiced sound, ッ when nothing matches
    Dakuten,
}

impl Prefix {
    pub fn from_cell(c: char) -> Option<Prefix> {
        match c {
            NUMERIC => Some(Prefix::Numeric),
            ROMAN => Some(Prefix::Roman),
            QUOTE_OPEN => Some(Prefix::ForeignQuote),
            KAGI => Some(Prefix::Kagi),
            '⠲' => Some(Prefix::Period),
            '⠢' => Some(Prefix::Question),
            '⠸' => Some(Prefix::Dots456),
            '⠨' => Some(Prefix::YouonHandakuten),
            '⠘' => Some(Prefix::YouonDakuten),
            '⠈' => Some(Prefix::Youon),
            CAPITAL => Some(Prefix::Handakuten),
            '⠐' => Some(Prefix::Dakuten),
            _ => None,
        }
    }
}

/// Transcodes Unicode braille to katakana text with a fixed set of tables.
///
/// A `Transcoder` holds no state between calls; one instance can serve any
/// number of documents, also from several threads.
#[derive(Debug, Clone, Copy)]
pub struct Transcoder<'t> {
    tables: &'t Tables,
    options: TranscodeOptions,
}

impl Default for Transcoder<'static> {
    fn default() -> Self {
        Self::new(Tables::standard(), TranscodeOptions::default())
    }
}

impl<'t> Transcoder<'t> {
    pub fn new(tables: &'t Tables, options: TranscodeOptions) -> Self {
        Self { tables, options }
    }

    pub fn tables(&self) -> &'t Tables {
        self.tables
    }

    pub fn options(&self) -> &TranscodeOptions {
        &self.options
    }

    pub fn transcode(&self, input: &str) -> String {
        let cells: Vec<char> = input.chars().collect();
        self.transcode_cells(&cells)
    }

    pub fn transcode_document(&self, document: &BrailleDocument) -> String {
        self.transcode(document.as_str())
    }

    pub fn transcode_cells(&self, cells: &[char]) -> String {
        let mut output = String::with_capacity(cells.len() * 3);
        let mut pos = 0;
        while pos < cells.len() {
            let step = self.step(cells, pos);
            output.push_str(&step.output);
            pos = step.next.max(pos + 1);
        }
        output
    }

    /// The top level transition at `pos`.
    pub fn step(&self, cells: &[char], pos: usize) -> Step {
        let Some(&c) = cells.get(pos) else {
            return Step::skip(cells.len());
        };
        match Prefix::from_cell(c) {
            Some(Prefix::Numeric) => numeric::run(self, cells, pos, numeric::NumberRun::Kana),
            Some(Prefix::Roman) => roman::run(self, cells, pos),
            Some(Prefix::ForeignQuote) => quote::run(self, cells, pos),
            Some(Prefix::Kagi) => match cells.get(pos + 1) {
                Some(&'⠆') => Step::new("』", pos + 2),
                Some(&'⠂') => Step::new("】", pos + 2),
                _ => self.single(cells, pos),
            },
            Some(Prefix::Period) => self.digraph(TableId::SpecialDakuten, cells, pos, Some("。")),
            Some(Prefix::Question) => self.digraph(TableId::Special, cells, pos, Some("？")),
            Some(Prefix::Dots456) => self.digraph(TableId::Dots456, cells, pos, None),
            Some(Prefix::YouonHandakuten) => {
                self.digraph(TableId::YouonHandakuten, cells, pos, None)
            }
            Some(Prefix::YouonDakuten) => self.digraph(TableId::YouonDakuten, cells, pos, None),
            Some(Prefix::Youon) => self.digraph(TableId::Youon, cells, pos, None),
            Some(Prefix::Handakuten) => match cells.get(pos + 1) {
                Some(&QUOTE_OPEN) => annotation::run(self, cells, pos),
                Some(&'⠆') => Step::new("＞", pos + 2),
                _ => self.digraph(TableId::Handakuten, cells, pos, None),
            },
            Some(Prefix::Dakuten) => self.digraph(TableId::Dakuten, cells, pos, Some("ッ")),
            None => self.single(cells, pos),
        }
    }

    /// Look up the prefix at `pos` together with the following cell. On a
    /// miss only the prefix is consumed and `fallback` is emitted.
    fn digraph(&self, id: TableId, cells: &[char], pos: usize, fallback: Option<&str>) -> Step {
        match self.tables.get(id).get_at(cells, pos, 2) {
            Some(text) => Step::new(text, pos + 2),
            None => Step::new(fallback.unwrap_or_default(), pos + 1),
        }
    }

    /// The base table, or the cell itself when the table has no entry.
    fn single(&self, cells: &[char], pos: usize) -> Step {
        match cells.get(pos) {
            Some(&c) => match self.tables.get(TableId::Kana).get_cell(c) {
                Some(text) => Step::new(text, pos + 1),
                None => Step::new(c.to_string(), pos + 1),
            },
            None => Step::skip(cells.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::LookupTable;

    fn transcode(input: &str) -> String {
        Transcoder::default().transcode(input)
    }

    #[test]
    fn kana() {
        assert_eq!(transcode("⠡⠞⠡⠝"), "カトカツ");
        assert_eq!(transcode("⠝⠡⠇⠀⠕⠞"), "ツカニ　タト");
        assert_eq!(transcode("⠴⠒⠂"), "ンーッ");
    }

    #[test]
    fn line_breaks_pass_through() {
        assert_eq!(transcode("⠁\r\n⠃\n"), "ア\r\nイ\n");
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(transcode("⠁x⠃"), "アxイ");
    }

    #[test]
    fn voiced() {
        assert_eq!(transcode("⠐⠡⠐⠳"), "ガジ");
        assert_eq!(transcode("⠠⠥⠠⠮"), "パポ");
        assert_eq!(transcode("⠈⠡⠘⠹⠨⠮"), "キャジュピョ");
        assert_eq!(transcode("⠢⠥⠲⠧"), "ファヴィ");
        assert_eq!(transcode("⠸⠝"), "デュ");
    }

    #[test]
    fn fallbacks() {
        assert_eq!(transcode("⠲"), "。");
        assert_eq!(transcode("⠲⠀⠀"), "。　　");
        assert_eq!(transcode("⠢"), "？");
        assert_eq!(transcode("⠐"), "ッ");
        assert_eq!(transcode("⠐⠀"), "ッ　");
    }

    #[test]
    fn prefixes_without_match_are_dropped() {
        assert_eq!(transcode("⠈"), "");
        assert_eq!(transcode("⠘⠀"), "　");
        assert_eq!(transcode("⠨⠀"), "　");
        assert_eq!(transcode("⠸⠀"), "　");
        assert_eq!(transcode("⠠⠀"), "　");
        assert_eq!(transcode("⠠"), "");
    }

    #[test]
    fn brackets() {
        assert_eq!(transcode("⠤⠁⠤"), "「ア「");
        assert_eq!(transcode("⠰⠤⠁⠤⠆"), "『ア』");
        assert_eq!(transcode("⠐⠤⠁⠤⠂"), "【ア】");
        assert_eq!(transcode("⠰⠄⠠⠆"), "＜＞");
        assert_eq!(transcode("⠤"), "「");
    }

    #[test]
    fn comma_before_separator() {
        assert_eq!(transcode("⠁⠰⠀⠃"), "ア、　イ");
        assert_eq!(transcode("⠁⠰\r\n"), "ア、\r\n");
        // at the very end there is nothing to look at
        assert_eq!(transcode("⠁⠰"), "ア");
    }

    #[test]
    fn long_vowel_uses_base_table() {
        assert_eq!(transcode("⠒⠂"), "ーッ");
    }

    #[test]
    fn step_reports_next_index() {
        let cells: Vec<char> = "⠐⠡⠁".chars().collect();
        let transcoder = Transcoder::default();
        assert_eq!(transcoder.step(&cells, 0), Step::new("ガ", 2));
        assert_eq!(transcoder.step(&cells, 2), Step::new("ア", 3));
        assert_eq!(transcoder.step(&cells, 3), Step::skip(3));
    }

    #[test]
    fn capitals_after_sign() {
        assert_eq!(Capitals::None.after_sign(false), Capitals::Next);
        assert_eq!(Capitals::Next.after_sign(false), Capitals::Next);
        assert_eq!(Capitals::All.after_sign(false), Capitals::All);
        assert_eq!(Capitals::None.after_sign(true), Capitals::All);
    }

    #[test]
    fn base_table_entries_transcode_to_themselves() {
        let tables = Tables::standard();
        let transcoder = Transcoder::default();
        for (key, text) in tables.get(TableId::Kana).iter() {
            let c = key.chars().next().unwrap();
            match Prefix::from_cell(c) {
                None | Some(Prefix::Kagi) => assert_eq!(transcoder.transcode(&key), text, "{key}"),
                _ => (),
            }
        }
    }

    #[test]
    fn digraph_entries_transcode_to_themselves() {
        let transcoder = Transcoder::default();
        for id in [
            TableId::Dakuten,
            TableId::Handakuten,
            TableId::Youon,
            TableId::YouonDakuten,
            TableId::YouonHandakuten,
            TableId::Dots456,
            TableId::Special,
            TableId::SpecialDakuten,
        ] {
            for (key, text) in Tables::standard().get(id).iter() {
                assert_eq!(transcoder.transcode(&key), text, "{id}: {key}");
            }
        }
    }

    #[test]
    fn context_table_entries_transcode_to_themselves() {
        fn quoted(text: &str) -> String {
            format!("￣{text}￣")
        }
        fn annotated(text: &str) -> String {
            format!("({text})")
        }

        let tables = Tables::standard();
        let check = |transcoder: &Transcoder, id: TableId, wrap: fn(&str) -> String, text: fn(&str) -> String| {
            for (key, glyph) in tables.get(id).iter() {
                assert_eq!(transcoder.transcode(&wrap(&key)), text(glyph), "{id}: {key}");
            }
        };
        let standard = Transcoder::default();
        let halfwidth = Transcoder::new(tables, TranscodeOptions::default().with_digits(Width::Half));

        check(&standard, TableId::Digits, |k| format!("⠼{k}"), str::to_string);
        check(&halfwidth, TableId::InfoDigits, |k| format!("⠼{k}"), str::to_string);
        check(&standard, TableId::RomanLower, |k| format!("⠰{k}"), str::to_string);
        check(&standard, TableId::RomanUpper, |k| format!("⠰⠠{k}"), str::to_string);
        check(&standard, TableId::EnglishPunctuation, |k| format!("⠦{k}⠴"), quoted);
        check(&standard, TableId::EnglishLower, |k| format!("⠦{k}⠴"), quoted);
        check(&standard, TableId::EnglishUpper, |k| format!("⠦⠠{k}⠴"), quoted);
        check(&standard, TableId::InfoUpper, |k| format!("⠠⠦⠠{k}⠠⠴"), annotated);
        for (key, glyph) in tables.get(TableId::InfoLower).iter() {
            // a lone ⠴ closes the annotation itself
            if key == "⠴" {
                continue;
            }
            assert_eq!(standard.transcode(&format!("⠠⠦{key}⠠⠴")), annotated(glyph), "{key}");
        }
    }

    #[test]
    fn number_after_any_cell() {
        let transcoder = Transcoder::default();
        for before in ["", "⠀", "⠁", "⠐", "⠈", "⠰", "⠲", "⠢", "⠤", "⠠"] {
            assert_eq!(
                transcoder.transcode(&format!("{before}⠼⠁⠃⠉")),
                transcoder.transcode(before) + "１２３",
                "{before:?}"
            );
        }
        assert_eq!(transcoder.transcode("⠐⠼⠁⠃⠉"), "ッ１２３");
        assert_eq!(transcoder.transcode("⠰⠼⠁⠃⠉"), "１２３");
    }

    #[test]
    fn substitute_tables() {
        let tables = Tables::compile()
            .with(TableId::Kana, LookupTable::new(&[("⠁", "a")]))
            .with(TableId::Dakuten, LookupTable::new(&[("⠐⠁", "b")]));
        let transcoder = Transcoder::new(&tables, TranscodeOptions::default());
        assert_eq!(transcoder.transcode("⠁⠐⠁⠃"), "ab⠃");
    }

    #[test]
    fn transcoders_share_tables_across_threads() {
        let handles: Vec<_> = ["⠡", "⠐⠡", "⠈⠡"]
            .into_iter()
            .map(|input| std::thread::spawn(move || Transcoder::default().transcode(input)))
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["カ", "ガ", "キャ"]);
    }
}
