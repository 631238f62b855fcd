//! Braille to text lookup tables
//!
//! Every table maps one cell, or a prefix cell followed by one cell, to a
//! text fragment. The tables are plain data; all context handling lives in
//! the [transcoder](crate::transcoder). A [`Tables`] bundle is immutable
//! once built and can be shared between threads.

use std::{collections::HashMap, sync::LazyLock};

pub mod english;
pub mod info;
pub mod japanese;
pub mod nabcc;

/// An immutable mapping from a short cell sequence to a text fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    entries: HashMap<Vec<char>, String>,
    /// Authoring order, kept for listing the table
    order: Vec<Vec<char>>,
}

impl LookupTable {
    /// Build a table from `(braille, text)` pairs. For duplicate keys the
    /// first entry wins.
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        for (braille, text) in entries {
            let key: Vec<char> = braille.chars().collect();
            if !map.contains_key(&key) {
                order.push(key.clone());
                map.insert(key, text.to_string());
            }
        }
        Self {
            entries: map,
            order,
        }
    }

    pub fn get(&self, key: &[char]) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn get_cell(&self, c: char) -> Option<&str> {
        self.get(&[c])
    }

    /// Look up the `len` cells starting at `pos`. A key that would run past
    /// the end of `cells` is no match.
    pub fn get_at(&self, cells: &[char], pos: usize, len: usize) -> Option<&str> {
        cells
            .get(pos..pos.checked_add(len)?)
            .and_then(|key| self.get(key))
    }

    pub fn contains_cell(&self, c: char) -> bool {
        self.get_cell(c).is_some()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate the entries in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.order.iter().filter_map(|key| {
            self.entries
                .get(key)
                .map(|text| (key.iter().collect::<String>(), text.as_str()))
        })
    }
}

/// Names of the tables in a [`Tables`] bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Kana,
    Dakuten,
    Handakuten,
    Youon,
    YouonDakuten,
    YouonHandakuten,
    Dots456,
    Special,
    SpecialDakuten,
    Digits,
    RomanUpper,
    RomanLower,
    InfoUpper,
    InfoLower,
    InfoDigits,
    EnglishUpper,
    EnglishLower,
    EnglishPunctuation,
}

impl TableId {
    pub const ALL: [TableId; 18] = [
        TableId::Kana,
        TableId::Dakuten,
        TableId::Handakuten,
        TableId::Youon,
        TableId::YouonDakuten,
        TableId::YouonHandakuten,
        TableId::Dots456,
        TableId::Special,
        TableId::SpecialDakuten,
        TableId::Digits,
        TableId::RomanUpper,
        TableId::RomanLower,
        TableId::InfoUpper,
        TableId::InfoLower,
        TableId::InfoDigits,
        TableId::EnglishUpper,
        TableId::EnglishLower,
        TableId::EnglishPunctuation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TableId::Kana => "kana",
            TableId::Dakuten => "dakuten",
            TableId::Handakuten => "handakuten",
            TableId::Youon => "youon",
            TableId::YouonDakuten => "youon-dakuten",
            TableId::YouonHandakuten => "youon-handakuten",
            TableId::Dots456 => "dots456",
            TableId::Special => "special",
            TableId::SpecialDakuten => "special-dakuten",
            TableId::Digits => "digits",
            TableId::RomanUpper => "roman-upper",
            TableId::RomanLower => "roman-lower",
            TableId::InfoUpper => "info-upper",
            TableId::InfoLower => "info-lower",
            TableId::InfoDigits => "info-digits",
            TableId::EnglishUpper => "english-upper",
            TableId::EnglishLower => "english-lower",
            TableId::EnglishPunctuation => "english-punctuation",
        }
    }

    pub fn from_name(name: &str) -> Option<TableId> {
        TableId::ALL.into_iter().find(|id| id.name() == name)
    }

    fn source(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            TableId::Kana => japanese::KANA,
            TableId::Dakuten => japanese::DAKUTEN,
            TableId::Handakuten => japanese::HANDAKUTEN,
            TableId::Youon => japanese::YOUON,
            TableId::YouonDakuten => japanese::YOUON_DAKUTEN,
            TableId::YouonHandakuten => japanese::YOUON_HANDAKUTEN,
            TableId::Dots456 => japanese::DOTS_456,
            TableId::Special => japanese::SPECIAL,
            TableId::SpecialDakuten => japanese::SPECIAL_DAKUTEN,
            TableId::Digits => japanese::DIGITS,
            TableId::RomanUpper => japanese::ROMAN_UPPER,
            TableId::RomanLower => japanese::ROMAN_LOWER,
            TableId::InfoUpper => info::UPPER,
            TableId::InfoLower => info::LOWER,
            TableId::InfoDigits => info::DIGITS,
            TableId::EnglishUpper => english::UPPER,
            TableId::EnglishLower => english::LOWER,
            TableId::EnglishPunctuation => english::PUNCTUATION,
        }
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

static STANDARD: LazyLock<Tables> = LazyLock::new(Tables::compile);

/// The complete set of tables the transcoder consults.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    tables: HashMap<TableId, LookupTable>,
    empty: LookupTable,
}

impl Tables {
    /// Build the standard tables from the static data.
    pub fn compile() -> Self {
        let tables = TableId::ALL
            .into_iter()
            .map(|id| (id, LookupTable::new(id.source())))
            .collect();
        Self {
            tables,
            empty: LookupTable::new(&[]),
        }
    }

    /// The standard tables, built once on first use.
    pub fn standard() -> &'static Tables {
        &STANDARD
    }

    pub fn get(&self, id: TableId) -> &LookupTable {
        self.tables.get(&id).unwrap_or(&self.empty)
    }

    /// Replace one table, e.g. to test the transcoder against different data.
    pub fn with(mut self, id: TableId, table: LookupTable) -> Self {
        self.tables.insert(id, table);
        self
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::compile()
    }
}
