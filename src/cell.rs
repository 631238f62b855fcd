//! Six-dot braille cells and documents made of them
//!
//! A [`BrailleCell`] is one of the 64 patterns in U+2800..=U+283F. A
//! [`BrailleDocument`] is what the decoders produce: cells interleaved
//! with literal `\r` and `\n`.

use enumset::{EnumSet, EnumSetType};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid dots {character:?}")]
    InvalidDots { character: Option<char> },
    #[error("Invalid cell {character:?} at offset {offset}")]
    InvalidCell { character: char, offset: usize },
}

/// First code point of the Unicode braille block
pub const BRAILLE_BASE: u32 = 0x2800;

#[derive(EnumSetType, Debug)]
pub enum Dot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
}

/// A single six-dot braille cell.
///
/// The dot set doubles as the low six bits of the Unicode code point, so
/// conversion in both directions is a plain offset from [`BRAILLE_BASE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrailleCell(EnumSet<Dot>);

impl From<EnumSet<Dot>> for BrailleCell {
    fn from(value: EnumSet<Dot>) -> Self {
        BrailleCell(value)
    }
}

impl BrailleCell {
    pub const BLANK: BrailleCell = BrailleCell(EnumSet::empty());

    /// The cell whose dot pattern is given by the low six bits of `bits`.
    pub fn from_bits(bits: u8) -> Option<Self> {
        EnumSet::try_from_u8(bits).map(BrailleCell)
    }

    pub fn from_char(c: char) -> Option<Self> {
        let offset = (c as u32).checked_sub(BRAILLE_BASE)?;
        u8::try_from(offset).ok().and_then(Self::from_bits)
    }

    pub fn bits(&self) -> u8 {
        self.0.as_u8()
    }

    pub fn dots(&self) -> EnumSet<Dot> {
        self.0
    }

    /// Dot numbers in ascending order, `"0"` for the blank cell.
    pub fn to_dots(&self) -> String {
        if self.0.is_empty() {
            return "0".to_string();
        }
        self.0
            .iter()
            .map(|dot| char::from(b'1' + dot as u8))
            .collect()
    }

    pub fn to_unicode(&self) -> char {
        // six dots never leave the braille block
        char::from_u32(BRAILLE_BASE | u32::from(self.bits())).unwrap_or('\u{2800}')
    }
}

impl std::fmt::Display for BrailleCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_unicode())
    }
}

impl FromIterator<Dot> for BrailleCell {
    fn from_iter<T: IntoIterator<Item = Dot>>(iter: T) -> Self {
        BrailleCell(EnumSet::from_iter(iter))
    }
}

pub fn is_cell(c: char) -> bool {
    BrailleCell::from_char(c).is_some()
}

pub fn is_line_break(c: char) -> bool {
    matches!(c, '\r' | '\n')
}

fn char_to_dot(c: char) -> Result<Option<Dot>, ParseError> {
    match c {
        '0' => Ok(None),
        '1' => Ok(Some(Dot::Dot1)),
        '2' => Ok(Some(Dot::Dot2)),
        '3' => Ok(Some(Dot::Dot3)),
        '4' => Ok(Some(Dot::Dot4)),
        '5' => Ok(Some(Dot::Dot5)),
        '6' => Ok(Some(Dot::Dot6)),
        invalid => Err(ParseError::InvalidDots {
            character: Some(invalid),
        }),
    }
}

/// Parse one cell in dot-number notation, e.g. `"146"`. `"0"` is the
/// blank cell.
pub fn dots_to_cell(dots: &str) -> Result<BrailleCell, ParseError> {
    if dots.is_empty() {
        return Err(ParseError::InvalidDots { character: None });
    }
    let mut set = EnumSet::new();
    for c in dots.chars() {
        if let Some(dot) = char_to_dot(c)? {
            set.insert(dot);
        }
    }
    Ok(BrailleCell(set))
}

/// Parse dash separated cells, e.g. `"5-16"`, into Unicode braille.
pub fn dots_to_unicode(dots: &str) -> Result<String, ParseError> {
    dots.split('-')
        .map(|d| dots_to_cell(d).map(|cell| cell.to_unicode()))
        .collect()
}

/// Render Unicode braille in dash separated dot numbers. Characters that
/// are not cells are kept as they are.
pub fn unicode_to_dots(braille: &str) -> String {
    braille
        .chars()
        .map(|c| match BrailleCell::from_char(c) {
            Some(cell) => cell.to_dots(),
            None => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Decoded braille text: cells plus literal line breaks, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrailleDocument(String);

impl BrailleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_cell(&mut self, cell: BrailleCell) {
        self.0.push(cell.to_unicode());
    }

    pub fn push_line_break(&mut self, c: char) {
        debug_assert!(is_line_break(c));
        self.0.push(c);
    }

    pub fn push_crlf(&mut self) {
        self.0.push_str("\r\n");
    }

    /// Append another document, as when joining the volumes of a book.
    pub fn append(&mut self, other: &BrailleDocument) {
        self.0.push_str(&other.0);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cells, line breaks not counted.
    pub fn cell_count(&self) -> usize {
        self.0.chars().filter(|c| is_cell(*c)).count()
    }

    pub fn line_break_count(&self) -> usize {
        self.0.chars().filter(|c| is_line_break(*c)).count()
    }

    pub fn cells(&self) -> impl Iterator<Item = BrailleCell> + '_ {
        self.0.chars().filter_map(BrailleCell::from_char)
    }
}

impl TryFrom<&str> for BrailleDocument {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value
            .chars()
            .enumerate()
            .find(|(_, c)| !is_cell(*c) && !is_line_break(*c))
        {
            Some((offset, character)) => Err(ParseError::InvalidCell { character, offset }),
            None => Ok(BrailleDocument(value.to_string())),
        }
    }
}

impl std::fmt::Display for BrailleDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumset::enum_set;

    #[test]
    fn cell_from_char() {
        assert_eq!(BrailleCell::from_char('⠀'), Some(BrailleCell::BLANK));
        assert_eq!(
            BrailleCell::from_char('⠡'),
            Some(BrailleCell::from(enum_set!(Dot::Dot1 | Dot::Dot6)))
        );
        assert_eq!(
            BrailleCell::from_char('⠿').map(|c| c.bits()),
            Some(0x3f)
        );
        // eight-dot patterns are outside the six-dot alphabet
        assert_eq!(BrailleCell::from_char('\u{2840}'), None);
        assert_eq!(BrailleCell::from_char('a'), None);
    }

    #[test]
    fn from_bits() {
        assert_eq!(BrailleCell::from_bits(0x3c).map(|c| c.to_unicode()), Some('⠼'));
        assert_eq!(BrailleCell::from_bits(0x40), None);
    }

    #[test]
    fn dot_notation() {
        assert_eq!(dots_to_cell("16").map(|c| c.to_unicode()), Ok('⠡'));
        assert_eq!(dots_to_cell("0"), Ok(BrailleCell::BLANK));
        assert_eq!(dots_to_unicode("3456-1-12"), Ok("⠼⠁⠃".to_string()));
        assert_eq!(
            dots_to_unicode("17"),
            Err(ParseError::InvalidDots {
                character: Some('7')
            })
        );
        assert_eq!(
            dots_to_unicode("1--2"),
            Err(ParseError::InvalidDots { character: None })
        );
    }

    #[test]
    fn dots_of_cells() {
        assert_eq!(BrailleCell::BLANK.to_dots(), "0");
        assert_eq!(dots_to_cell("146").map(|c| c.to_dots()), Ok("146".to_string()));
        assert_eq!(unicode_to_dots("⠐⠡"), "5-16");
        assert_eq!(unicode_to_dots(&dots_to_unicode("3456-1-0").unwrap()), "3456-1-0");
    }

    #[test]
    fn document_from_str() {
        let doc = BrailleDocument::try_from("⠁⠃\r\n⠉").unwrap();
        assert_eq!(doc.cell_count(), 3);
        assert_eq!(doc.line_break_count(), 2);
        assert_eq!(
            BrailleDocument::try_from("⠁x"),
            Err(ParseError::InvalidCell {
                character: 'x',
                offset: 1
            })
        );
    }

    #[test]
    fn document_append() {
        let mut first = BrailleDocument::try_from("⠁").unwrap();
        let second = BrailleDocument::try_from("\n⠃").unwrap();
        first.append(&second);
        assert_eq!(first.as_str(), "⠁\n⠃");
        assert_eq!(first.cells().count(), 2);
    }
}
