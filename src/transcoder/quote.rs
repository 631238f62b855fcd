//! English text between the foreign quote marks ⠦ and ⠴
//!
//! Both marks are written as `￣`. Inside, cells are English grade 1 braille:
//! punctuation first, then letters, with ⠠ and ⠠⠠ as capital signs and ⠼
//! starting an embedded number.
//!
//! ⠴ alone is ambiguous, so the closing mark depends on the cell in front
//! of the opening ⠦. After a blank or an underline-like mark the quote has
//! to be closed by ⠴ followed by that same cell; otherwise ⠴ closes. ⠴
//! followed by a blank, a line break or ⠤ always closes.

use log::warn;

use crate::{
    tables::{TableId, Tables},
    transcoder::{
        BLANK, CAPITAL, Capitals, KAGI, NUMERIC, QUOTE_CLOSE, Step, Transcoder,
        numeric::{self, NumberRun},
    },
};

/// Written for both quote marks
pub const QUOTE_MARK: &str = "￣";

/// Base table glyphs that make the preceding cell part of the closer
const CLOSER_CONTEXT: [&str; 3] = ["＿", "｜", "　"];

const TERMINATORS: [[char; 2]; 4] = [
    [QUOTE_CLOSE, BLANK],
    [QUOTE_CLOSE, '\n'],
    [QUOTE_CLOSE, '\r'],
    [QUOTE_CLOSE, KAGI],
];

/// The cell sequence that closes a quote opened at `pos`.
pub fn closer(tables: &Tables, cells: &[char], pos: usize) -> Vec<char> {
    let mut closer = vec![QUOTE_CLOSE];
    let before = pos.checked_sub(1).and_then(|p| cells.get(p)).copied();
    if let Some(before) = before {
        let kana = tables.get(TableId::Kana);
        if kana
            .get_cell(before)
            .is_some_and(|glyph| CLOSER_CONTEXT.contains(&glyph))
        {
            closer.push(before);
        }
    }
    closer
}

fn closes(cells: &[char], i: usize, closer: &[char]) -> bool {
    let rest = cells.get(i..).unwrap_or_default();
    rest.starts_with(closer) || TERMINATORS.iter().any(|t| rest.starts_with(t))
}

/// Translate the quote opened by the ⠦ at `pos`. The step ends after the
/// closing ⠴; only that one cell of the closer is consumed.
pub fn run(transcoder: &Transcoder, cells: &[char], pos: usize) -> Step {
    let tables = transcoder.tables();
    let closer = closer(tables, cells, pos);
    let punctuation = tables.get(TableId::EnglishPunctuation);
    let upper = tables.get(TableId::EnglishUpper);
    let lower = tables.get(TableId::EnglishLower);

    let mut output = String::from(QUOTE_MARK);
    let mut capitals = Capitals::None;
    let mut i = pos + 1;
    while let Some(&c) = cells.get(i) {
        match c {
            QUOTE_CLOSE if closes(cells, i, &closer) => {
                output.push_str(QUOTE_MARK);
                return Step::new(output, i + 1);
            }
            CAPITAL => {
                if cells.get(i + 1) == Some(&CAPITAL) {
                    capitals = Capitals::All;
                    i += 2;
                } else {
                    capitals = Capitals::Next;
                    i += 1;
                }
                continue;
            }
            NUMERIC => {
                let number = numeric::run(transcoder, cells, i, NumberRun::Embedded);
                output.push_str(&number.output);
                if capitals == Capitals::Next {
                    capitals = Capitals::None;
                }
                i = number.next;
                continue;
            }
            '\r' | '\n' => output.push(c),
            _ => {
                let letters = if capitals == Capitals::None { lower } else { upper };
                if let Some(text) = punctuation.get_cell(c).or_else(|| letters.get_cell(c)) {
                    output.push_str(text);
                }
                if capitals == Capitals::Next {
                    capitals = Capitals::None;
                }
            }
        }
        i += 1;
    }
    warn!("foreign quote opened at cell {pos} is not closed");
    Step::new(output, i)
}
