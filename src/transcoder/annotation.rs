//! Information processing braille between ⠠⠦ and ⠠⠴, written in parentheses

use log::warn;

use crate::{
    tables::TableId,
    transcoder::{
        CAPITAL, Capitals, NUMERIC, QUOTE_CLOSE, Step, Transcoder,
        numeric::{self, NumberRun},
    },
};

/// Written for the ⠠⠴ closer
const CLOSE: &str = ")";
/// After ⠠⠠, ⠠⠨ returns to lower case
const CAPITALS_OFF: char = '⠨';

/// Translate the annotation opened by the ⠠⠦ at `pos`.
///
/// The ⠦ itself is translated by the lower case table. The annotation ends
/// after ⠠⠴, or after a lone ⠴ while no capital sign is active.
pub fn run(transcoder: &Transcoder, cells: &[char], pos: usize) -> Step {
    let upper = transcoder.tables().get(TableId::InfoUpper);
    let lower = transcoder.tables().get(TableId::InfoLower);

    let mut output = String::new();
    let mut capitals = Capitals::None;
    let mut i = pos + 1;
    while let Some(&c) = cells.get(i) {
        if c == CAPITAL {
            match cells.get(i + 1).copied() {
                Some(QUOTE_CLOSE) => {
                    output.push_str(CLOSE);
                    return Step::new(output, i + 2);
                }
                Some(CAPITALS_OFF) if capitals == Capitals::All => {
                    capitals = Capitals::None;
                    i += 2;
                }
                next => {
                    capitals = capitals.after_sign(next == Some(CAPITAL));
                    i += 1;
                }
            }
            continue;
        }
        if c == NUMERIC {
            let number = numeric::run(transcoder, cells, i, NumberRun::Embedded);
            output.push_str(&number.output);
            i = number.next;
            continue;
        }
        if crate::cell::is_line_break(c) {
            output.push(c);
            i += 1;
            continue;
        }
        match capitals {
            Capitals::None => {
                if c == QUOTE_CLOSE {
                    output.push_str(lower.get_cell(c).unwrap_or_default());
                    return Step::new(output, i + 1);
                }
                if let Some(text) = lower.get_at(cells, i, 2) {
                    output.push_str(text);
                    i += 2;
                    continue;
                }
                if let Some(text) = lower.get_cell(c) {
                    output.push_str(text);
                }
            }
            Capitals::Next | Capitals::All => {
                if let Some(text) = upper.get_cell(c) {
                    output.push_str(text);
                }
                if capitals == Capitals::Next {
                    capitals = Capitals::None;
                }
            }
        }
        i += 1;
    }
    warn!("annotation opened at cell {pos} is not closed");
    Step::new(output, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcode(input: &str) -> String {
        Transcoder::default().transcode(input)
    }

    #[test]
    fn lower_case() {
        assert_eq!(transcode("⠠⠦⠁⠃⠉⠠⠴"), "(abc)");
    }

    #[test]
    fn capitals() {
        assert_eq!(transcode("⠠⠦⠠⠁⠃⠠⠴"), "(Ab)");
        assert_eq!(transcode("⠠⠦⠠⠠⠁⠃⠠⠴"), "(AB)");
        assert_eq!(transcode("⠠⠦⠠⠠⠁⠠⠨⠃⠠⠴"), "(Ab)");
    }

    #[test]
    fn closer_right_after_double_capital() {
        assert_eq!(transcode("⠠⠦⠠⠠⠠⠴⠁"), "()ア");
    }

    #[test]
    fn symbols() {
        assert_eq!(transcode("⠠⠦⠁⠪⠃⠲⠉⠠⠴"), "(a@b.c)");
        assert_eq!(transcode("⠠⠦⠐⠦⠁⠐⠴⠠⠴"), "([a])");
        assert_eq!(transcode("⠠⠦⠁⠐⠤⠃⠠⠴"), "(a_b)");
    }

    #[test]
    fn numbers_are_halfwidth() {
        assert_eq!(transcode("⠠⠦⠼⠁⠃⠠⠴"), "(12)");
    }

    #[test]
    fn lone_closer() {
        assert_eq!(transcode("⠠⠦⠁⠴⠡"), "(a)カ");
        let cells: Vec<char> = "⠠⠦⠁⠴⠡".chars().collect();
        assert_eq!(run(&Transcoder::default(), &cells, 0), Step::new("(a)", 4));
    }

    #[test]
    fn unterminated_annotation_runs_to_end() {
        assert_eq!(transcode("⠠⠦⠁⠃"), "(ab");
        assert_eq!(transcode("⠠⠦⠠"), "(");
    }

    #[test]
    fn line_breaks_inside_annotation() {
        assert_eq!(transcode("⠠⠦⠁\r\n⠃⠠⠴"), "(a\r\nb)");
    }
}
