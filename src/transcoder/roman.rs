//! Roman letters after the prefix ⠰

use crate::{
    tables::TableId,
    transcoder::{CAPITAL, Capitals, KAGI, ROMAN, Step, Transcoder, is_separator},
};

/// Translate the ⠰ at `pos` and what follows it.
///
/// `⠰⠄` is `＜` and `⠰⠤` is `『`; both return to kana. Before a blank or a
/// line break ⠰ is the `、` of the base table. Otherwise the following cells
/// are Roman letters.
pub fn run(transcoder: &Transcoder, cells: &[char], pos: usize) -> Step {
    match cells.get(pos + 1) {
        Some(&'⠄') => Step::new("＜", pos + 2),
        Some(&KAGI) => Step::new("『", pos + 2),
        Some(&next) if is_separator(next) => {
            let comma = transcoder
                .tables()
                .get(TableId::Kana)
                .get_cell(ROMAN)
                .unwrap_or_default();
            Step::new(comma, pos + 1)
        }
        _ => letters(transcoder, cells, pos + 1),
    }
}

/// Letters from `start` up to the first cell that is neither a letter nor a
/// capital sign.
pub fn letters(transcoder: &Transcoder, cells: &[char], start: usize) -> Step {
    let upper = transcoder.tables().get(TableId::RomanUpper);
    let lower = transcoder.tables().get(TableId::RomanLower);

    let mut output = String::new();
    let mut capitals = Capitals::None;
    let mut i = start;
    while let Some(&c) = cells.get(i) {
        if c == CAPITAL {
            capitals = capitals.after_sign(cells.get(i + 1) == Some(&CAPITAL));
            i += 1;
            continue;
        }
        let Some(capital) = upper.get_cell(c) else {
            break;
        };
        match capitals {
            Capitals::None => output.push_str(lower.get_cell(c).unwrap_or_default()),
            Capitals::Next => {
                output.push_str(capital);
                capitals = Capitals::None;
            }
            Capitals::All => output.push_str(capital),
        }
        i += 1;
    }
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
        assert_eq!(transcode("⠰⠁⠃⠉"), "abc");
    }

    #[test]
    fn capital_sign_capitalises_one_letter() {
        assert_eq!(transcode("⠰⠠⠞⠧"), "Tv");
        assert_eq!(transcode("⠰⠠⠞⠠⠧"), "TV");
    }

    #[test]
    fn double_capital_sign() {
        assert_eq!(transcode("⠰⠠⠠⠝⠓⠅"), "NHK");
        // a single sign does not end all-caps
        assert_eq!(transcode("⠰⠠⠠⠝⠠⠓⠅"), "NHK");
    }

    #[test]
    fn letters_end_at_first_non_letter() {
        let cells: Vec<char> = "⠰⠁⠃⠀⠁".chars().collect();
        assert_eq!(run(&Transcoder::default(), &cells, 0), Step::new("ab", 3));
        assert_eq!(transcode("⠰⠁⠃⠀⠁"), "ab　ア");
    }

    #[test]
    fn brackets_return_to_kana() {
        assert_eq!(transcode("⠰⠤⠁⠤⠆"), "『ア』");
        assert_eq!(transcode("⠰⠄⠁⠠⠆"), "＜ア＞");
    }

    #[test]
    fn comma_before_blank() {
        assert_eq!(transcode("⠡⠰⠀⠡"), "カ、　カ");
    }

    #[test]
    fn end_of_input() {
        assert_eq!(transcode("⠰"), "");
        assert_eq!(transcode("⠰⠠"), "");
        assert_eq!(transcode("⠰⠠⠠"), "");
    }
}
