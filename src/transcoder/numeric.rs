//! Numbers after the numeric prefix ⠼

use crate::transcoder::{NUMERIC, Step, Transcoder};

/// Where a number occurs, which decides its digit width and what a second ⠼
/// means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberRun {
    /// Kana text: a second ⠼ ends the number and stands for `、`
    Kana,
    /// Foreign quotes and annotations: a second ⠼ separates digit groups
    Embedded,
}

/// Translate the digits following the ⠼ at `pos`.
///
/// The run stops before the first cell that is not a digit, after a second
/// ⠼ in kana text, or after a CR, which is emitted as CRLF and also consumes
/// a directly following LF.
pub fn run(transcoder: &Transcoder, cells: &[char], pos: usize, run: NumberRun) -> Step {
    let width = match run {
        NumberRun::Kana => transcoder.options().digits,
        NumberRun::Embedded => transcoder.options().embedded_digits,
    };
    let digits = transcoder.tables().get(width.digit_table());

    let mut output = String::new();
    let mut i = pos + 1;
    while let Some(&c) = cells.get(i) {
        match c {
            NUMERIC => match run {
                NumberRun::Kana => {
                    output.push('、');
                    return Step::new(output, i + 1);
                }
                NumberRun::Embedded => output.push_str(width.separator()),
            },
            '\r' => {
                output.push_str("\r\n");
                let next = if cells.get(i + 1) == Some(&'\n') { i + 2 } else { i + 1 };
                return Step::new(output, next);
            }
            _ => match digits.get_cell(c) {
                Some(digit) => output.push_str(digit),
                None => break,
            },
        }
        i += 1;
    }
    Step::new(output, i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcoder::{TranscodeOptions, Width};

    fn cells(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn fullwidth_by_default() {
        let transcoder = Transcoder::default();
        assert_eq!(transcoder.transcode("⠼⠁⠃⠉"), "１２３");
        assert_eq!(transcoder.transcode("⠼⠚⠂⠑"), "０．５");
    }

    #[test]
    fn halfwidth_option() {
        let options = TranscodeOptions::default().with_digits(Width::Half);
        let transcoder = Transcoder::new(crate::tables::Tables::standard(), options);
        assert_eq!(transcoder.transcode("⠼⠁⠃⠉"), "123");
    }

    #[test]
    fn stops_before_non_digit() {
        let transcoder = Transcoder::default();
        let input = cells("⠼⠁⠃⠀⠡");
        assert_eq!(run(&transcoder, &input, 0, NumberRun::Kana), Step::new("１２", 3));
        assert_eq!(transcoder.transcode("⠼⠁⠃⠀⠡"), "１２　カ");
    }

    #[test]
    fn second_prefix_in_kana_text() {
        let transcoder = Transcoder::default();
        let input = cells("⠼⠁⠼⠃");
        assert_eq!(run(&transcoder, &input, 0, NumberRun::Kana), Step::new("１、", 3));
        // the cell after the second prefix is kana again
        assert_eq!(transcoder.transcode("⠼⠁⠼⠃"), "１、イ");
    }

    #[test]
    fn second_prefix_in_embedded_number() {
        let transcoder = Transcoder::default();
        let input = cells("⠼⠁⠼⠃⠉⠊");
        assert_eq!(
            run(&transcoder, &input, 0, NumberRun::Embedded),
            Step::new("1,239", 6)
        );
        let options = TranscodeOptions::default().with_embedded_digits(Width::Full);
        let fullwidth = Transcoder::new(crate::tables::Tables::standard(), options);
        assert_eq!(
            run(&fullwidth, &input, 0, NumberRun::Embedded),
            Step::new("１、２３９", 6)
        );
    }

    #[test]
    fn carriage_return_ends_number() {
        let transcoder = Transcoder::default();
        assert_eq!(
            run(&transcoder, &cells("⠼⠁\r\n⠁"), 0, NumberRun::Kana),
            Step::new("１\r\n", 4)
        );
        assert_eq!(
            run(&transcoder, &cells("⠼⠁\r⠁"), 0, NumberRun::Kana),
            Step::new("１\r\n", 3)
        );
        assert_eq!(transcoder.transcode("⠼⠁\r\n⠁"), "１\r\nア");
    }

    #[test]
    fn end_of_input() {
        let transcoder = Transcoder::default();
        assert_eq!(run(&transcoder, &cells("⠼"), 0, NumberRun::Kana), Step::new("", 1));
        assert_eq!(run(&transcoder, &cells("⠼⠁"), 0, NumberRun::Kana), Step::new("１", 2));
    }
}
