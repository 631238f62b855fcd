//! Text rewrites applied to the transcoded text

/// Marker line written between two line feeds
pub const BLANK_LINE_MARK: &str = "　　　";

/// One whole-text rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// `ッッ` and `…ッ` become `……`
    CollapseSokuon,
    /// CRLF becomes LF
    CrlfToLf,
    /// A line of three fullwidth spaces between consecutive line feeds
    MarkBlankLines,
}

impl Normalization {
    pub fn apply(&self, input: &str) -> String {
        match self {
            Normalization::CollapseSokuon => input.replace("ッッ", "……").replace("…ッ", "……"),
            Normalization::CrlfToLf => input.replace("\r\n", "\n"),
            Normalization::MarkBlankLines => mark_blank_lines(input),
        }
    }
}

fn mark_blank_lines(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous = None;
    for c in input.chars() {
        if c == '\n' && previous == Some('\n') {
            output.push_str(BLANK_LINE_MARK);
        }
        output.push(c);
        previous = Some(c);
    }
    output
}

/// An ordered list of [`Normalization`] steps
#[derive(Debug, Clone, PartialEq)]
pub struct PostProcessor {
    steps: Vec<Normalization>,
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self::new(vec![
            Normalization::CollapseSokuon,
            Normalization::CrlfToLf,
            Normalization::MarkBlankLines,
        ])
    }
}

impl PostProcessor {
    pub fn new(steps: Vec<Normalization>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Normalization] {
        &self.steps
    }

    pub fn apply(&self, input: &str) -> String {
        let mut result = input.to_string();
        for step in &self.steps {
            result = step.apply(&result);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_sokuon() {
        let step = Normalization::CollapseSokuon;
        assert_eq!(step.apply("アッッ"), "ア……");
        assert_eq!(step.apply("…ッ"), "……");
        assert_eq!(step.apply("ッッッ"), "………");
        assert_eq!(step.apply("カッタ"), "カッタ");
    }

    #[test]
    fn crlf_to_lf() {
        assert_eq!(Normalization::CrlfToLf.apply("a\r\nb\r\n"), "a\nb\n");
        assert_eq!(Normalization::CrlfToLf.apply("a\rb"), "a\rb");
    }

    #[test]
    fn mark_blank_lines() {
        let step = Normalization::MarkBlankLines;
        assert_eq!(step.apply("a\n\nb"), "a\n　　　\nb");
        assert_eq!(step.apply("a\n\n\nb"), "a\n　　　\n　　　\nb");
        assert_eq!(step.apply("a\nb"), "a\nb");
    }

    #[test]
    fn mark_blank_lines_is_idempotent() {
        let step = Normalization::MarkBlankLines;
        for input in ["a\n\nb", "\n\n\n\n", "a\n　　　\nb"] {
            let once = step.apply(input);
            assert_eq!(step.apply(&once), once, "{input:?}");
        }
    }

    #[test]
    fn standard_order() {
        let processor = PostProcessor::default();
        assert_eq!(processor.apply("アッッ\r\n\r\nイ"), "ア……\n　　　\nイ");
        assert_eq!(processor.steps().len(), 3);
    }

    #[test]
    fn empty_processor() {
        assert_eq!(PostProcessor::new(vec![]).apply("a\r\n\r\n"), "a\r\n\r\n");
    }
}
