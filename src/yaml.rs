//! Parser for YAML transcoding fixtures
//!
//! A fixture file is a mapping with an optional `options` mapping and a
//! `tests` sequence:
//!
//! ```yaml
//! options:
//!   digits: half
//! tests:
//!   - ["⠼⠁⠃", "12"]
//!   - ["voiced", "⠐⠡", "ガ"]
//!   - ["⠿", "?", {xfail: "unknown cell"}]
//! ```

use std::{fs::File, iter::Peekable};

use libyaml::{Encoding, Event, Parser, ParserIter};

use crate::{
    check_yaml::{ExpectedFailure, FixtureOptions, Test, TestSuite},
    kana::KanaStyle,
    transcoder::Width,
};

type YAMLEventError = Option<Result<Event, libyaml::ParserError>>;

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Scalar expected, got {0:?}")]
    ScalarExpected(YAMLEventError),
    #[error("YAML parse error")]
    YAMLError(#[from] libyaml::ParserError),
    #[error("Stream start expected")]
    StreamStartExpected,
    #[error("Stream end expected")]
    StreamEndExpected,
    #[error("Document start expected")]
    DocumentStartExpected,
    #[error("Document end expected")]
    DocumentEndExpected,
    #[error("Sequence start expected")]
    SequenceStartExpected,
    #[error("Sequence end expected, got {0:?}")]
    SequenceEndExpected(YAMLEventError),
    #[error("Mapping start expected, got {0:?}")]
    MappingStartExpected(YAMLEventError),
    #[error("Mapping end expected")]
    MappingEndExpected,
    #[error("Encoding {0:?} not supported")]
    InvalidEncoding(Encoding),
    #[error("Invalid digit width {0:?}")]
    InvalidWidth(String),
    #[error("Invalid kana style {0:?}")]
    InvalidKana(String),
    #[error("Invalid boolean {0:?}")]
    InvalidBool(String),
    #[error("Invalid token {0:?}")]
    InvalidToken(String),
}

pub struct YAMLParser<'a> {
    events: Peekable<ParserIter<'a>>,
}

impl<'a> YAMLParser<'a> {
    pub fn new(reader: File) -> Result<Self, ParseError> {
        let parser = Parser::new(reader)?;
        Ok(Self {
            events: parser.into_iter().peekable(),
        })
    }

    fn scalar(&mut self) -> Result<String, ParseError> {
        match self.events.next() {
            Some(Ok(Event::Scalar { value, .. })) => Ok(value),
            e => Err(ParseError::ScalarExpected(e)),
        }
    }

    fn mapping_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::MappingStart { .. })) => Ok(()),
            e => Err(ParseError::MappingStartExpected(e)),
        }
    }

    fn mapping_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::MappingEnd)) => Ok(()),
            _ => Err(ParseError::MappingEndExpected),
        }
    }

    fn sequence_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::SequenceStart { .. })) => Ok(()),
            _ => Err(ParseError::SequenceStartExpected),
        }
    }

    fn sequence_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::SequenceEnd)) => Ok(()),
            e => Err(ParseError::SequenceEndExpected(e)),
        }
    }

    fn width(&mut self) -> Result<Width, ParseError> {
        let value = self.scalar()?;
        match &*value {
            "full" => Ok(Width::Full),
            "half" => Ok(Width::Half),
            _ => Err(ParseError::InvalidWidth(value)),
        }
    }

    fn kana(&mut self) -> Result<KanaStyle, ParseError> {
        let value = self.scalar()?;
        match &*value {
            "katakana" => Ok(KanaStyle::Katakana),
            "hiragana" => Ok(KanaStyle::Hiragana),
            _ => Err(ParseError::InvalidKana(value)),
        }
    }

    fn bool_value(&mut self) -> Result<bool, ParseError> {
        let value = self.scalar()?;
        match &*value {
            "true" | "on" | "yes" => Ok(true),
            "false" | "off" | "no" => Ok(false),
            _ => Err(ParseError::InvalidBool(value)),
        }
    }

    fn options(&mut self) -> Result<FixtureOptions, ParseError> {
        let mut options = FixtureOptions::default();
        self.mapping_start()?;
        while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            let key = self.scalar()?;
            match &*key {
                "digits" => options.transcode.digits = self.width()?,
                "embeddedDigits" => options.transcode.embedded_digits = self.width()?,
                "kana" => options.kana = self.kana()?,
                "normalize" => options.normalize = self.bool_value()?,
                "dots" => options.dots = self.bool_value()?,
                _ => return Err(ParseError::InvalidToken(key)),
            }
        }
        self.mapping_end()?;
        Ok(options)
    }

    fn xfail(&mut self) -> Result<ExpectedFailure, ParseError> {
        let value = self.scalar()?;
        let xfail = match &*value {
            "off" | "false" | "no" => ExpectedFailure::Simple(false),
            "on" | "true" | "yes" => ExpectedFailure::Simple(true),
            _ => ExpectedFailure::Reason(value),
        };
        Ok(xfail)
    }

    fn test(&mut self) -> Result<Test, ParseError> {
        self.sequence_start()?;
        let mut description = None;
        let mut input = self.scalar()?;
        let mut expected = self.scalar()?;
        // two scalars are (input, expected), three are (description, input, expected)
        if let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            description = Some(input);
            input = expected;
            expected = self.scalar()?;
        }
        let mut xfail = ExpectedFailure::Simple(false);
        if let Some(Ok(Event::MappingStart { .. })) = self.events.peek() {
            self.mapping_start()?;
            while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
                let key = self.scalar()?;
                match &*key {
                    "xfail" => xfail = self.xfail()?,
                    _ => return Err(ParseError::InvalidToken(key)),
                }
            }
            self.mapping_end()?;
        }
        self.sequence_end()?;
        Ok(Test::new(description, input, expected, xfail))
    }

    fn tests(&mut self) -> Result<Vec<Test>, ParseError> {
        let mut tests = Vec::new();
        self.sequence_start()?;
        while let Some(Ok(Event::SequenceStart { .. })) = self.events.peek() {
            tests.push(self.test()?);
        }
        self.sequence_end()?;
        Ok(tests)
    }

    fn stream_start(&mut self) -> Result<(), ParseError> {
        if let Some(Ok(Event::StreamStart {
            encoding: Some(encoding),
        })) = self.events.next()
        {
            if encoding == Encoding::Utf8 {
                Ok(())
            } else {
                Err(ParseError::InvalidEncoding(encoding))
            }
        } else {
            Err(ParseError::StreamStartExpected)
        }
    }

    fn stream_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::StreamEnd)) => Ok(()),
            _ => Err(ParseError::StreamEndExpected),
        }
    }

    fn document_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::DocumentStart { .. })) => Ok(()),
            _ => Err(ParseError::DocumentStartExpected),
        }
    }

    fn document_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::DocumentEnd { .. })) => Ok(()),
            _ => Err(ParseError::DocumentEndExpected),
        }
    }

    pub fn yaml(&mut self) -> Result<TestSuite, ParseError> {
        let mut options = FixtureOptions::default();
        let mut tests = Vec::new();

        self.stream_start()?;
        self.document_start()?;
        self.mapping_start()?;
        while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            let key = self.scalar()?;
            match &*key {
                "options" => options = self.options()?,
                "tests" => tests = self.tests()?,
                _ => return Err(ParseError::InvalidToken(key)),
            }
        }
        self.mapping_end()?;
        self.document_end()?;
        self.stream_end()?;
        Ok(TestSuite::new(options, tests))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn parse(source: &str) -> Result<TestSuite, ParseError> {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), source).unwrap();
        YAMLParser::new(File::open(file.path()).unwrap()).and_then(|mut p| p.yaml())
    }

    #[test]
    fn two_and_three_scalars() {
        let suite = parse("tests:\n  - [\"⠁\", \"ア\"]\n  - [\"a\", \"⠃\", \"イ\"]\n").unwrap();
        assert_eq!(suite.tests().len(), 2);
        assert_eq!(suite.tests()[0].input(), "⠁");
        assert_eq!(suite.tests()[0].description(), None);
        assert_eq!(suite.tests()[1].description(), Some("a"));
        assert_eq!(suite.tests()[1].expected(), "イ");
    }

    #[test]
    fn options() {
        let source = "options:\n  digits: half\n  embeddedDigits: full\n  kana: hiragana\n  normalize: true\ntests: []\n";
        let suite = parse(source).unwrap();
        let options = suite.options();
        assert_eq!(options.transcode.digits, Width::Half);
        assert_eq!(options.transcode.embedded_digits, Width::Full);
        assert_eq!(options.kana, KanaStyle::Hiragana);
        assert!(options.normalize);
        assert!(!options.dots);
    }

    #[test]
    fn xfail() {
        let source = "tests:\n  - [\"⠁\", \"x\", {xfail: true}]\n  - [\"⠁\", \"x\", {xfail: not yet}]\n";
        let suite = parse(source).unwrap();
        assert_eq!(suite.tests()[0].xfail(), &ExpectedFailure::Simple(true));
        assert_eq!(
            suite.tests()[1].xfail(),
            &ExpectedFailure::Reason("not yet".to_string())
        );
    }

    #[test]
    fn invalid_tokens() {
        assert!(matches!(
            parse("table: foo\n"),
            Err(ParseError::InvalidToken(_))
        ));
        assert!(matches!(
            parse("options:\n  digits: wide\n"),
            Err(ParseError::InvalidWidth(_))
        ));
    }
}
