//! A test runner for YAML transcoding fixtures

use std::{fs::File, path::Path};

use log::debug;

use crate::{
    cell::{self, dots_to_unicode},
    kana::KanaStyle,
    normalize::PostProcessor,
    tables::Tables,
    transcoder::{TranscodeOptions, Transcoder},
    yaml::{self, YAMLParser},
};

#[derive(thiserror::Error, Debug)]
pub enum TestError {
    #[error("Could not open test file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse test file: {0}")]
    Parse(#[from] yaml::ParseError),
    #[error("Invalid dot notation in test input: {0}")]
    Dots(#[from] cell::ParseError),
}

#[derive(PartialEq, Debug)]
pub enum TestResult {
    Success,
    Failure {
        input: String,
        expected: String,
        actual: String,
    },
    ExpectedFailure {
        input: String,
        expected: String,
        actual: String,
    },
    UnexpectedSuccess {
        input: String,
    },
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TestResult::Success)
    }
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failure { .. })
    }
    pub fn is_expected_failure(&self) -> bool {
        matches!(self, TestResult::ExpectedFailure { .. })
    }
    pub fn is_unexpected_success(&self) -> bool {
        matches!(self, TestResult::UnexpectedSuccess { .. })
    }
}

/// Settings shared by all tests of a fixture file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixtureOptions {
    pub transcode: TranscodeOptions,
    pub kana: KanaStyle,
    /// Run the post-processing normalizers on the transcoded text
    pub normalize: bool,
    /// Inputs are written as dot numbers (`1-12-14`) instead of braille
    pub dots: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedFailure {
    Simple(bool),
    Reason(String),
}

impl ExpectedFailure {
    fn is_failure(&self) -> bool {
        match self {
            Self::Simple(v) => *v,
            Self::Reason(_) => true,
        }
    }
}

/// A single transcoding test.
#[derive(Debug, Clone)]
pub struct Test {
    description: Option<String>,
    /// Braille, or dot numbers when [`FixtureOptions::dots`] is set
    input: String,
    expected: String,
    xfail: ExpectedFailure,
}

impl Test {
    pub fn new(
        description: Option<String>,
        input: String,
        expected: String,
        xfail: ExpectedFailure,
    ) -> Self {
        Self {
            description,
            input,
            expected,
            xfail,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn xfail(&self) -> &ExpectedFailure {
        &self.xfail
    }

    fn check(&self, actual: String) -> TestResult {
        if actual == self.expected {
            if !self.xfail.is_failure() {
                TestResult::Success
            } else {
                TestResult::UnexpectedSuccess {
                    input: self.input.to_string(),
                }
            }
        } else if self.xfail.is_failure() {
            TestResult::ExpectedFailure {
                input: self.input.to_string(),
                expected: self.expected.to_string(),
                actual,
            }
        } else {
            TestResult::Failure {
                input: self.input.to_string(),
                expected: self.expected.to_string(),
                actual,
            }
        }
    }
}

/// The tests of one fixture file together with their options.
#[derive(Debug)]
pub struct TestSuite {
    options: FixtureOptions,
    tests: Vec<Test>,
}

impl TestSuite {
    pub fn new(options: FixtureOptions, tests: Vec<Test>) -> Self {
        Self { options, tests }
    }

    pub fn options(&self) -> &FixtureOptions {
        &self.options
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    fn transcode(&self, transcoder: &Transcoder, input: &str) -> Result<String, TestError> {
        let braille = if self.options.dots {
            dots_to_unicode(input)?
        } else {
            input.to_string()
        };
        let mut text = transcoder.transcode(&braille);
        if self.options.normalize {
            text = PostProcessor::default().apply(&text);
        }
        Ok(self.options.kana.apply(&text))
    }

    pub fn check(&self, tables: &Tables) -> Result<Vec<TestResult>, TestError> {
        let transcoder = Transcoder::new(tables, self.options.transcode);
        let mut results = Vec::new();
        for test in &self.tests {
            let actual = self.transcode(&transcoder, &test.input)?;
            debug!("{:?} -> {:?}", test.input, actual);
            results.push(test.check(actual));
        }
        Ok(results)
    }
}

/// Parse the fixture file at `path` and run it against the standard tables.
pub fn check_yaml(path: &Path) -> Result<Vec<TestResult>, TestError> {
    let suite = YAMLParser::new(File::open(path)?)?.yaml()?;
    suite.check(Tables::standard())
}
