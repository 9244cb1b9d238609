//! Failure models
//!
//! Describes why a test failed, independently of how the failure travelled
//! out of the test body.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic;
use thiserror::Error;

/// Describes a failed in-test assertion.
///
/// Raised from anywhere inside a test body with [`FailInfo::raise`] and
/// intercepted by the runner, which renders it into the trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailInfo {
    condition_literal: Option<String>,
    file: Option<String>,
    line: Option<u32>,
    should_have_succeeded: bool,
}

impl FailInfo {
    /// Create a descriptor carrying only the expected truth value
    pub fn new(should_have_succeeded: bool) -> Self {
        Self {
            condition_literal: None,
            file: None,
            line: None,
            should_have_succeeded,
        }
    }

    pub fn with_condition(mut self, literal: impl Into<String>) -> Self {
        self.condition_literal = Some(literal.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn condition_literal(&self) -> Option<&str> {
        self.condition_literal.as_deref()
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// Whether the condition was expected to hold
    pub fn should_have_succeeded(&self) -> bool {
        self.should_have_succeeded
    }

    /// Abort the current test with this descriptor as payload.
    ///
    /// Unwinds without running the panic hook, so nothing is printed until
    /// the runner renders the failure. Outside of a runner this unwinds the
    /// calling thread.
    pub fn raise(self) -> ! {
        panic::resume_unwind(Box::new(self))
    }
}

/// Raise a [`FailInfo`] when `actual` differs from `expected`.
///
/// Single raise site behind both `fail_test_if!` (expected `false`) and
/// `test_success_requires!` (expected `true`).
#[inline]
pub fn check(
    actual: bool,
    expected: bool,
    condition_literal: Option<&str>,
    file: Option<&str>,
    line: Option<u32>,
) {
    if actual == expected {
        return;
    }

    let mut info = FailInfo::new(expected);
    if let Some(literal) = condition_literal {
        info = info.with_condition(literal);
    }
    if let Some(file) = file {
        info = info.with_file(file);
    }
    if let Some(line) = line {
        info = info.with_line(line);
    }
    info.raise()
}

/// Error kinds a test body may raise that the runner classifies by name
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestError {
    #[error("{0}")]
    Runtime(String),

    #[error("{0}")]
    InvalidArgument(String),
}

impl TestError {
    pub fn runtime(message: impl Into<String>) -> Self {
        TestError::Runtime(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        TestError::InvalidArgument(message.into())
    }

    /// Abort the current test with this error as payload
    pub fn raise(self) -> ! {
        panic::resume_unwind(Box::new(self))
    }
}

/// Why a single test run failed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Failure {
    /// The callable returned `false`
    Returned,
    /// A [`FailInfo`] was raised
    Assertion(FailInfo),
    Runtime(String),
    InvalidArgument(String),
    /// Any other error carrying a message
    Error(String),
    /// A payload nobody recognizes
    Unknown,
}

impl Failure {
    /// Short classification label
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::Returned => "returned false",
            Failure::Assertion(_) => "assertion",
            Failure::Runtime(_) => "runtime error",
            Failure::InvalidArgument(_) => "invalid input",
            Failure::Error(_) => "generic error",
            Failure::Unknown => "unknown error",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Failure::Runtime(msg) | Failure::InvalidArgument(msg) | Failure::Error(msg) => {
                Some(msg)
            }
            _ => None,
        }
    }
}

impl From<TestError> for Failure {
    fn from(err: TestError) -> Self {
        match err {
            TestError::Runtime(msg) => Failure::Runtime(msg),
            TestError::InvalidArgument(msg) => Failure::InvalidArgument(msg),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "{}: {msg}", self.kind()),
            None => f.write_str(self.kind()),
        }
    }
}
