//! Output formatters for test results
//!
//! Renders per-test trace blocks and batch summaries as text or JSON.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::models::{BatchSummary, FailInfo, Failure, RunOutcome};

const RULE_WIDTH: usize = 54;

const UNSPECIFIED_CONDITION: &str = "<Unspecified condition literal>";
const UNSPECIFIED_FILE: &str = "<Unspecified file>";
const UNSPECIFIED_LINE: &str = "<Unspecified line>";

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Result formatter
#[derive(Clone, Debug, Default)]
pub struct ResultFormatter {
    format: ReportFormat,
    show_timing: bool,
}

impl ResultFormatter {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            show_timing: false,
        }
    }

    /// Append each test's duration to its result block (text only)
    pub fn with_timing(mut self, show_timing: bool) -> Self {
        self.show_timing = show_timing;
        self
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Block written before a test body runs
    pub fn format_header(&self, name: &str) -> Option<String> {
        match self.format {
            ReportFormat::Text => {
                let rule = "-".repeat(RULE_WIDTH);
                Some(format!("{rule}\n\t{name}\n{rule}\n"))
            }
            ReportFormat::Json => None,
        }
    }

    /// Result of a single test
    pub fn format_outcome(&self, outcome: &RunOutcome) -> String {
        match self.format {
            ReportFormat::Text => self.format_outcome_text(outcome),
            ReportFormat::Json => {
                let mut line = serde_json::to_string(outcome).unwrap_or_default();
                line.push('\n');
                line
            }
        }
    }

    fn format_outcome_text(&self, outcome: &RunOutcome) -> String {
        let mut output = match &outcome.failure {
            None => "Test succeeded.\n".to_string(),
            Some(Failure::Returned) => "Test failed.\n".to_string(),
            Some(Failure::Assertion(info)) => format_assertion(info),
            Some(Failure::Unknown) => "Test failed (unknown error).\n".to_string(),
            Some(failure) => format!(
                "Test failed ({}): {}\n",
                failure.kind(),
                failure.message().unwrap_or_default()
            ),
        };

        if self.show_timing {
            let _ = writeln!(output, "    Duration: {}ms", outcome.duration_ms);
        }

        output
    }

    /// Summary written once per flushed batch
    pub fn format_summary(&self, summary: &BatchSummary) -> String {
        match self.format {
            ReportFormat::Text => format_summary_text(summary),
            ReportFormat::Json => {
                let mut line = serde_json::to_string(summary).unwrap_or_default();
                line.push('\n');
                line
            }
        }
    }
}

fn format_assertion(info: &FailInfo) -> String {
    let expected = info.should_have_succeeded();
    let line = info
        .line()
        .map(|l| l.to_string())
        .unwrap_or_else(|| UNSPECIFIED_LINE.to_string());

    format!(
        "Test failed:\n    Assertion {} should have been {} but was {}.\n    File: {}\n    Line: {}\n",
        info.condition_literal().unwrap_or(UNSPECIFIED_CONDITION),
        expected,
        !expected,
        info.file().unwrap_or(UNSPECIFIED_FILE),
        line
    )
}

fn format_summary_text(summary: &BatchSummary) -> String {
    if summary.is_all_passed() {
        return format!(
            "All tests ({}) passed for batch {}.\n",
            summary.total, summary.batch
        );
    }

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{} out of {} test(s) failed for batch {}:",
        summary.failed.len(),
        summary.total,
        summary.batch
    );
    output.push_str("Following test(s) failed:\n");
    for test in &summary.failed {
        let _ = writeln!(output, "    {} ({})", test.index, test.name);
    }
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FailedTest;
    use chrono::Utc;

    fn text() -> ResultFormatter {
        ResultFormatter::new(ReportFormat::Text)
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!(ReportFormat::from_str("JSON"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::from_str("text"), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::from_str("table"), None);
    }

    #[test]
    fn test_header_block() {
        let header = text().format_header("my test").unwrap();
        let lines: Vec<_> = header.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 54);
        assert_eq!(lines[1], "\tmy test");
        assert_eq!(lines[0], lines[2]);

        assert!(ResultFormatter::new(ReportFormat::Json)
            .format_header("my test")
            .is_none());
    }

    #[test]
    fn test_plain_outcomes() {
        let f = text();
        assert_eq!(
            f.format_outcome(&RunOutcome::pass(0, "a", 0)),
            "Test succeeded.\n"
        );
        assert_eq!(
            f.format_outcome(&RunOutcome::fail(0, "a", Failure::Returned, 0)),
            "Test failed.\n"
        );
        assert_eq!(
            f.format_outcome(&RunOutcome::fail(0, "a", Failure::Unknown, 0)),
            "Test failed (unknown error).\n"
        );
        assert_eq!(
            f.format_outcome(&RunOutcome::fail(
                0,
                "a",
                Failure::Runtime("disk full".into()),
                0
            )),
            "Test failed (runtime error): disk full\n"
        );
        assert_eq!(
            f.format_outcome(&RunOutcome::fail(
                0,
                "a",
                Failure::InvalidArgument("negative".into()),
                0
            )),
            "Test failed (invalid input): negative\n"
        );
        assert_eq!(
            f.format_outcome(&RunOutcome::fail(0, "a", Failure::Error("oops".into()), 0)),
            "Test failed (generic error): oops\n"
        );
    }

    #[test]
    fn test_assertion_with_sentinels() {
        let failure = Failure::Assertion(FailInfo::new(false));
        let output = text().format_outcome(&RunOutcome::fail(0, "a", failure, 0));
        assert_eq!(
            output,
            "Test failed:\n    Assertion <Unspecified condition literal> should have been false but was true.\n    File: <Unspecified file>\n    Line: <Unspecified line>\n"
        );
    }

    #[test]
    fn test_assertion_with_fields() {
        let info = FailInfo::new(true)
            .with_condition("x == 1")
            .with_file("src/lib.rs")
            .with_line(12);
        let output = text().format_outcome(&RunOutcome::fail(0, "a", Failure::Assertion(info), 0));
        assert!(output.contains("Assertion x == 1 should have been true but was false."));
        assert!(output.contains("    File: src/lib.rs\n"));
        assert!(output.contains("    Line: 12\n"));
    }

    #[test]
    fn test_timing_line() {
        let output = text()
            .with_timing(true)
            .format_outcome(&RunOutcome::pass(0, "a", 42));
        assert_eq!(output, "Test succeeded.\n    Duration: 42ms\n");
    }

    #[test]
    fn test_summary_text() {
        let mut summary = BatchSummary::new(0, Utc::now(), &[RunOutcome::pass(0, "a", 0)]);
        assert_eq!(
            text().format_summary(&summary),
            "All tests (1) passed for batch 0.\n"
        );

        summary.total = 3;
        summary.failed = vec![
            FailedTest {
                index: 1,
                name: "b".into(),
            },
            FailedTest {
                index: 2,
                name: "c".into(),
            },
        ];
        assert_eq!(
            text().format_summary(&summary),
            "2 out of 3 test(s) failed for batch 0:\nFollowing test(s) failed:\n    1 (b)\n    2 (c)\n\n"
        );
    }

    #[test]
    fn test_json_outcome() {
        let output = ResultFormatter::new(ReportFormat::Json)
            .format_outcome(&RunOutcome::fail(3, "d", Failure::Returned, 0));
        let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["index"], 3);
        assert_eq!(value["failure"]["kind"], "returned");
    }
}
