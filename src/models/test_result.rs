//! Test result models
//!
//! Per-test outcomes and per-batch summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::failure::Failure;

/// Result of running one test unit
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Position of the unit within its batch
    pub index: usize,
    pub name: String,
    pub failure: Option<Failure>,
    pub duration_ms: u64,
}

impl RunOutcome {
    pub fn pass(index: usize, name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            index,
            name: name.into(),
            failure: None,
            duration_ms,
        }
    }

    pub fn fail(index: usize, name: impl Into<String>, failure: Failure, duration_ms: u64) -> Self {
        Self {
            index,
            name: name.into(),
            failure: Some(failure),
            duration_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// A failed test as listed in a batch summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedTest {
    pub index: usize,
    pub name: String,
}

/// Summary of one flushed batch
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub batch: usize,
    pub total: usize,
    /// Failed tests in encounter order
    pub failed: Vec<FailedTest>,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl BatchSummary {
    pub fn new(batch: usize, started_at: DateTime<Utc>, outcomes: &[RunOutcome]) -> Self {
        let failed = outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| FailedTest {
                index: o.index,
                name: o.name.clone(),
            })
            .collect();
        let duration_ms = outcomes.iter().map(|o| o.duration_ms).sum();

        Self {
            batch,
            total: outcomes.len(),
            failed,
            started_at,
            duration_ms,
        }
    }

    pub fn passed(&self) -> usize {
        self.total - self.failed.len()
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed() as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.failed.is_empty()
    }

    /// Batch-relative indices of failed tests
    pub fn failed_indices(&self) -> Vec<usize> {
        self.failed.iter().map(|t| t.index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes() -> Vec<RunOutcome> {
        vec![
            RunOutcome::pass(0, "a", 3),
            RunOutcome::fail(1, "b", Failure::Returned, 1),
            RunOutcome::fail(2, "c", Failure::Unknown, 2),
        ]
    }

    #[test]
    fn test_summary_counts() {
        let summary = BatchSummary::new(4, Utc::now(), &outcomes());
        assert_eq!(summary.batch, 4);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed_indices(), vec![1, 2]);
        assert_eq!(summary.failed[0].name, "b");
        assert_eq!(summary.duration_ms, 6);
        assert!(!summary.is_all_passed());
    }

    #[test]
    fn test_summary_all_passed() {
        let summary = BatchSummary::new(0, Utc::now(), &[RunOutcome::pass(0, "only", 0)]);
        assert!(summary.is_all_passed());
        assert_eq!(summary.pass_rate(), 100.0);
    }
}
