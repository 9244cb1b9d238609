//! Batch registry
//!
//! Collects test units and runs them as numbered batches.

use chrono::Utc;
use std::io::{self, Stdout, Write};
use tracing::{info, warn};

use super::runner::Runner;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::models::{BatchSummary, TestUnit};
use crate::output::ResultFormatter;
use crate::utils::Timer;

/// Manages tests. Launches whatever is still pending when dropped.
pub struct TestManager<W: Write = Stdout> {
    tests: Vec<TestUnit>,
    batch: usize,
    runner: Runner,
    sink: W,
}

impl TestManager<Stdout> {
    /// Manager reporting to stdout in the default text format
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }

    /// Manager reporting to stdout, formatted per `config`
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new().with_formatter(config.formatter())
    }
}

impl Default for TestManager<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TestManager<W> {
    pub fn with_sink(sink: W) -> Self {
        Self {
            tests: Vec::new(),
            batch: 0,
            runner: Runner::default(),
            sink,
        }
    }

    pub fn with_formatter(mut self, formatter: ResultFormatter) -> Self {
        self.runner = Runner::new(formatter);
        self
    }

    /// Replace the formatter used for subsequent tests and summaries
    pub fn set_formatter(&mut self, formatter: ResultFormatter) {
        self.runner = Runner::new(formatter);
    }

    /// Add a test to the current batch
    pub fn add_test(&mut self, test: TestUnit) {
        self.tests.push(test);
    }

    /// Run the current batch.
    ///
    /// Returns `Ok(None)` without writing anything or advancing the batch
    /// index when no test is pending. Otherwise every pending test runs in
    /// insertion order, one summary is written, the pending list is cleared
    /// and the batch index advances, even if writing the summary fails.
    pub fn launch(&mut self) -> Result<Option<BatchSummary>, HarnessError> {
        if self.tests.is_empty() {
            return Ok(None);
        }

        let tests = std::mem::take(&mut self.tests);
        let started_at = Utc::now();
        let timer = Timer::start(format!("batch {}", self.batch));

        info!("Launching batch {} ({} tests)", self.batch, tests.len());

        let outcomes: Vec<_> = tests
            .iter()
            .enumerate()
            .map(|(index, test)| self.runner.run(test, index, &mut self.sink))
            .collect();

        let mut summary = BatchSummary::new(self.batch, started_at, &outcomes);
        summary.duration_ms = timer.stop();
        self.batch += 1;

        if summary.is_all_passed() {
            info!("Batch {}: all {} tests passed", summary.batch, summary.total);
        } else {
            warn!(
                "Batch {}: {}/{} tests failed",
                summary.batch,
                summary.failed.len(),
                summary.total
            );
        }

        let report = self.runner.formatter().format_summary(&summary);
        self.sink
            .write_all(report.as_bytes())
            .and_then(|_| self.sink.flush())
            .map_err(|source| HarnessError::Report {
                batch: summary.batch,
                source,
            })?;

        Ok(Some(summary))
    }

    /// Index the next launched batch will carry
    pub fn batch_index(&self) -> usize {
        self.batch
    }

    /// Number of tests waiting for the next launch
    pub fn pending(&self) -> usize {
        self.tests.len()
    }

    pub fn pending_names(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(TestUnit::name)
    }

    pub fn formatter(&self) -> &ResultFormatter {
        self.runner.formatter()
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }
}

impl<W: Write> Drop for TestManager<W> {
    fn drop(&mut self) {
        if let Err(e) = self.launch() {
            warn!("Final batch launch failed: {}", e);
        }
    }
}
