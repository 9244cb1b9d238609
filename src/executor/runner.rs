//! Test execution runner
//!
//! Runs one test unit, absorbs whatever failure it raises, and writes the
//! trace block for it.

use std::any::Any;
use std::error::Error as StdError;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use crate::models::{FailInfo, Failure, RunOutcome, TestError, TestUnit};
use crate::output::ResultFormatter;
use crate::utils::Timer;

/// Runs single test units against an output sink
#[derive(Clone, Debug, Default)]
pub struct Runner {
    formatter: ResultFormatter,
}

impl Runner {
    pub fn new(formatter: ResultFormatter) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &ResultFormatter {
        &self.formatter
    }

    /// Run `unit` as the `index`-th test of its batch.
    ///
    /// Never panics on behalf of the test: every failure the body raises is
    /// converted into the returned outcome.
    pub fn run(&self, unit: &TestUnit, index: usize, sink: &mut dyn Write) -> RunOutcome {
        if let Some(header) = self.formatter.format_header(unit.name()) {
            write_trace(sink, &header);
        }

        debug!("Running test {} ({})", index, unit.name());

        let timer = Timer::start(unit.name());
        let result = panic::catch_unwind(AssertUnwindSafe(|| unit.call()));
        let duration_ms = timer.stop();

        let failure = match result {
            Ok(Ok(true)) => None,
            Ok(Ok(false)) => Some(Failure::Returned),
            Ok(Err(err)) => Some(classify_error(err)),
            Err(payload) => Some(classify_payload(payload)),
        };

        let outcome = match failure {
            None => RunOutcome::pass(index, unit.name(), duration_ms),
            Some(failure) => {
                debug!("Test {} failed: {}", index, failure);
                RunOutcome::fail(index, unit.name(), failure, duration_ms)
            }
        };

        write_trace(sink, &self.formatter.format_outcome(&outcome));
        outcome
    }

    /// Run `unit` and report whether it passed
    pub fn execute(&self, unit: &TestUnit, sink: &mut dyn Write) -> bool {
        self.run(unit, 0, sink).is_success()
    }
}

/// Run a single test with the default text formatter
pub fn execute(unit: &TestUnit, sink: &mut dyn Write) -> bool {
    Runner::default().execute(unit, sink)
}

fn write_trace(sink: &mut dyn Write, text: &str) {
    if let Err(e) = sink.write_all(text.as_bytes()).and_then(|_| sink.flush()) {
        warn!("Failed to write test trace: {}", e);
    }
}

fn classify_error(err: anyhow::Error) -> Failure {
    match err.downcast::<TestError>() {
        Ok(err) => err.into(),
        Err(err) => Failure::Error(format!("{err:#}")),
    }
}

fn classify_payload(payload: Box<dyn Any + Send>) -> Failure {
    let payload = match payload.downcast::<FailInfo>() {
        Ok(info) => return Failure::Assertion(*info),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<TestError>() {
        Ok(err) => return (*err).into(),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<anyhow::Error>() {
        Ok(err) => return classify_error(*err),
        Err(payload) => payload,
    };

    if let Some(err) = payload.downcast_ref::<Box<dyn StdError + Send + Sync>>() {
        Failure::Error(err.to_string())
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        Failure::Error(msg.clone())
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        Failure::Error((*msg).to_string())
    } else {
        Failure::Unknown
    }
}
