//! Harness error types

use std::io;
use thiserror::Error;

/// Errors surfaced by a test manager
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The batch ran but its summary could not be written
    #[error("failed to write summary for batch {batch}")]
    Report {
        batch: usize,
        #[source]
        source: io::Error,
    },
}
