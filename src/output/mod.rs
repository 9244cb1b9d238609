//! Output formatting module
//!
//! Renders test traces and batch summaries.

mod formatter;

pub use formatter::{ReportFormat, ResultFormatter};
