//! Data models for test execution
//!
//! Contains failure descriptors, test units, and result types.

pub mod failure;
pub mod test_result;
pub mod test_unit;

pub use failure::{check, FailInfo, Failure, TestError};
pub use test_result::{BatchSummary, FailedTest, RunOutcome};
pub use test_unit::{TestUnit, UNNAMED_TEST};
