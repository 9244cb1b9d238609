//! testbatch - minimal in-process test batches
//!
//! Collects named test functions into ordered batches, runs each one while
//! absorbing whatever failure it raises, and prints a per-batch summary.
//!
//! ## Features
//!
//! - Insertion-ordered batches with a monotonically increasing batch index
//! - Failure classification: returned `false`, failed assertion, classified
//!   error, generic error, unknown payload
//! - A default manager launched by a [`Session`] guard at scope exit
//! - Text or JSON reports
//!
//! ## Usage
//!
//! ```no_run
//! use testbatch::{add_test, fail_test_if, test_success_requires};
//!
//! fn addition() -> bool {
//!     fail_test_if!(1 + 1 != 2);
//!     test_success_requires!(2 + 2 == 4);
//!     true
//! }
//!
//! fn main() {
//!     let _session = testbatch::session();
//!     add_test!(addition);
//!     // the batch is launched when `_session` drops
//! }
//! ```

pub mod assertions;
pub mod config;
pub mod error;
pub mod executor;
pub mod models;
pub mod output;
pub mod utils;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use executor::{
    add_test, configure_default, execute, launch, session, with_default_manager, Runner, Session,
    TestManager,
};
pub use models::{BatchSummary, FailInfo, Failure, RunOutcome, TestError, TestUnit};
pub use output::{ReportFormat, ResultFormatter};
