//! Test execution engine
//!
//! Provides the single-test runner, batch managers, and the default manager.

mod default;
mod manager;
mod runner;

pub use default::{add_test, configure_default, launch, session, with_default_manager, Session};
pub use manager::TestManager;
pub use runner::{execute, Runner};
