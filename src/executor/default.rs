//! Default test manager
//!
//! A lazily created manager per thread, reporting to stdout. For the usual
//! single-threaded harness binary this is the process-wide default.

use std::cell::RefCell;
use std::io::Stdout;
use std::marker::PhantomData;
use tracing::warn;

use super::manager::TestManager;
use crate::assertions::fatal;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::models::{BatchSummary, TestUnit};

thread_local! {
    static DEFAULT_MANAGER: RefCell<TestManager<Stdout>> =
        RefCell::new(TestManager::from_config(&HarnessConfig::from_env()));
}

/// Run `f` against the default manager.
///
/// Aborts the process when called while the default manager is already in
/// use, e.g. from a test body during a default launch.
pub fn with_default_manager<R>(f: impl FnOnce(&mut TestManager<Stdout>) -> R) -> R {
    let result = DEFAULT_MANAGER.try_with(|manager| match manager.try_borrow_mut() {
        Ok(mut manager) => f(&mut manager),
        Err(_) => fatal(
            Some("default test manager re-entered from a running test"),
            Some("default manager is not in use"),
            Some(file!()),
            Some(line!()),
        ),
    });

    match result {
        Ok(value) => value,
        Err(_) => fatal(
            Some("default test manager used after thread teardown"),
            Some("default manager is alive"),
            Some(file!()),
            Some(line!()),
        ),
    }
}

/// Apply `config` to the default manager's reporting
pub fn configure_default(config: &HarnessConfig) {
    let formatter = config.formatter();
    with_default_manager(|manager| manager.set_formatter(formatter));
}

/// Add a test to the default manager batch
pub fn add_test(test: TestUnit) {
    with_default_manager(|manager| manager.add_test(test));
}

/// Launch the default manager pending tests
pub fn launch() -> Result<Option<BatchSummary>, HarnessError> {
    with_default_manager(|manager| manager.launch())
}

/// Scope guard that launches the default manager's pending tests on drop.
///
/// Hold one in `main` so the last batch is reported before the process
/// exits.
#[must_use = "pending tests are launched when the session is dropped"]
pub struct Session {
    // Tied to the thread owning the default manager.
    _not_send: PhantomData<*const ()>,
}

/// Start a session on the default manager
pub fn session() -> Session {
    Session {
        _not_send: PhantomData,
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let launched = DEFAULT_MANAGER.try_with(|manager| {
            manager
                .try_borrow_mut()
                .map(|mut manager| manager.launch())
        });

        match launched {
            Ok(Ok(Err(e))) => warn!("Final default batch failed: {}", e),
            Ok(Err(_)) => warn!("Default manager busy, session could not launch pending tests"),
            Err(_) => warn!("Default manager already torn down"),
            Ok(Ok(Ok(_))) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    // Each test runs on its own thread, so each sees a fresh default manager.

    #[test]
    fn test_default_manager_batches() {
        add_test(TestUnit::new("default pass", || true));
        add_test(TestUnit::new("default fail", || false));
        assert_eq!(with_default_manager(|m| m.pending()), 2);

        let summary = launch().unwrap().unwrap();
        assert_eq!(summary.batch, 0);
        assert_eq!(summary.failed_indices(), vec![1]);
        assert_eq!(with_default_manager(|m| m.batch_index()), 1);
    }

    #[test]
    fn test_configure_default() {
        let config = HarnessConfig {
            show_timing: true,
            ..Default::default()
        };
        configure_default(&config);

        let shows_timing = with_default_manager(|m| {
            let outcome = crate::models::RunOutcome::pass(0, "t", 1);
            m.formatter().format_outcome(&outcome).contains("Duration: 1ms")
        });
        assert!(shows_timing);
    }

    #[test]
    fn test_default_empty_launch() {
        assert!(launch().unwrap().is_none());
        assert!(launch().unwrap().is_none());
        assert_eq!(with_default_manager(|m| m.batch_index()), 0);
    }

    #[test]
    fn test_session_launches_on_drop() {
        let ran = Rc::new(Cell::new(false));
        {
            let _session = session();
            let flag = ran.clone();
            add_test(TestUnit::new("session", move || {
                flag.set(true);
                true
            }));
        }

        assert!(ran.get());
        assert_eq!(with_default_manager(|m| m.pending()), 0);
        assert_eq!(with_default_manager(|m| m.batch_index()), 1);
    }

    #[test]
    fn test_thread_exit_launches_pending() {
        let ran = Arc::new(AtomicBool::new(false));

        let flag = ran.clone();
        thread::spawn(move || {
            add_test(TestUnit::new("thread exit", move || {
                flag.store(true, Ordering::SeqCst);
                true
            }));
        })
        .join()
        .unwrap();

        assert!(ran.load(Ordering::SeqCst));
    }
}
