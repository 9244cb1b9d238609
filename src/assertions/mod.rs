//! Assertion entry points
//!
//! Macros used inside test bodies to fail the current test, and the
//! process-aborting precondition check reserved for library misuse.

mod precondition;

pub use precondition::{fatal, fatal_assert, fatal_message};

/// Fail the current test if `cond` is true.
///
/// ```no_run
/// # use testbatch::fail_test_if;
/// let items: Vec<u32> = Vec::new();
/// fail_test_if!(!items.is_empty());
/// ```
#[macro_export]
macro_rules! fail_test_if {
    ($cond:expr $(,)?) => {
        $crate::models::check(
            $cond,
            false,
            ::core::option::Option::Some(stringify!($cond)),
            ::core::option::Option::Some(file!()),
            ::core::option::Option::Some(line!()),
        )
    };
}

/// Fail the current test unless `cond` is true
#[macro_export]
macro_rules! test_success_requires {
    ($cond:expr $(,)?) => {
        $crate::models::check(
            $cond,
            true,
            ::core::option::Option::Some(stringify!($cond)),
            ::core::option::Option::Some(file!()),
            ::core::option::Option::Some(line!()),
        )
    };
}

/// Register a `fn() -> bool` on the default manager, named after its path
#[macro_export]
macro_rules! add_test {
    ($test:path $(,)?) => {
        $crate::add_test($crate::TestUnit::new(stringify!($test), $test))
    };
}

/// Abort the process with a diagnostic unless `cond` holds
#[macro_export]
macro_rules! fatal_assert {
    ($cond:expr, $msg:expr $(,)?) => {
        $crate::assertions::fatal_assert(
            $cond,
            ::core::option::Option::Some($msg),
            ::core::option::Option::Some(stringify!($cond)),
            ::core::option::Option::Some(file!()),
            ::core::option::Option::Some(line!()),
        )
    };
    ($cond:expr $(,)?) => {
        $crate::assertions::fatal_assert(
            $cond,
            ::core::option::Option::None,
            ::core::option::Option::Some(stringify!($cond)),
            ::core::option::Option::Some(file!()),
            ::core::option::Option::Some(line!()),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::models::{FailInfo, Failure, TestUnit};
    use crate::Runner;

    fn failure_of(unit: TestUnit) -> Option<Failure> {
        Runner::default().run(&unit, 0, &mut Vec::new()).failure
    }

    fn assertion_of(unit: TestUnit) -> FailInfo {
        match failure_of(unit) {
            Some(Failure::Assertion(info)) => info,
            other => panic!("expected assertion failure, got {other:?}"),
        }
    }

    #[test]
    fn test_fail_test_if() {
        let info = assertion_of(TestUnit::new("fail_if", || {
            let state = 0;
            fail_test_if!(state == 0);
            true
        }));

        assert_eq!(info.condition_literal(), Some("state == 0"));
        assert!(!info.should_have_succeeded());
        assert!(info.file().unwrap().ends_with("mod.rs"));
        assert!(info.line().is_some());
    }

    #[test]
    fn test_success_requires() {
        let info = assertion_of(TestUnit::new("requires", || {
            let values = [1, 2];
            test_success_requires!(values.len() == 3);
            true
        }));

        assert_eq!(info.condition_literal(), Some("values.len() == 3"));
        assert!(info.should_have_succeeded());
    }

    #[test]
    fn test_satisfied_assertions_pass() {
        let failure = failure_of(TestUnit::new("holds", || {
            fail_test_if!(1 + 1 == 3);
            test_success_requires!(2 > 1);
            true
        }));
        assert_eq!(failure, None);
    }

    #[test]
    fn test_fatal_assert_true_returns() {
        fatal_assert!(1 < 2, "arithmetic works");
        fatal_assert!(true);
    }
}
