//! Demonstration tests
//!
//! Two groups: tests of a small stateful type, and one deliberately failing
//! test per failure kind so every report line can be seen.

mod failures;
mod toggle;

use testbatch::{add_test, TestUnit};

/// Register the `Toggle` tests on the default manager
pub fn register_toggle_tests() {
    add_test!(toggle::foo_succeeds_once);
    add_test!(toggle::bar_resets_state);
    add_test(TestUnit::unnamed(toggle::fresh_state_is_zero));
}

/// Register one failing test per failure kind on the default manager
pub fn register_failure_tests() {
    add_test!(failures::returns_false);
    add_test!(failures::should_have_failed);
    add_test!(failures::should_have_succeeded);
    add_test(TestUnit::fallible(
        "failures::runtime_error",
        failures::runtime_error,
    ));
    add_test!(failures::invalid_argument);
    add_test!(failures::panics);
    add_test!(failures::unknown_payload);
}
