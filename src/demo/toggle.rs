//! Tests for a type that answers `true` once until reset

use testbatch::{fail_test_if, test_success_requires};

#[derive(Debug, Default)]
struct Toggle {
    state: u32,
}

impl Toggle {
    fn foo(&mut self) -> bool {
        if self.state == 0 {
            self.state += 1;
            return true;
        }

        false
    }

    fn bar(&mut self) {
        self.state = 0;
    }
}

pub fn foo_succeeds_once() -> bool {
    let mut toggle = Toggle::default();

    fail_test_if!(!toggle.foo());
    test_success_requires!(toggle.state == 1);
    fail_test_if!(toggle.foo());

    true
}

pub fn bar_resets_state() -> bool {
    let mut toggle = Toggle::default();
    toggle.foo();
    toggle.bar();

    test_success_requires!(toggle.state == 0);
    toggle.foo()
}

pub fn fresh_state_is_zero() -> bool {
    Toggle::default().state == 0
}
