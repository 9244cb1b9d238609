//! Deliberately failing tests

use std::panic;
use testbatch::{fail_test_if, test_success_requires, TestError};

pub fn returns_false() -> bool {
    false
}

pub fn should_have_failed() -> bool {
    let retries = 3;
    fail_test_if!(retries > 2);
    true
}

pub fn should_have_succeeded() -> bool {
    let name = "batch";
    test_success_requires!(name.is_empty());
    true
}

pub fn runtime_error() -> anyhow::Result<bool> {
    Err(TestError::runtime("connection reset while reading fixture").into())
}

pub fn invalid_argument() -> bool {
    TestError::invalid_argument("batch size must be positive").raise()
}

pub fn panics() -> bool {
    let values: Vec<u32> = Vec::new();
    values.iter().sum::<u32>() / values.len() as u32 > 0
}

pub fn unknown_payload() -> bool {
    panic::panic_any(7_i64)
}
