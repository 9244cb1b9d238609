//! Test unit model
//!
//! A named, zero-argument callable that reports success as a boolean.

use std::fmt;

/// Display name used when a test is registered without one
pub const UNNAMED_TEST: &str = "<Unnamed test>";

type Callable = Box<dyn Fn() -> anyhow::Result<bool>>;

/// A single registered test
pub struct TestUnit {
    name: String,
    callable: Callable,
}

impl TestUnit {
    /// Wrap a predicate returning `true` on success
    pub fn new(name: impl Into<String>, test: impl Fn() -> bool + 'static) -> Self {
        Self {
            name: name.into(),
            callable: Box::new(move || Ok(test())),
        }
    }

    /// Wrap a predicate that may also fail through an error value.
    ///
    /// An `Err` is classified exactly like an error raised by unwinding.
    pub fn fallible(
        name: impl Into<String>,
        test: impl Fn() -> anyhow::Result<bool> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            callable: Box::new(test),
        }
    }

    /// Wrap a predicate without a display name
    pub fn unnamed(test: impl Fn() -> bool + 'static) -> Self {
        Self::new(UNNAMED_TEST, test)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the callable. Unwinding is not caught here.
    pub(crate) fn call(&self) -> anyhow::Result<bool> {
        (self.callable)()
    }
}

impl fmt::Debug for TestUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestUnit")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for TestUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_default() {
        let unit = TestUnit::unnamed(|| true);
        assert_eq!(unit.name(), UNNAMED_TEST);
    }

    #[test]
    fn test_call_wraps_bool() {
        let unit = TestUnit::new("returns false", || false);
        assert!(!unit.call().unwrap());
        assert_eq!(unit.to_string(), "returns false");
    }

    #[test]
    fn test_fallible_error_passes_through() {
        let unit = TestUnit::fallible("errs", || anyhow::bail!("no config"));
        let err = unit.call().unwrap_err();
        assert_eq!(err.to_string(), "no config");
    }
}
