//! Hard-abort precondition checks

use tracing::error;

const NO_LITERAL: &str = "<No condition literal specified>";
const NO_MESSAGE: &str = "<No error message specified>";
const NO_FILE: &str = "<Unspecified file>";
const NO_LINE: &str = "<Unspecified line>";

/// Abort the process unless `condition` holds.
///
/// Meant for violated library preconditions, never for test outcomes: the
/// runner does not intercept it.
pub fn fatal_assert(
    condition: bool,
    message: Option<&str>,
    condition_literal: Option<&str>,
    file: Option<&str>,
    line: Option<u32>,
) {
    if !condition {
        fatal(message, condition_literal, file, line)
    }
}

/// Print the diagnostic to stderr and abort
pub fn fatal(
    message: Option<&str>,
    condition_literal: Option<&str>,
    file: Option<&str>,
    line: Option<u32>,
) -> ! {
    let diagnostic = fatal_message(message, condition_literal, file, line);
    error!("{}", diagnostic.trim_end());
    eprint!("{diagnostic}");
    std::process::abort()
}

/// Diagnostic written by [`fatal`]
pub fn fatal_message(
    message: Option<&str>,
    condition_literal: Option<&str>,
    file: Option<&str>,
    line: Option<u32>,
) -> String {
    let line = line
        .map(|l| l.to_string())
        .unwrap_or_else(|| NO_LINE.to_string());

    format!(
        "Assertion {} failed.\n    Message: {}\n    File: {}\n    Line: {}\n",
        condition_literal.unwrap_or(NO_LITERAL),
        message.unwrap_or(NO_MESSAGE),
        file.unwrap_or(NO_FILE),
        line
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_with_fields() {
        let msg = fatal_message(Some("bad state"), Some("len > 0"), Some("lib.rs"), Some(9));
        assert_eq!(
            msg,
            "Assertion len > 0 failed.\n    Message: bad state\n    File: lib.rs\n    Line: 9\n"
        );
    }

    #[test]
    fn test_message_sentinels() {
        let msg = fatal_message(None, None, None, None);
        assert!(msg.starts_with("Assertion <No condition literal specified> failed."));
        assert!(msg.contains("Message: <No error message specified>"));
        assert!(msg.contains("File: <Unspecified file>"));
        assert!(msg.contains("Line: <Unspecified line>"));
    }
}
