//! Per-value validation failure.

use std::fmt::{self, Display};

/// A single validator failure for one input value.
///
/// `ValidatorFailure` records which validator rejected the value and the
/// rendered message (template placeholders already substituted). The chain
/// collects only the message; the validator name is kept for callers that
/// drive definitions directly.
///
/// # Example
///
/// ```rust
/// use rulechain::ValidatorFailure;
///
/// let failure = ValidatorFailure::new("required", "value is required");
///
/// assert_eq!(failure.validator, "required");
/// assert_eq!(failure.to_string(), "value is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorFailure {
    /// Name of the validator that produced this failure.
    pub validator: String,
    /// Human-readable error message.
    pub message: String,
}

impl ValidatorFailure {
    /// Creates a new failure for the named validator.
    pub fn new(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
        }
    }

    /// Consumes the failure and returns its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Display for ValidatorFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidatorFailure {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidatorFailure>();
    assert_sync::<ValidatorFailure>();
};
