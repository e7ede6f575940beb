//! The common capability every validator implements.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ChainError, ValidatorFailure};
use crate::options::Options;

/// Outcome of running one validator against one value.
///
/// `Success` carries the (possibly coerced) value that becomes the chain's
/// current value. `Failure` carries the rendered message.
pub type ProcessResult = Validation<Value, ValidatorFailure>;

/// A named validation rule that can be bound into a chain.
///
/// Definitions are immutable and shared through `Arc` by every chain bound
/// from the same registry, so they must be `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use rulechain::{ProcessResult, ValidatorDefinition, ValidatorFailure};
/// use rulechain::options::Options;
/// use serde_json::Value;
/// use stillwater::Validation;
///
/// struct Lowercase;
///
/// impl ValidatorDefinition for Lowercase {
///     fn name(&self) -> &str {
///         "lowercase"
///     }
///
///     fn process(&self, value: &Value, _options: &Options) -> ProcessResult {
///         match value.as_str() {
///             Some(s) => Validation::Success(Value::String(s.to_lowercase())),
///             None => Validation::Failure(ValidatorFailure::new("lowercase", "not a string")),
///         }
///     }
/// }
/// ```
pub trait ValidatorDefinition: Send + Sync {
    /// The unique registry key of this validator.
    fn name(&self) -> &str;

    /// Option keys that must be present and non-null when binding.
    fn required_options(&self) -> &[&'static str] {
        &[]
    }

    /// Checks option values at bind time.
    ///
    /// Called after required keys are known to be present. The default
    /// accepts any options.
    fn check_options(&self, _options: &Options) -> Result<(), ChainError> {
        Ok(())
    }

    /// Runs the rule against the current value with the bound options.
    fn process(&self, value: &Value, options: &Options) -> ProcessResult;
}
