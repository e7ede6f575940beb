//! Built-in validator definitions.
//!
//! Each built-in implements [`ValidatorDefinition`]. On failure a validator
//! renders its message template (or the bound `message` override) with the
//! offending value substituted.

mod integer;
mod is_number;
mod min_length;
mod range;
mod required;
mod traits;

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};
use stillwater::Validation;

use crate::error::ValidatorFailure;
use crate::message::MessageTemplate;

pub use integer::Integer;
pub use is_number::IsNumber;
pub use min_length::MinLength;
pub use range::Range;
pub use required::Required;
pub use traits::{ProcessResult, ValidatorDefinition};

/// Decimal number pattern: optional sign, digits with optional fraction
/// (or a bare fraction), optional exponent.
static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("number pattern is valid")
});

/// Returns all built-in definitions in registration order.
pub fn builtins() -> Vec<Arc<dyn ValidatorDefinition>> {
    vec![
        Arc::new(Required),
        Arc::new(MinLength),
        Arc::new(IsNumber),
        Arc::new(Integer),
        Arc::new(Range),
    ]
}

/// Returns true when the string looks like a decimal number.
pub(crate) fn is_numeric_str(s: &str) -> bool {
    NUMBER_PATTERN.is_match(s)
}

/// Reads a finite number from a JSON number or a numeric string.
pub(crate) fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if !is_numeric_str(s) {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Wraps a finite float as a JSON number.
pub(crate) fn float_value(n: f64) -> Option<Value> {
    Number::from_f64(n).map(Value::Number)
}

/// Builds a failure with the rendered message.
pub(crate) fn reject(validator: &str, message: MessageTemplate<'_>) -> ProcessResult {
    Validation::Failure(ValidatorFailure::new(validator, message.render()))
}
