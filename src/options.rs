//! Validator options and bind-time option checks.

use serde_json::{Map, Value};

use crate::error::ChainError;

/// Options bound to a single validator.
pub type Options = Map<String, Value>;

/// Normalizes caller-supplied options for a validator.
///
/// `null` means "use defaults" and becomes an empty object. Objects are
/// copied so later changes to the caller's value never reach the chain.
pub fn normalize(validator: &str, options: &Value) -> Result<Options, ChainError> {
    match options {
        Value::Null => Ok(Options::new()),
        Value::Object(map) => Ok(map.clone()),
        _ => Err(ChainError::MalformedOptions(validator.to_string())),
    }
}

/// Returns the first required option that is absent or null.
pub fn missing_option<'k>(options: &Options, required: &[&'k str]) -> Option<&'k str> {
    required
        .iter()
        .copied()
        .find(|key| options.get(*key).map_or(true, Value::is_null))
}

/// Reads a numeric option, failing when it is present but not a number.
pub fn number_option(options: &Options, validator: &str, key: &str) -> Result<f64, ChainError> {
    options
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| ChainError::invalid_option(key, validator, "expected a number"))
}

/// Reads a non-negative integer option.
pub fn length_option(options: &Options, validator: &str, key: &str) -> Result<usize, ChainError> {
    options
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            ChainError::invalid_option(key, validator, "expected a non-negative integer")
        })
}

/// Checks that an optional `message` override is a string.
pub fn check_message(options: &Options, validator: &str) -> Result<(), ChainError> {
    match options.get(crate::message::MESSAGE_OPTION) {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(ChainError::invalid_option(
            crate::message::MESSAGE_OPTION,
            validator,
            "expected a string",
        )),
    }
}
