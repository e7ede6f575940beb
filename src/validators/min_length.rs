//! The `minLength` validator.

use serde_json::Value;
use stillwater::Validation;

use crate::error::ChainError;
use crate::message::{display_value, MessageTemplate};
use crate::options::{check_message, length_option, Options};

use super::traits::{ProcessResult, ValidatorDefinition};
use super::reject;

/// Rejects values shorter than the `minLength` option.
///
/// Strings are measured in Unicode scalar values and arrays by element
/// count. Any other value has no length and is rejected. Never coerces.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinLength;

impl MinLength {
    /// Registry key of this validator.
    pub const NAME: &'static str = "minLength";
    /// Option holding the minimum length.
    pub const MIN_LENGTH: &'static str = "minLength";
}

fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

impl ValidatorDefinition for MinLength {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn required_options(&self) -> &[&'static str] {
        &[Self::MIN_LENGTH]
    }

    fn check_options(&self, options: &Options) -> Result<(), ChainError> {
        length_option(options, Self::NAME, Self::MIN_LENGTH)?;
        check_message(options, Self::NAME)
    }

    fn process(&self, value: &Value, options: &Options) -> ProcessResult {
        let min = length_option(options, Self::NAME, Self::MIN_LENGTH).ok();

        match (length_of(value), min) {
            (Some(len), Some(min)) if len >= min => Validation::Success(value.clone()),
            _ => reject(
                Self::NAME,
                MessageTemplate::for_validator(Self::NAME, options)
                    .with("value", display_value(value))
                    .with(
                        "min_length",
                        options
                            .get(Self::MIN_LENGTH)
                            .map(display_value)
                            .unwrap_or_default(),
                    ),
            ),
        }
    }
}
