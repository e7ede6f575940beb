//! The `isNumber` validator.

use serde_json::Value;
use stillwater::Validation;

use crate::error::ChainError;
use crate::message::{display_value, MessageTemplate};
use crate::options::{check_message, Options};

use super::traits::{ProcessResult, ValidatorDefinition};
use super::{float_value, is_numeric_str, reject};

/// Rejects values whose string form is not a decimal number.
///
/// On success the value is coerced to a float.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNumber;

impl IsNumber {
    /// Registry key of this validator.
    pub const NAME: &'static str = "isNumber";
}

impl ValidatorDefinition for IsNumber {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn check_options(&self, options: &Options) -> Result<(), ChainError> {
        check_message(options, Self::NAME)
    }

    fn process(&self, value: &Value, options: &Options) -> ProcessResult {
        let text = display_value(value);

        let coerced = is_numeric_str(&text)
            .then(|| text.parse::<f64>().ok())
            .flatten()
            .and_then(float_value);

        match coerced {
            Some(number) => Validation::Success(number),
            None => reject(
                Self::NAME,
                MessageTemplate::for_validator(Self::NAME, options).with("value", text),
            ),
        }
    }
}
