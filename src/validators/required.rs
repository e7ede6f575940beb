//! The `required` validator.

use serde_json::Value;
use stillwater::Validation;

use crate::error::ChainError;
use crate::message::{display_value, MessageTemplate};
use crate::options::{check_message, Options};

use super::traits::{ProcessResult, ValidatorDefinition};
use super::reject;

/// Rejects `null` and the empty string. Never coerces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Required {
    /// Registry key of this validator.
    pub const NAME: &'static str = "required";
}

impl ValidatorDefinition for Required {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn check_options(&self, options: &Options) -> Result<(), ChainError> {
        check_message(options, Self::NAME)
    }

    fn process(&self, value: &Value, options: &Options) -> ProcessResult {
        let missing = match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };

        if missing {
            reject(
                Self::NAME,
                MessageTemplate::for_validator(Self::NAME, options)
                    .with("value", display_value(value)),
            )
        } else {
            Validation::Success(value.clone())
        }
    }
}
