//! The `range` validator.

use serde_json::Value;
use stillwater::Validation;

use crate::error::ChainError;
use crate::message::{display_value, MessageTemplate};
use crate::options::{check_message, number_option, Options};

use super::traits::{ProcessResult, ValidatorDefinition};
use super::{float_value, numeric, reject};

/// Rejects numbers outside the inclusive `[start, end]` bounds.
///
/// On success the value is always coerced to a float, even when an
/// earlier validator in the chain produced an integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Range;

impl Range {
    /// Registry key of this validator.
    pub const NAME: &'static str = "range";
    /// Option holding the inclusive lower bound.
    pub const START: &'static str = "start";
    /// Option holding the inclusive upper bound.
    pub const END: &'static str = "end";
}

impl ValidatorDefinition for Range {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn required_options(&self) -> &[&'static str] {
        &[Self::START, Self::END]
    }

    fn check_options(&self, options: &Options) -> Result<(), ChainError> {
        number_option(options, Self::NAME, Self::START)?;
        number_option(options, Self::NAME, Self::END)?;
        check_message(options, Self::NAME)
    }

    fn process(&self, value: &Value, options: &Options) -> ProcessResult {
        let start = options.get(Self::START).and_then(Value::as_f64);
        let end = options.get(Self::END).and_then(Value::as_f64);

        let in_range = match (numeric(value), start, end) {
            (Some(n), Some(start), Some(end)) if n >= start && n <= end => float_value(n),
            _ => None,
        };

        match in_range {
            Some(number) => Validation::Success(number),
            None => reject(
                Self::NAME,
                MessageTemplate::for_validator(Self::NAME, options)
                    .with("value", display_value(value))
                    .with("start", bound(options, Self::START))
                    .with("end", bound(options, Self::END)),
            ),
        }
    }
}

fn bound(options: &Options, key: &str) -> String {
    options.get(key).map(display_value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(start: Value, end: Value) -> Options {
        json!({ "start": start, "end": end })
            .as_object()
            .unwrap()
            .clone()
    }

    #[test]
    fn test_in_range_coerces_to_float() {
        let result = Range.process(&json!(3), &options(json!(1), json!(5)));
        assert_eq!(result.into_result().unwrap(), json!(3.0));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let opts = options(json!(1), json!(5));
        assert!(Range.process(&json!(1), &opts).is_success());
        assert!(Range.process(&json!(5), &opts).is_success());
        assert!(Range.process(&json!(0.999), &opts).is_failure());
        assert!(Range.process(&json!(5.001), &opts).is_failure());
    }

    #[test]
    fn test_numeric_strings_are_compared_as_numbers() {
        let result = Range.process(&json!("2.5"), &options(json!(1), json!(5)));
        assert_eq!(result.into_result().unwrap(), json!(2.5));
    }

    #[test]
    fn test_out_of_range_message() {
        let failure = Range
            .process(&json!(9), &options(json!(1), json!(5)))
            .into_result()
            .unwrap_err();
        assert_eq!(
            failure.message,
            "'9' is not between '1' and '5', inclusively"
        );
    }

    #[test]
    fn test_non_numeric_values_fail() {
        let opts = options(json!(1), json!(5));
        for value in [json!(null), json!("abc"), json!(true)] {
            assert!(Range.process(&value, &opts).is_failure());
        }
    }

    #[test]
    fn test_check_options_requires_numbers() {
        assert!(Range.check_options(&options(json!(1), json!(5))).is_ok());

        let result = Range.check_options(&options(json!("1"), json!(5)));
        assert!(matches!(
            result,
            Err(ChainError::InvalidOption { ref option, .. }) if option == "start"
        ));
    }
}
