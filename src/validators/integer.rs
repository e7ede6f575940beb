//! The `integer` validator.

use serde_json::Value;
use stillwater::Validation;

use crate::error::ChainError;
use crate::message::{display_value, MessageTemplate};
use crate::options::{check_message, Options};

use super::traits::{ProcessResult, ValidatorDefinition};
use super::{numeric, reject};

/// Smallest float that no longer fits in an `i64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Rejects values that are not exactly representable as an integer.
///
/// Accepts integer numbers, integral floats and numeric strings whose
/// float reading equals the reading of their leading integer digits, so
/// `"5.0"` passes while `"5.5"` and `"1e3"` do not. On success the value
/// is coerced to an integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Integer {
    /// Registry key of this validator.
    pub const NAME: &'static str = "integer";
}

/// Reads the leading `[+-]digits` prefix of a string as an integer.
fn leading_integer(s: &str) -> Option<i64> {
    let sign = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign..].bytes().take_while(u8::is_ascii_digit).count();
    s[..sign + digits].parse().ok()
}

fn to_integer(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(value.clone()),
        Value::Number(n) => {
            let n = n.as_f64()?;
            let integral =
                n.is_finite() && n.fract() == 0.0 && n >= -I64_UPPER && n < I64_UPPER;
            integral.then(|| Value::from(n as i64))
        }
        Value::String(s) => {
            let int = leading_integer(s.trim())?;
            let float = numeric(value)?;
            (float == int as f64).then(|| Value::from(int))
        }
        _ => None,
    }
}

impl ValidatorDefinition for Integer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn check_options(&self, options: &Options) -> Result<(), ChainError> {
        check_message(options, Self::NAME)
    }

    fn process(&self, value: &Value, options: &Options) -> ProcessResult {
        match to_integer(value) {
            Some(integer) => Validation::Success(integer),
            None => reject(
                Self::NAME,
                MessageTemplate::for_validator(Self::NAME, options)
                    .with("value", display_value(value)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unwrap_success<T, E: std::fmt::Debug>(v: Validation<T, E>) -> T {
        v.into_result().unwrap()
    }

    #[test]
    fn test_integers_pass_unchanged() {
        let options = Options::new();
        assert_eq!(unwrap_success(Integer.process(&json!(5), &options)), json!(5));
        assert_eq!(
            unwrap_success(Integer.process(&json!(i64::MIN), &options)),
            json!(i64::MIN)
        );
        assert_eq!(
            unwrap_success(Integer.process(&json!(u64::MAX), &options)),
            json!(u64::MAX)
        );
    }

    #[test]
    fn test_integral_floats_coerce_to_integer() {
        let result = Integer.process(&json!(3.0), &Options::new());
        assert_eq!(unwrap_success(result), json!(3));
    }

    #[test]
    fn test_numeric_strings_coerce_to_integer() {
        let options = Options::new();
        assert_eq!(unwrap_success(Integer.process(&json!("42"), &options)), json!(42));
        assert_eq!(unwrap_success(Integer.process(&json!("-7"), &options)), json!(-7));
        assert_eq!(unwrap_success(Integer.process(&json!("+8"), &options)), json!(8));
        assert_eq!(unwrap_success(Integer.process(&json!(" 5.0 "), &options)), json!(5));
    }

    #[test]
    fn test_rejects_fractions() {
        let failure = Integer
            .process(&json!("5.5"), &Options::new())
            .into_result()
            .unwrap_err();
        assert_eq!(failure.message, "'5.5' does not appear to be an integer");

        assert!(Integer.process(&json!(2.25), &Options::new()).is_failure());
    }

    #[test]
    fn test_rejects_exponent_strings_whose_readings_disagree() {
        let options = Options::new();

        let failure = Integer.process(&json!("1e3"), &options).into_result().unwrap_err();
        assert_eq!(failure.message, "'1e3' does not appear to be an integer");

        assert!(Integer.process(&json!("2E1"), &options).is_failure());
        assert!(Integer.process(&json!(".5"), &options).is_failure());
    }

    #[test]
    fn test_rejects_non_numbers() {
        let options = Options::new();

        let failure = Integer.process(&json!(null), &options).into_result().unwrap_err();
        assert_eq!(failure.message, "'null' does not appear to be an integer");

        for value in [json!("abc"), json!(""), json!(true), json!([1]), json!("1e30")] {
            assert!(Integer.process(&value, &options).is_failure());
        }
    }
}
