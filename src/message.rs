//! Failure message templates and placeholder substitution.
//!
//! Every built-in validator has a fixed message template keyed by its name.
//! Templates contain `%name%` placeholders that are substituted with concrete
//! values when a failure is reported. A bound validator may replace its
//! template through the `message` option.

use serde_json::Value;

use crate::options::Options;

/// Option key that overrides a validator's message template.
pub const MESSAGE_OPTION: &str = "message";

/// Template used for validators that have no entry in [`TEMPLATES`].
pub const FALLBACK_TEMPLATE: &str = "'%value%' is invalid";

/// Built-in message templates, keyed by validator name.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("required", "value is required"),
    (
        "minLength",
        "'%value%' is less than %min_length% characters long",
    ),
    ("isNumber", "'%value%' does not appear to be a number"),
    ("integer", "'%value%' does not appear to be an integer"),
    (
        "range",
        "'%value%' is not between '%start%' and '%end%', inclusively",
    ),
];

/// Returns the built-in template for a validator, if one exists.
pub fn template(validator: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == validator)
        .map(|(_, template)| *template)
}

/// A message template with its placeholder values.
///
/// # Example
///
/// ```rust
/// use rulechain::message::MessageTemplate;
///
/// let message = MessageTemplate::new("'%value%' is not between '%start%' and '%end%'")
///     .with("value", "9")
///     .with("start", "1")
///     .with("end", "5")
///     .render();
///
/// assert_eq!(message, "'9' is not between '1' and '5'");
/// ```
#[derive(Debug, Clone)]
pub struct MessageTemplate<'a> {
    template: &'a str,
    params: Vec<(&'static str, String)>,
}

impl<'a> MessageTemplate<'a> {
    /// Creates a template from raw template text.
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            params: Vec::new(),
        }
    }

    /// Selects the template for a bound validator.
    ///
    /// A string `message` option takes precedence over the built-in template.
    pub fn for_validator(validator: &str, options: &'a Options) -> Self {
        let text = options
            .get(MESSAGE_OPTION)
            .and_then(Value::as_str)
            .or_else(|| template(validator))
            .unwrap_or(FALLBACK_TEMPLATE);
        Self::new(text)
    }

    /// Adds a placeholder value and returns self for chaining.
    pub fn with(mut self, placeholder: &'static str, value: impl Into<String>) -> Self {
        self.params.push((placeholder, value.into()));
        self
    }

    /// Substitutes all known placeholders in a single pass.
    ///
    /// Unknown placeholders are left as written. Substituted text is never
    /// scanned again, so a value containing `%start%` stays literal.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('%') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let replacement = after
                .find('%')
                .and_then(|close| self.param(&after[..close]).map(|v| (close, v)));

            match replacement {
                Some((close, value)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('%');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Floats at or above this magnitude keep their JSON rendering.
const PLAIN_FLOAT_LIMIT: f64 = 1e21;

/// Returns the string form of a value as it appears in messages.
///
/// Strings render without quotes and integral floats without a fractional
/// part (`9.0` renders as `9`). `null` renders as `null` and everything
/// else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < PLAIN_FLOAT_LIMIT => {
                if f == 0.0 {
                    "0".to_string()
                } else {
                    format!("{f:.0}")
                }
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
