//! The validator chain executor.
//!
//! This module provides [`ValidatorChain`], which binds a [`ChainConfig`]
//! against a [`ValidatorRegistry`] and runs values through the bound
//! validators in order, collecting error messages and applying coercions.

use rayon::prelude::*;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use stillwater::Validation;

use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::options::{self, Options};
use crate::registry::ValidatorRegistry;
use crate::validators::{ProcessResult, ValidatorDefinition};

/// A validator definition paired with the options it was bound with.
///
/// Created once per chain at construction time and never mutated.
#[derive(Clone)]
pub struct BoundValidator {
    name: String,
    options: Options,
    definition: Arc<dyn ValidatorDefinition>,
}

impl BoundValidator {
    /// Returns the validator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bound options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns a single bound option.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Runs the definition against a value with the bound options.
    pub fn process(&self, value: &Value) -> ProcessResult {
        self.definition.process(value, &self.options)
    }
}

impl fmt::Debug for BoundValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundValidator")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// The outcome of running one value through a chain.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationRun {
    /// The final, possibly coerced, value.
    pub value: Value,
    /// Error messages in validator execution order.
    pub errors: Vec<String>,
}

impl ValidationRun {
    /// Returns true if any validator failed.
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Converts the run into a `Result`, yielding the value only when every
    /// validator passed.
    pub fn into_result(self) -> Result<Value, Vec<String>> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(self.errors)
        }
    }
}

/// An ordered chain of bound validators.
///
/// The chain is bound once from a [`ChainConfig`]; binding fails as a whole
/// if any validator is unknown or misconfigured. Each call to
/// [`validate`](Self::validate) resets the chain's result state, runs the
/// value through every bound validator in order and keeps the final value
/// and errors for inspection.
///
/// With `break_on_error` (the default) execution stops at the first failure
/// and later validators neither run nor coerce. Without it every validator
/// runs and each failure adds its own message.
///
/// # Example
///
/// ```rust
/// use rulechain::{ChainConfig, ValidatorChain};
/// use serde_json::json;
///
/// let config = ChainConfig::new()
///     .validator("required", json!({}))
///     .validator("integer", json!({}));
///
/// let mut chain = ValidatorChain::new(config).unwrap();
///
/// assert_eq!(chain.validate(json!("5")), &json!(5));
/// assert!(!chain.has_error());
///
/// chain.validate(json!(null));
/// assert!(chain.has_error());
/// assert_eq!(chain.errors(), ["value is required"]);
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorChain {
    validators: Vec<BoundValidator>,
    break_on_error: bool,
    last: ValidationRun,
}

impl ValidatorChain {
    /// Binds a configuration against the global built-in registry.
    ///
    /// # Errors
    ///
    /// - `ChainError::UnknownValidator` if a name is not registered
    /// - `ChainError::MissingOption` if a required option is absent or null
    /// - `ChainError::InvalidOption` if an option has an unusable value
    /// - `ChainError::MalformedOptions` if options are not an object or null
    pub fn new(config: ChainConfig) -> Result<Self, ChainError> {
        Self::with_registry(config, ValidatorRegistry::global())
    }

    /// Binds a configuration against the given registry.
    ///
    /// # Errors
    ///
    /// Same as [`ValidatorChain::new`].
    pub fn with_registry(
        config: ChainConfig,
        registry: &ValidatorRegistry,
    ) -> Result<Self, ChainError> {
        let validators = config
            .entries()
            .map(|(name, options)| bind(registry, name, options))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            validators = validators.len(),
            break_on_error = config.is_break_on_error(),
            "bound validator chain"
        );

        Ok(Self {
            validators,
            break_on_error: config.is_break_on_error(),
            last: ValidationRun::default(),
        })
    }

    /// Validates a value and returns the final, possibly coerced, value.
    ///
    /// The value, errors and error flag stay readable through
    /// [`value`](Self::value), [`errors`](Self::errors) and
    /// [`has_error`](Self::has_error) until the next call.
    pub fn validate(&mut self, value: impl Into<Value>) -> &Value {
        self.last = self.run(value.into());
        &self.last.value
    }

    /// Runs a value through the chain without touching the chain's state.
    ///
    /// Takes `&self`, so one chain can serve many threads.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulechain::{ChainConfig, ValidatorChain};
    /// use serde_json::json;
    ///
    /// let chain = ValidatorChain::new(
    ///     ChainConfig::new().validator("range", json!({ "start": 1, "end": 5 })),
    /// )
    /// .unwrap();
    ///
    /// let run = chain.run(json!(3));
    /// assert!(!run.has_error());
    /// assert_eq!(run.value, json!(3.0));
    /// ```
    pub fn run(&self, value: Value) -> ValidationRun {
        let mut current = value;
        let mut errors = Vec::new();

        for validator in &self.validators {
            match validator.process(&current) {
                Validation::Success(next) => {
                    tracing::trace!(validator = validator.name(), "validator passed");
                    current = next;
                }
                Validation::Failure(failure) => {
                    tracing::trace!(
                        validator = validator.name(),
                        message = %failure.message,
                        "validator failed"
                    );
                    errors.push(failure.into_message());

                    if self.break_on_error {
                        tracing::debug!(validator = validator.name(), "chain stopped at failure");
                        break;
                    }
                }
            }
        }

        ValidationRun {
            value: current,
            errors,
        }
    }

    /// Runs independent values through the chain in parallel.
    ///
    /// Results are returned in input order.
    pub fn run_batch(&self, values: &[Value]) -> Vec<ValidationRun> {
        values
            .par_iter()
            .map(|value| self.run(value.clone()))
            .collect()
    }

    /// Returns the first bound validator with the given name.
    pub fn get_sub_validator(&self, name: &str) -> Option<&BoundValidator> {
        self.validators.iter().find(|v| v.name == name)
    }

    /// Returns the bound validators in execution order.
    pub fn validators(&self) -> &[BoundValidator] {
        &self.validators
    }

    /// Returns the number of bound validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if the chain has no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Returns whether execution stops at the first failure.
    pub fn break_on_error(&self) -> bool {
        self.break_on_error
    }

    /// Returns the value produced by the last [`validate`](Self::validate) call.
    pub fn value(&self) -> &Value {
        &self.last.value
    }

    /// Returns the error messages from the last [`validate`](Self::validate) call.
    pub fn errors(&self) -> &[String] {
        &self.last.errors
    }

    /// Returns true if the last [`validate`](Self::validate) call failed.
    pub fn has_error(&self) -> bool {
        self.last.has_error()
    }

    /// Returns the full result of the last [`validate`](Self::validate) call.
    pub fn last_run(&self) -> &ValidationRun {
        &self.last
    }
}

fn bind(
    registry: &ValidatorRegistry,
    name: &str,
    raw_options: &Value,
) -> Result<BoundValidator, ChainError> {
    let definition = registry.lookup(name)?;

    let options = options::normalize(name, raw_options)?;

    if let Some(option) = options::missing_option(&options, definition.required_options()) {
        return Err(ChainError::MissingOption {
            option: option.to_string(),
            validator: name.to_string(),
        });
    }

    definition.check_options(&options)?;

    Ok(BoundValidator {
        name: name.to_string(),
        options,
        definition,
    })
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidatorChain>();
    assert_sync::<ValidatorChain>();
};
