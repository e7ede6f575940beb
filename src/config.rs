//! Chain configuration.
//!
//! This module provides [`ChainConfig`], the ordered mapping from validator
//! name to options that a [`ValidatorChain`](crate::ValidatorChain) is bound from.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::ChainError;

/// Ordered configuration for a validator chain.
///
/// Entries keep the order in which they were added; that order is the
/// execution order of the bound chain. Adding a name twice replaces the
/// earlier options but keeps the original position.
///
/// # Example
///
/// ```rust
/// use rulechain::ChainConfig;
/// use serde_json::json;
///
/// let config = ChainConfig::new()
///     .validator("required", json!({}))
///     .validator("range", json!({ "start": 1, "end": 5 }))
///     .break_on_error(false);
///
/// assert_eq!(config.names(), vec!["required", "range"]);
/// assert!(!config.is_break_on_error());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChainConfig {
    validators: IndexMap<String, Value>,
    break_on_error: bool,
}

impl ChainConfig {
    /// Creates an empty configuration that stops at the first failure.
    pub fn new() -> Self {
        Self {
            validators: IndexMap::new(),
            break_on_error: true,
        }
    }

    /// Builds a configuration from a JSON object of `name -> options`.
    ///
    /// Keys are taken in document order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulechain::ChainConfig;
    /// use serde_json::json;
    ///
    /// let doc = json!({ "required": {}, "integer": null });
    /// let config = ChainConfig::from_object(doc.as_object().unwrap());
    ///
    /// assert_eq!(config.names(), vec!["required", "integer"]);
    /// ```
    pub fn from_object(object: &Map<String, Value>) -> Self {
        object
            .iter()
            .map(|(name, options)| (name.clone(), options.clone()))
            .collect()
    }

    /// Builds a configuration from a JSON document of `name -> options`.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::MalformedConfig` if the document is not an object.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulechain::{ChainConfig, ChainError};
    /// use serde_json::json;
    ///
    /// let config = ChainConfig::from_json(&json!({ "required": {}, "isNumber": {} })).unwrap();
    /// assert_eq!(config.names(), vec!["required", "isNumber"]);
    ///
    /// let result = ChainConfig::from_json(&json!(["required"]));
    /// assert_eq!(result, Err(ChainError::MalformedConfig));
    /// ```
    pub fn from_json(document: &Value) -> Result<Self, ChainError> {
        document
            .as_object()
            .map(Self::from_object)
            .ok_or(ChainError::MalformedConfig)
    }

    /// Adds a validator with its options.
    ///
    /// Options may be an object or `Value::Null` for defaults.
    pub fn validator(mut self, name: impl Into<String>, options: Value) -> Self {
        self.validators.insert(name.into(), options);
        self
    }

    /// Sets whether execution stops at the first failing validator.
    ///
    /// Defaults to `true`.
    pub fn break_on_error(mut self, break_on_error: bool) -> Self {
        self.break_on_error = break_on_error;
        self
    }

    /// Returns whether execution stops at the first failing validator.
    pub fn is_break_on_error(&self) -> bool {
        self.break_on_error
    }

    /// Returns the configured entries in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.validators
            .iter()
            .map(|(name, options)| (name.as_str(), options))
    }

    /// Returns the configured validator names in order.
    pub fn names(&self) -> Vec<&str> {
        self.validators.keys().map(String::as_str).collect()
    }

    /// Returns the number of configured validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if no validators are configured.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ChainConfig {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |config, (name, options)| config.validator(name, options))
    }
}
