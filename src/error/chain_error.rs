//! Construction-time error types.
//!
//! These errors describe a misconfigured chain or registry. They abort
//! construction entirely; no partially bound chain is ever returned.

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a validator with a name that already exists.
    #[error("validator '{0}' already registered")]
    DuplicateName(String),

    /// Looked up a validator name that is not registered.
    #[error("validator '{0}' not found")]
    UnknownValidator(String),
}

/// Errors that can occur while binding a chain configuration.
///
/// # Example
///
/// ```rust
/// use rulechain::{ChainConfig, ChainError, ValidatorChain};
/// use serde_json::json;
///
/// let config = ChainConfig::new().validator("range", json!({ "start": 1 }));
///
/// match ValidatorChain::new(config) {
///     Err(ChainError::MissingOption { option, validator }) => {
///         assert_eq!(option, "end");
///         assert_eq!(validator, "range");
///     }
///     _ => panic!("expected a missing option error"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChainError {
    /// The configuration names a validator the registry does not know.
    #[error("unknown validator '{0}'")]
    UnknownValidator(String),

    /// A validator requires an option that is absent or null.
    #[error("option '{option}' is required by validator '{validator}'")]
    MissingOption { option: String, validator: String },

    /// An option is present but has an unusable value.
    #[error("option '{option}' of validator '{validator}' is invalid: {reason}")]
    InvalidOption {
        option: String,
        validator: String,
        reason: String,
    },

    /// The options for a validator are neither an object nor null.
    #[error("options for validator '{0}' must be an object or null")]
    MalformedOptions(String),

    /// A JSON configuration document is not an object.
    #[error("chain configuration must be an object of validator options")]
    MalformedConfig,

    /// Any other registry failure.
    #[error(transparent)]
    Registry(RegistryError),
}

impl ChainError {
    /// Creates a [`ChainError::InvalidOption`] error.
    pub fn invalid_option(
        option: impl Into<String>,
        validator: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ChainError::InvalidOption {
            option: option.into(),
            validator: validator.into(),
            reason: reason.into(),
        }
    }
}

impl From<RegistryError> for ChainError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownValidator(name) => ChainError::UnknownValidator(name),
            other => ChainError::Registry(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_option_display() {
        let err = ChainError::MissingOption {
            option: "minLength".to_string(),
            validator: "minLength".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "option 'minLength' is required by validator 'minLength'"
        );
    }

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::DuplicateName("integer".to_string());
        assert_eq!(err.to_string(), "validator 'integer' already registered");

        let err = RegistryError::UnknownValidator("email".to_string());
        assert_eq!(err.to_string(), "validator 'email' not found");
    }

    #[test]
    fn test_unknown_validator_converts_from_registry_error() {
        let err: ChainError = RegistryError::UnknownValidator("email".to_string()).into();
        assert_eq!(err, ChainError::UnknownValidator("email".to_string()));
        assert_eq!(err.to_string(), "unknown validator 'email'");
    }

    #[test]
    fn test_other_registry_errors_are_wrapped() {
        let err: ChainError = RegistryError::DuplicateName("integer".to_string()).into();
        assert_eq!(
            err,
            ChainError::Registry(RegistryError::DuplicateName("integer".to_string()))
        );
        assert_eq!(err.to_string(), "validator 'integer' already registered");
    }

    #[test]
    fn test_invalid_option_display() {
        let err = ChainError::invalid_option("start", "range", "expected a number");
        assert_eq!(
            err.to_string(),
            "option 'start' of validator 'range' is invalid: expected a number"
        );
    }
}
