//! # Rulechain
//!
//! A small, synchronous validator chain: a value runs through an ordered list
//! of named validators, each of which may reject it with a message or coerce
//! it into a normalized form.
//!
//! ## Overview
//!
//! A chain is bound once from a [`ChainConfig`] (validator name → options)
//! against a [`ValidatorRegistry`]. Binding fails as a whole on an unknown
//! validator name or a missing required option. Validation never fails as a
//! `Result`; it reports error messages in execution order alongside the final
//! value.
//!
//! ## Core Types
//!
//! - [`ValidatorRegistry`]: Named validator definitions, with a process-wide built-in table
//! - [`ChainConfig`]: Ordered configuration and the `break_on_error` policy
//! - [`ValidatorChain`]: The bound chain that validates values
//! - [`ValidatorDefinition`]: The capability every validator implements
//!
//! ## Built-in Validators
//!
//! | name | required options | effect |
//! |---|---|---|
//! | `required` | – | rejects `null` and `""` |
//! | `minLength` | `minLength` | rejects strings/arrays shorter than `minLength` |
//! | `isNumber` | – | rejects non-numeric values; coerces to float |
//! | `integer` | – | rejects non-integral values; coerces to integer |
//! | `range` | `start`, `end` | rejects values outside `[start, end]`; coerces to float |
//!
//! ## Example
//!
//! ```rust
//! use rulechain::{ChainConfig, ValidatorChain};
//! use serde_json::json;
//!
//! let config = ChainConfig::new()
//!     .validator("required", json!({}))
//!     .validator("integer", json!({}))
//!     .validator("range", json!({ "start": 1, "end": 10 }))
//!     .break_on_error(false);
//!
//! let mut chain = ValidatorChain::new(config).unwrap();
//!
//! // Valid values are coerced; range always produces a float
//! assert_eq!(chain.validate(json!("7")), &json!(7.0));
//! assert!(!chain.has_error());
//!
//! // Without break_on_error every failing validator reports
//! chain.validate(json!("abc"));
//! assert_eq!(chain.errors().len(), 2);
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod message;
pub mod options;
pub mod registry;
pub mod validators;

pub use chain::{BoundValidator, ValidationRun, ValidatorChain};
pub use config::ChainConfig;
pub use error::{ChainError, RegistryError, ValidatorFailure};
pub use registry::ValidatorRegistry;
pub use validators::{ProcessResult, ValidatorDefinition};
