//! Error types for chain construction and validation failures.
//!
//! Construction problems (bad configuration) are reported as [`ChainError`]
//! through `Result`. Per-value failures are reported as [`ValidatorFailure`]
//! inside a `stillwater::Validation` and are collected by the chain.

mod chain_error;
mod failure;

pub use chain_error::{ChainError, RegistryError};
pub use failure::ValidatorFailure;
