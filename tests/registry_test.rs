//! Tests for validator registry operations.

use rulechain::options::Options;
use rulechain::validators::Required;
use rulechain::{
    ChainConfig, ChainError, ProcessResult, RegistryError, ValidatorChain, ValidatorDefinition,
    ValidatorFailure, ValidatorRegistry,
};
use serde_json::{json, Value};
use stillwater::Validation;

/// Rejects strings that are not entirely uppercase.
struct Uppercase;

impl ValidatorDefinition for Uppercase {
    fn name(&self) -> &str {
        "uppercase"
    }

    fn process(&self, value: &Value, _options: &Options) -> ProcessResult {
        match value.as_str() {
            Some(s) if s.chars().all(|c| !c.is_lowercase()) => Validation::Success(value.clone()),
            _ => Validation::Failure(ValidatorFailure::new("uppercase", "must be uppercase")),
        }
    }
}

/// Pads strings on the left to the `width` option.
struct PadLeft;

impl ValidatorDefinition for PadLeft {
    fn name(&self) -> &str {
        "padLeft"
    }

    fn required_options(&self) -> &[&'static str] {
        &["width"]
    }

    fn process(&self, value: &Value, options: &Options) -> ProcessResult {
        let width = options.get("width").and_then(Value::as_u64).unwrap_or(0) as usize;
        let text = value.as_str().unwrap_or_default();
        Validation::Success(json!(format!("{text:>width$}")))
    }
}

#[test]
fn test_lookup_builtins() {
    let registry = ValidatorRegistry::builtin();

    for name in ["required", "minLength", "isNumber", "integer", "range"] {
        let definition = registry.lookup(name).unwrap();
        assert_eq!(definition.name(), name);
    }
}

#[test]
fn test_lookup_unknown_validator() {
    let registry = ValidatorRegistry::builtin();

    let result = registry.lookup("email");
    assert_eq!(
        result.err(),
        Some(RegistryError::UnknownValidator("email".to_string()))
    );
}

#[test]
fn test_definitions_in_registration_order() {
    let registry = ValidatorRegistry::builtin();

    let names: Vec<String> = registry
        .definitions()
        .iter()
        .map(|d| d.name().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["required", "minLength", "isNumber", "integer", "range"]
    );
}

#[test]
fn test_required_option_keys() {
    let registry = ValidatorRegistry::builtin();

    assert!(registry.lookup("required").unwrap().required_options().is_empty());
    assert_eq!(
        registry.lookup("minLength").unwrap().required_options(),
        &["minLength"]
    );
    assert_eq!(
        registry.lookup("range").unwrap().required_options(),
        &["start", "end"]
    );
}

#[test]
fn test_duplicate_registration_fails() {
    let registry = ValidatorRegistry::builtin();

    let result = registry.register(Required);
    assert_eq!(
        result,
        Err(RegistryError::DuplicateName("required".to_string()))
    );
}

#[test]
fn test_custom_validator_in_chain() {
    let registry = ValidatorRegistry::builtin();
    registry.register(Uppercase).unwrap();

    let mut chain = ValidatorChain::with_registry(
        ChainConfig::new()
            .validator("required", json!({}))
            .validator("uppercase", json!({})),
        &registry,
    )
    .unwrap();

    chain.validate("LOUD");
    assert!(!chain.has_error());

    chain.validate("quiet");
    assert_eq!(chain.errors(), ["must be uppercase"]);
}

#[test]
fn test_custom_validator_required_option_enforced() {
    let registry = ValidatorRegistry::new();
    registry.register(PadLeft).unwrap();

    let result =
        ValidatorChain::with_registry(ChainConfig::new().validator("padLeft", json!({})), &registry);
    assert!(matches!(result, Err(ChainError::MissingOption { .. })));

    let mut chain = ValidatorChain::with_registry(
        ChainConfig::new().validator("padLeft", json!({ "width": 4 })),
        &registry,
    )
    .unwrap();
    assert_eq!(chain.validate("7"), &json!("   7"));
}

#[test]
fn test_chain_unaffected_by_later_registration() {
    let registry = ValidatorRegistry::new();
    registry.register(Required).unwrap();

    let mut chain = ValidatorChain::with_registry(
        ChainConfig::new().validator("required", json!({})),
        &registry,
    )
    .unwrap();

    registry.register(Uppercase).unwrap();

    chain.validate("x");
    assert!(!chain.has_error());
    assert_eq!(chain.len(), 1);
}

#[test]
fn test_builtin_names_unknown_to_empty_registry() {
    let registry = ValidatorRegistry::new();

    let result = ValidatorChain::with_registry(
        ChainConfig::new().validator("required", json!({})),
        &registry,
    );
    assert_eq!(
        result.unwrap_err(),
        ChainError::UnknownValidator("required".to_string())
    );
}
