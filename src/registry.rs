//! Validator registry for named definition storage and lookup.
//!
//! This module provides the [`ValidatorRegistry`] type that maps validator
//! names to their definitions. Chains are bound against a registry; the
//! process-wide built-in table is available through [`ValidatorRegistry::global`].

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::validators::{builtins, ValidatorDefinition};

/// Type alias for the definition storage map.
type DefinitionMap = Arc<RwLock<IndexMap<String, Arc<dyn ValidatorDefinition>>>>;

static GLOBAL: Lazy<ValidatorRegistry> = Lazy::new(ValidatorRegistry::builtin);

/// A thread-safe registry of validator definitions.
///
/// Definitions are stored in registration order and shared through `Arc`,
/// so a chain keeps working with the definitions it was bound to no matter
/// what is registered afterwards.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can look up definitions concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// # Example
///
/// ```rust
/// use rulechain::ValidatorRegistry;
///
/// let registry = ValidatorRegistry::builtin();
///
/// let integer = registry.lookup("integer").unwrap();
/// assert_eq!(integer.name(), "integer");
///
/// assert!(registry.lookup("email").is_err());
/// ```
pub struct ValidatorRegistry {
    definitions: DefinitionMap,
}

impl ValidatorRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            definitions: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Creates a registry holding the built-in validators.
    ///
    /// The built-ins are `required`, `minLength`, `isNumber`, `integer` and
    /// `range`, in that order.
    pub fn builtin() -> Self {
        let registry = Self::new();
        {
            let mut definitions = registry.definitions.write();
            for definition in builtins() {
                definitions.insert(definition.name().to_string(), definition);
            }
        }
        registry
    }

    /// Returns the process-wide registry of built-in validators.
    ///
    /// Initialized on first use. [`ValidatorChain::new`](crate::ValidatorChain::new)
    /// binds against this registry.
    pub fn global() -> &'static ValidatorRegistry {
        &GLOBAL
    }

    /// Registers a validator definition under its own name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulechain::ValidatorRegistry;
    /// use rulechain::validators::Required;
    ///
    /// let registry = ValidatorRegistry::new();
    /// registry.register(Required).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register(Required).is_err());
    /// ```
    pub fn register<D>(&self, definition: D) -> Result<(), RegistryError>
    where
        D: ValidatorDefinition + 'static,
    {
        let name = definition.name().to_string();
        let mut definitions = self.definitions.write();

        if definitions.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(validator = %name, "registered validator definition");
        definitions.insert(name, Arc::new(definition));
        Ok(())
    }

    /// Retrieves a definition by name.
    ///
    /// Returns `None` if no definition with the given name is registered.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ValidatorDefinition>> {
        self.definitions.read().get(name).cloned()
    }

    /// Looks up a definition by name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownValidator` if the name is not registered.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn ValidatorDefinition>, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::UnknownValidator(name.to_string()))
    }

    /// Returns true if a definition with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.read().contains_key(name)
    }

    /// Returns all definitions in registration order.
    pub fn definitions(&self) -> Vec<Arc<dyn ValidatorDefinition>> {
        self.definitions.read().values().cloned().collect()
    }

    /// Returns all registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.definitions.read().keys().cloned().collect()
    }

    /// Returns the number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.read().len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.read().is_empty()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ValidatorRegistry {
    fn clone(&self) -> Self {
        Self {
            definitions: Arc::clone(&self.definitions),
        }
    }
}
