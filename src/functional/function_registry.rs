//! Named Function Registry
//!
//! Stores unary functions under string names and hands them back on lookup.
//! Registering a name that already exists replaces the previous function
//! (last write wins); a registered name stays resolvable for the lifetime of
//! the registry. The registry never invokes the functions it stores.
//!
//! ```
//! use function_factory::functional::function_registry::FunctionRegistry;
//!
//! let mut registry = FunctionRegistry::new();
//! registry.register("square", |x: i32| x * x);
//!
//! let square = registry.resolve("square").unwrap();
//! assert_eq!(square.apply(5), 25);
//! assert!(registry.resolve("cube").is_err());
//! ```

use std::collections::HashMap;

use thiserror::Error;

use super::function_traits::FunctionWrapper;

/// Errors produced by function registries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No function is registered under the requested name.
    #[error("Function {name} doesn't exist.")]
    UnknownFunction { name: String },
    /// A shared registry lock was poisoned by a panicking writer.
    #[error("registry lock poisoned: {0}")]
    LockPoisoned(String),
}

impl RegistryError {
    pub fn unknown_function(name: impl Into<String>) -> Self {
        RegistryError::UnknownFunction { name: name.into() }
    }
}

/// A mapping from function name to a unary function `T -> R`.
///
/// The registry is not synchronized. Use
/// [`SharedFunctionRegistry`](super::shared_registry::SharedFunctionRegistry)
/// when several threads need to register or resolve functions.
#[derive(Debug)]
pub struct FunctionRegistry<T, R> {
    functions: HashMap<String, FunctionWrapper<T, R>>,
}

impl<T, R> FunctionRegistry<T, R> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registers `function` under `name`, replacing any function previously
    /// registered under the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let name = name.into();
        let replaced = self.functions.contains_key(&name);
        tracing::debug!(function = %name, replaced, "registering function");
        self.functions.insert(name.clone(), FunctionWrapper::new(function, name));
    }

    /// Looks up the function registered under exactly `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownFunction`] carrying `name` when nothing
    /// is registered under it.
    pub fn resolve(&self, name: &str) -> Result<&FunctionWrapper<T, R>, RegistryError> {
        self.functions.get(name).ok_or_else(|| {
            tracing::debug!(function = name, "function lookup missed");
            RegistryError::unknown_function(name)
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Returns the registered names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<T, R> Default for FunctionRegistry<T, R> {
    fn default() -> Self {
        Self::new()
    }
}
