//! Thread-safe registry handle
//!
//! [`SharedFunctionRegistry`] puts a [`FunctionRegistry`] behind an
//! `Arc<RwLock<_>>`. Clones share the same underlying map, so a function
//! registered through one handle is resolvable through every other.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::function_registry::{FunctionRegistry, RegistryError};
use super::function_traits::FunctionWrapper;

impl<G> From<PoisonError<G>> for RegistryError {
    fn from(err: PoisonError<G>) -> Self {
        RegistryError::LockPoisoned(err.to_string())
    }
}

/// Cloneable, lock-guarded function registry.
///
/// # Examples
///
/// ```
/// use function_factory::functional::shared_registry::SharedFunctionRegistry;
///
/// let registry = SharedFunctionRegistry::new();
/// let writer = registry.clone();
/// writer.register("double", |x: i32| x * 2).unwrap();
///
/// let double = registry.resolve("double").unwrap();
/// assert_eq!(double.apply(21), 42);
/// ```
#[derive(Debug)]
pub struct SharedFunctionRegistry<T, R> {
    inner: Arc<RwLock<FunctionRegistry<T, R>>>,
}

impl<T, R> SharedFunctionRegistry<T, R> {
    pub fn new() -> Self {
        Self::from(FunctionRegistry::new())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, FunctionRegistry<T, R>>, RegistryError> {
        Ok(self.inner.read()?)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, FunctionRegistry<T, R>>, RegistryError> {
        Ok(self.inner.write()?)
    }

    /// Registers `function` under `name`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::LockPoisoned`] if another thread panicked
    /// while holding the lock.
    pub fn register<F>(&self, name: impl Into<String>, function: F) -> Result<(), RegistryError>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        self.write()?.register(name, function);
        Ok(())
    }

    /// Resolves `name` and returns an owned handle to the function, so the
    /// lock is released before the caller invokes it.
    pub fn resolve(&self, name: &str) -> Result<FunctionWrapper<T, R>, RegistryError> {
        self.read()?.resolve(name).cloned()
    }

    pub fn contains(&self, name: &str) -> Result<bool, RegistryError> {
        Ok(self.read()?.contains(name))
    }

    pub fn len(&self) -> Result<usize, RegistryError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.read()?.is_empty())
    }

    /// Returns the registered names in ascending order.
    pub fn names(&self) -> Result<Vec<String>, RegistryError> {
        Ok(self
            .read()?
            .names()
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}

impl<T, R> Clone for SharedFunctionRegistry<T, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, R> Default for SharedFunctionRegistry<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> From<FunctionRegistry<T, R>> for SharedFunctionRegistry<T, R> {
    fn from(registry: FunctionRegistry<T, R>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}
