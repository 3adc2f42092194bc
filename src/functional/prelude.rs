//! Prelude for the function registry
//!
//! This module re-exports commonly used types and functions from the
//! functional infrastructure to make them easily accessible.

pub use crate::functional::function_registry::{FunctionRegistry, RegistryError};
pub use crate::functional::function_traits::FunctionWrapper;
pub use crate::functional::math_functions::{
    register_arithmetic_functions, register_string_functions,
};
pub use crate::functional::shared_registry::SharedFunctionRegistry;

/// Creates a FunctionRegistry populated with the arithmetic set
/// (`square`, `increment`, `decrement`, `negative`, `abs`).
///
/// # Examples
///
/// ```
/// use function_factory::functional::prelude::create_arithmetic_registry;
///
/// let registry = create_arithmetic_registry();
/// assert_eq!(registry.resolve("negative").unwrap().apply(5), -5);
/// ```
pub fn create_arithmetic_registry() -> FunctionRegistry<i32, i32> {
    let mut registry = FunctionRegistry::new();
    register_arithmetic_functions(&mut registry);
    registry
}

/// Same as [`create_arithmetic_registry`], wrapped for use across threads.
pub fn create_shared_arithmetic_registry() -> SharedFunctionRegistry<i32, i32> {
    SharedFunctionRegistry::from(create_arithmetic_registry())
}
