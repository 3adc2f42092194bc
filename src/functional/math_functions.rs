//! Stock functions for the Function Registry
//!
//! This module provides common arithmetic and string operations that can be
//! registered by name and resolved later.

use super::function_registry::FunctionRegistry;

/// Registers the integer arithmetic set: `square`, `increment`, `decrement`,
/// `negative` and `abs`.
///
/// All operations use two's-complement wrapping, so no input panics on
/// overflow (`abs(i32::MIN)` is `i32::MIN`).
///
/// # Examples
///
/// ```
/// use function_factory::functional::function_registry::FunctionRegistry;
/// use function_factory::functional::math_functions::register_arithmetic_functions;
///
/// let mut registry = FunctionRegistry::new();
/// register_arithmetic_functions(&mut registry);
/// assert_eq!(registry.resolve("square").unwrap().apply(5), 25);
/// ```
pub fn register_arithmetic_functions(registry: &mut FunctionRegistry<i32, i32>) {
    // Square function
    registry.register("square", |a: i32| a.wrapping_mul(a));

    // Increment function
    registry.register("increment", |a: i32| a.wrapping_add(1));

    // Decrement function
    registry.register("decrement", |a: i32| a.wrapping_sub(1));

    // Negation function
    registry.register("negative", |a: i32| a.wrapping_neg());

    // Absolute value function
    registry.register("abs", i32::wrapping_abs);
}

/// Registers string processing functions: `to_uppercase`, `to_lowercase`
/// and `trim`.
pub fn register_string_functions(registry: &mut FunctionRegistry<String, String>) {
    registry.register("to_uppercase", |s: String| s.to_uppercase());
    registry.register("to_lowercase", |s: String| s.to_lowercase());
    registry.register("trim", |s: String| s.trim().to_string());
}
