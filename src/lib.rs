//! # function_factory
//!
//! A registry of named unary functions. Functions are registered under a
//! string name and resolved later by that name; resolving a name that was
//! never registered yields [`RegistryError::UnknownFunction`].
//!
//! ```
//! use function_factory::functional::prelude::*;
//!
//! let mut registry = FunctionRegistry::new();
//! registry.register("square", |x: i32| x * x);
//! assert_eq!(registry.resolve("square").unwrap().apply(5), 25);
//!
//! let err = registry.resolve("myFunction").unwrap_err();
//! assert_eq!(err.to_string(), "Function myFunction doesn't exist.");
//! ```
//!
//! [`RegistryError::UnknownFunction`]: functional::function_registry::RegistryError::UnknownFunction

pub mod config;
pub mod functional;
pub mod utils;
