//! Named function registry and the function sets shipped with it.

pub mod function_registry;
pub mod function_traits;
pub mod math_functions;
pub mod prelude;
pub mod shared_registry;
