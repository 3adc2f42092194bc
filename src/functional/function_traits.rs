//! Function handles stored in the registry
//!
//! A [`FunctionWrapper`] owns an opaque unary closure behind an `Arc` so the
//! same function can be handed out many times without copying it.

use std::fmt;
use std::sync::Arc;

type BoxedFunction<T, R> = Arc<dyn Fn(T) -> R + Send + Sync>;

/// A named, cloneable unary function `T -> R`.
///
/// # Examples
///
/// ```
/// use function_factory::functional::function_traits::FunctionWrapper;
///
/// let square = FunctionWrapper::new(|x: i32| x * x, "square");
/// assert_eq!(square.apply(5), 25);
/// assert_eq!(square.name(), "square");
/// ```
pub struct FunctionWrapper<T, R> {
    function: BoxedFunction<T, R>,
    name: String,
}

impl<T, R> FunctionWrapper<T, R> {
    /// Wraps `function` under the given name.
    pub fn new<F>(function: F, name: impl Into<String>) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
            name: name.into(),
        }
    }

    /// Invokes the wrapped function.
    pub fn apply(&self, input: T) -> R {
        (self.function)(input)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// Manual impl: deriving would require `T: Clone, R: Clone`.
impl<T, R> Clone for FunctionWrapper<T, R> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
            name: self.name.clone(),
        }
    }
}

impl<T, R> fmt::Debug for FunctionWrapper<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionWrapper")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
