/// Integration tests for the public registry API
///
/// These tests exercise the registry the way a caller would: populate it,
/// resolve by name, invoke, and handle the unknown-name error.

#[cfg(test)]
mod tests {
    use std::thread;

    use function_factory::functional::prelude::*;

    #[test]
    fn test_end_to_end_arithmetic_scenario() {
        let mut registry = FunctionRegistry::new();
        registry.register("square", |x: i32| x * x);
        registry.register("increment", |x: i32| x + 1);
        registry.register("decrement", |x: i32| x - 1);
        registry.register("negative", |x: i32| -x);
        registry.register("abs", |x: i32| x.abs());

        let results: Vec<i32> = ["square", "increment", "decrement", "negative", "abs"]
            .into_iter()
            .map(|name| registry.resolve(name).map(|f| f.apply(5)))
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(results, vec![25, 6, 4, -5, 5]);
    }

    #[test]
    fn test_end_to_end_unknown_function() {
        let registry = create_arithmetic_registry();

        match registry.resolve("myFunction") {
            Err(RegistryError::UnknownFunction { name }) => assert_eq!(name, "myFunction"),
            other => panic!("expected UnknownFunction, got {:?}", other.map(|f| f.name().to_string())),
        }

        let message = registry.resolve("myFunction").unwrap_err().to_string();
        assert_eq!(message, "Function myFunction doesn't exist.");
    }

    #[test]
    fn test_overwrite_keeps_other_entries() {
        let mut registry = create_arithmetic_registry();
        registry.register("square", |x: i32| x * x * x);

        assert_eq!(registry.resolve("square").unwrap().apply(2), 8);
        assert_eq!(registry.resolve("increment").unwrap().apply(2), 3);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_resolved_handle_outlives_shared_lookup() {
        let registry = create_shared_arithmetic_registry();
        let square = registry.resolve("square").unwrap();

        // Overwriting after resolution does not affect an already-resolved handle
        registry.register("square", |x: i32| x).unwrap();
        assert_eq!(square.apply(4), 16);
        assert_eq!(registry.resolve("square").unwrap().apply(4), 4);
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let registry = create_shared_arithmetic_registry();

        let readers: Vec<_> = (0..4)
            .map(|i| {
                let registry = registry.clone();
                thread::spawn(move || registry.resolve("increment").map(|f| f.apply(i)))
            })
            .collect();

        let mut results: Vec<i32> = readers
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();
        results.sort_unstable();
        assert_eq!(results, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_string_registry() {
        let mut registry = FunctionRegistry::new();
        register_string_functions(&mut registry);

        let shout = registry.resolve("to_uppercase").unwrap();
        assert_eq!(shout.apply("function factory".to_string()), "FUNCTION FACTORY");
        assert!(registry.resolve("reverse").is_err());
    }
}
