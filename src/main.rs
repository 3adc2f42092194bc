use std::error::Error;
use std::process;

use function_factory::config::DemoConfig;
use function_factory::functional::prelude::{create_arithmetic_registry, RegistryError};
use function_factory::utils::logger::init_logging;

const DEMO_FUNCTIONS: [&str; 5] = ["square", "increment", "decrement", "negative", "abs"];

fn main() {
    if let Err(e) = run() {
        eprintln!("function_factory: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::from_env()?;
    init_logging(config.log_format)?;
    tracing::info!(
        sample_input = config.sample_input,
        unknown_function = %config.unknown_function,
        "starting function factory demo"
    );

    let registry = create_arithmetic_registry();

    for name in DEMO_FUNCTIONS {
        let function = registry.resolve(name)?;
        println!("{}", function.apply(config.sample_input));
    }

    match registry.resolve(&config.unknown_function) {
        Ok(function) => println!("{}", function.apply(config.sample_input)),
        Err(e @ RegistryError::UnknownFunction { .. }) => {
            tracing::warn!(error = %e, "lookup of unregistered function failed");
            println!("{}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
