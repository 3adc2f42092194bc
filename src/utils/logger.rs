use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text format with timestamp, level, target, and message
    Text,
    /// JSON format with structured fields: timestamp, level, target, fields
    Json,
}

impl LogFormat {
    /// Parses a format name, case-insensitively. Returns `None` for unknown names.
    ///
    /// # Examples
    ///
    /// ```
    /// use function_factory::utils::logger::LogFormat;
    ///
    /// assert_eq!(LogFormat::parse("json"), Some(LogFormat::Json));
    /// assert_eq!(LogFormat::parse("Text"), Some(LogFormat::Text));
    /// assert_eq!(LogFormat::parse("yaml"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "text" => Some(LogFormat::Text),
            _ => None,
        }
    }
}

/// Initializes the global tracing subscriber with an env filter and console output.
///
/// Sets up the tracing infrastructure with:
/// - Environment filter for log level control (`RUST_LOG`, default `info`)
/// - `fmt::layer()` writing to stderr, either as text or JSON
///
/// Logs go to stderr so they never interleave with the results the demo
/// prints on stdout.
///
/// This function is safe to call multiple times. If a global subscriber is
/// already set, it returns `Ok(())` without error (idempotent).
///
/// # Examples
///
/// ```
/// use function_factory::utils::logger::{init_logging, LogFormat};
///
/// let _ = init_logging(LogFormat::Text);
/// ```
pub fn init_logging(format: LogFormat) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(false),
            )
            .try_init(),
    };

    // Only report the failure; a second initialization is not an error
    if let Err(e) = result {
        eprintln!(
            "Tracing subscriber already initialized or failed to initialize: {:?}",
            e
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" text "), Some(LogFormat::Text));
        assert_eq!(LogFormat::parse(""), None);
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        assert!(init_logging(LogFormat::Text).is_ok());
        assert!(init_logging(LogFormat::Json).is_ok());
    }
}
