//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

use imagehub_core::config::logging::LoggingConfig;

/// Initializes the global tracing subscriber from logging configuration.
///
/// The `RUST_LOG` environment variable overrides the configured level.
/// Safe to call more than once; repeated initialization is ignored.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init(),
    };

    // A second init (e.g. from tests) keeps the existing subscriber.
    let _ = result;
}
