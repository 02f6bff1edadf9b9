//! Tracing setup: structured logging with span definitions and event types.
//!
//! Library code only emits through `tracing`. Binaries and tests opt in to a
//! subscriber by calling one of the `init_*` functions once.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::constants::LOG_FILTER_ENV;

/// Initialize the global subscriber.
///
/// Respects the `DISMAL_LOG` environment variable for filtering and falls
/// back to `config.log_level`. Calling this more than once is harmless: later
/// calls leave the first subscriber in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let _ = if config.json_logs {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.compact().try_init()
    };
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
