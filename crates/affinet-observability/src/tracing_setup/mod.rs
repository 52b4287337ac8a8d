//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use affinet_core::config::ObservabilityConfig;
use affinet_core::constants::LOG_ENV_VAR;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `AFFINET_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .init();
}

/// Initialize tracing from the `[observability]` config section.
///
/// `AFFINET_LOG` still wins over `log_level` when set. Returns `false` if a
/// global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_output {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
