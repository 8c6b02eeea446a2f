//! Tracing setup: subscriber initialization, span definitions and event helpers.

pub mod events;
pub mod spans;

use tonefit_core::config::ObservabilityConfig;
use tonefit_core::errors::{ConfigError, TonefitError, TonefitResult};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "TONEFIT_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `TONEFIT_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Does nothing if a subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

/// Initialize from config. `TONEFIT_LOG` still wins over `log_level` when set.
pub fn init_from_config(config: &ObservabilityConfig) -> TonefitResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_output {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(already_initialized)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn try_init_with_filter(filter: &str) -> TonefitResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .map_err(already_initialized)
}

fn already_initialized(e: impl std::fmt::Display) -> TonefitError {
    ConfigError::TracingInit {
        reason: e.to_string(),
    }
    .into()
}
