//! Logging bootstrap.
//!
//! The library itself only emits `tracing` events; the embedding process calls
//! [`init_tracing`] once at startup to get them on stderr.

use tracing_subscriber::EnvFilter;

use crate::config::GeneralConfig;
use crate::error::{OrbitError, Result};

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `config.log_level` when the variable is unset or invalid.
///
/// # Errors
///
/// Returns [`OrbitError::Config`] if the level string is not a valid filter
/// or a global subscriber is already installed.
pub fn init_tracing(config: &GeneralConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| OrbitError::Config(format!("invalid log level: {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| OrbitError::Config(e.to_string()))
}
