//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{DaemonConfig, LogFormat};

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level when set.
///
/// # Errors
/// Returns error if the level is not a valid filter directive or a
/// subscriber is already installed
pub fn init(config: &DaemonConfig) -> eyre::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Pretty => registry.with(fmt::layer()).try_init()?,
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
    }
    Ok(())
}
