//! Tracing setup for the turrant CLI
//!
//! Usage:
//!   turrant --debug serve             # Debug logging to console
//!   RUST_LOG=turrant_server=debug ... # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
}

/// Initialize console tracing. `RUST_LOG` wins over the debug flag.
pub fn init(config: &TracingConfig) -> Result<()> {
    let fallback = if config.debug { "debug" } else { "info,tower_http=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
