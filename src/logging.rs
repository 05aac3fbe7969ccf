//! Logging setup.
//!
//! Writes human-readable logs to stderr. The filter defaults to
//! [`DEFAULT_LOG_FILTER`] and can be overridden with `RUST_LOG`.

use crate::config::DEFAULT_LOG_FILTER;
use crate::error::{Result, TenziesError};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global tracing subscriber. Call once, before the window opens.
pub fn init_logging() -> Result<()> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| TenziesError::Logging(Box::new(e)))?;

    tracing::info!("Tenzies v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}
