//! Tracing subscriber setup.
//!
//! Log output goes to stderr, leaving stdout to the plugin protocol. The `RUST_LOG`
//! environment variable takes precedence over the default filter.

use fortimanager_core::Error;
use tracing_subscriber::EnvFilter;

use crate::Result;

/// Install the global subscriber at `info` level. A second call is a no-op.
pub fn init_logging() {
    init_logging_with_default("info");
}

/// Install the global subscriber with `default_filter` when `RUST_LOG` is unset.
/// A second call is a no-op.
pub fn init_logging_with_default(default_filter: &str) {
    if let Err(err) = try_init_logging(default_filter) {
        tracing::debug!(%err, "Logging already initialised");
    }
}

/// Install the global subscriber, reporting failure.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] if `default_filter` is not a valid filter
/// directive or a global subscriber is already installed.
pub fn try_init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| Error::ConfigError(format!("invalid log filter: {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::ConfigError(format!("failed to initialise logging: {e}")))
}
