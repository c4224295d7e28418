//! Tracing setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, SubscriptionsError};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// Libraries in this workspace only emit events; host binaries call this
/// once at startup.
///
/// Reads the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
/// Fails if a global subscriber has already been installed.
pub fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()
        .map_err(|e| SubscriptionsError::Config(format!("Failed to install tracing: {}", e)))
}
