//! Logging & tracing initialization.
//!
//! Configures the `tracing-subscriber` infrastructure once at process
//! startup. Components log through the standard `tracing` macros; tests run
//! silent because no subscriber is installed for them.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter defaults to `default_filter` and can be overridden with the
/// standard `RUST_LOG` environment variable.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
