//! Logging setup and the `tracing` macros used across the workspace.

pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Filter applied when `RUST_LOG` is unset: backend events down to debug,
/// per-request spans from `tower_http`, everything else at info.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug,mergington_backend=debug";

/// Installs error reporting and the log subscriber for the server process.
///
/// `color_eyre` renders the `Report` returned from `main`, with library
/// backtraces on unless `RUST_LIB_BACKTRACE` says otherwise. Events go to
/// stdout through a `tracing-subscriber` fmt layer filtered by `RUST_LOG`,
/// falling back to [`DEFAULT_FILTER`].
///
/// Fails if either piece was already installed in this process.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    color_eyre::install().map_err(LogError::ColorEyre)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
