pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Setup the logging system for the application.
/// This function will install the [`color_eyre`] error reporting system
/// and the [`tracing-subscriber`] logging system.
/// It will also set the `RUST_LIB_BACKTRACE` environment variable to `1`
/// and the `RUST_LOG` environment variable to the backend's debug filter
/// when they are not already set.
/// If the color_eyre or tracing-subscriber installation fails,
/// an error will be returned.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    // Get / set backtrace
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    // Install color_eyre
    color_eyre::install().map_err(|e| LogError::ColorEyre(e.to_string()))?;

    // Get/set the log level
    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", DEFAULT_FILTER) }
    }
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "tower_http=debug,mergington_backend=debug";
