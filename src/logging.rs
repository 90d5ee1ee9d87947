//! Logging setup for host applications
//!
//! The surface itself only emits `tracing` events (script log calls bridged
//! by the backends); hosts that embed it decide where those events go. This
//! helper wires a sensible default subscriber: compact fmt output with an
//! env-filter, overridable through `RUST_LOG`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vexel_script_api::logging::init_logging;
//! use tracing::Level;
//!
//! init_logging(true, Level::INFO)?;
//! ```

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize a default tracing subscriber
///
/// # Arguments
/// * `use_ansi` - Whether to use ANSI color codes (typically based on TTY detection)
/// * `default_level` - Minimum level when `RUST_LOG` is not set
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logging(
    use_ansi: bool,
    default_level: Level,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(use_ansi))
        .with(filter)
        .try_init()?;

    Ok(())
}
