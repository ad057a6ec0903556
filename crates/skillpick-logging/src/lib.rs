//! Logging setup shared by the `skillpick` binaries.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter used when neither `RUST_LOG` nor the config sets a level
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize the logging system
///
/// `RUST_LOG` wins over `level` when set. Output goes to stderr: stdout is
/// reserved for the status lines and skill text the user actually reads.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| build_filter(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}

/// Build a filter from a level string, falling back to [`DEFAULT_LEVEL`]
/// when the string is empty or not a valid directive
fn build_filter(level: &str) -> EnvFilter {
    let level = level.trim();
    if level.is_empty() {
        return EnvFilter::new(DEFAULT_LEVEL);
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
