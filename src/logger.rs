//! Tracing subscriber initialization.
//!
//! Log verbosity comes from the configuration (overridable per CLI
//! invocation) and the `RUST_LOG` environment variable takes precedence
//! over both.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Initializes the global tracing subscriber.
///
/// With `json` enabled, events are emitted as structured JSON lines,
/// otherwise as human-readable text.
pub fn init_logger(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))?;
    }

    Ok(())
}
