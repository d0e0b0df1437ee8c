use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
/// Progress lines for the user are printed separately.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
