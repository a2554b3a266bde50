use eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PASSGEN_LOG=debug`.
pub const LOG_ENV: &str = "PASSGEN_LOG";

/// Install the stderr subscriber. Logs at `warn` unless `PASSGEN_LOG` says otherwise.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to initialize tracing subscriber: {e}"))
}
