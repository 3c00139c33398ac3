use std::env::var;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_LEVEL_ENV: &str = "OSRELEASE_LOG_LEVEL";
const DEFAULT_LOG_SPEC: &str = "info";

fn log_spec() -> String {
    var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_SPEC.to_string())
}

/// Installs a global fmt subscriber for programs embedding the crate.
/// The library itself never requires it; events are dropped without one.
pub fn init_logger() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(log_spec())?;
    fmt().with_env_filter(filter).try_init()
}
