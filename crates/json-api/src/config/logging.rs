//! Logging Config

use clap::Args;

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level filter when `RUST_LOG` is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
