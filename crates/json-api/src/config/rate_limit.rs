//! Rate Limit Config

use clap::Args;

/// Request rate limit settings for the QR generation route.
#[derive(Debug, Args)]
pub struct RateLimitConfig {
    /// Maximum generation requests per client per window
    #[arg(long, env = "RATE_LIMIT_MAX_REQUESTS", default_value = "10")]
    pub max_requests: u32,

    /// Rate limit window length in seconds
    #[arg(long, env = "RATE_LIMIT_WINDOW_SECS", default_value = "60")]
    pub window_secs: u64,
}
