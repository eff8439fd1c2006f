//! Configuration loaded from environment variables with defaults.

use std::env;
use std::time::Duration;

const DEFAULT_CHANNEL_BUFFER: usize = 32;
const DEFAULT_FETCH_DELAY_MS: u64 = 1000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Capacity of the intent and event channels (`SHOP_CHANNEL_BUFFER`)
    pub channel_buffer: usize,
    /// Simulated catalog fetch latency (`SHOP_FETCH_DELAY_MS`)
    pub fetch_delay: Duration,
    /// Default filter when `RUST_LOG` is unset (`SHOP_LOG_LEVEL`)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            fetch_delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Missing or unparsable
    /// values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            channel_buffer: lookup("SHOP_CHANNEL_BUFFER")
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_CHANNEL_BUFFER),
            fetch_delay: lookup("SHOP_FETCH_DELAY_MS")
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(Duration::from_millis(DEFAULT_FETCH_DELAY_MS)),
            log_level: lookup("SHOP_LOG_LEVEL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}
