use std::time::Duration;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// HTTP client settings for calls to the generation service. These timeouts
/// are the only ones applied to a generation request.
///
/// # Environment Variables
/// - `FOGG_HTTP__CONNECT_TIMEOUT`: Connection timeout in seconds (default: 30)
/// - `FOGG_HTTP__READ_TIMEOUT`: Read timeout in seconds (default: 120)
/// - `FOGG_HTTP__POOL_IDLE_TIMEOUT`: Pool idle timeout in seconds (default: 90)
/// - `FOGG_HTTP__POOL_MAX_IDLE_PER_HOST`: Max idle connections per host
///   (default: 5)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    pub connect_timeout: u64,
    pub read_timeout: u64,
    pub pool_idle_timeout: u64,
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: 30,
            read_timeout: 120,
            pool_idle_timeout: 90,
            pool_max_idle_per_host: 5,
        }
    }
}

impl HttpConfig {
    pub fn connect_duration(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn read_duration(&self) -> Duration {
        Duration::from_secs(self.read_timeout)
    }

    pub fn pool_idle_duration(&self) -> Duration {
        Duration::from_secs(self.pool_idle_timeout)
    }
}
