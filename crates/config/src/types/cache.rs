//! Key-value cache settings.

use serde::{Deserialize, Serialize};

use super::scalar::text;
use super::secret::Secret;

/// `cache` section of the settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub redis: RedisConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub port: u16,
    /// Empty means the server does not require authentication.
    pub password: Secret,
    pub databases: RedisDatabases,
    pub pool: RedisPool,
}

/// Logical database number per purpose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisDatabases {
    pub default: u32,
    pub sessions: u32,
    pub queues: u32,
    pub websocket: u32,
    pub cache: u32,
}

/// Pool sizing and timeouts (seconds). Non-positive timeouts fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisPool {
    pub max_active: i64,
    pub max_idle: i64,
    pub idle_timeout: i64,
    pub dial_timeout: i64,
    pub read_timeout: i64,
    pub write_timeout: i64,
}
