//! Redis connection strings and pool timeouts.

use std::time::Duration;

use super::{PurposeKey, lookup, positive_secs_or};
use crate::constants::{
    DEFAULT_REDIS_DIAL_TIMEOUT_SECS, DEFAULT_REDIS_IDLE_TIMEOUT_SECS,
    DEFAULT_REDIS_READ_TIMEOUT_SECS, DEFAULT_REDIS_WRITE_TIMEOUT_SECS,
};
use crate::types::{RedisConfig, RedisDatabases, RedisPool};

/// Which logical Redis database to use. Unknown keys select `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePurpose {
    Default,
    Sessions,
    Queues,
    WebSocket,
    Cache,
}

impl PurposeKey for CachePurpose {
    const KIND: &'static str = "redis_database";

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "default" => Some(Self::Default),
            "sessions" => Some(Self::Sessions),
            "queues" => Some(Self::Queues),
            "websocket" => Some(Self::WebSocket),
            "cache" => Some(Self::Cache),
            _ => None,
        }
    }
}

impl RedisDatabases {
    pub fn get(&self, purpose: CachePurpose) -> u32 {
        match purpose {
            CachePurpose::Default => self.default,
            CachePurpose::Sessions => self.sessions,
            CachePurpose::Queues => self.queues,
            CachePurpose::WebSocket => self.websocket,
            CachePurpose::Cache => self.cache,
        }
    }
}

impl RedisConfig {
    pub fn database_number(&self, purpose: &str) -> u32 {
        self.databases
            .get(lookup(purpose).unwrap_or(CachePurpose::Default))
    }

    /// `redis://[:password@]host:port/db`. The credential segment is omitted
    /// when no password is configured.
    pub fn connection_string(&self, purpose: &str) -> String {
        let db = self.database_number(purpose);
        if self.password.is_empty() {
            format!("redis://{}:{}/{}", self.host, self.port, db)
        } else {
            format!(
                "redis://:{}@{}:{}/{}",
                self.password.expose(),
                self.host,
                self.port,
                db
            )
        }
    }

    /// `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl RedisPool {
    pub fn dial_timeout(&self) -> Duration {
        positive_secs_or(self.dial_timeout, DEFAULT_REDIS_DIAL_TIMEOUT_SECS)
    }

    pub fn read_timeout(&self) -> Duration {
        positive_secs_or(self.read_timeout, DEFAULT_REDIS_READ_TIMEOUT_SECS)
    }

    pub fn write_timeout(&self) -> Duration {
        positive_secs_or(self.write_timeout, DEFAULT_REDIS_WRITE_TIMEOUT_SECS)
    }

    pub fn idle_timeout(&self) -> Duration {
        positive_secs_or(self.idle_timeout, DEFAULT_REDIS_IDLE_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Secret;

    fn sample() -> RedisConfig {
        RedisConfig {
            host: "cache.local".to_string(),
            port: 6379,
            password: Secret::default(),
            databases: RedisDatabases {
                default: 0,
                sessions: 1,
                queues: 2,
                websocket: 3,
                cache: 4,
            },
            pool: RedisPool::default(),
        }
    }

    #[test]
    fn test_connection_string_without_password_omits_credentials() {
        assert_eq!(
            sample().connection_string("cache"),
            "redis://cache.local:6379/4"
        );
    }

    #[test]
    fn test_connection_string_with_password() {
        let mut redis = sample();
        redis.password = Secret::new("s3cret");
        assert_eq!(
            redis.connection_string("sessions"),
            "redis://:s3cret@cache.local:6379/1"
        );
    }

    #[test]
    fn test_unknown_purpose_uses_default_database() {
        let mut redis = sample();
        redis.databases.default = 7;
        assert_eq!(redis.database_number("locks"), 7);
        assert_eq!(
            redis.connection_string("locks"),
            redis.connection_string("default")
        );
    }

    #[test]
    fn test_address() {
        assert_eq!(sample().address(), "cache.local:6379");
    }

    #[test]
    fn test_pool_timeout_defaults() {
        let pool = RedisPool {
            dial_timeout: 0,
            read_timeout: -1,
            ..Default::default()
        };
        assert_eq!(pool.dial_timeout(), Duration::from_secs(5));
        assert_eq!(pool.read_timeout(), Duration::from_secs(3));
        assert_eq!(pool.write_timeout(), Duration::from_secs(3));
        assert_eq!(pool.idle_timeout(), Duration::from_secs(240));
    }

    #[test]
    fn test_pool_timeout_configured() {
        let pool = RedisPool {
            dial_timeout: 10,
            read_timeout: 6,
            write_timeout: 7,
            idle_timeout: 60,
            ..Default::default()
        };
        assert_eq!(pool.dial_timeout(), Duration::from_secs(10));
        assert_eq!(pool.read_timeout(), Duration::from_secs(6));
        assert_eq!(pool.write_timeout(), Duration::from_secs(7));
        assert_eq!(pool.idle_timeout(), Duration::from_secs(60));
    }
}
