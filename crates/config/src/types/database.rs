//! Relational and document database settings.

use serde::{Deserialize, Serialize};

use super::scalar::text;
use super::secret::Secret;

/// `database` section of the settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub postgresql: PostgresConfig,
    pub mongodb: MongoConfig,
}

/// PostgreSQL server, credentials, and per-module database names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresConfig {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub port: u16,
    #[serde(deserialize_with = "text")]
    pub username: String,
    pub password: Secret,
    #[serde(deserialize_with = "text")]
    pub ssl_mode: String,
    pub max_connections: i64,
    /// Connection timeout in seconds.
    pub connection_timeout: i64,
    pub databases: PostgresDatabases,
    pub pool: PostgresPool,
}

/// Database name per module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresDatabases {
    #[serde(deserialize_with = "text")]
    pub auth: String,
    #[serde(deserialize_with = "text")]
    pub crm: String,
    #[serde(deserialize_with = "text")]
    pub hrm: String,
    #[serde(deserialize_with = "text")]
    pub finance: String,
    #[serde(deserialize_with = "text")]
    pub inventory: String,
    #[serde(deserialize_with = "text")]
    pub projects: String,
    #[serde(deserialize_with = "text")]
    pub analytics: String,
}

/// Connection pool tuning. Non-positive values mean "use the default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresPool {
    pub max_open_connections: i64,
    pub max_idle_connections: i64,
    /// Seconds.
    pub connection_max_lifetime: i64,
    /// Seconds.
    pub connection_max_idle_time: i64,
}

/// MongoDB server, credentials, and per-purpose database names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub port: u16,
    #[serde(deserialize_with = "text")]
    pub username: String,
    pub password: Secret,
    #[serde(deserialize_with = "text")]
    pub auth_source: String,
    pub databases: MongoDatabases,
    pub options: MongoOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoDatabases {
    #[serde(deserialize_with = "text")]
    pub analytics: String,
    #[serde(deserialize_with = "text")]
    pub logs: String,
    #[serde(deserialize_with = "text")]
    pub ai_conversations: String,
    #[serde(deserialize_with = "text")]
    pub audit_trail: String,
}

/// Driver options. Non-positive values mean "use the default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoOptions {
    pub max_pool_size: i64,
    pub min_pool_size: i64,
    /// Seconds.
    pub max_idle_time: i64,
    /// Seconds.
    pub server_selection_timeout: i64,
}
