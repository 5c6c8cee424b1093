//! Root of the settings tree.
//!
//! Responsibilities:
//! - Mirror the sections of the settings document in one strongly-typed record.
//! - Give every leaf a deterministic default so partial documents decode cleanly.
//!
//! Does NOT handle:
//! - Reading or decoding documents (see `loader::document`).
//! - Environment overrides (see `loader::overrides`).
//!
//! Invariants:
//! - Every struct is `#[serde(default)]`; unknown document keys are ignored.
//! - Defaults are zero values, except `service` which uses documented constants.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::broker::MessageBrokerConfig;
use super::cache::CacheConfig;
use super::database::DatabaseConfig;
use super::platform::{
    MonitoringConfig, RealtimeConfig, SecurityConfig, ServiceDiscoveryConfig, ServiceEndpoint,
};
use super::scalar::{text, text_list};
use super::search::SearchConfig;
use super::vector::VectorDatabaseConfig;
use crate::constants::{DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_VERSION};

/// The resolved settings tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub environment: EnvironmentConfig,
    pub service: ServiceIdentity,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub message_broker: MessageBrokerConfig,
    pub vector_database: VectorDatabaseConfig,
    pub search: SearchConfig,
    pub monitoring: MonitoringConfig,
    pub realtime: RealtimeConfig,
    pub security: SecurityConfig,
    pub service_discovery: ServiceDiscoveryConfig,
    /// Service registry keyed by `<module>_service` (and `frontend`).
    pub services: BTreeMap<String, ServiceEndpoint>,
    pub logging: LoggingConfig,
    pub health_check: HealthCheckConfig,
    pub features: FeaturesConfig,
}

impl Settings {
    pub fn is_production(&self) -> bool {
        self.environment.current == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment.current == "development"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Active deployment environment, e.g. `development` or `production`.
    #[serde(deserialize_with = "text")]
    pub current: String,
    #[serde(deserialize_with = "text_list")]
    pub available: Vec<String>,
    pub debug: bool,
    pub hot_reload: bool,
}

/// Name and version a service reports about itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceIdentity {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub version: String,
}

impl Default for ServiceIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVICE_NAME.to_string(),
            version: DEFAULT_SERVICE_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    #[serde(deserialize_with = "text")]
    pub level: String,
    #[serde(deserialize_with = "text")]
    pub format: String,
    #[serde(deserialize_with = "text")]
    pub output: String,
    /// Static fields attached to every log record.
    pub fields: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCheckConfig {
    pub enabled: bool,
    #[serde(deserialize_with = "text")]
    pub endpoint: String,
    /// Seconds between checks.
    pub interval: i64,
    /// Seconds.
    pub timeout: i64,
    pub dependencies: Vec<HealthCheckDependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCheckDependency {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "text")]
    pub kind: String,
    pub critical: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub ai_enabled: bool,
    pub analytics_enabled: bool,
    pub monitoring_enabled: bool,
    pub tracing_enabled: bool,
    pub websocket_enabled: bool,
}

impl FeaturesConfig {
    /// Flags in rendering order, keyed by their short name.
    pub fn flags(&self) -> [(&'static str, bool); 5] {
        [
            ("ai", self.ai_enabled),
            ("analytics", self.analytics_enabled),
            ("monitoring", self.monitoring_enabled),
            ("tracing", self.tracing_enabled),
            ("websocket", self.websocket_enabled),
        ]
    }
}
