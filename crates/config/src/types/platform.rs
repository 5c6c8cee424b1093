//! Platform settings shared by every module: monitoring, realtime transport,
//! security, and service discovery.

use serde::{Deserialize, Serialize};

use super::scalar::{text, text_list};
use super::secret::Secret;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub prometheus: PrometheusConfig,
    pub grafana: GrafanaConfig,
    pub jaeger: JaegerConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrometheusConfig {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub port: u16,
    #[serde(deserialize_with = "text")]
    pub scrape_interval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrafanaConfig {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub port: u16,
    #[serde(deserialize_with = "text")]
    pub username: String,
    pub password: Secret,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaegerConfig {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub port: u16,
    pub grpc_port: u16,
    pub http_port: u16,
    #[serde(deserialize_with = "text")]
    pub agent_host: String,
    pub agent_port: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtimeConfig {
    pub websocket: WebSocketConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub port: u16,
    #[serde(deserialize_with = "text")]
    pub path: String,
    #[serde(deserialize_with = "text_list")]
    pub cors_origins: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub transports: Vec<String>,
    pub ssl: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub jwt: JwtConfig,
    pub encryption: EncryptionConfig,
    pub cors: CorsConfig,
    pub rate_limiting: RateLimitingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    pub secret: Secret,
    /// Access token lifetime in seconds.
    pub access_expiry: i64,
    /// Refresh token lifetime in seconds.
    pub refresh_expiry: i64,
    #[serde(deserialize_with = "text")]
    pub algorithm: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncryptionConfig {
    pub key: Secret,
    #[serde(deserialize_with = "text")]
    pub algorithm: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    #[serde(deserialize_with = "text_list")]
    pub allowed_origins: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub allowed_methods: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitingConfig {
    pub enabled: bool,
    pub requests_per_minute: i64,
    pub burst_size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDiscoveryConfig {
    pub consul: ConsulConfig,
    pub kubernetes: KubernetesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsulConfig {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub port: u16,
    #[serde(deserialize_with = "text")]
    pub datacenter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesConfig {
    #[serde(deserialize_with = "text")]
    pub namespace: String,
    pub in_cluster: bool,
}

/// One entry of the `services` registry. Zero ports are "not exposed".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceEndpoint {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub http_port: u16,
    pub grpc_port: u16,
    pub port: u16,
    #[serde(deserialize_with = "text")]
    pub health_endpoint: String,
}
