//! Search engine settings.

use serde::{Deserialize, Serialize};

use super::scalar::text;
use super::secret::Secret;

/// `search` section of the settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub elasticsearch: ElasticsearchConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticsearchConfig {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub port: u16,
    #[serde(deserialize_with = "text")]
    pub username: String,
    pub password: Secret,
    /// URL scheme, `http` or `https`. Empty is treated as `http`.
    #[serde(deserialize_with = "text")]
    pub scheme: String,
    pub verify_certs: bool,
    pub indices: ElasticsearchIndices,
    pub settings: ElasticsearchSettings,
}

/// Index name per searchable entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticsearchIndices {
    #[serde(deserialize_with = "text")]
    pub contacts: String,
    #[serde(deserialize_with = "text")]
    pub products: String,
    #[serde(deserialize_with = "text")]
    pub documents: String,
    #[serde(deserialize_with = "text")]
    pub employees: String,
    #[serde(deserialize_with = "text")]
    pub transactions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticsearchSettings {
    pub max_retries: i64,
    #[serde(deserialize_with = "text")]
    pub retry_on_status: String,
    /// Request timeout in seconds. Non-positive falls back to the default.
    pub timeout: i64,
}
