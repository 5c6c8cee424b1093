//! Vector store settings.

use serde::{Deserialize, Serialize};

use super::scalar::text;
use super::secret::Secret;

/// `vector_database` section of the settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorDatabaseConfig {
    pub qdrant: QdrantConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QdrantConfig {
    #[serde(deserialize_with = "text")]
    pub host: String,
    pub http_port: u16,
    pub grpc_port: u16,
    pub api_key: Secret,
    /// Serve the HTTP API over TLS.
    pub ssl: bool,
    pub collections: QdrantCollections,
    pub vector: QdrantVector,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QdrantCollections {
    #[serde(deserialize_with = "text")]
    pub documents: String,
    #[serde(deserialize_with = "text")]
    pub products: String,
    #[serde(deserialize_with = "text")]
    pub conversations: String,
    #[serde(deserialize_with = "text")]
    pub knowledge_base: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QdrantVector {
    pub size: u64,
    #[serde(deserialize_with = "text")]
    pub distance: String,
}
