//! Settings tree type definitions.
//!
//! Responsibilities:
//! - Define one record per section of the settings document.
//! - Provide the `Secret` leaf type used for every credential.
//!
//! Does NOT handle:
//! - Loading documents or applying environment overrides (see `loader` module).
//! - Computing connection strings and fallbacks (see `providers` module).
//!
//! Invariants:
//! - Every type derives `Default`, so absence in a document degrades to a default.
//! - Credentials are `Secret`, so a `Debug` dump of the tree never prints them.
//! - Text leaves accept any scalar, so `version: 1.0` decodes as the text "1.0".

mod broker;
mod cache;
mod database;
mod platform;
mod scalar;
mod search;
mod secret;
mod settings;
mod vector;

pub use broker::{
    KafkaConfig, KafkaConsumer, KafkaConsumerGroups, KafkaProducer, KafkaTopics,
    MessageBrokerConfig,
};
pub use cache::{CacheConfig, RedisConfig, RedisDatabases, RedisPool};
pub use database::{
    DatabaseConfig, MongoConfig, MongoDatabases, MongoOptions, PostgresConfig, PostgresDatabases,
    PostgresPool,
};
pub use platform::{
    ConsulConfig, CorsConfig, EncryptionConfig, GrafanaConfig, JaegerConfig, JwtConfig,
    KubernetesConfig, MonitoringConfig, PrometheusConfig, RateLimitingConfig, RealtimeConfig,
    SecurityConfig, ServiceDiscoveryConfig, ServiceEndpoint, WebSocketConfig,
};
pub use search::{ElasticsearchConfig, ElasticsearchIndices, ElasticsearchSettings, SearchConfig};
pub use secret::Secret;
pub use settings::{
    EnvironmentConfig, FeaturesConfig, HealthCheckConfig, HealthCheckDependency, LoggingConfig,
    ServiceIdentity, Settings,
};
pub use vector::{QdrantCollections, QdrantConfig, QdrantVector, VectorDatabaseConfig};
