//! Centralized constants for the ERP configuration workspace.
//!
//! Fallback values used by the derived-value providers when a setting is
//! unset or non-positive, plus the well-known file and variable names.

// =============================================================================
// PostgreSQL Pool Defaults
// =============================================================================

/// Default maximum number of open PostgreSQL connections.
pub const DEFAULT_PG_MAX_OPEN_CONNECTIONS: u64 = 25;

/// Default maximum number of idle PostgreSQL connections.
pub const DEFAULT_PG_MAX_IDLE_CONNECTIONS: u64 = 5;

/// Default maximum lifetime of a PostgreSQL connection in seconds (5 minutes).
pub const DEFAULT_PG_CONN_MAX_LIFETIME_SECS: u64 = 300;

/// Default maximum idle time of a PostgreSQL connection in seconds (1 minute).
pub const DEFAULT_PG_CONN_MAX_IDLE_TIME_SECS: u64 = 60;

// =============================================================================
// MongoDB Option Defaults
// =============================================================================

/// Default maximum MongoDB pool size.
pub const DEFAULT_MONGO_MAX_POOL_SIZE: u64 = 10;

/// Default minimum MongoDB pool size.
pub const DEFAULT_MONGO_MIN_POOL_SIZE: u64 = 1;

/// Default MongoDB connection idle time in seconds (1 minute).
pub const DEFAULT_MONGO_MAX_IDLE_TIME_SECS: u64 = 60;

/// Default MongoDB server selection timeout in seconds.
pub const DEFAULT_MONGO_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Redis Pool Defaults
// =============================================================================

/// Default Redis dial timeout in seconds.
pub const DEFAULT_REDIS_DIAL_TIMEOUT_SECS: u64 = 5;

/// Default Redis read timeout in seconds.
pub const DEFAULT_REDIS_READ_TIMEOUT_SECS: u64 = 3;

/// Default Redis write timeout in seconds.
pub const DEFAULT_REDIS_WRITE_TIMEOUT_SECS: u64 = 3;

/// Default Redis idle timeout in seconds (4 minutes).
pub const DEFAULT_REDIS_IDLE_TIMEOUT_SECS: u64 = 240;

// =============================================================================
// Messaging & Search Defaults
// =============================================================================

/// Broker list used when no Kafka brokers are configured.
pub const DEFAULT_KAFKA_BROKERS: &str = "localhost:9092";

/// Default Elasticsearch request timeout in seconds.
pub const DEFAULT_ES_TIMEOUT_SECS: u64 = 30;

/// Prefix for synthesized Elasticsearch index names.
pub const ES_INDEX_PREFIX: &str = "erp_";

/// Suffix for synthesized Kafka consumer group names.
pub const KAFKA_GROUP_SUFFIX: &str = "-group";

// =============================================================================
// Service Identity Defaults
// =============================================================================

/// Service name used when the document and environment leave it unset.
pub const DEFAULT_SERVICE_NAME: &str = "erp-service";

/// Service version used when the document and environment leave it unset.
pub const DEFAULT_SERVICE_VERSION: &str = "1.0.0";

// =============================================================================
// Locations
// =============================================================================

/// Name of the shared configuration directory searched for on disk.
pub const CONFIG_DIR_NAME: &str = "shared-config";

/// Main settings document inside the configuration directory.
pub const MAIN_DOCUMENT: &str = "config.yaml";

/// Subdirectory holding per-environment documents and dotenv overlays.
pub const ENVIRONMENTS_DIR: &str = "environments";

/// Environment variable pointing at the configuration directory.
pub const CONFIG_PATH_VAR: &str = "ERP_CONFIG_PATH";

/// Environment variable selecting the deployment environment.
pub const ENVIRONMENT_VAR: &str = "ERP_ENVIRONMENT";

/// Deployment environment used when none is selected.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Placeholder printed in place of secret values.
pub const REDACTED: &str = "********";
