//! Message broker settings.

use serde::{Deserialize, Serialize};

use super::scalar::{text, text_list};
use super::secret::Secret;

/// `message_broker` section of the settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageBrokerConfig {
    pub kafka: KafkaConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaConfig {
    #[serde(deserialize_with = "text_list")]
    pub brokers: Vec<String>,
    #[serde(deserialize_with = "text")]
    pub security_protocol: String,
    #[serde(deserialize_with = "text")]
    pub sasl_mechanism: String,
    #[serde(deserialize_with = "text")]
    pub sasl_username: String,
    pub sasl_password: Secret,
    pub topics: KafkaTopics,
    pub consumer_groups: KafkaConsumerGroups,
    pub producer: KafkaProducer,
    pub consumer: KafkaConsumer,
}

/// Topic name per event category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaTopics {
    #[serde(deserialize_with = "text")]
    pub auth_events: String,
    #[serde(deserialize_with = "text")]
    pub user_events: String,
    #[serde(deserialize_with = "text")]
    pub business_events: String,
    #[serde(deserialize_with = "text")]
    pub system_events: String,
    #[serde(deserialize_with = "text")]
    pub ai_events: String,
    #[serde(deserialize_with = "text")]
    pub notification_events: String,
}

/// Consumer group per consuming service role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaConsumerGroups {
    #[serde(deserialize_with = "text")]
    pub auth_service: String,
    #[serde(deserialize_with = "text")]
    pub crm_service: String,
    #[serde(deserialize_with = "text")]
    pub hrm_service: String,
    #[serde(deserialize_with = "text")]
    pub finance_service: String,
    #[serde(deserialize_with = "text")]
    pub inventory_service: String,
    #[serde(deserialize_with = "text")]
    pub projects_service: String,
    #[serde(deserialize_with = "text")]
    pub notification_service: String,
    #[serde(deserialize_with = "text")]
    pub analytics_service: String,
    #[serde(deserialize_with = "text")]
    pub audit_service: String,
    #[serde(deserialize_with = "text")]
    pub ai_service: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaProducer {
    pub batch_size: i64,
    pub linger_ms: i64,
    #[serde(deserialize_with = "text")]
    pub compression_type: String,
    #[serde(deserialize_with = "text")]
    pub acks: String,
    pub retries: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaConsumer {
    #[serde(deserialize_with = "text")]
    pub auto_offset_reset: String,
    pub enable_auto_commit: bool,
    pub auto_commit_interval_ms: i64,
    pub session_timeout_ms: i64,
    pub heartbeat_interval_ms: i64,
}
