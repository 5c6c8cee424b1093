//! Kafka broker list, topic, and consumer group lookups.

use super::{PurposeKey, lookup};
use crate::constants::{DEFAULT_KAFKA_BROKERS, KAFKA_GROUP_SUFFIX};
use crate::module::ModuleId;
use crate::types::{KafkaConfig, KafkaConsumerGroups, KafkaTopics};

/// Event category of a topic. Unknown keys select `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicPurpose {
    Auth,
    User,
    Business,
    System,
    Ai,
    Notification,
}

impl PurposeKey for TopicPurpose {
    const KIND: &'static str = "kafka_topic";

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "auth" => Some(Self::Auth),
            "user" => Some(Self::User),
            "business" => Some(Self::Business),
            "system" => Some(Self::System),
            "ai" => Some(Self::Ai),
            "notification" => Some(Self::Notification),
            _ => None,
        }
    }
}

/// Shared consuming service role. Any other role, business modules included,
/// gets a synthesized `<role>-group` name. Module groups are reached through
/// [`KafkaConsumerGroups::consumer_group_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerRole {
    Auth,
    Notification,
    Analytics,
    Audit,
    Ai,
}

impl PurposeKey for ConsumerRole {
    const KIND: &'static str = "kafka_consumer_group";

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "auth" => Some(Self::Auth),
            "notification" => Some(Self::Notification),
            "analytics" => Some(Self::Analytics),
            "audit" => Some(Self::Audit),
            "ai" => Some(Self::Ai),
            _ => None,
        }
    }
}

impl KafkaTopics {
    pub fn get(&self, purpose: TopicPurpose) -> &str {
        match purpose {
            TopicPurpose::Auth => &self.auth_events,
            TopicPurpose::User => &self.user_events,
            TopicPurpose::Business => &self.business_events,
            TopicPurpose::System => &self.system_events,
            TopicPurpose::Ai => &self.ai_events,
            TopicPurpose::Notification => &self.notification_events,
        }
    }

    pub fn topic_name(&self, event_type: &str) -> &str {
        self.get(lookup(event_type).unwrap_or(TopicPurpose::System))
    }
}

impl KafkaConsumerGroups {
    pub fn get(&self, role: ConsumerRole) -> &str {
        match role {
            ConsumerRole::Auth => &self.auth_service,
            ConsumerRole::Notification => &self.notification_service,
            ConsumerRole::Analytics => &self.analytics_service,
            ConsumerRole::Audit => &self.audit_service,
            ConsumerRole::Ai => &self.ai_service,
        }
    }

    pub fn consumer_group(&self, service: &str) -> String {
        match lookup::<ConsumerRole>(service) {
            Some(role) => self.get(role).to_string(),
            None => format!("{service}{KAFKA_GROUP_SUFFIX}"),
        }
    }

    /// Consumer group a module joins. Modules without a group of their own
    /// (`frontend`, unknown) join the auth group.
    pub fn consumer_group_for(&self, module: ModuleId) -> &str {
        match module.effective() {
            ModuleId::Crm => &self.crm_service,
            ModuleId::Hrm => &self.hrm_service,
            ModuleId::Finance => &self.finance_service,
            ModuleId::Inventory => &self.inventory_service,
            ModuleId::Projects => &self.projects_service,
            ModuleId::Ai => &self.ai_service,
            ModuleId::Auth | ModuleId::Frontend | ModuleId::Unknown => &self.auth_service,
        }
    }
}

impl KafkaConfig {
    /// Comma-separated broker list, or `localhost:9092` when none are configured.
    pub fn broker_list(&self) -> String {
        if self.brokers.is_empty() {
            DEFAULT_KAFKA_BROKERS.to_string()
        } else {
            self.brokers.join(",")
        }
    }

    pub fn topic_name(&self, event_type: &str) -> &str {
        self.topics.topic_name(event_type)
    }

    pub fn consumer_group(&self, service: &str) -> String {
        self.consumer_groups.consumer_group(service)
    }
}
