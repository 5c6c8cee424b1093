//! Environment override overlay.
//!
//! Responsibilities:
//! - Define the `OverrideSource` abstraction and its map, process, and layered forms.
//! - Map a fixed whitelist of variable names onto settings fields.
//! - Parse override values to each field's type and report the ones that do not parse.
//!
//! Does NOT handle:
//! - Reading or decoding documents (see document.rs).
//! - Deciding which sources exist or their order (see builder.rs).
//!
//! Invariants:
//! - Only whitelisted variables are consulted; each names exactly one field.
//! - Empty or whitespace-only values count as absent; values are trimmed.
//! - An override that does not parse leaves the field unchanged and logs a warning
//!   naming the variable. The raw value is never logged.
//! - Resolution is a pure function of its inputs and is idempotent.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::types::{Secret, Settings};

/// A key-value source of override values.
pub trait OverrideSource {
    /// Raw value for `var`, if the source has one.
    fn get(&self, var: &str) -> Option<String>;

    /// Trimmed value for `var`, treating empty and whitespace-only values as absent.
    fn value(&self, var: &str) -> Option<String> {
        self.get(var).and_then(|raw| {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
    }
}

impl<S: BuildHasher> OverrideSource for HashMap<String, String, S> {
    fn get(&self, var: &str) -> Option<String> {
        HashMap::get(self, var).cloned()
    }
}

impl OverrideSource for BTreeMap<String, String> {
    fn get(&self, var: &str) -> Option<String> {
        BTreeMap::get(self, var).cloned()
    }
}

impl<T: OverrideSource + ?Sized> OverrideSource for &T {
    fn get(&self, var: &str) -> Option<String> {
        (**self).get(var)
    }
}

/// Several sources consulted in order; the first one with a non-blank value wins.
///
/// `get` returns that value untrimmed.
#[derive(Default)]
pub struct Layered<'a> {
    layers: Vec<&'a dyn OverrideSource>,
}

impl<'a> Layered<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer with lower precedence than every layer added so far.
    pub fn with(mut self, layer: &'a dyn OverrideSource) -> Self {
        self.layers.push(layer);
        self
    }
}

impl OverrideSource for Layered<'_> {
    fn get(&self, var: &str) -> Option<String> {
        self.layers
            .iter()
            .find_map(|layer| layer.get(var).filter(|raw| !raw.trim().is_empty()))
    }
}

/// Write access to one settings field, tagged with the field's value type.
#[derive(Clone, Copy)]
enum Setter {
    Text(fn(&mut Settings) -> &mut String),
    Secret(fn(&mut Settings) -> &mut Secret),
    Port(fn(&mut Settings) -> &mut u16),
    Integer(fn(&mut Settings) -> &mut i64),
    Flag(fn(&mut Settings) -> &mut bool),
    List(fn(&mut Settings) -> &mut Vec<String>),
}

impl Setter {
    fn expected(self) -> &'static str {
        match self {
            Setter::Text(_) | Setter::Secret(_) => "string",
            Setter::Port(_) => "port number (0-65535)",
            Setter::Integer(_) => "base-10 integer",
            Setter::Flag(_) => "boolean",
            Setter::List(_) => "comma-separated list",
        }
    }

    /// Parse `value` and store it. On failure the field is left untouched.
    fn apply(self, settings: &mut Settings, value: &str) -> Result<(), ()> {
        match self {
            Setter::Text(field) => *field(settings) = value.to_string(),
            Setter::Secret(field) => *field(settings) = Secret::new(value),
            Setter::Port(field) => {
                let parsed: u16 = value.parse().map_err(|_| ())?;
                *field(settings) = parsed;
            }
            Setter::Integer(field) => {
                let parsed: i64 = value.parse().map_err(|_| ())?;
                *field(settings) = parsed;
            }
            Setter::Flag(field) => {
                let parsed = parse_bool(value).ok_or(())?;
                *field(settings) = parsed;
            }
            Setter::List(field) => {
                let parsed = parse_list(value).ok_or(())?;
                *field(settings) = parsed;
            }
        }
        Ok(())
    }
}

/// Whitelisted variables and the field each one overrides.
const BINDINGS: &[(&str, Setter)] = &[
    ("ERP_ENVIRONMENT", Setter::Text(|s| &mut s.environment.current)),
    ("SERVICE_NAME", Setter::Text(|s| &mut s.service.name)),
    ("SERVICE_VERSION", Setter::Text(|s| &mut s.service.version)),
    // PostgreSQL
    ("POSTGRES_HOST", Setter::Text(|s| &mut s.database.postgresql.host)),
    ("POSTGRES_PORT", Setter::Port(|s| &mut s.database.postgresql.port)),
    ("POSTGRES_USER", Setter::Text(|s| &mut s.database.postgresql.username)),
    ("POSTGRES_PASSWORD", Setter::Secret(|s| &mut s.database.postgresql.password)),
    ("POSTGRES_SSL_MODE", Setter::Text(|s| &mut s.database.postgresql.ssl_mode)),
    // MongoDB
    ("MONGODB_HOST", Setter::Text(|s| &mut s.database.mongodb.host)),
    ("MONGODB_PORT", Setter::Port(|s| &mut s.database.mongodb.port)),
    ("MONGODB_USER", Setter::Text(|s| &mut s.database.mongodb.username)),
    ("MONGODB_PASSWORD", Setter::Secret(|s| &mut s.database.mongodb.password)),
    // Redis
    ("REDIS_HOST", Setter::Text(|s| &mut s.cache.redis.host)),
    ("REDIS_PORT", Setter::Port(|s| &mut s.cache.redis.port)),
    ("REDIS_PASSWORD", Setter::Secret(|s| &mut s.cache.redis.password)),
    // Kafka
    ("KAFKA_BROKERS", Setter::List(|s| &mut s.message_broker.kafka.brokers)),
    // Qdrant
    ("QDRANT_HOST", Setter::Text(|s| &mut s.vector_database.qdrant.host)),
    ("QDRANT_HTTP_PORT", Setter::Port(|s| &mut s.vector_database.qdrant.http_port)),
    ("QDRANT_GRPC_PORT", Setter::Port(|s| &mut s.vector_database.qdrant.grpc_port)),
    ("QDRANT_API_KEY", Setter::Secret(|s| &mut s.vector_database.qdrant.api_key)),
    // Elasticsearch
    ("ELASTICSEARCH_HOST", Setter::Text(|s| &mut s.search.elasticsearch.host)),
    ("ELASTICSEARCH_PORT", Setter::Port(|s| &mut s.search.elasticsearch.port)),
    ("ELASTICSEARCH_USERNAME", Setter::Text(|s| &mut s.search.elasticsearch.username)),
    ("ELASTICSEARCH_PASSWORD", Setter::Secret(|s| &mut s.search.elasticsearch.password)),
    // JWT
    ("JWT_SECRET", Setter::Secret(|s| &mut s.security.jwt.secret)),
    ("JWT_ACCESS_EXPIRY", Setter::Integer(|s| &mut s.security.jwt.access_expiry)),
    ("JWT_REFRESH_EXPIRY", Setter::Integer(|s| &mut s.security.jwt.refresh_expiry)),
    // Logging
    ("LOG_LEVEL", Setter::Text(|s| &mut s.logging.level)),
    ("LOG_FORMAT", Setter::Text(|s| &mut s.logging.format)),
    ("LOG_OUTPUT", Setter::Text(|s| &mut s.logging.output)),
    // Feature flags
    ("FEATURE_AI_ENABLED", Setter::Flag(|s| &mut s.features.ai_enabled)),
    ("FEATURE_ANALYTICS_ENABLED", Setter::Flag(|s| &mut s.features.analytics_enabled)),
    ("FEATURE_MONITORING_ENABLED", Setter::Flag(|s| &mut s.features.monitoring_enabled)),
    ("FEATURE_TRACING_ENABLED", Setter::Flag(|s| &mut s.features.tracing_enabled)),
    ("FEATURE_WEBSOCKET_ENABLED", Setter::Flag(|s| &mut s.features.websocket_enabled)),
];

/// Names of every variable the overlay consults.
pub fn override_vars() -> impl Iterator<Item = &'static str> {
    BINDINGS.iter().map(|(var, _)| *var)
}

/// Canonical boolean spellings.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Comma-separated items, trimmed, empty items dropped. `None` when nothing remains.
pub(crate) fn parse_list(value: &str) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

/// A whitelisted override that was present but did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub var: &'static str,
    pub expected: &'static str,
}

/// Outcome of resolving a document against an override source.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub settings: Settings,
    /// Variables whose values were applied, in whitelist order.
    pub applied: Vec<&'static str>,
    /// Variables whose values were ignored because they did not parse.
    pub rejected: Vec<RejectedOverride>,
}

/// Apply whitelisted overrides from `overrides` to `document`.
pub fn resolve<S: OverrideSource + ?Sized>(document: Settings, overrides: &S) -> Settings {
    resolve_with_report(document, overrides).settings
}

/// Like [`resolve`], also reporting which overrides were applied or rejected.
pub fn resolve_with_report<S: OverrideSource + ?Sized>(
    document: Settings,
    overrides: &S,
) -> Resolution {
    let mut settings = document;
    let mut applied = Vec::new();
    let mut rejected = Vec::new();

    for &(var, setter) in BINDINGS {
        let Some(value) = overrides.value(var) else {
            continue;
        };
        match setter.apply(&mut settings, &value) {
            Ok(()) => applied.push(var),
            Err(()) => {
                let expected = setter.expected();
                tracing::warn!(
                    var,
                    expected,
                    "ignoring environment override that does not parse"
                );
                rejected.push(RejectedOverride { var, expected });
            }
        }
    }

    Resolution {
        settings,
        applied,
        rejected,
    }
}
