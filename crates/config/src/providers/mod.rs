//! Derived-value providers over the resolved settings tree.
//!
//! Responsibilities:
//! - Build connection strings and addresses for each backing subsystem.
//! - Return pool sizes and timeouts, substituting a per-field default when unset or non-positive.
//! - Resolve semantic lookup keys (module, topic, collection, index) to configured names.
//!
//! Does NOT handle:
//! - Validating that the configured values are reachable or well-formed.
//!
//! Invariants:
//! - Every accessor is total: no `Result`, no panics, always a usable value.
//! - Each lookup family is a closed enum; unknown keys go through exactly one fallback branch.

use std::time::Duration;

mod elasticsearch;
mod kafka;
mod mongodb;
mod postgres;
mod qdrant;
mod redis;
mod services;

pub use elasticsearch::IndexPurpose;
pub use kafka::{ConsumerRole, TopicPurpose};
pub use mongodb::MongoPurpose;
pub use postgres::DatabasePurpose;
pub use qdrant::CollectionPurpose;
pub use redis::CachePurpose;

/// A closed set of lookup keys for one named-lookup family.
pub trait PurposeKey: Copy + Sized {
    /// Family name used in log events.
    const KIND: &'static str;

    /// Map a caller-supplied key to a known purpose, if it is one.
    fn from_key(key: &str) -> Option<Self>;
}

/// Resolve `key` within a lookup family, logging when the fallback will be used.
pub(crate) fn lookup<P: PurposeKey>(key: &str) -> Option<P> {
    let purpose = P::from_key(key);
    if purpose.is_none() {
        tracing::debug!(kind = P::KIND, key, "unrecognized lookup key, using fallback");
    }
    purpose
}

/// A configured count if strictly positive, otherwise the default.
pub(crate) fn positive_or(value: i64, default: u64) -> u64 {
    if value > 0 { value as u64 } else { default }
}

/// A configured number of seconds as a duration if strictly positive, otherwise the default.
pub(crate) fn positive_secs_or(value: i64, default_secs: u64) -> Duration {
    Duration::from_secs(positive_or(value, default_secs))
}
