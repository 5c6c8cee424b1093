//! Settings document reading and decoding.
//!
//! Responsibilities:
//! - Read a YAML settings document and substitute variable references before parsing.
//! - Decode the substituted text into a `Settings` tree.
//! - Merge an environment-specific document over the main one.
//!
//! Does NOT handle:
//! - Locating documents on disk (see path.rs).
//! - Applying whitelisted overrides after decoding (see overrides.rs).
//!
//! Invariants:
//! - A missing path is `ConfigError::NotFound`; malformed YAML is `ConfigError::Decode`.
//! - Explicit nulls (`port:` with no value) decode as the field default.
//! - Substituted values are inserted verbatim; trimming belongs to the override overlay.
//! - Nothing is written to disk.

use serde_yaml::{Mapping, Value};
use std::path::Path;

use super::env::ProcessEnv;
use super::error::ConfigError;
use super::expand::expand_vars;
use super::overrides::OverrideSource;
use crate::types::Settings;

/// Load a document, substituting variable references from the process environment.
pub fn load_document(path: &Path) -> Result<Settings, ConfigError> {
    load_document_with(path, &ProcessEnv)
}

/// Load a document, substituting variable references from `source`.
pub fn load_document_with<S: OverrideSource + ?Sized>(
    path: &Path,
    source: &S,
) -> Result<Settings, ConfigError> {
    let value = read_document_value(path, source)?;
    decode_settings(value, path)
}

/// Read, substitute, and parse a document into a null-free YAML tree.
pub(crate) fn read_document_value<S: OverrideSource + ?Sized>(
    path: &Path,
    source: &S,
) -> Result<Value, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::from_read(path.to_path_buf(), e))?;
    let expanded = expand_vars(&raw, |name| source.get(name));

    let mut value: Value = serde_yaml::from_str(&expanded).map_err(|err| ConfigError::Decode {
        path: path.to_path_buf(),
        source: err,
    })?;
    if value.is_null() {
        value = Value::Mapping(Mapping::new());
    }
    strip_nulls(&mut value);

    tracing::debug!(path = %path.display(), "loaded settings document");
    Ok(value)
}

pub(crate) fn decode_settings(value: Value, path: &Path) -> Result<Settings, ConfigError> {
    serde_yaml::from_value(value).map_err(|source| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Drop mapping entries whose value is null so they fall back to field defaults.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Mapping(map) => {
            let entries = std::mem::take(map);
            *map = entries
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, mut v)| {
                    strip_nulls(&mut v);
                    (k, v)
                })
                .collect();
        }
        Value::Sequence(items) => items.iter_mut().for_each(strip_nulls),
        Value::Tagged(tagged) => strip_nulls(&mut tagged.value),
        _ => {}
    }
}

/// Recursively merge `overlay` into `base`. Mappings merge key by key; any
/// other overlay value replaces the base value.
pub(crate) fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_document_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_document_with(&dir.path().join("absent.yaml"), &vars(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_document_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.yaml", "database: [unclosed\n");
        let err = load_document_with(&path, &vars(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Decode { .. }));
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "shape.yaml", "database:\n  postgresql:\n    port: many\n");
        let err = load_document_with(&path, &vars(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Decode { .. }));
    }

    #[test]
    fn test_substitution_happens_before_parsing() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "config.yaml",
            "database:\n  postgresql:\n    host: ${PG_HOST}\n    port: $PG_PORT\n    password: ${PG_PASSWORD}\n",
        );
        let settings =
            load_document_with(&path, &vars(&[("PG_HOST", "db.local"), ("PG_PORT", "5432")]))
                .unwrap();
        assert_eq!(settings.database.postgresql.host, "db.local");
        assert_eq!(settings.database.postgresql.port, 5432);
        assert!(settings.database.postgresql.password.is_empty());
    }

    #[test]
    fn test_empty_document_and_null_values_use_defaults() {
        let dir = TempDir::new().unwrap();
        let empty = write(&dir, "empty.yaml", "");
        assert_eq!(load_document_with(&empty, &vars(&[])).unwrap(), Settings::default());

        let nulls = write(&dir, "nulls.yaml", "service:\n  name:\ncache:\n  redis:\n    port: ${UNSET_PORT}\n");
        let settings = load_document_with(&nulls, &vars(&[])).unwrap();
        assert_eq!(settings.service.name, "erp-service");
        assert_eq!(settings.cache.redis.port, 0);
    }

    #[test]
    fn test_number_like_scalars_decode_as_text() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "config.yaml",
            "service:\n  version: 1.0\n\
             database:\n  postgresql:\n    username: 1001\n    databases:\n      auth: 2024\n\
             \x20 mongodb:\n    username: ${MONGO_USER}\n\
             message_broker:\n  kafka:\n    brokers: [9092, kafka-1]\n    producer:\n      acks: 1\n\
             environment:\n  available: [dev, 2]\n",
        );

        let settings = load_document_with(&path, &vars(&[("MONGO_USER", "42")])).unwrap();

        assert_eq!(settings.service.version, "1.0");
        assert_eq!(settings.database.postgresql.username, "1001");
        assert_eq!(settings.database.postgresql.databases.auth, "2024");
        assert_eq!(settings.database.mongodb.username, "42");
        assert_eq!(settings.message_broker.kafka.producer.acks, "1");
        assert_eq!(settings.message_broker.kafka.brokers, vec!["9092", "kafka-1"]);
        assert_eq!(settings.environment.available, vec!["dev", "2"]);
    }

    #[test]
    fn test_substituted_values_are_not_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.yaml", "service:\n  name: \"${SERVICE_LABEL}\"\n");

        let settings =
            load_document_with(&path, &vars(&[("SERVICE_LABEL", "  crm service ")])).unwrap();

        assert_eq!(settings.service.name, "  crm service ");
    }

    #[test]
    fn test_merge_values_is_deep() {
        let mut base: Value =
            serde_yaml::from_str("a:\n  x: 1\n  y: 2\nlist: [1, 2]\n").unwrap();
        let overlay: Value = serde_yaml::from_str("a:\n  y: 3\n  z: 4\nlist: [9]\n").unwrap();
        merge_values(&mut base, overlay);

        let expected: Value =
            serde_yaml::from_str("a:\n  x: 1\n  y: 3\n  z: 4\nlist: [9]\n").unwrap();
        assert_eq!(base, expected);
    }
}
