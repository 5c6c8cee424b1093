//! Secret leaf type for credentials in the settings tree.
//!
//! Responsibilities:
//! - Wrap `secrecy::SecretString` so passwords, keys, and tokens are redacted in `Debug`.
//! - Serialize as the plain string so resolved trees can be rendered to env files.
//!
//! Invariants:
//! - The default value is the empty secret, never "absent".
//! - Equality compares the exposed values; it exists for tests and idempotency checks.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::scalar::scalar_text;

/// A credential value that must not leak through logging.
#[derive(Clone)]
pub struct Secret(SecretString);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::new(value.into().into()))
    }

    /// Returns the plain value.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl Default for Secret {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Secret(\"\")")
        } else {
            f.write_str("Secret([REDACTED])")
        }
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for Secret {}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.expose().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // YAML may decode an all-digit password as a number or leave it null.
        let text = scalar_text(Option::<serde_yaml::Value>::deserialize(deserializer)?)?;
        Ok(Self::new(text))
    }
}
