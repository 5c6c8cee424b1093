//! Process environment access.
//!
//! Responsibilities:
//! - Read process environment variables with empty/whitespace filtering.
//! - Expose the process environment as an `OverrideSource`.
//! - Answer whether `.env` overlays are disabled.
//!
//! Does NOT handle:
//! - Mapping variables onto settings fields (see overrides.rs).
//! - Reading `.env` files (see builder.rs).
//!
//! Invariants:
//! - The process environment is only ever read, never mutated.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use super::overrides::OverrideSource;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Check if dotenv loading is disabled via the `DOTENV_DISABLED` variable.
pub(crate) fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none("DOTENV_DISABLED").as_deref(),
        Some("true") | Some("1")
    )
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl OverrideSource for ProcessEnv {
    fn get(&self, var: &str) -> Option<String> {
        env_var_or_none(var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_ERP_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none(), "Empty string env var should return None");
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(
                env_var_or_none(key1).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        let key2 = "_ERP_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(
                env_var_or_none(key2),
                Some("test-value".to_string()),
                "Non-empty env var should return Some(trimmed value)"
            );
        });
    }

    #[test]
    #[serial]
    fn test_dotenv_disabled_values() {
        temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
            assert!(dotenv_disabled());
        });
        temp_env::with_vars([("DOTENV_DISABLED", Some("true"))], || {
            assert!(dotenv_disabled());
        });
        temp_env::with_vars([("DOTENV_DISABLED", Some("no"))], || {
            assert!(!dotenv_disabled());
        });
        temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], || {
            assert!(!dotenv_disabled());
        });
    }

    #[test]
    #[serial]
    fn test_process_env_source_reads_trimmed_value() {
        temp_env::with_vars([("_ERP_TEST_SOURCE", Some(" db.local "))], || {
            assert_eq!(ProcessEnv.get("_ERP_TEST_SOURCE").as_deref(), Some("db.local"));
        });
    }
}
