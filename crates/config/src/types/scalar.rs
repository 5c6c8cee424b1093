//! Lenient text decoding for settings leaves.
//!
//! YAML resolves plain scalars such as `1`, `1.0` or `true` to numbers and
//! booleans. Text leaves accept any scalar and keep its textual form, so a
//! well-formed document never fails to decode because a name or version
//! happens to look numeric.

use serde::de::{Deserialize, Deserializer, Error};
use serde_yaml::Value;

/// Text form of a scalar value. Null and absence become the empty string.
pub(crate) fn scalar_text<E: Error>(value: Option<Value>) -> Result<String, E> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(_) => Err(E::custom("expected a scalar text value")),
    }
}

/// `deserialize_with` target for `String` leaves.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_text(Option::<Value>::deserialize(deserializer)?)
}

/// `deserialize_with` target for `Vec<String>` leaves. Null decodes as an empty list.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|item| scalar_text(Some(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "text")]
        name: String,
        #[serde(default, deserialize_with = "text_list")]
        items: Vec<String>,
    }

    #[test]
    fn test_numbers_and_bools_keep_textual_form() {
        let holder: Holder =
            serde_yaml::from_str("name: 1.0\nitems: [1, true, x, 2.5]\n").unwrap();
        assert_eq!(holder.name, "1.0");
        assert_eq!(holder.items, vec!["1", "true", "x", "2.5"]);
    }

    #[test]
    fn test_null_and_missing_are_empty() {
        let holder: Holder = serde_yaml::from_str("name:\nitems:\n").unwrap();
        assert_eq!(holder.name, "");
        assert!(holder.items.is_empty());

        let holder: Holder = serde_yaml::from_str("{}").unwrap();
        assert_eq!(holder.name, "");
    }

    #[test]
    fn test_nested_values_are_rejected() {
        let result: Result<Holder, _> = serde_yaml::from_str("name: {a: 1}\n");
        assert!(result.is_err());
    }
}
