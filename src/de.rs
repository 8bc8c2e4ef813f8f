//! Response decoding helpers.
//!
//! serde's derive accepts a JSON array for a struct and fills fields in
//! order, which together with `#[serde(default)]` would turn any array into a
//! response value. Bodies are therefore checked for the expected JSON shape
//! before they are handed to the derived impls.

use serde::de::{DeserializeOwned, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{Error, Result};

/// Decode a body that must be a single JSON object.
pub(crate) fn object<R: DeserializeOwned>(bytes: &[u8]) -> Result<R> {
    let value: Value = serde_json::from_slice(bytes).map_err(Error::Decode)?;
    from_object(value)
}

/// Decode a body that must be a JSON array of objects. `null` decodes as an
/// empty list.
pub(crate) fn list<R: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<R>> {
    match serde_json::from_slice(bytes).map_err(Error::Decode)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.into_iter().map(from_object).collect(),
        other => Err(invalid_type(&other, "a JSON array")),
    }
}

fn from_object<R: DeserializeOwned>(value: Value) -> Result<R> {
    if !value.is_object() {
        return Err(invalid_type(&value, "a JSON object"));
    }
    serde_json::from_value(value).map_err(Error::Decode)
}

fn invalid_type(value: &Value, expected: &str) -> Error {
    let found = match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s.as_str()),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    };
    Error::Decode(<serde_json::Error as serde::de::Error>::invalid_type(
        found, &expected,
    ))
}

/// Deserialize an explicit `null` as the type's default value.
///
/// Use together with `#[serde(default)]` so that both a missing field and a
/// `null` field decode to the zero value:
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// #[serde(default)]
/// struct Document {
///     #[serde(deserialize_with = "crate::de::null_as_default")]
///     pages: Vec<Page>,
/// }
/// ```
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[test]
    fn object_rejects_arrays() {
        let err = object::<Map<String, Value>>(br#"["not", "an", "object"]"#).unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("expected a JSON object"));

        let err = object::<Map<String, Value>>(b"[]").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn object_rejects_null_and_scalars() {
        for body in [&b"null"[..], &b"42"[..], &br#""text""#[..], &b"true"[..]] {
            assert!(object::<Map<String, Value>>(body).unwrap_err().is_decode());
        }
    }

    #[test]
    fn list_accepts_null_as_empty() {
        let items: Vec<Map<String, Value>> = list(b"null").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn list_rejects_non_object_elements() {
        let err = list::<Map<String, Value>>(br#"[{"id": "a"}, ["b"]]"#).unwrap_err();
        assert!(err.is_decode());

        let err = list::<Map<String, Value>>(br#"{"id": "a"}"#).unwrap_err();
        assert!(err.to_string().contains("expected a JSON array"));
    }
}
