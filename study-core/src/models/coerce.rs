//! Lenient field decoding for model-authored JSON.
//!
//! Models regularly emit `null`, numbers-as-strings or the wrong scalar type. These helpers
//! coerce such values to a usable default instead of rejecting the whole object.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a JSON scalar as text. `null`, arrays and objects become the empty string.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Read a non-negative count from a number or numeric string, falling back to zero.
pub fn count_of(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(|v| v.min(u32::MAX as u64) as u32)
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f.round() as u32))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<f64>().map_or(0, |f| {
            if f > 0.0 {
                f.round() as u32
            } else {
                0
            }
        }),
        _ => 0,
    }
}

/// Keep only the textual entries of a JSON array; anything else yields an empty list.
pub fn text_list_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(text_of)
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|v| text_of(&v))
}

pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Value::deserialize(deserializer).map(|v| count_of(&v))
}

pub fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Value::deserialize(deserializer).map(|v| text_list_of(&v))
}

/// Decode a list of objects, treating `null` or a non-array as empty.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// Decode a nested object, treating `null` or any non-object as its default.
pub fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        item @ Value::Object(_) => serde_json::from_value(item).map_err(serde::de::Error::custom),
        _ => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn count_accepts_numbers_and_numeric_strings() {
        assert_eq!(count_of(&json!(4)), 4);
        assert_eq!(count_of(&json!(2.6)), 3);
        assert_eq!(count_of(&json!(" 7 ")), 7);
        assert_eq!(count_of(&json!("often")), 0);
        assert_eq!(count_of(&json!(-3)), 0);
        assert_eq!(count_of(&Value::Null), 0);
    }

    #[test]
    fn text_flattens_scalars() {
        assert_eq!(text_of(&json!("hi")), "hi");
        assert_eq!(text_of(&json!(12)), "12");
        assert_eq!(text_of(&Value::Null), "");
        assert_eq!(text_of(&json!({"a": 1})), "");
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    #[serde(default)]
    struct Wrapper {
        #[serde(deserialize_with = "object")]
        inner: Inner,
        #[serde(deserialize_with = "list")]
        items: Vec<Inner>,
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    #[serde(default)]
    struct Inner {
        name: String,
    }

    #[test]
    fn object_and_list_treat_null_as_empty() {
        let decoded: Wrapper =
            serde_json::from_value(json!({"inner": null, "items": null})).unwrap();
        assert_eq!(decoded, Wrapper::default());

        let decoded: Wrapper =
            serde_json::from_value(json!({"inner": "oops", "items": [{"name": "a"}, 3]})).unwrap();
        assert_eq!(decoded.inner, Inner::default());
        assert_eq!(decoded.items, vec![Inner { name: "a".into() }]);
    }

    #[test]
    fn text_list_drops_non_text_entries() {
        assert_eq!(
            text_list_of(&json!(["a", null, 3, {"x": 1}, ""])),
            vec!["a".to_string(), "3".to_string()]
        );
        assert_eq!(text_list_of(&json!("single")), vec!["single".to_string()]);
        assert!(text_list_of(&Value::Null).is_empty());
    }
}
