use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Read a JSON scalar as display text.
///
/// The API is loose about scalar types (`"Port": 80` next to
/// `"Name": "80"`), so strings, numbers and booleans are all accepted.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string, number or boolean, found {other}"
        ))),
    }
}
