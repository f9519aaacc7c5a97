//! Forgiving field decoders for row records.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings stay strings, numbers and booleans are stringified, anything
/// else (null, arrays, objects) becomes empty.
pub(super) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Integers, floats (truncated) and numeric strings; anything else is `None`.
pub(super) fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(truncate)),
        Value::String(s) => parse_numeric(s.trim()),
        _ => None,
    })
}

fn parse_numeric(s: &str) -> Option<i64> {
    s.parse::<i64>()
        .ok()
        .or_else(|| {
            s.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(truncate)
        })
}

fn truncate(value: f64) -> i64 {
    // `as` saturates at the i64 bounds.
    value.trunc() as i64
}
