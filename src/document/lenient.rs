//! Tolerant field readers for document bodies.
//!
//! Every field other than the topic discriminant and the timestamp is soft:
//! a missing or type-mismatched value becomes `None` and is surfaced through
//! `is_valid()`, never as a parse fault. These helpers implement that rule
//! for `#[serde(deserialize_with = ...)]` positions.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    // Empty strings read as absent.
    Ok(value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_owned))
}

/// Reads a string field through its `FromStr` vocabulary; anything outside
/// the vocabulary (or not a string at all) is `None`.
pub(crate) fn parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.parse().ok()))
}

pub(crate) fn blob<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(other),
    })
}
