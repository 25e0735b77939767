//! Topic classification over parsed payloads.

use serde_json::Value;

use super::ParseFault;
use crate::types::Topic;

/// Selects the document shape a payload deserializes into.
///
/// The payload must be a JSON object carrying a string-valued `topic` field
/// that names a known shape. Anything else is a structural fault; no
/// document is ever built from an unclassifiable payload.
pub fn classify(payload: &Value) -> Result<Topic, ParseFault> {
    let object = payload.as_object().ok_or(ParseFault::NotAnObject)?;

    match object.get("topic") {
        None => Err(ParseFault::MissingTopic),
        Some(Value::String(topic)) => topic
            .parse()
            .map_err(|_| ParseFault::UnknownTopic(topic.clone())),
        Some(other) => Err(ParseFault::UnknownTopic(other.to_string())),
    }
}
