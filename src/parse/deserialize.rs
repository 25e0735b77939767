//! Deserialization of classified payloads into document bodies.

use serde_json::Value;

use super::ParseFault;
use crate::document::DocumentBody;
use crate::types::Topic;

/// Deserializes a classified payload into its document body.
///
/// The only strict fields are the discriminant (already vetted by the
/// classifier, parsed with the same rules) and the timestamp; every other
/// field reads leniently into `None`. A failure here is therefore a
/// timestamp fault.
pub fn deserialize_body(topic: Topic, payload: Value) -> Result<DocumentBody, ParseFault> {
    let body = match topic {
        Topic::Sensor => {
            DocumentBody::Sensor(serde_json::from_value(payload).map_err(ParseFault::Timestamp)?)
        }
        Topic::Thermostat => DocumentBody::Thermostat(
            serde_json::from_value(payload).map_err(ParseFault::Timestamp)?,
        ),
        Topic::WaterHeater => DocumentBody::WaterHeater(
            serde_json::from_value(payload).map_err(ParseFault::Timestamp)?,
        ),
        Topic::Raw => {
            DocumentBody::Raw(serde_json::from_value(payload).map_err(ParseFault::Timestamp)?)
        }
    };

    Ok(body)
}
