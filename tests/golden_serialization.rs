use ingress_core::parse::parse_document;
use ingress_core::types::EventDigest;
use serde_json::{json, Value};

#[test]
fn golden_digest_value() {
    // sha256 of the empty input, the canonical fixed point.
    let digest = EventDigest::from_payload(b"");
    assert_eq!(
        digest.as_str(),
        "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn golden_sensor_document_serialization() {
    let text = r#"{"topic":"sensor","timestamp":"2024-03-26T18:45:00Z","value":21.5,"device_id":"s-7"}"#;
    let document = parse_document(text).unwrap();

    let serialized = serde_json::to_value(&document).unwrap();
    assert_eq!(
        serialized,
        json!({
            "id": "sha256:9d72b118d86714e33e36cca1eea551ff328c8164ee19243d01a52ee21b781fad",
            "topic": "sensor",
            "timestamp": "2024-03-26T18:45:00+00:00",
            "value": 21.5,
            "device_id": "s-7",
        }),
    );
}

#[test]
fn body_fields_flatten_beside_the_id() {
    // No nested "body" object in the persisted shape.
    let text = r#"{"topic":"raw","timestamp":"2024-03-26T18:45:00Z","data":{"k":"v"}}"#;
    let document = parse_document(text).unwrap();

    let serialized = serde_json::to_value(&document).unwrap();
    let object = serialized.as_object().unwrap();
    assert!(object.get("body").is_none());
    assert!(object.contains_key("id"));
    assert!(object.contains_key("topic"));
    assert!(object.contains_key("data"));
}

#[test]
fn topic_and_typed_fields_serialize_lowercase() {
    let text = r#"{"topic":"THERMOSTAT","timestamp":"2024-03-26T18:45:00Z","setpoint":70,"mode":"HEAT"}"#;
    let document = parse_document(text).unwrap();

    let serialized = serde_json::to_value(&document).unwrap();
    assert_eq!(serialized["topic"], Value::from("thermostat"));
    assert_eq!(serialized["mode"], Value::from("heat"));
}

#[test]
fn absent_soft_fields_serialize_as_null() {
    let text = r#"{"topic":"waterheater","timestamp":"2024-03-26T18:45:00Z"}"#;
    let document = parse_document(text).unwrap();
    assert!(!document.is_valid());

    let serialized = serde_json::to_value(&document).unwrap();
    assert_eq!(serialized["state"], Value::Null);
}

#[test]
fn timestamp_serializes_rfc3339() {
    let text = r#"{"topic":"sensor","timestamp":"2024-03-26T20:45:00+02:00","value":1.0}"#;
    let document = parse_document(text).unwrap();

    let serialized = serde_json::to_value(&document).unwrap();
    // Normalized to UTC on ingest.
    assert_eq!(serialized["timestamp"], Value::from("2024-03-26T18:45:00+00:00"));
}
