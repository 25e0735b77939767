use ingress_core::parse::{classify, ParseFault};
use ingress_core::types::Topic;
use serde_json::json;

#[test]
fn known_topics_classify() {
    for (wire, expected) in [
        ("sensor", Topic::Sensor),
        ("thermostat", Topic::Thermostat),
        ("waterheater", Topic::WaterHeater),
        ("raw", Topic::Raw),
    ] {
        let payload = json!({"topic": wire, "timestamp": "2024-03-26T18:45:00Z"});
        let topic = classify(&payload).expect("known topic must classify");
        assert_eq!(topic, expected);
    }
}

#[test]
fn classification_is_case_insensitive() {
    let payload = json!({"topic": "Sensor"});
    assert_eq!(classify(&payload).unwrap(), Topic::Sensor);

    let payload = json!({"topic": "THERMOSTAT"});
    assert_eq!(classify(&payload).unwrap(), Topic::Thermostat);
}

#[test]
fn water_heater_spellings_classify() {
    for wire in ["waterheater", "water_heater", "water-heater", "WaterHeater"] {
        let payload = json!({"topic": wire});
        assert_eq!(
            classify(&payload).unwrap(),
            Topic::WaterHeater,
            "spelling {wire:?} must classify",
        );
    }
}

#[test]
fn scalar_payload_is_not_an_object() {
    let fault = classify(&json!(123123123)).unwrap_err();
    assert!(matches!(fault, ParseFault::NotAnObject));
}

#[test]
fn array_payload_is_not_an_object() {
    let fault = classify(&json!([{"topic": "sensor"}])).unwrap_err();
    assert!(matches!(fault, ParseFault::NotAnObject));
}

#[test]
fn null_payload_is_not_an_object() {
    let fault = classify(&json!(null)).unwrap_err();
    assert!(matches!(fault, ParseFault::NotAnObject));
}

#[test]
fn object_without_topic_fails_classification() {
    let fault = classify(&json!({"timestamp": "2024-03-26T18:45:00Z"})).unwrap_err();
    assert!(matches!(fault, ParseFault::MissingTopic));
}

#[test]
fn unknown_topic_fails_classification() {
    let fault = classify(&json!({"topic": "dishwasher"})).unwrap_err();
    match fault {
        ParseFault::UnknownTopic(topic) => assert_eq!(topic, "dishwasher"),
        other => panic!("expected unknown topic fault, got {other:?}"),
    }
}

#[test]
fn non_string_topic_fails_classification() {
    let fault = classify(&json!({"topic": 7})).unwrap_err();
    assert!(matches!(fault, ParseFault::UnknownTopic(_)));
}

#[test]
fn raw_is_not_a_catch_all() {
    // An unknown topic faults instead of degrading to the raw shape.
    let fault = classify(&json!({"topic": "telemetry"})).unwrap_err();
    assert!(matches!(fault, ParseFault::UnknownTopic(_)));
}
