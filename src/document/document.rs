use serde::Serialize;

use super::variants::{RawDocument, SensorDocument, ThermostatDocument, WaterHeaterDocument};
use crate::types::{EventDigest, EventTimestamp, Topic};

/// One parsed telemetry event.
///
/// Construction goes through the parse pipeline only: a document is never
/// built from text that failed JSON parsing, topic classification, or
/// timestamp parsing. The id is the content hash of the raw payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryDocument {
    pub id: EventDigest,
    #[serde(flatten)]
    pub body: DocumentBody,
}

/// Closed set of document shapes, one per device topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentBody {
    Sensor(SensorDocument),
    Thermostat(ThermostatDocument),
    WaterHeater(WaterHeaterDocument),
    Raw(RawDocument),
}

impl TelemetryDocument {
    /// Domain validity of the document.
    ///
    /// Computed from the body's own required fields; independent of the fact
    /// that parsing succeeded, and always computable.
    pub fn is_valid(&self) -> bool {
        self.body.is_valid()
    }

    pub fn topic(&self) -> Topic {
        self.body.topic()
    }

    pub fn timestamp(&self) -> EventTimestamp {
        self.body.timestamp()
    }
}

impl DocumentBody {
    pub fn is_valid(&self) -> bool {
        match self {
            DocumentBody::Sensor(doc) => doc.is_valid(),
            DocumentBody::Thermostat(doc) => doc.is_valid(),
            DocumentBody::WaterHeater(doc) => doc.is_valid(),
            DocumentBody::Raw(doc) => doc.is_valid(),
        }
    }

    pub fn topic(&self) -> Topic {
        match self {
            DocumentBody::Sensor(doc) => doc.topic,
            DocumentBody::Thermostat(doc) => doc.topic,
            DocumentBody::WaterHeater(doc) => doc.topic,
            DocumentBody::Raw(doc) => doc.topic,
        }
    }

    pub fn timestamp(&self) -> EventTimestamp {
        match self {
            DocumentBody::Sensor(doc) => doc.timestamp,
            DocumentBody::Thermostat(doc) => doc.timestamp,
            DocumentBody::WaterHeater(doc) => doc.timestamp,
            DocumentBody::Raw(doc) => doc.timestamp,
        }
    }
}
