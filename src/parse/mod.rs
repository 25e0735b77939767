//! Parse, classify, deserialize: the pipeline over a single payload.

pub mod classify;
pub mod deserialize;

pub use classify::classify;
pub use deserialize::deserialize_body;

use serde_json::Value;
use thiserror::Error;

use crate::document::TelemetryDocument;
use crate::types::EventDigest;

/// Why a payload could not become a document.
///
/// Every variant is absorbed by the factory into one logged error and an
/// absent result. Domain invalidity is not a fault; it travels on the
/// returned document as `is_valid() == false`.
#[derive(Debug, Error)]
pub enum ParseFault {
    /// Input text is not well-formed JSON.
    #[error("payload is not well-formed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Valid JSON, but not the object shape every event shares.
    #[error("payload is not a JSON object")]
    NotAnObject,
    #[error("payload carries no topic field")]
    MissingTopic,
    #[error("no document shape matches topic {0:?}")]
    UnknownTopic(String),
    /// Valid JSON whose timestamp is absent or not a parseable instant.
    /// Treated as input corruption, not as a domain-invalid record.
    #[error("timestamp is missing or malformed: {0}")]
    Timestamp(#[source] serde_json::Error),
}

/// Runs the full pipeline over one payload.
pub fn parse_document(text: &str) -> Result<TelemetryDocument, ParseFault> {
    let payload: Value = serde_json::from_str(text)?;
    let topic = classify(&payload)?;
    let body = deserialize_body(topic, payload)?;

    Ok(TelemetryDocument {
        id: EventDigest::from_payload(text.as_bytes()),
        body,
    })
}
