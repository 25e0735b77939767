use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content-hash identity of a raw payload.
///
/// Byte-identical payloads digest to the same value, so re-delivered events
/// produce documents with the same id and downstream writes stay idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventDigest(String);

impl EventDigest {
    pub fn from_payload(payload: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(payload);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        EventDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
