//! Public entry point: text in, document or absent out.

pub mod logging;

pub use logging::{FaultLogger, TracingFaultLogger};

use crate::document::TelemetryDocument;
use crate::parse;

/// Builds telemetry documents from raw payload text.
///
/// Stateless apart from the injected logging capability, so `create` is safe
/// to call concurrently; nothing is shared between calls.
pub struct DocumentFactory<L> {
    logger: L,
}

impl Default for DocumentFactory<TracingFaultLogger> {
    fn default() -> Self {
        Self {
            logger: TracingFaultLogger,
        }
    }
}

impl<L> DocumentFactory<L>
where
    L: FaultLogger,
{
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Creates a document from one payload.
    ///
    /// Exactly one of two things happens per call: a document comes back
    /// (its `is_valid()` verdict may be either way), or the fault is logged
    /// once at error level and the result is absent. Domain-invalid
    /// documents are returned, not logged; reacting to them is the caller's
    /// decision.
    pub fn create(&self, text: &str) -> Option<TelemetryDocument> {
        match parse::parse_document(text) {
            Ok(document) => Some(document),
            Err(fault) => {
                self.logger.error(&fault);
                None
            }
        }
    }
}
