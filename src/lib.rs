//! Typed document factory for heterogeneous IoT telemetry.
//!
//! `ingress-core` converts one raw JSON telemetry payload into a
//! strongly-typed, validated in-memory document, or signals failure. The
//! pipeline is parse, classify, deserialize. Payloads that are not JSON,
//! carry no recognizable topic, or carry a corrupt timestamp are absorbed
//! into a single logged fault; payloads that merely violate domain rules
//! come back as documents whose `is_valid()` is false, and the caller
//! decides how to react.
//!
//! Each call is a pure, bounded computation over its input text. The only
//! side effect is one error-level log event on the fault path.

pub mod document;
pub mod factory;
pub mod parse;
pub mod types;
