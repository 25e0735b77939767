use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Instant at which a device produced its event, normalized to UTC.
///
/// Parsing accepts RFC 3339 and offset-less ISO 8601 date-times; the latter
/// are taken as UTC. Only string values are accepted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventTimestamp(DateTime<Utc>);

#[derive(Debug, Error)]
#[error("{input:?} is not a valid instant")]
pub struct TimestampError {
    input: String,
}

impl EventTimestamp {
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
            return Ok(EventTimestamp(instant.with_timezone(&Utc)));
        }
        // Some firmwares omit the offset entirely; those instants are UTC.
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(EventTimestamp(naive.and_utc()));
        }
        Err(TimestampError {
            input: input.to_string(),
        })
    }

    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for EventTimestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        EventTimestamp(instant)
    }
}

impl fmt::Display for EventTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl Serialize for EventTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for EventTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = String::deserialize(deserializer)?;
        EventTimestamp::parse(&input).map_err(D::Error::custom)
    }
}
