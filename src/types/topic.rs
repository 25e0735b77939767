use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Discriminant selecting which document shape a payload deserializes into.
///
/// The set is closed. `Raw` is an explicit topic, not a catch-all; a payload
/// whose topic matches nothing here fails classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Sensor,
    Thermostat,
    WaterHeater,
    Raw,
}

#[derive(Debug, Error)]
#[error("no document shape matches topic {0:?}")]
pub struct UnknownTopic(pub String);

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Sensor => "sensor",
            Topic::Thermostat => "thermostat",
            Topic::WaterHeater => "waterheater",
            Topic::Raw => "raw",
        }
    }
}

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Device firmwares disagree on casing and on the water heater
        // spelling; normalize here so the classifier and the struct field
        // accept the same set.
        match s.to_ascii_lowercase().as_str() {
            "sensor" => Ok(Topic::Sensor),
            "thermostat" => Ok(Topic::Thermostat),
            "waterheater" | "water_heater" | "water-heater" => Ok(Topic::WaterHeater),
            "raw" => Ok(Topic::Raw),
            _ => Err(UnknownTopic(s.to_string())),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Topic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
