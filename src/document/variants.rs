use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::lenient;
use crate::types::{EventTimestamp, Topic};

/// Point reading from a generic sensor.
///
/// Required for validity: `value`. `device_id` is informational and carried
/// through when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorDocument {
    pub topic: Topic,
    pub timestamp: EventTimestamp,
    #[serde(default, deserialize_with = "lenient::number")]
    pub value: Option<f64>,
    #[serde(default, alias = "deviceId", deserialize_with = "lenient::string")]
    pub device_id: Option<String>,
}

impl SensorDocument {
    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }
}

/// Operating mode reported by a thermostat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermostatMode {
    Off,
    Heat,
    Cool,
    Auto,
}

#[derive(Debug, Error)]
#[error("unrecognized thermostat mode {0:?}")]
pub struct UnknownMode(pub String);

impl ThermostatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThermostatMode::Off => "off",
            ThermostatMode::Heat => "heat",
            ThermostatMode::Cool => "cool",
            ThermostatMode::Auto => "auto",
        }
    }
}

impl FromStr for ThermostatMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(ThermostatMode::Off),
            "heat" => Ok(ThermostatMode::Heat),
            "cool" => Ok(ThermostatMode::Cool),
            "auto" => Ok(ThermostatMode::Auto),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for ThermostatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Setpoint/mode report from a thermostat.
///
/// Required for validity: `setpoint` and `mode`. An out-of-vocabulary mode
/// string reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatDocument {
    pub topic: Topic,
    pub timestamp: EventTimestamp,
    #[serde(default, deserialize_with = "lenient::number")]
    pub setpoint: Option<f64>,
    #[serde(default, deserialize_with = "lenient::parsed")]
    pub mode: Option<ThermostatMode>,
    #[serde(default, alias = "deviceId", deserialize_with = "lenient::string")]
    pub device_id: Option<String>,
}

impl ThermostatDocument {
    pub fn is_valid(&self) -> bool {
        self.setpoint.is_some() && self.mode.is_some()
    }
}

/// Heating state reported by a water heater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterHeaterState {
    Off,
    Standby,
    Heating,
}

#[derive(Debug, Error)]
#[error("unrecognized water heater state {0:?}")]
pub struct UnknownState(pub String);

impl WaterHeaterState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterHeaterState::Off => "off",
            WaterHeaterState::Standby => "standby",
            WaterHeaterState::Heating => "heating",
        }
    }
}

impl FromStr for WaterHeaterState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(WaterHeaterState::Off),
            "standby" => Ok(WaterHeaterState::Standby),
            "heating" => Ok(WaterHeaterState::Heating),
            _ => Err(UnknownState(s.to_string())),
        }
    }
}

impl fmt::Display for WaterHeaterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State report from a water heater.
///
/// Required for validity: `state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterHeaterDocument {
    pub topic: Topic,
    pub timestamp: EventTimestamp,
    #[serde(default, deserialize_with = "lenient::parsed")]
    pub state: Option<WaterHeaterState>,
    #[serde(default, alias = "deviceId", deserialize_with = "lenient::string")]
    pub device_id: Option<String>,
}

impl WaterHeaterDocument {
    pub fn is_valid(&self) -> bool {
        self.state.is_some()
    }
}

/// Event from a device with no dedicated shape.
///
/// Required for validity: `data`, any non-null JSON value, carried through
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub topic: Topic,
    pub timestamp: EventTimestamp,
    #[serde(default, deserialize_with = "lenient::blob")]
    pub data: Option<Value>,
    #[serde(default, alias = "deviceId", deserialize_with = "lenient::string")]
    pub device_id: Option<String>,
}

impl RawDocument {
    pub fn is_valid(&self) -> bool {
        self.data.is_some()
    }
}
