pub mod document;
pub mod lenient;
pub mod variants;

pub use document::{DocumentBody, TelemetryDocument};
pub use variants::{
    RawDocument, SensorDocument, ThermostatDocument, ThermostatMode, UnknownMode, UnknownState,
    WaterHeaterDocument, WaterHeaterState,
};
