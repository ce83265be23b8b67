use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq)
)]
pub struct MapPoint {
    pub lng: f64,
    pub lat: f64,
}

/// The `location` is derived from `west` and `north`.
/// It is always written but ignored when reading.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq)
)]
pub struct MapBounds {
    pub east: f64,
    pub west: f64,
    pub south: f64,
    pub north: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<MapPoint>,
}

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
mod json;

#[cfg(feature = "entity-conversions")]
pub use json::SerdeJsonFormatter;
