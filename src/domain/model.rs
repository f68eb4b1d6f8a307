use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use serde::{Deserialize, Serialize};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks both components against WGS84 bounds. `field` prefixes the
    /// reported field name, e.g. `coordinates1`.
    pub fn validate(&self, field: &str) -> Result<()> {
        validate_range(
            &format!("{field}.latitude"),
            self.latitude,
            MIN_LATITUDE,
            MAX_LATITUDE,
        )?;
        validate_range(
            &format!("{field}.longitude"),
            self.longitude,
            MIN_LONGITUDE,
            MAX_LONGITUDE,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub success: bool,
    #[serde(rename = "distance")]
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GeocodeResult {
    pub fn found(coordinates: Coordinate) -> Self {
        Self {
            success: true,
            coordinates: Some(coordinates),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            coordinates: None,
            message: Some(message.into()),
        }
    }
}
