//! Great-circle distance on a spherical Earth.

use crate::domain::model::{Coordinate, DistanceResult};

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between `from` and `to` in kilometres.
///
/// No range checks are performed here; callers validate input first.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (dlon / 2.0).sin().powi(2);
    // Round-off can push `a` just past 1 for antipodal pairs.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DistanceCalculator;

impl DistanceCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, from: Coordinate, to: Coordinate) -> DistanceResult {
        let distance_km = haversine_km(from, to);
        tracing::debug!(
            "Distance from ({}, {}) to ({}, {}) = {:.3} km",
            from.latitude,
            from.longitude,
            to.latitude,
            to.longitude,
            distance_km
        );
        DistanceResult {
            success: true,
            distance_km,
        }
    }
}
