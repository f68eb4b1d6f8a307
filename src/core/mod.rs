pub mod distance;
pub mod geocode;

pub use crate::domain::model::{Coordinate, DistanceResult, GeocodeResult};
pub use crate::domain::ports::{ConfigProvider, Geocoder};
pub use crate::utils::error::Result;
