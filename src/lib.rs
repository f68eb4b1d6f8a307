pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::NominatimClient;
pub use app::Server;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::{distance::haversine_km, geocode::GeocodeLookup};
pub use domain::model::{Coordinate, DistanceResult, GeocodeResult};
pub use utils::error::{GeoError, Result};
