use crate::domain::model::Coordinate;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Resolves free-text place names to a single coordinate.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns the coordinates of the first candidate the provider reports.
    async fn search(&self, query: &str) -> Result<Coordinate>;
}

pub trait ConfigProvider: Send + Sync {
    fn listen_addr(&self) -> &str;
    fn geocoder_endpoint(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
