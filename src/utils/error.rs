use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Geocoding request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Geocoding request timed out after {timeout:?}")]
    TimeoutError { timeout: Duration },

    #[error("{status} error from geocoding service for url: {url}")]
    UpstreamStatusError { status: u16, url: String },

    #[error("No results found for '{query}'")]
    NoMatchError { query: String },

    #[error("Malformed geocoding response: {message}")]
    DecodeError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GeoError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
        }
    }

    /// True when the upstream answered but had nothing usable for the query.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UpstreamStatusError { .. } | Self::NoMatchError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
