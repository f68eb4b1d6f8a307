pub mod endpoints;
pub mod router;
pub mod types;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use crate::core::distance::DistanceCalculator;
use crate::core::geocode::GeocodeLookup;
use crate::domain::ports::Geocoder;
use crate::utils::error::GeoError;

/// Per-server handler dependencies, built once and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub lookup: GeocodeLookup,
    pub calculator: DistanceCalculator,
}

impl AppState {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            lookup: GeocodeLookup::new(geocoder),
            calculator: DistanceCalculator::new(),
        }
    }
}

impl axum::extract::FromRef<AppState> for GeocodeLookup {
    fn from_ref(input: &AppState) -> Self {
        input.lookup.clone()
    }
}

impl axum::extract::FromRef<AppState> for DistanceCalculator {
    fn from_ref(input: &AppState) -> Self {
        input.calculator
    }
}

/// Failure body paired with the status it is sent with.
pub struct ApiError {
    pub status: StatusCode,
    pub body: types::ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: types::ErrorResponse {
                success: false,
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn status_for(error: &GeoError) -> StatusCode {
    match error {
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        GeoError::TimeoutError { .. } => StatusCode::GATEWAY_TIMEOUT,
        GeoError::InvalidValueError { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    }
}

pub fn error_message(error: &impl std::fmt::Display) -> String {
    format!("An error occurred: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                GeoError::UpstreamStatusError {
                    status: 500,
                    url: "u".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                GeoError::NoMatchError {
                    query: "q".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
            (GeoError::decode("bad"), StatusCode::BAD_GATEWAY),
            (GeoError::TimeoutError {
                    timeout: std::time::Duration::from_secs(10),
                }, StatusCode::GATEWAY_TIMEOUT),
            (
                GeoError::InvalidValueError {
                    field: "city_name".to_string(),
                    value: " ".to_string(),
                    reason: "blank".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(status_for(&error), expected, "{error}");
        }
    }

    #[test]
    fn test_error_message_prefix() {
        let err = GeoError::NoMatchError {
            query: "atlantis".to_string(),
        };
        assert_eq!(
            error_message(&err),
            "An error occurred: No results found for 'atlantis'"
        );
    }

    #[test]
    fn test_api_error_body() {
        let err = ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
        assert_eq!(err.status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(!err.body.success);
        assert_eq!(err.body.message, "Method Not Allowed");
    }
}
