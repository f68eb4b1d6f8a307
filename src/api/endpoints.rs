use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;

use crate::core::distance::DistanceCalculator;
use crate::core::geocode::GeocodeLookup;
use crate::domain::model::{DistanceResult, GeocodeResult};

use super::types::DistanceRequest;
use super::{error_message, status_for, ApiError};

pub type Result<T> = std::result::Result<T, ApiError>;

pub async fn get_coordinates(
    State(lookup): State<GeocodeLookup>,
    city_name: std::result::Result<Path<String>, PathRejection>,
) -> (StatusCode, Json<GeocodeResult>) {
    let Path(city_name) = match city_name {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("Rejected coordinates path: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(GeocodeResult::failed(error_message(&e))),
            );
        }
    };

    tracing::debug!("GET /get_coordinates/{}", city_name);
    match lookup.resolve(&city_name).await {
        Ok(coordinates) => (StatusCode::OK, Json(GeocodeResult::found(coordinates))),
        Err(e) => (status_for(&e), Json(GeocodeResult::failed(error_message(&e)))),
    }
}

pub async fn get_distance(
    State(calculator): State<DistanceCalculator>,
    body: Bytes,
) -> Result<Json<DistanceResult>> {
    let request = DistanceRequest::parse(&body).map_err(|e| {
        tracing::debug!("Rejected distance request: {:?}", e);
        ApiError::new(StatusCode::BAD_REQUEST, e.message())
    })?;

    Ok(Json(
        calculator.calculate(request.coordinates1, request.coordinates2),
    ))
}

pub async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not Found")
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
