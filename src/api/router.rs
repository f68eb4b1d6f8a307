use axum::routing::{get, post};

use super::endpoints::{get_coordinates, get_distance, method_not_allowed, not_found};
use super::AppState;

pub fn router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/get_coordinates/{city_name}", get(get_coordinates))
        .route("/get_distance", post(get_distance))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}
