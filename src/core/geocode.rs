use crate::domain::model::Coordinate;
use crate::domain::ports::Geocoder;
use crate::utils::error::{GeoError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::sync::Arc;

/// Place-name lookup on top of a [`Geocoder`] port.
#[derive(Clone)]
pub struct GeocodeLookup {
    geocoder: Arc<dyn Geocoder>,
}

impl GeocodeLookup {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    pub async fn resolve(&self, place: &str) -> Result<Coordinate> {
        validate_non_empty_string("city_name", place)?;
        let query = place.trim();

        tracing::debug!("Resolving coordinates for '{}'", query);
        let coordinates = match self.geocoder.search(query).await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                tracing::warn!("Geocoding '{}' failed: {}", query, e);
                return Err(e);
            }
        };

        coordinates
            .validate("coordinates")
            .map_err(|e| GeoError::decode(format!("provider returned {e}")))?;

        tracing::info!(
            "Resolved '{}' to ({}, {})",
            query,
            coordinates.latitude,
            coordinates.longitude
        );
        Ok(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedGeocoder {
        answer: fn(&str) -> Result<Coordinate>,
        queries: Mutex<Vec<String>>,
    }

    impl FixedGeocoder {
        fn new(answer: fn(&str) -> Result<Coordinate>) -> Arc<Self> {
            Arc::new(Self {
                answer,
                queries: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Geocoder for FixedGeocoder {
        async fn search(&self, query: &str) -> Result<Coordinate> {
            self.queries.lock().unwrap().push(query.to_string());
            (self.answer)(query)
        }
    }

    #[tokio::test]
    async fn test_resolve_trims_query() {
        let geocoder = FixedGeocoder::new(|_| Ok(Coordinate::new(-13.5170887, -71.9785356)));
        let lookup = GeocodeLookup::new(geocoder.clone());

        let coordinates = lookup.resolve("  cusco ").await.unwrap();
        assert_eq!(coordinates, Coordinate::new(-13.5170887, -71.9785356));
        assert_eq!(*geocoder.queries.lock().unwrap(), vec!["cusco".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_name_never_reaches_provider() {
        let geocoder = FixedGeocoder::new(|_| Ok(Coordinate::new(0.0, 0.0)));
        let lookup = GeocodeLookup::new(geocoder.clone());

        let err = lookup.resolve("   ").await.unwrap_err();
        assert!(matches!(err, GeoError::InvalidValueError { .. }));
        assert!(geocoder.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_answer_is_decode_error() {
        let lookup = GeocodeLookup::new(FixedGeocoder::new(|_| Ok(Coordinate::new(123.0, 0.0))));
        let err = lookup.resolve("somewhere").await.unwrap_err();
        assert!(matches!(err, GeoError::DecodeError { .. }));
    }

    #[tokio::test]
    async fn test_provider_error_passes_through() {
        let lookup = GeocodeLookup::new(FixedGeocoder::new(|q| {
            Err(GeoError::NoMatchError {
                query: q.to_string(),
            })
        }));
        let err = lookup.resolve("atlantis").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
