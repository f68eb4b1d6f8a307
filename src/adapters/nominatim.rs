//! Reqwest-backed Nominatim free-text search adapter.

use crate::domain::model::Coordinate;
use crate::domain::ports::Geocoder;
use crate::utils::error::{GeoError, Result};
use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "city-distance/0.1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Nominatim reports coordinates as strings; some mirrors send numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DegreesDto {
    Text(String),
    Number(f64),
}

impl DegreesDto {
    fn to_degrees(&self, field: &str) -> Result<f64> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|e| GeoError::decode(format!("{field} '{text}' is not a number: {e}"))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlaceDto {
    lat: Option<DegreesDto>,
    lon: Option<DegreesDto>,
}

impl PlaceDto {
    fn into_coordinate(self) -> Result<Coordinate> {
        let lat = self
            .lat
            .ok_or_else(|| GeoError::decode("first match has no 'lat'"))?;
        let lon = self
            .lon
            .ok_or_else(|| GeoError::decode("first match has no 'lon'"))?;
        Ok(Coordinate::new(
            lat.to_degrees("lat")?,
            lon.to_degrees("lon")?,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    endpoint: Url,
    user_agent: String,
    timeout: Duration,
}

impl NominatimClient {
    pub fn new(endpoint: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| GeoError::InvalidValueError {
            field: "geocoder.endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            user_agent: user_agent.to_string(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn map_transport_error(&self, error: reqwest::Error) -> GeoError {
        if error.is_timeout() {
            GeoError::TimeoutError {
                timeout: self.timeout,
            }
        } else {
            GeoError::ApiError(error)
        }
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn search(&self, query: &str) -> Result<Coordinate> {
        tracing::debug!("Making geocoding request to: {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::USER_AGENT, self.user_agent.as_str())
            .header(header::ACCEPT, "application/json")
            .query(&[("q", query), ("format", "json")])
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        tracing::debug!("Geocoding response status: {}", status);
        if !status.is_success() {
            return Err(GeoError::UpstreamStatusError {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let places: Vec<PlaceDto> = serde_json::from_slice(&body)
            .map_err(|e| GeoError::decode(format!("expected a list of matches: {e}")))?;

        match places.into_iter().next() {
            Some(place) => place.into_coordinate(),
            None => Err(GeoError::NoMatchError {
                query: query.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> NominatimClient {
        NominatimClient::new(
            &server.url("/search"),
            DEFAULT_USER_AGENT,
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_first_match_is_used() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("q", "lima,peru")
                .query_param("format", "json")
                .header("user-agent", DEFAULT_USER_AGENT);
            then.status(200).json_body(serde_json::json!([
                {"place_id": 1, "lat": "-12.0621065", "lon": "-77.0365256", "display_name": "Lima"},
                {"place_id": 2, "lat": "-12.5", "lon": "-76.8", "display_name": "Lima Region"}
            ]));
        });

        let coordinates = client_for(&server).search("lima,peru").await.unwrap();

        mock.assert();
        assert_eq!(coordinates, Coordinate::new(-12.0621065, -77.0365256));
    }

    #[tokio::test]
    async fn test_numeric_coordinates_are_accepted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .json_body(serde_json::json!([{"lat": -13.5170887, "lon": -71.9785356}]));
        });

        let coordinates = client_for(&server).search("cusco").await.unwrap();
        assert_eq!(coordinates, Coordinate::new(-13.5170887, -71.9785356));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(503);
        });

        let err = client_for(&server).search("quito").await.unwrap_err();
        match err {
            GeoError::UpstreamStatusError { status, url } => {
                assert_eq!(status, 503);
                assert!(url.contains("/search"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_list_is_no_match() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(serde_json::json!([]));
        });

        let err = client_for(&server).search("atlantis").await.unwrap_err();
        assert!(matches!(err, GeoError::NoMatchError { ref query } if query == "atlantis"));
    }

    #[tokio::test]
    async fn test_malformed_payloads_are_decode_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search").query_param("q", "object");
            then.status(200).json_body(serde_json::json!({"error": "nope"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/search").query_param("q", "missing");
            then.status(200).json_body(serde_json::json!([{"lat": "1.0"}]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/search").query_param("q", "garbage");
            then.status(200).json_body(serde_json::json!([{"lat": "north", "lon": "2"}]));
        });

        let client = client_for(&server);
        for query in ["object", "missing", "garbage"] {
            let err = client.search(query).await.unwrap_err();
            assert!(
                matches!(err, GeoError::DecodeError { .. }),
                "{query}: {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .json_body(serde_json::json!([]));
        });

        let client = NominatimClient::new(
            &server.url("/search"),
            DEFAULT_USER_AGENT,
            Duration::from_millis(200),
        )
        .unwrap();

        let err = client.search("slow").await.unwrap_err();
        assert!(
            matches!(err, GeoError::TimeoutError { timeout } if timeout == Duration::from_millis(200)),
            "{err:?}"
        );
        assert_eq!(err.to_string(), "Geocoding request timed out after 200ms");
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let result = NominatimClient::new("not a url", DEFAULT_USER_AGENT, Duration::from_secs(1));
        assert!(matches!(result, Err(GeoError::InvalidValueError { .. })));
    }
}
