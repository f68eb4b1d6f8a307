use crate::domain::model::Coordinate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MISSING_COORDINATES_MESSAGE: &str =
    "Missing coordinates1 or coordinates2 in the request body";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceRequest {
    pub coordinates1: Coordinate,
    pub coordinates2: Coordinate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DistanceRequestError {
    MissingCoordinates,
    Malformed(String),
}

impl DistanceRequestError {
    pub fn message(&self) -> String {
        match self {
            Self::MissingCoordinates => MISSING_COORDINATES_MESSAGE.to_string(),
            Self::Malformed(reason) => format!("An error occurred: {reason}"),
        }
    }
}

impl DistanceRequest {
    /// Parses a raw request body, checking key presence before shape.
    pub fn parse(body: &[u8]) -> Result<Self, DistanceRequestError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| DistanceRequestError::Malformed(format!("invalid JSON body: {e}")))?;
        let Value::Object(fields) = value else {
            return Err(DistanceRequestError::Malformed(
                "request body must be a JSON object".to_string(),
            ));
        };

        let (Some(first), Some(second)) = (fields.get("coordinates1"), fields.get("coordinates2"))
        else {
            return Err(DistanceRequestError::MissingCoordinates);
        };

        Ok(Self {
            coordinates1: parse_coordinate("coordinates1", first)?,
            coordinates2: parse_coordinate("coordinates2", second)?,
        })
    }
}

fn parse_coordinate(field: &str, value: &Value) -> Result<Coordinate, DistanceRequestError> {
    let coordinate = Coordinate::deserialize(value)
        .map_err(|e| DistanceRequestError::Malformed(format!("invalid {field}: {e}")))?;
    coordinate
        .validate(field)
        .map_err(|e| DistanceRequestError::Malformed(e.to_string()))?;
    Ok(coordinate)
}
