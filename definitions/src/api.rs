use serde::{Deserialize, Serialize};

use crate::SensorReading;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The body returned after generating a new reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateResponse {
    pub status: ResponseStatus,
    pub data: SensorReading,
}

impl SimulateResponse {
    pub fn success(data: SensorReading) -> SimulateResponse {
        SimulateResponse { status: ResponseStatus::Success, data }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> ErrorResponse {
        ErrorResponse { status: ResponseStatus::Error, error: error.into() }
    }
}
