use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::entities::{Position, VelocityVector};

// Request payload for a manual position update.
#[derive(Debug, Deserialize)]
pub struct UpdatePositionRequest {
    pub lat: f64,
    pub lng: f64,
}

// Position payload returned by the read endpoints.
#[derive(Debug, Serialize)]
pub struct PositionResponse {
    pub lat: f64,
    pub lng: f64,
}

impl From<Position> for PositionResponse {
    fn from(p: Position) -> Self {
        Self { lat: p.lat, lng: p.lng }
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// Per-drone entry of a simulation tick response.
#[derive(Debug, Serialize)]
pub struct DroneMovement {
    pub position: PositionResponse,
    pub vector: VelocityVector,
}

// Response payload for a simulation tick, keyed by drone slug.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub drones: BTreeMap<&'static str, DroneMovement>,
}

// Response payload for a reset, keyed by drone slug.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    #[serde(flatten)]
    pub drones: BTreeMap<&'static str, PositionResponse>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
