use crate::domain::entities::{DroneId, Position};
use crate::domain::errors::TrackerError;
use crate::interface_adapters::protocol::{
    DroneMovement, ErrorResponse, HealthResponse, PositionResponse, ResetResponse,
    SimulateResponse, SuccessResponse, UpdatePositionRequest,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{
    GetPositionUseCase, ResetDronesUseCase, SimulateMovementUseCase, UpdatePositionUseCase,
};
use axum::{Json, extract::State, http::StatusCode};
use tracing::error;

type HandlerError = (StatusCode, Json<ErrorResponse>);

// Handler for reading one drone's last known position.
pub async fn get_position(
    State(state): State<AppState>,
    drone: DroneId,
) -> Result<Json<PositionResponse>, HandlerError> {
    let use_case = GetPositionUseCase { store: state.store };

    let position = use_case
        .execute(drone)
        .await
        .map_err(|err| map_tracker_error(err, TrackerErrorContext::ReadPosition(drone)))?;

    Ok(Json(position.into()))
}

// Handler for overwriting one drone's position.
pub async fn update_position(
    State(state): State<AppState>,
    drone: DroneId,
    Json(payload): Json<UpdatePositionRequest>,
) -> Result<Json<SuccessResponse>, HandlerError> {
    let use_case = UpdatePositionUseCase {
        store: state.store,
        deck: state.deck,
    };

    use_case
        .execute(drone, Position::new(payload.lat, payload.lng))
        .await
        .map_err(|err| map_tracker_error(err, TrackerErrorContext::UpdatePosition(drone)))?;

    Ok(Json(SuccessResponse { success: true }))
}

// Handler for advancing every drone by one tick.
pub async fn simulate_movement(
    State(state): State<AppState>,
) -> Result<Json<SimulateResponse>, HandlerError> {
    let use_case = SimulateMovementUseCase {
        store: state.store,
        deck: state.deck,
        params: state.flight,
    };

    let ticks = use_case
        .execute()
        .await
        .map_err(|err| map_tracker_error(err, TrackerErrorContext::Simulate))?;

    let drones = ticks
        .into_iter()
        .map(|tick| {
            (
                tick.drone.slug(),
                DroneMovement {
                    position: tick.position.into(),
                    vector: tick.vector,
                },
            )
        })
        .collect();

    Ok(Json(SimulateResponse {
        success: true,
        drones,
    }))
}

// Handler for sending every drone home with zero velocity.
pub async fn reset_drones(
    State(state): State<AppState>,
) -> Result<Json<ResetResponse>, HandlerError> {
    let use_case = ResetDronesUseCase {
        store: state.store,
        deck: state.deck,
    };

    let homes = use_case
        .execute()
        .await
        .map_err(|err| map_tracker_error(err, TrackerErrorContext::Reset))?;

    Ok(Json(ResetResponse {
        success: true,
        drones: homes
            .into_iter()
            .map(|(drone, home)| (drone.slug(), home.into()))
            .collect(),
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Fallback for unknown routes under /api, so they never reach the map UI.
pub async fn api_not_found() -> HandlerError {
    error_response(StatusCode::NOT_FOUND, "unknown API route")
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: impl Into<String>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// Maps domain errors to HTTP responses by endpoint context.
enum TrackerErrorContext {
    ReadPosition(DroneId),
    UpdatePosition(DroneId),
    Simulate,
    Reset,
}

fn map_tracker_error(err: TrackerError, context: TrackerErrorContext) -> HandlerError {
    match context {
        // A drone that was never seeded is a read failure like any other.
        TrackerErrorContext::ReadPosition(drone) => {
            error!(%drone, error = ?err, "error reading drone position");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read {drone} position"),
            )
        }
        TrackerErrorContext::UpdatePosition(drone) => match err {
            TrackerError::NonFiniteInput => error_response(
                StatusCode::BAD_REQUEST,
                "lat and lng must be finite numbers",
            ),
            TrackerError::StorageFailure | TrackerError::PositionNotFound => {
                error!(%drone, error = ?err, "error updating drone position");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to update {drone} position"),
                )
            }
        },
        TrackerErrorContext::Simulate => {
            error!(error = ?err, "error simulating movement");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to simulate movement")
        }
        TrackerErrorContext::Reset => {
            error!(error = ?err, "error resetting drone positions");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to reset drone positions",
            )
        }
    }
}
