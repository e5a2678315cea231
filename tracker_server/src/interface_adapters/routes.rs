use crate::domain::entities::DroneId;
use crate::interface_adapters::handlers::{
    api_not_found, get_position, health, reset_drones, simulate_movement, update_position,
};
use crate::interface_adapters::protocol::UpdatePositionRequest;
use crate::interface_adapters::state::AppState;
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

// Build the HTTP router: JSON API under /api, the map UI for everything else.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let mut api: Router<AppState> = Router::new();
    for drone in DroneId::ALL {
        api = api
            .route(
                &format!("/{}-position", drone.slug()),
                get(move |state: State<AppState>| get_position(state, drone)),
            )
            .route(
                &format!("/update-{}", drone.slug()),
                post(
                    move |state: State<AppState>, payload: Json<UpdatePositionRequest>| {
                        update_position(state, drone, payload)
                    },
                ),
            );
    }
    let api = api
        .route("/simulate-movement", get(simulate_movement))
        .route("/reset-drones", get(reset_drones))
        .fallback(api_not_found);

    let ui = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .fallback_service(ui)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
