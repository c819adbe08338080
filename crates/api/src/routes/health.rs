use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the configured simulator resolves to an executable, searching
    /// `PATH` for bare names.
    pub simulator_available: bool,
}

/// GET /health -- returns service health and simulator availability.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let simulator_available = state.simulator.template().resolve_simulator().is_some();

    let status = if simulator_available { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        simulator_available,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
