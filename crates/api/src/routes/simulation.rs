//! Route definitions for simulation endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::simulation;
use crate::state::AppState;

/// ```text
/// POST   /simulate                  -> simulate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/simulate", post(simulation::simulate))
}
