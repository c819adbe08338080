pub mod health;
pub mod simulation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /simulate                                        run the simulator (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(simulation::router())
}
