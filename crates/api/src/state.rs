use std::sync::Arc;

use cellsim_core::simulation::Simulator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Holds nothing mutable: each request owns its own
/// child processes and buffers.
#[derive(Clone)]
pub struct AppState {
    /// Command template and execution pipeline.
    pub simulator: Arc<Simulator>,
}
