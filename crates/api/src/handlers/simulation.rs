//! Handler for the `simulate` operation.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use cellsim_core::simulation::request::SimulationRequest;
use cellsim_core::simulation::result::ExecutionResult;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /simulate`.
#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub model_reference: String,
    pub output_path: String,
}

/// Wire form of an [`ExecutionResult`].
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    /// Command line that was attempted.
    pub command: String,
    /// Exit code, or the OS error code when the simulator could not start.
    pub exit_status: i32,
    pub standard_output: String,
    pub standard_error: String,
    pub working_directory: String,
    /// `null` when execution never started.
    pub resolved_output_path: Option<String>,
    /// `completed` or `spawn_failed`.
    pub state: &'static str,
}

impl From<ExecutionResult> for SimulationResponse {
    fn from(result: ExecutionResult) -> Self {
        Self {
            exit_status: result.exit_status(),
            standard_output: result.standard_output().to_string(),
            standard_error: result.standard_error().to_string(),
            state: result.outcome.state(),
            command: result.command,
            working_directory: result.working_directory,
            resolved_output_path: result.resolved_output_path,
        }
    }
}

/// POST /simulate
///
/// Run the simulator against `model_reference`, writing its output to
/// `output_path`. Returns 200 whenever the input is valid, including when
/// the simulator exits non-zero or cannot be started; inspect
/// `exit_status` and `state` in the body.
pub async fn simulate(
    State(state): State<AppState>,
    payload: Result<Json<SimulateRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<SimulationResponse>>> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let request = SimulationRequest::new(input.model_reference, input.output_path)?;
    let result = state.simulator.simulate(&request).await;

    tracing::info!(
        command = %result.command,
        exit_status = result.exit_status(),
        state = result.outcome.state(),
        "Simulation request handled"
    );

    Ok(Json(DataResponse {
        data: result.into(),
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
