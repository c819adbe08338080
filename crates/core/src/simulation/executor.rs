//! Execution adapter: runs a built command and folds every outcome into an
//! [`ExecutionResult`].

use super::command::SimulationCommand;
use super::result::ExecutionResult;
use super::subprocess;

/// Run `command` to completion and capture its outcome.
///
/// Blocks (asynchronously) until the pipeline exits; there is no timeout.
/// A process that cannot be started yields a `SpawnFailed` result carrying
/// the OS error code instead of an error, so callers always get a result
/// with the attempted command line filled in.
pub async fn execute(command: &SimulationCommand) -> ExecutionResult {
    let rendered = command.render();
    tracing::debug!(command = %rendered, "Spawning simulator");

    match subprocess::run_pipeline(command).await {
        Ok(output) => {
            tracing::info!(
                command = %rendered,
                exit_status = output.exit_code,
                duration_ms = output.duration_ms,
                "Simulator finished"
            );
            ExecutionResult::completed(
                rendered,
                command.output_path(),
                output.exit_code,
                output.stdout,
                output.stderr,
            )
        }
        Err(err) => {
            tracing::warn!(command = %rendered, error = %err, "Failed to run simulator");
            ExecutionResult::spawn_failed(rendered, &err)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
