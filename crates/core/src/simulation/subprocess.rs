//! Process plumbing for the simulator pipeline.
//!
//! Provides [`run_pipeline`], which reproduces `simulator MODEL | tee OUTPUT`
//! without a shell: both programs are spawned with explicit argument
//! vectors and the simulator's stdout is copied into `tee`'s stdin by a
//! background task.

use std::process::Stdio;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

use super::command::SimulationCommand;
use super::result::UNKNOWN_EXIT_STATUS;

/// Maximum stdout or stderr size captured per stream (10 MiB).
///
/// Anything past the limit is read and discarded.
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Captured output of a pipeline that ran to completion.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Exit code with `pipefail` semantics.
    pub exit_code: i32,
    /// Stdout of the pipe target (the duplicated simulator output).
    pub stdout: String,
    /// Simulator stderr followed by pipe target stderr.
    pub stderr: String,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Run `command` as a two-process pipeline and wait for both ends.
///
/// Returns `Err` only when a process cannot be spawned or waited on. A
/// non-zero exit is a normal [`PipelineOutput`]. If the pipe target fails to
/// start, the already running simulator is killed and reaped first.
pub async fn run_pipeline(command: &SimulationCommand) -> std::io::Result<PipelineOutput> {
    let start = Instant::now();

    let mut simulator = Command::new(command.simulator_path())
        .arg(command.model_reference())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let tee = Command::new(command.tee_program())
        .arg(command.output_path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();
    let mut tee = match tee {
        Ok(child) => child,
        Err(err) => {
            abort_child(&mut simulator).await;
            return Err(err);
        }
    };

    // Every handle is moved into its own task so `wait()` can borrow the
    // children while the pipes are drained.
    let forward_task = tokio::spawn(forward(simulator.stdout.take(), tee.stdin.take()));
    let simulator_stderr_task = tokio::spawn(read_stream(simulator.stderr.take()));
    let tee_stdout_task = tokio::spawn(read_stream(tee.stdout.take()));
    let tee_stderr_task = tokio::spawn(read_stream(tee.stderr.take()));

    let simulator_status = match simulator.wait().await {
        Ok(status) => status,
        Err(err) => {
            abort_child(&mut tee).await;
            return Err(err);
        }
    };

    match forward_task.await {
        Ok(Ok(bytes)) => tracing::trace!(bytes, "Forwarded simulator output to pipe target"),
        Ok(Err(err)) => tracing::debug!(error = %err, "Pipe target stopped reading early"),
        Err(err) => tracing::debug!(error = %err, "Output forwarding task failed"),
    }

    let tee_status = tee.wait().await?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let stdout_bytes = tee_stdout_task.await.unwrap_or_default();
    let mut stderr_bytes = simulator_stderr_task.await.unwrap_or_default();
    stderr_bytes.extend(tee_stderr_task.await.unwrap_or_default());

    Ok(PipelineOutput {
        exit_code: pipefail_exit_code(simulator_status.code(), tee_status.code()),
        stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
        stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
        duration_ms,
    })
}

/// Kill `child` and reap it. Errors are ignored: the child may already
/// have exited.
async fn abort_child(child: &mut Child) {
    let _ = child.start_kill();
    let _ = child.wait().await;
}

/// The first non-zero exit code in the pipeline, else the last one.
///
/// `None` means the process was killed by a signal and maps to
/// [`UNKNOWN_EXIT_STATUS`].
fn pipefail_exit_code(simulator: Option<i32>, tee: Option<i32>) -> i32 {
    match simulator.unwrap_or(UNKNOWN_EXIT_STATUS) {
        0 => tee.unwrap_or(UNKNOWN_EXIT_STATUS),
        code => code,
    }
}

/// Copy the simulator's stdout into the pipe target's stdin, then close it
/// so the pipe target sees EOF.
async fn forward(source: Option<ChildStdout>, sink: Option<ChildStdin>) -> std::io::Result<u64> {
    let (Some(mut source), Some(mut sink)) = (source, sink) else {
        return Ok(0);
    };
    let copied = tokio::io::copy(&mut source, &mut sink).await?;
    sink.shutdown().await?;
    Ok(copied)
}

/// Read an entire output stream into a byte buffer, capped at [`MAX_OUTPUT_BYTES`].
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = (&mut h)
            .take(MAX_OUTPUT_BYTES as u64)
            .read_to_end(&mut buf)
            .await;
        let _ = tokio::io::copy(&mut h, &mut tokio::io::sink()).await;
    }
    buf
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
