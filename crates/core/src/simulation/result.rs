//! Execution result model.

/// What `standard_error` reads as before anything has been executed.
///
/// Never empty, so a result that escapes before execution is easy to spot.
pub const NOT_EXECUTED_MESSAGE: &str = "Error: I'm sorry I cannot do that, Dave!";

/// Working directory reported for every execution.
pub const CURRENT_DIRECTORY: &str = ".";

/// Exit status reported when a process was killed by a signal, or when the
/// OS gave no error code for a failed spawn.
pub const UNKNOWN_EXIT_STATUS: i32 = -1;

/// How far an execution got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Nothing has run yet.
    NotExecuted,
    /// The pipeline ran to completion, whatever its exit code.
    Completed {
        exit_status: i32,
        standard_output: String,
        standard_error: String,
    },
    /// A process could not be started or waited on.
    SpawnFailed {
        /// Platform error code (`errno` on Unix).
        os_error: i32,
        message: String,
    },
}

impl ExecutionOutcome {
    /// Short machine-readable label for the outcome.
    pub fn state(&self) -> &'static str {
        match self {
            Self::NotExecuted => "not_executed",
            Self::Completed { .. } => "completed",
            Self::SpawnFailed { .. } => "spawn_failed",
        }
    }
}

/// Structured record of one simulator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The command line that was attempted. Always set, even on failure.
    pub command: String,
    pub working_directory: String,
    /// The caller's output path; `None` until execution actually started.
    pub resolved_output_path: Option<String>,
    pub outcome: ExecutionOutcome,
}

impl ExecutionResult {
    /// A result for `command` that has not been executed.
    pub fn not_executed(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            working_directory: CURRENT_DIRECTORY.to_string(),
            resolved_output_path: None,
            outcome: ExecutionOutcome::NotExecuted,
        }
    }

    pub fn completed(
        command: impl Into<String>,
        output_path: impl Into<String>,
        exit_status: i32,
        standard_output: String,
        standard_error: String,
    ) -> Self {
        Self {
            command: command.into(),
            working_directory: CURRENT_DIRECTORY.to_string(),
            resolved_output_path: Some(output_path.into()),
            outcome: ExecutionOutcome::Completed {
                exit_status,
                standard_output,
                standard_error,
            },
        }
    }

    pub fn spawn_failed(command: impl Into<String>, error: &std::io::Error) -> Self {
        Self {
            command: command.into(),
            working_directory: CURRENT_DIRECTORY.to_string(),
            resolved_output_path: None,
            outcome: ExecutionOutcome::SpawnFailed {
                os_error: error.raw_os_error().unwrap_or(UNKNOWN_EXIT_STATUS),
                message: error.to_string(),
            },
        }
    }

    /// Process exit code, or the OS error code for a failed spawn.
    pub fn exit_status(&self) -> i32 {
        match &self.outcome {
            ExecutionOutcome::NotExecuted => 0,
            ExecutionOutcome::Completed { exit_status, .. } => *exit_status,
            ExecutionOutcome::SpawnFailed { os_error, .. } => *os_error,
        }
    }

    pub fn standard_output(&self) -> &str {
        match &self.outcome {
            ExecutionOutcome::Completed {
                standard_output, ..
            } => standard_output,
            ExecutionOutcome::NotExecuted | ExecutionOutcome::SpawnFailed { .. } => "",
        }
    }

    pub fn standard_error(&self) -> &str {
        match &self.outcome {
            ExecutionOutcome::NotExecuted => NOT_EXECUTED_MESSAGE,
            ExecutionOutcome::Completed { standard_error, .. } => standard_error,
            ExecutionOutcome::SpawnFailed { message, .. } => message,
        }
    }

    pub fn is_executed(&self) -> bool {
        !matches!(self.outcome, ExecutionOutcome::NotExecuted)
    }
}
