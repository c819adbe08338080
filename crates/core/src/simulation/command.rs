//! Command construction for the simulator pipeline.
//!
//! The command line always has the shape
//! `<simulator> <MODEL> | tee <OUTPUT_PATH>`. The rendered line is kept for
//! audit and logging; execution uses the individual parts as argument
//! vectors, so nothing in a request is ever interpreted by a shell.

use std::path::PathBuf;

use crate::error::CoreError;

use super::request::SimulationRequest;

/// Simulator binary shipped alongside the service.
pub const DEFAULT_SIMULATOR_PATH: &str = "vendors/CSim-0.4.3-Linux/bin/csim";

/// Program the simulator's stdout is piped through to reach the output file.
pub const DEFAULT_TEE_PROGRAM: &str = "tee";

/// The fixed command template: which simulator to run and what to pipe its
/// output through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    simulator_path: String,
    tee_program: String,
}

impl CommandTemplate {
    /// Create a template, rejecting empty program paths.
    pub fn new(
        simulator_path: impl Into<String>,
        tee_program: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let simulator_path = simulator_path.into();
        let tee_program = tee_program.into();

        if simulator_path.trim().is_empty() {
            return Err(CoreError::Config(
                "simulator path must not be empty".to_string(),
            ));
        }
        if tee_program.trim().is_empty() {
            return Err(CoreError::Config(
                "tee program must not be empty".to_string(),
            ));
        }

        Ok(Self {
            simulator_path,
            tee_program,
        })
    }

    pub fn simulator_path(&self) -> &str {
        &self.simulator_path
    }

    pub fn tee_program(&self) -> &str {
        &self.tee_program
    }

    /// Locate the simulator the way process spawning does: bare names are
    /// searched on `PATH`, anything with a separator is taken as a path.
    ///
    /// Returns `None` when no executable file is found.
    pub fn resolve_simulator(&self) -> Option<PathBuf> {
        which::which(&self.simulator_path).ok()
    }

    /// Substitute the request into the template.
    pub fn build(&self, request: &SimulationRequest) -> SimulationCommand {
        SimulationCommand {
            simulator_path: self.simulator_path.clone(),
            model_reference: request.model_reference().to_string(),
            tee_program: self.tee_program.clone(),
            output_path: request.output_path().to_string(),
        }
    }
}

impl Default for CommandTemplate {
    fn default() -> Self {
        Self {
            simulator_path: DEFAULT_SIMULATOR_PATH.to_string(),
            tee_program: DEFAULT_TEE_PROGRAM.to_string(),
        }
    }
}

/// A fully substituted command, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationCommand {
    simulator_path: String,
    model_reference: String,
    tee_program: String,
    output_path: String,
}

impl SimulationCommand {
    pub fn simulator_path(&self) -> &str {
        &self.simulator_path
    }

    pub fn model_reference(&self) -> &str {
        &self.model_reference
    }

    pub fn tee_program(&self) -> &str {
        &self.tee_program
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// The literal command line, words joined by single spaces.
    ///
    /// Values are substituted verbatim with no quoting.
    ///
    /// ```
    /// use cellsim_core::simulation::command::CommandTemplate;
    /// use cellsim_core::simulation::request::SimulationRequest;
    ///
    /// let request = SimulationRequest::new("model.cellml", "/tmp/out.txt").unwrap();
    /// let command = CommandTemplate::default().build(&request);
    /// assert_eq!(
    ///     command.render(),
    ///     "vendors/CSim-0.4.3-Linux/bin/csim model.cellml | tee /tmp/out.txt"
    /// );
    /// ```
    pub fn render(&self) -> String {
        format!(
            "{} {} | {} {}",
            self.simulator_path, self.model_reference, self.tee_program, self.output_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(model: &str, output: &str) -> SimulationRequest {
        SimulationRequest::new(model, output).expect("valid request")
    }

    #[test]
    fn render_substitutes_default_template() {
        let command = CommandTemplate::default().build(&request("model.cellml", "/tmp/out.txt"));
        assert_eq!(
            command.render(),
            format!("{DEFAULT_SIMULATOR_PATH} model.cellml | tee /tmp/out.txt")
        );
    }

    #[test]
    fn render_keeps_values_verbatim() {
        let template = CommandTemplate::new("/opt/csim/bin/csim", "tee").expect("template");
        let command = template.build(&request("my model & co.cellml", "out dir/$HOME.txt"));
        assert_eq!(
            command.render(),
            "/opt/csim/bin/csim my model & co.cellml | tee out dir/$HOME.txt"
        );
        assert_eq!(command.model_reference(), "my model & co.cellml");
        assert_eq!(command.output_path(), "out dir/$HOME.txt");
    }

    #[test]
    fn build_carries_template_programs() {
        let template =
            CommandTemplate::new("/usr/local/bin/csim", "/usr/bin/tee").expect("template");
        let command = template.build(&request("a.cellml", "b.txt"));
        assert_eq!(command.simulator_path(), "/usr/local/bin/csim");
        assert_eq!(command.tee_program(), "/usr/bin/tee");
    }

    #[test]
    fn resolve_simulator_searches_path_for_bare_names() {
        let template = CommandTemplate::new("sh", "tee").expect("template");
        let resolved = template.resolve_simulator().expect("sh is on PATH");
        assert!(resolved.is_absolute(), "resolved to {resolved:?}");
    }

    #[test]
    fn resolve_simulator_accepts_absolute_path() {
        let template = CommandTemplate::new("/bin/sh", "tee").expect("template");
        assert!(template.resolve_simulator().is_some());
    }

    #[test]
    fn resolve_simulator_missing_binary_is_none() {
        let template = CommandTemplate::new("/nonexistent/csim", "tee").expect("template");
        assert_eq!(template.resolve_simulator(), None);
    }

    #[test]
    fn new_rejects_empty_simulator_path() {
        let err = CommandTemplate::new("  ", "tee").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn new_rejects_empty_tee_program() {
        let err = CommandTemplate::new("/bin/csim", "").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
