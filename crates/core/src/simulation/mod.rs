//! Simulator invocation pipeline.
//!
//! A [`request::SimulationRequest`] is rendered into a
//! [`command::SimulationCommand`] by a [`command::CommandTemplate`], run by
//! [`executor::execute`], and reported back as a
//! [`result::ExecutionResult`]. [`Simulator`] ties the steps together.

pub mod command;
pub mod executor;
pub mod request;
pub mod result;
pub mod subprocess;

use command::CommandTemplate;
use request::SimulationRequest;
use result::ExecutionResult;

/// Entry point for running one simulation per request.
///
/// Holds only the immutable command template, so a single instance can be
/// shared across concurrent requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Simulator {
    template: CommandTemplate,
}

impl Simulator {
    pub fn new(template: CommandTemplate) -> Self {
        Self { template }
    }

    /// The template this simulator renders commands from.
    pub fn template(&self) -> &CommandTemplate {
        &self.template
    }

    /// Build the command for `request`, run it to completion, and return the
    /// captured outcome.
    ///
    /// Never fails: spawn errors are reported inside the returned
    /// [`ExecutionResult`].
    pub async fn simulate(&self, request: &SimulationRequest) -> ExecutionResult {
        let command = self.template.build(request);
        executor::execute(&command).await
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(CommandTemplate::default())
    }
}
