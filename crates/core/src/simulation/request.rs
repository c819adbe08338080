//! Inbound simulation request.

use crate::error::CoreError;

/// A validated request to run the simulator against one model.
///
/// Both values are opaque to this crate: the model is never opened or
/// parsed, and the output path is handed straight to the pipe target. They
/// are only checked to be usable as a single program argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRequest {
    model_reference: String,
    output_path: String,
}

impl SimulationRequest {
    /// Validate and build a request.
    ///
    /// Rejects empty (or whitespace-only) values, embedded NUL bytes, and
    /// values starting with `-`, which the simulator or `tee` would parse as
    /// an option.
    pub fn new(
        model_reference: impl Into<String>,
        output_path: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let model_reference = model_reference.into();
        let output_path = output_path.into();

        validate_argument("model_reference", &model_reference)?;
        validate_argument("output_path", &output_path)?;

        Ok(Self {
            model_reference,
            output_path,
        })
    }

    pub fn model_reference(&self) -> &str {
        &self.model_reference
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }
}

fn validate_argument(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL bytes"
        )));
    }
    if value.starts_with('-') {
        return Err(CoreError::Validation(format!(
            "{field} must not start with '-'"
        )));
    }
    Ok(())
}
