//! Structured configuration errors.

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;

/// One problem found in an [`ExtractionSpec`](super::spec::ExtractionSpec).
///
/// `path` is a JSON pointer to the offending field (e.g.
/// `/selection/top_percent`).
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{code} at {path}: {message}")]
pub struct PipelineSpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PipelineSpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
