//! Stable error codes for configuration diagnostics.

use std::fmt;

use serde::Serialize;

/// Machine-readable category of a [`PipelineSpecError`](super::errors::PipelineSpecError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The `v` field names a version this build does not understand
    UnsupportedVersion,
    /// A field needed to run is absent
    MissingField,
    /// A field is present but its value is out of range or malformed
    InvalidValue,
    /// A field is not part of the schema
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::MissingField => "missing_field",
            Self::InvalidValue => "invalid_value",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
