use std::io;

use thiserror::Error;

use crate::pipeline::validation::ValidationReport;

/// Error type for table IO, configuration and argument failures.
#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("column '{column}' not found in table (available: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("top percent must be a number between 0 and 100, got '{value}'")]
    InvalidPercentile { value: String },
    #[error("invalid lexicon entry at line {line}: {reason}")]
    InvalidLexicon { line: u64, reason: String },
    #[error("invalid configuration:\n{0}")]
    InvalidConfig(ValidationReport),
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, KeywordError>;
