//! Error types for mission encoding

use thiserror::Error;

/// Errors that can occur while encoding a mission
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to encode
    #[error("Mission has no points to encode")]
    EmptyMission,

    /// A point carried a coordinate the target format cannot represent
    #[error("Point {index} has a non-finite {field}")]
    NonFinite { index: usize, field: &'static str },

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(String),

    /// Formatting or buffer error
    #[error("Write error: {0}")]
    Write(String),
}

impl ExportError {
    /// Get an error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ExportError::EmptyMission => "EMPTY_MISSION",
            ExportError::NonFinite { .. } => "NON_FINITE_VALUE",
            ExportError::Csv(_) => "CSV_ERROR",
            ExportError::Write(_) => "WRITE_ERROR",
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for ExportError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        ExportError::Write(err.error().to_string())
    }
}

impl From<std::fmt::Error> for ExportError {
    fn from(err: std::fmt::Error) -> Self {
        ExportError::Write(err.to_string())
    }
}

/// Result type for encoding operations
pub type Result<T> = std::result::Result<T, ExportError>;
