//! Error types for mission resolution
//!
//! Every failure the resolver can produce is either bad input or a
//! numerically impossible projection.

use thiserror::Error;

/// Main error type for trajectory resolution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MissionError {
    // ===== Validation Errors =====
    /// A required field was absent from the mission context
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field carried a value outside its allowed domain
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// Coordinate outside the valid latitude/longitude range
    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The mission has no legs to resolve
    #[error("Mission contains no waypoints")]
    EmptyMission,

    // ===== Computation Errors =====
    /// Projection produced a non-finite coordinate
    #[error("Projection failed for waypoint {index}: {reason}")]
    Computation { index: usize, reason: String },

    /// Single-point projection produced a non-finite coordinate
    #[error("Projection failed: {0}")]
    Projection(String),
}

impl MissionError {
    /// Shorthand for [`MissionError::InvalidField`]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MissionError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is caused by the caller's input
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            MissionError::MissingField(_)
                | MissionError::InvalidField { .. }
                | MissionError::OutOfRange { .. }
                | MissionError::EmptyMission
        )
    }

    /// Check if this error is a client error (bad input or unprojectable input)
    pub fn is_client_error(&self) -> bool {
        self.is_validation_error()
            || matches!(self, MissionError::Computation { .. } | MissionError::Projection(_))
    }

    /// Name of the offending field, where one is known
    pub fn field(&self) -> Option<&str> {
        match self {
            MissionError::MissingField(field)
            | MissionError::InvalidField { field, .. }
            | MissionError::OutOfRange { field, .. } => Some(field),
            MissionError::EmptyMission => Some("waypoints"),
            _ => None,
        }
    }

    /// Get an error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            MissionError::MissingField(_) => "MISSING_FIELD",
            MissionError::InvalidField { .. } => "INVALID_FIELD",
            MissionError::OutOfRange { .. } => "OUT_OF_RANGE",
            MissionError::EmptyMission => "EMPTY_MISSION",
            MissionError::Computation { .. } | MissionError::Projection(_) => "COMPUTATION_ERROR",
        }
    }
}

/// Result type alias for mission operations
pub type Result<T> = std::result::Result<T, MissionError>;
