//! Mapping of failures to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mission_core::MissionError;
use mission_export::ExportError;
use thiserror::Error;
use tracing::{error, warn};

use super::messages::ErrorBody;

/// Errors surfaced by the REST handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Body or query could not be parsed into the expected shape
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Resolution failed
    #[error(transparent)]
    Mission(#[from] MissionError),

    /// Encoding failed
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Mission(err) if err.is_validation_error() => StatusCode::BAD_REQUEST,
            ApiError::Mission(err) if err.is_client_error() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Mission(_) | ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get an error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Mission(err) => err.error_code(),
            ApiError::Export(_) => "INTERNAL_ERROR",
        }
    }

    fn body(&self) -> ErrorBody {
        let field = match self {
            ApiError::Mission(err) => err.field().map(str::to_string),
            _ => None,
        };
        let message = if self.status().is_server_error() {
            "Internal error while generating mission".to_string()
        } else {
            self.to_string()
        };
        ErrorBody {
            error: message,
            code: self.error_code(),
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Mission generation failed: {}", self);
        } else {
            warn!("Rejected mission request: {}", self);
        }
        (status, Json(self.body())).into_response()
    }
}
