use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Request-level failures surfaced to API callers.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Missing or malformed input (client error)
    #[error("{0}")]
    Validation(String),

    /// The translation model failed; the underlying message is passed through
    #[error("{0}")]
    Translation(String),

    #[error("Translation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Unauthorized")]
    Unauthorized,
}

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslateError::Validation(_) => StatusCode::BAD_REQUEST,
            TranslateError::Unauthorized => StatusCode::UNAUTHORIZED,
            TranslateError::Translation(_) | TranslateError::Timeout(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error envelope returned by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Language detection could not produce a result.
///
/// Never reaches callers: the pipeline falls back to the default language.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DetectionError {
    #[error("language could not be detected")]
    Inconclusive,
}
