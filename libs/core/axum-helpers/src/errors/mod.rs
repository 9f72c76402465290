pub mod handlers;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response envelope.
///
/// Every error response in the API carries this shape, mirroring the
/// `{success, ...}` convention used by all success responses:
///
/// ```json
/// {
///   "success": false,
///   "error": "Item not found"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always `false` for error responses
    pub success: bool,
    /// Human-readable error message
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain error enums convert into this type so that every endpoint maps
/// failures onto the same envelope shape and status codes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::SerdeJson(e) => {
                tracing::info!("JSON error: {}", e);
                (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", e))
            }
            AppError::JsonExtractorRejection(rejection) => {
                tracing::info!("JSON extraction failed: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, msg)
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
