use axum_helpers::AppError;
use thiserror::Error;

/// Errors produced by the upload gateway.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Only image files are allowed!")]
    NotAnImage(String),

    #[error("File too large. Maximum size is 5MB")]
    TooLarge(usize),

    #[error("Failed to upload file")]
    Storage(String),

    #[error("Storage configuration error: {0}")]
    Config(String),
}

pub type UploadResult<T> = Result<T, UploadError>;

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Storage(err.to_string())
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::NoFile | UploadError::NotAnImage(_) | UploadError::TooLarge(_) => {
                AppError::BadRequest(err.to_string())
            }
            UploadError::Storage(detail) => {
                tracing::error!(%detail, "blob storage upload failed");
                AppError::InternalServerError("Failed to upload file".to_string())
            }
            UploadError::Config(detail) => {
                tracing::error!(%detail, "blob storage misconfigured");
                AppError::InternalServerError("Failed to upload file".to_string())
            }
        }
    }
}
