use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a `{success: false, error}` envelope.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never completed (connection refused, timeout, ...).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Local validation rejected the input before any request was made.
    #[error("{0}")]
    Invalid(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
