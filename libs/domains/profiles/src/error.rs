use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProfileResult<T> = Result<T, ProfileError>;

impl From<mongodb::error::Error> for ProfileError {
    fn from(err: mongodb::error::Error) -> Self {
        ProfileError::Database(err.to_string())
    }
}
