use super::{GroupError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Group error: {0}")]
    GroupError(#[from] GroupError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
