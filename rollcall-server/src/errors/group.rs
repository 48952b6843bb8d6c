use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Invalid group ID")]
    InvalidGroupId,
}

impl GroupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GroupError::GroupNotFound => StatusCode::NOT_FOUND,
            GroupError::InvalidGroupId => StatusCode::BAD_REQUEST,
        }
    }
}
