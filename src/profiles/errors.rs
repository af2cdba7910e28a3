use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::repo_types::ProfileId;

/// Client-caused rejection. The display text is returned to the caller verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("all fields are required")]
    MissingField,
    #[error("phone must contain digits only")]
    InvalidPhoneFormat,
    #[error("birthDay must be in format DD/MM/YYYY")]
    InvalidDateFormat,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("profile {0} already exists")]
    Conflict(ProfileId),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid JSON")]
    MalformedBody,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to save")]
    Storage(#[from] StorageError),
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProfileError::MalformedBody | ProfileError::Validation(_) => StatusCode::BAD_REQUEST,
            ProfileError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Storage displays as a fixed message; the cause stays in the logs.
        (status, self.to_string()).into_response()
    }
}
