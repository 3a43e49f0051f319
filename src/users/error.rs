// User management error types

use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::error::ApiError;
use crate::users::repository::StoreError;

/// Error types for user management operations
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User with id {0} not found")]
    NotFound(Uuid),

    #[error("A user with this email already exists")]
    EmailAlreadyExists,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidInput(msg) => UserError::InvalidInput(msg),
            StoreError::DuplicateEmail => UserError::EmailAlreadyExists,
            StoreError::NotFound(id) => UserError::NotFound(id),
            StoreError::Database(e) => UserError::Internal(e.to_string()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::InvalidInput(msg) => ApiError::BadRequest(msg),
            UserError::NotFound(id) => ApiError::NotFound {
                resource: "User".to_string(),
                id: id.to_string(),
            },
            UserError::EmailAlreadyExists => ApiError::Conflict { message },
            UserError::Internal(_) => ApiError::InternalError(message),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
