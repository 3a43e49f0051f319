// Authentication error types

use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::users::repository::StoreError;

/// Message shared by every failed sign-in, whatever the cause
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Authentication error types
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Unknown email and wrong password both land here
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Missing authentication token")]
    MissingToken,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidInput(msg) => AuthError::ValidationError(msg),
            StoreError::DuplicateEmail => AuthError::EmailAlreadyExists,
            StoreError::NotFound(id) => AuthError::DatabaseError(format!("user {id} vanished")),
            StoreError::Database(e) => AuthError::DatabaseError(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::ValidationError(msg) => ApiError::BadRequest(msg),
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            AuthError::InvalidToken | AuthError::ExpiredToken | AuthError::MissingToken => {
                ApiError::Unauthorized(message)
            }
            AuthError::EmailAlreadyExists => ApiError::Conflict { message },
            AuthError::DatabaseError(_)
            | AuthError::TokenGenerationError(_)
            | AuthError::ConfigError(_) => ApiError::InternalError(message),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AuthError::ValidationError("x".into()), StatusCode::BAD_REQUEST),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AuthError::ExpiredToken, StatusCode::UNAUTHORIZED),
            (AuthError::MissingToken, StatusCode::UNAUTHORIZED),
            (AuthError::EmailAlreadyExists, StatusCode::CONFLICT),
            (AuthError::DatabaseError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AuthError::TokenGenerationError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AuthError::ConfigError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn test_store_error_conversion() {
        assert!(matches!(
            AuthError::from(StoreError::DuplicateEmail),
            AuthError::EmailAlreadyExists
        ));
        assert!(matches!(
            AuthError::from(StoreError::InvalidInput("User ID cannot be empty.".into())),
            AuthError::ValidationError(_)
        ));
    }
}
