// HTTP handlers for authentication endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::models::{SignInRequest, SignUpRequest};
use crate::error::ApiError;
use crate::models::ApiResponse;
use crate::AppState;

/// Register a new user and log them in
/// POST /api/auth/signup
pub async fn signup_handler(
    State(state): State<AppState>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<String>>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    tracing::debug!("Sign-up attempt for {}", request.email);

    let identity = state.auth_service.sign_up(request).await?;
    let token = state.token_service.issue(&identity)?;

    tracing::info!("Created user with id: {}", identity.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(token, "User created and logged in")),
    ))
}

/// Authenticate a user and issue a token
/// POST /api/auth/signin
pub async fn signin_handler(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    tracing::debug!("Sign-in attempt for {}", request.email);

    let identity = state.auth_service.sign_in(request).await?;
    let token = state.token_service.issue(&identity)?;

    tracing::info!("User {} signed in", identity.id);
    Ok(Json(ApiResponse::ok(token, "User signed in")))
}
