// HTTP handlers for user management endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::ApiResponse;
use crate::users::models::{
    PhotoUrlRequest, UserCreateRequest, UserDetailResponse, UserUpdateRequest,
};
use crate::AppState;

/// Handler for GET /api/users
pub async fn get_users_handler(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<UserDetailResponse>>>, ApiError> {
    tracing::debug!("User {} listing users", caller.user_id);

    let users = state.user_service.get_users().await?;

    tracing::debug!("Retrieved {} users", users.len());
    Ok(Json(ApiResponse::ok(users, "Users retrieved")))
}

/// Handler for GET /api/users/:id
pub async fn get_user_handler(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ApiResponse<UserDetailResponse>>, ApiError> {
    let Path(id) = path?;
    tracing::debug!("Fetching user with id: {}", id);

    let user = state.user_service.get_user_by_id(id).await?;

    Ok(Json(ApiResponse::ok(user, "User retrieved")))
}

/// Handler for POST /api/users
pub async fn create_user_handler(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    payload: Result<Json<UserCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<UserDetailResponse>>), ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;
    tracing::debug!("User {} creating user: {}", caller.user_id, payload.email);

    let user = state.user_service.add_user(payload).await?;

    tracing::info!("Successfully created user with id: {}", user.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(user, "User created")),
    ))
}

/// Handler for PUT /api/users/:id
/// Updates name, email and mobile only
pub async fn update_user_handler(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UserUpdateRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<UserDetailResponse>>, ApiError> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    payload.validate()?;
    tracing::debug!("Updating user with id: {}", id);

    let user = state.user_service.update_user(id, payload).await?;

    tracing::info!("Successfully updated user with id: {}", id);
    Ok(Json(ApiResponse::ok(user, "User updated")))
}

/// Handler for PATCH /api/users/:id/photo
pub async fn update_photo_handler(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<PhotoUrlRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<UserDetailResponse>>, ApiError> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    payload.validate()?;
    tracing::debug!("Updating photo for user with id: {}", id);

    let user = state.user_service.update_photo_url(id, payload).await?;

    tracing::info!("Successfully updated photo for user with id: {}", id);
    Ok(Json(ApiResponse::ok(user, "Photo updated")))
}

/// Handler for DELETE /api/users/:id
pub async fn delete_user_handler(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    tracing::debug!("User {} deleting user with id: {}", caller.user_id, id);

    state.user_service.delete_user(id).await?;

    tracing::info!("Successfully deleted user with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
