pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod users;
pub mod validation;

use std::sync::Arc;

use axum::{
    extract::FromRef,
    response::Json,
    routing::{get, patch, post},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use auth::{handlers as auth_handlers, AuthService, TokenService};
use users::{handlers as user_handlers, UserService, UserStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    /// Wire both services over one store
    pub fn new(store: Arc<dyn UserStore>, token_service: TokenService) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(store.clone())),
            user_service: Arc::new(UserService::new(store)),
            token_service: Arc::new(token_service),
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.token_service.clone()
    }
}

/// Handler for GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds tracing and CORS layers
pub fn create_router(state: AppState) -> Router {
    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        // Authentication
        .route("/api/auth/signup", post(auth_handlers::signup_handler))
        .route("/api/auth/signin", post(auth_handlers::signin_handler))
        // User management (bearer token required)
        .route(
            "/api/users",
            get(user_handlers::get_users_handler).post(user_handlers::create_user_handler),
        )
        .route(
            "/api/users/:id",
            get(user_handlers::get_user_handler)
                .put(user_handlers::update_user_handler)
                .delete(user_handlers::delete_user_handler),
        )
        .route(
            "/api/users/:id/photo",
            patch(user_handlers::update_photo_handler),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
