// Authentication module
// Handles credential hashing, sign-up/sign-in and bearer tokens

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;
pub mod token;

pub use error::AuthError;
pub use handlers::{signin_handler, signup_handler};
pub use middleware::AuthenticatedUser;
pub use models::{IdentityClaims, SignInRequest, SignUpRequest};
pub use service::AuthService;
pub use token::TokenService;
