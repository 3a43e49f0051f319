// Authentication service - business logic layer

use std::sync::Arc;

use crate::auth::{
    error::AuthError,
    models::{IdentityClaims, SignInRequest, SignUpRequest},
    password::PasswordService,
};
use crate::users::repository::UserStore;

/// Authentication service coordinating sign-up and sign-in
///
/// Stateless apart from the shared store handle. Performs no logging and no
/// retries; every failure is returned to the caller.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Register a new user
    ///
    /// This method:
    /// 1. Rejects an empty email or password
    /// 2. Copies email and name into a new record (mobile and photo stay blank)
    /// 3. Hashes the password under a fresh salt
    /// 4. Persists the record; a taken email surfaces as EmailAlreadyExists
    /// 5. Returns the identity of the stored record, including its new id
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<IdentityClaims, AuthError> {
        if request.email.is_empty() {
            return Err(AuthError::ValidationError(
                "Email cannot be empty to create a new user.".to_string(),
            ));
        }
        if request.password.is_empty() {
            return Err(AuthError::ValidationError(
                "Password cannot be empty to create a new user.".to_string(),
            ));
        }

        let credentials = PasswordService::create_hash(&request.password);
        let new_user = request.to_new_user(credentials);

        let user = self.store.insert(new_user).await?;

        Ok(IdentityClaims::from(&user))
    }

    /// Authenticate a user by email and password
    ///
    /// Unknown email and wrong password return the same InvalidCredentials
    /// error so callers cannot tell which emails are registered.
    pub async fn sign_in(&self, request: SignInRequest) -> Result<IdentityClaims, AuthError> {
        if request.email.is_empty() {
            return Err(AuthError::ValidationError(
                "Email cannot be empty to identify user.".to_string(),
            ));
        }
        if request.password.is_empty() {
            return Err(AuthError::ValidationError(
                "Password cannot be empty to identify user.".to_string(),
            ));
        }

        let Some(user) = self.store.find_by_email(&request.email).await? else {
            PasswordService::verify_dummy(&request.password);
            return Err(AuthError::InvalidCredentials);
        };

        if !PasswordService::verify(&request.password, &user.password_hash, &user.password_salt) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(IdentityClaims::from(&user))
    }
}
