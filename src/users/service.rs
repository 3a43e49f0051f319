// User management service - business logic layer

use std::sync::Arc;

use uuid::Uuid;

use crate::auth::password::PasswordService;
use crate::users::{
    error::UserError,
    models::{PhotoUrlRequest, UserCreateRequest, UserDetailResponse, UserUpdateRequest},
    repository::UserStore,
};

/// Service for account management over a user store
///
/// Request shape is validated by the handlers; this layer checks ids and
/// existence, and never lets hash or salt out.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a new UserService
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// List every user
    pub async fn get_users(&self) -> Result<Vec<UserDetailResponse>, UserError> {
        let users = self.store.find_all().await?;
        Ok(users.into_iter().map(UserDetailResponse::from).collect())
    }

    /// Fetch one user by id
    pub async fn get_user_by_id(&self, id: Uuid) -> Result<UserDetailResponse, UserError> {
        let user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user.into())
    }

    /// Create a user with a password
    ///
    /// This method:
    /// 1. Hashes the password under a fresh salt
    /// 2. Persists the record (photo URL starts blank)
    /// 3. A taken email surfaces as EmailAlreadyExists
    pub async fn add_user(
        &self,
        request: UserCreateRequest,
    ) -> Result<UserDetailResponse, UserError> {
        let credentials = PasswordService::create_hash(&request.password);

        let user = self.store.insert(request.to_new_user(credentials)).await?;

        Ok(user.into())
    }

    /// Replace name, email and mobile of an existing user
    pub async fn update_user(
        &self,
        id: Uuid,
        request: UserUpdateRequest,
    ) -> Result<UserDetailResponse, UserError> {
        let mut user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        request.apply_to(&mut user);
        let updated = self.store.update(&user).await?;

        Ok(updated.into())
    }

    /// Point a user's photo at a new URL
    pub async fn update_photo_url(
        &self,
        id: Uuid,
        request: PhotoUrlRequest,
    ) -> Result<UserDetailResponse, UserError> {
        if request.photo_url.trim().is_empty() {
            return Err(UserError::InvalidInput(
                "Photo URL cannot be empty.".to_string(),
            ));
        }

        let mut user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        user.photo_url = Some(request.photo_url);
        let updated = self.store.update(&user).await?;

        Ok(updated.into())
    }

    /// Remove a user
    pub async fn delete_user(&self, id: Uuid) -> Result<(), UserError> {
        if !self.store.delete(id).await? {
            return Err(UserError::NotFound(id));
        }
        Ok(())
    }
}
