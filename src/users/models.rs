use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::auth::password::PasswordHash;

/// User database model
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub password_hash: Vec<u8>,
    pub password_salt: Vec<u8>,
    pub photo_url: Option<String>,
}

/// User record before the store assigns an id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub photo_url: Option<String>,
    pub password_hash: Vec<u8>,
    pub password_salt: Vec<u8>,
}

impl NewUser {
    /// Attach an id, producing the stored shape
    pub fn with_id(self, id: Uuid) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            mobile: self.mobile,
            password_hash: self.password_hash,
            password_salt: self.password_salt,
            photo_url: self.photo_url,
        }
    }
}

/// User response model (excludes password hash and salt)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub photo_url: Option<String>,
}

impl From<User> for UserDetailResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            mobile: user.mobile,
            photo_url: user.photo_url,
        }
    }
}

/// Create-user request DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserCreateRequest {
    #[validate(length(min = 1, max = 100), custom = "crate::validation::validate_not_blank")]
    pub name: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(max = 20), custom = "crate::validation::validate_mobile")]
    pub mobile: Option<String>,
    #[validate(length(min = 1))]
    pub password: String,
}

impl UserCreateRequest {
    pub fn to_new_user(&self, credentials: PasswordHash) -> NewUser {
        NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            photo_url: None,
            password_hash: credentials.hash,
            password_salt: credentials.salt,
        }
    }
}

/// Profile update request DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserUpdateRequest {
    #[validate(length(min = 1, max = 100), custom = "crate::validation::validate_not_blank")]
    pub name: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(max = 20), custom = "crate::validation::validate_mobile")]
    pub mobile: Option<String>,
}

impl UserUpdateRequest {
    /// Copy the editable profile fields onto an existing record
    ///
    /// Hash, salt and photo URL are left untouched.
    pub fn apply_to(&self, user: &mut User) {
        user.name = self.name.clone();
        user.email = self.email.clone();
        user.mobile = self.mobile.clone();
    }
}

/// Photo URL update request DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PhotoUrlRequest {
    #[validate(length(min = 1, max = 2048), custom = "crate::validation::validate_not_blank")]
    pub photo_url: String,
}
