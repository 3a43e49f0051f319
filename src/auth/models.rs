// Authentication data models and DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::auth::password::PasswordHash;
use crate::users::models::{NewUser, User};

/// Sign-up request DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(max = 100))]
    pub name: Option<String>,
}

impl SignUpRequest {
    /// Field copy into a new user record
    ///
    /// Email and name come from the request; mobile and photo start blank.
    pub fn to_new_user(&self, credentials: PasswordHash) -> NewUser {
        NewUser {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone(),
            mobile: None,
            photo_url: None,
            password_hash: credentials.hash,
            password_salt: credentials.salt,
        }
    }
}

/// Sign-in request DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Identity of an authenticated user, the input of token issuance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub photo_url: Option<String>,
}

impl From<&User> for IdentityClaims {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            mobile: user.mobile.clone(),
            photo_url: user.photo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_validation() {
        let valid: SignUpRequest = serde_json::from_str(
            r#"{"email": "a@x.com", "password": "Secret123", "name": "A"}"#,
        )
        .unwrap();
        assert!(valid.validate().is_ok());

        let bad_email = SignUpRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_password = SignUpRequest {
            password: String::new(),
            ..valid.clone()
        };
        assert!(empty_password.validate().is_err());

        let long_email = SignUpRequest {
            email: format!("{}@example.com", "a".repeat(95)),
            ..valid
        };
        assert!(long_email.validate().is_err());
    }

    #[test]
    fn test_sign_up_name_is_optional() {
        let request: SignUpRequest =
            serde_json::from_str(r#"{"email": "a@x.com", "password": "pw"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.name.is_none());
    }

    #[test]
    fn test_to_new_user_copies_name_and_blanks_mobile() {
        let request = SignUpRequest {
            email: "a@x.com".to_string(),
            password: "Secret123".to_string(),
            name: Some("A".to_string()),
        };
        let credentials = PasswordHash {
            hash: vec![1; 64],
            salt: vec![2; 128],
        };

        let user = request.to_new_user(credentials.clone());

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name, "A");
        assert!(user.mobile.is_none());
        assert!(user.photo_url.is_none());
        assert_eq!(user.password_hash, credentials.hash);
        assert_eq!(user.password_salt, credentials.salt);
    }

    #[test]
    fn test_sign_in_request_validation() {
        let request = SignInRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
