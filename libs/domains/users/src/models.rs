use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::password;

/// User entity
///
/// The password is held as an Argon2 PHC digest from construction onward and is
/// never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    id: Uuid,
    name: String,
    email: String,
    #[serde(skip_serializing)]
    password: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Build a new user, hashing the plaintext password
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> UserResult<Self> {
        let name = name.into();
        let email = email.into();

        if name.is_empty() {
            return Err(UserError::Validation("name is required".to_string()));
        }
        if email.is_empty() {
            return Err(UserError::Validation("email is required".to_string()));
        }

        Ok(Self {
            id: Uuid::now_v7(),
            name,
            email,
            password: password::hash_password(password)?,
            // timestamptz keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
        })
    }

    /// Rehydrate a stored row whose password is already a digest
    pub(crate) fn from_storage(
        id: Uuid,
        name: String,
        email: String,
        password: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password,
            created_at,
        }
    }

    /// Whether `candidate` is this user's password
    pub fn validate_password(&self, candidate: &str) -> bool {
        password::verify_password(&self.password, candidate)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_digest(&self) -> &str {
        &self.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// User response DTO (without password)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub email: String,
    pub password: String,
}

/// Credentials exchanged for an access token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1, max = 255))]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_hashes_password() {
        let user = User::new("John", "j@j.com", "123456").unwrap();

        assert_eq!(user.name(), "John");
        assert_eq!(user.email(), "j@j.com");
        assert_ne!(user.password_digest(), "123456");
        assert!(user.validate_password("123456"));
        assert!(!user.validate_password("wrong"));
    }

    #[test]
    fn test_created_at_fits_storage_precision() {
        let user = User::new("John", "j@j.com", "123456").unwrap();
        assert_eq!(user.created_at().timestamp_subsec_nanos() % 1000, 0);
    }

    #[test]
    fn test_new_user_requires_name_and_email() {
        assert!(matches!(
            User::new("", "j@j.com", "123456"),
            Err(UserError::Validation(_))
        ));
        assert!(matches!(
            User::new("John", "", "123456"),
            Err(UserError::Validation(_))
        ));
    }

    #[test]
    fn test_password_never_serialized() {
        let user = User::new("John", "j@j.com", "123456").unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "j@j.com");

        let response = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(response.get("password").is_none());
    }

    #[test]
    fn test_create_user_validation() {
        let input = CreateUser {
            name: "x".repeat(101),
            email: "j@j.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(input.validate().is_err());

        let input = CreateUser {
            name: "John".to_string(),
            email: String::new(),
            password: "123456".to_string(),
        };
        assert!(input.validate().is_err());
    }
}
