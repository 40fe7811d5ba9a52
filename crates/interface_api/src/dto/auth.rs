//! Authentication DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_users::user::{Role, User};

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email
    #[validate(email)]
    pub email: String,
    /// Credential
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Role the caller wants to act as
    pub role: Role,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token
    pub token: String,
    /// Authenticated user
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: *user.id.as_uuid(),
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}
