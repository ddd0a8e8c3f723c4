use serde::{Deserialize, Serialize};
use validator::Validate;

/// The authenticated operator allowed to mutate projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Payload of a successful login call.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: Admin,
}
