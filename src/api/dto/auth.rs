//! Authentication-related Data Transfer Objects

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Register request payload
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Full Name cannot be empty"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        length(min = 1, message = "Email and password cannot be empty"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Email and password cannot be empty"))]
    pub password: String,
}

/// Login response carrying the bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
