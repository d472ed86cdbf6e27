//! User-related Data Transfer Objects

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{User, UserRole};

/// User information returned by the API.
///
/// Deliberately excludes the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub balance: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            balance: user.balance,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Balance top-up payload.
#[derive(Debug, Deserialize)]
pub struct TopUpRequest {
    pub balance: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            role: UserRole::Customer,
            balance: 5_000,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn response_never_contains_the_password_hash() {
        let json = serde_json::to_string(&UserResponse::from(sample_user())).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn response_carries_role_in_lowercase() {
        let json = serde_json::to_value(UserResponse::from(sample_user())).unwrap();
        assert_eq!(json["role"], "customer");
        assert_eq!(json["balance"], 5_000);
    }
}
