use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::UserRole;

/// JWT claims binding a user's identity and role to a bounded time window.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User email
    pub email: String,
    /// Account role, gates admin-only endpoints
    pub role: UserRole,
    /// Issued at (timestamp)
    pub iat: i64,
    /// Expiration time (timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a user expiring `expiration_minutes` from now.
    pub fn new(user_id: i32, email: String, role: UserRole, expiration_minutes: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::minutes(expiration_minutes);

        Self {
            sub: user_id.to_string(),
            email,
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Parses the subject back into a user id.
    pub fn user_id(&self) -> AppResult<i32> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid subject in token"))
    }
}

/// Generates a signed HS256 token for a user.
pub fn generate_token(
    user_id: i32,
    email: String,
    role: UserRole,
    secret: &str,
    expiration_minutes: i64,
) -> AppResult<String> {
    let claims = Claims::new(user_id, email, role, expiration_minutes);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {e}"),
    })
}

/// Validates and decodes a token.
///
/// Expired, malformed and badly signed tokens all fail with `Unauthorized`.
pub fn validate_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::unauthorized("Token has expired")
        }
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            AppError::unauthorized("Invalid token signature")
        }
        _ => AppError::unauthorized("Invalid token"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test_secret_key_for_jwt_testing_32ch";

    #[test]
    fn generated_token_is_accepted_with_same_claims() {
        let token = generate_token(
            7,
            "buyer@example.com".to_string(),
            UserRole::Customer,
            TEST_SECRET,
            60,
        )
        .unwrap();

        let claims = validate_token(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.email, "buyer@example.com");
        assert_eq!(claims.role, UserRole::Customer);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn admin_role_survives_the_round_trip() {
        let token = generate_token(
            1,
            "admin@example.com".to_string(),
            UserRole::Admin,
            TEST_SECRET,
            60,
        )
        .unwrap();

        let claims = validate_token(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_token(
            1,
            "buyer@example.com".to_string(),
            UserRole::Customer,
            TEST_SECRET,
            60,
        )
        .unwrap();

        let result = validate_token(&token, "another_secret_key_also_32_chars!");
        match result {
            Err(AppError::Unauthorized { message }) => {
                assert!(message.contains("signature"));
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn expired_token_is_rejected() {
        // negative lifetime produces a token that expired in the past
        let token = generate_token(
            1,
            "buyer@example.com".to_string(),
            UserRole::Customer,
            TEST_SECRET,
            -5,
        )
        .unwrap();

        let result = validate_token(&token, TEST_SECRET);
        match result {
            Err(AppError::Unauthorized { message }) => {
                assert!(message.contains("expired"));
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(validate_token("not.a.token", TEST_SECRET).is_err());
    }

    #[test]
    fn non_numeric_subject_is_rejected() {
        let claims = Claims {
            sub: "abc".to_string(),
            email: "x@example.com".to_string(),
            role: UserRole::Customer,
            iat: 0,
            exp: i64::MAX,
        };
        assert!(claims.user_id().is_err());
    }
}
