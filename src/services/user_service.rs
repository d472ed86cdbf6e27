//! User service for registration, login and balance top-up.

use tracing::info;

use crate::config::{JwtConfig, SeedConfig};
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User, UserRole};
use crate::repositories::UserRepository;
use crate::utils::{jwt, password};

/// Upper bound on a top-up, matching the balance range the store allows.
pub const MAX_BALANCE: i64 = 100_000_000;

/// Validates a top-up amount.
///
/// A top-up overwrites the balance, so the amount itself must sit in the
/// storable balance range and may not be zero.
pub fn validate_top_up(amount: i64) -> AppResult<()> {
    if amount == 0 {
        return Err(AppError::bad_request("Balance cannot be empty or zero"));
    }
    if amount < 0 || amount > MAX_BALANCE {
        return Err(AppError::bad_request(
            "Balance must be between 0 and 100,000,000",
        ));
    }
    Ok(())
}

/// User service for handling account business logic.
///
/// Wraps the `UserRepository`; cloning is cheap since the repository
/// holds the pool by `Arc`.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
    jwt: JwtConfig,
}

impl UserService {
    pub fn new(repo: UserRepository, jwt: JwtConfig) -> Self {
        Self { repo, jwt }
    }

    /// Registers a new customer account.
    ///
    /// The password arrives pre-validated (non-empty, at least 6 chars) and
    /// is stored only as an Argon2 hash. Every registration gets role
    /// `customer` and balance 0; admin accounts come from seeding only.
    pub async fn register(&self, full_name: String, email: String, plain_password: String) -> AppResult<User> {
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "User".to_string(),
                field: "email".to_string(),
                value: email,
            });
        }

        let hashed = password::hash_password(&plain_password)?;
        self.repo
            .create(NewUser {
                full_name,
                email,
                password: hashed,
                role: UserRole::Customer,
                balance: 0,
            })
            .await
    }

    /// Verifies credentials and issues a signed token.
    ///
    /// Unknown email and wrong password fail identically, so a caller
    /// cannot probe which accounts exist.
    pub async fn authenticate(&self, email: &str, plain_password: &str) -> AppResult<String> {
        let user = match self.repo.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(AppError::unauthorized("Invalid email or password")),
        };

        if !password::verify_password(plain_password, &user.password)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        jwt::generate_token(
            user.id,
            user.email,
            user.role,
            &self.jwt.secret,
            self.jwt.token_expiration_minutes,
        )
    }

    /// Overwrites a user's balance with a new amount.
    ///
    /// This is an absolute set, not an increment.
    pub async fn top_up(&self, user_id: i32, amount: i64) -> AppResult<User> {
        validate_top_up(amount)?;

        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User", user_id))?;

        self.repo.update_balance(user_id, amount).await
    }

    /// Creates the configured admin account if it does not exist yet.
    pub async fn ensure_seed_admin(&self, seed: &SeedConfig) -> AppResult<()> {
        if !seed.enabled {
            return Ok(());
        }
        if self.repo.find_by_email(&seed.admin_email).await?.is_some() {
            return Ok(());
        }

        let hashed = password::hash_password(&seed.admin_password)?;
        let admin = self
            .repo
            .create(NewUser {
                full_name: seed.admin_full_name.clone(),
                email: seed.admin_email.clone(),
                password: hashed,
                role: UserRole::Admin,
                balance: seed.admin_balance,
            })
            .await?;
        info!(email = %admin.email, "seeded admin account");
        Ok(())
    }
}
