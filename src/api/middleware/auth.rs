//! JWT authentication and role-gating middleware.
//!
//! `auth_middleware` validates the bearer token and stashes the caller's
//! identity in request extensions; `admin_middleware` additionally
//! requires the `admin` role.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::UserRole;
use crate::state::AppState;
use crate::utils::jwt::{validate_token, Claims};

/// Authenticated caller information, extracted in handlers via
/// `Extension<AuthUser>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
    pub role: UserRole,
}

impl TryFrom<Claims> for AuthUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> AppResult<Self> {
        Ok(Self {
            user_id: claims.user_id()?,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// Pulls the token string out of an Authorization header value.
///
/// Accepts both a bare token and the `Bearer <token>` form.
fn extract_token(header_value: &str) -> &str {
    header_value
        .strip_prefix("Bearer ")
        .unwrap_or(header_value)
        .trim()
}

fn authenticate(state: &AppState, request: &Request) -> AppResult<AuthUser> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Invalid Token"))?;

    let token = extract_token(auth_header);
    let claims = validate_token(token, &state.jwt_config.secret)
        .map_err(|_| AppError::unauthorized("Invalid Token"))?;
    AuthUser::try_from(claims)
}

/// Requires a valid token; any authenticated role passes.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(&state, &request)?;
    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}

/// Requires a valid token with the `admin` role.
pub async fn admin_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(&state, &request)?;
    if auth_user.role != UserRole::Admin {
        return Err(AppError::Forbidden {
            message: "Unauthorized".to_string(),
        });
    }
    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}
