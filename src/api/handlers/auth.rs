//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, Json};

use crate::api::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// POST /users/register - Create a customer account
///
/// Every registration produces a `customer` with balance 0; the
/// password is stored only as a hash and never echoed back.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .services
        .users
        .register(payload.full_name, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /users/login - Exchange credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state
        .services
        .users
        .authenticate(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}
