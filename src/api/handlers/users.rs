//! Authenticated user account handlers.

use axum::{extract::State, Extension, Json};

use crate::api::dto::{MessageResponse, TopUpRequest};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

/// PATCH /users/topup - Overwrite the acting user's balance
pub async fn top_up(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<TopUpRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user = state
        .services
        .users
        .top_up(auth_user.user_id, payload.balance)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Your balance has been successfully updated to Rp {}",
        user.balance
    ))))
}
