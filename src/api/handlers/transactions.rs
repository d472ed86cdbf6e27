//! Purchase and transaction history handlers.

use axum::{extract::State, Extension, Json};

use crate::api::dto::{
    AdminTransactionResponse, MyTransactionResponse, PurchaseRequest, PurchaseResponse,
    TransactionBill,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

/// POST /transactions - Purchase a product
///
/// Runs the whole stock/balance/history/counter mutation atomically and
/// returns the bill.
pub async fn create_transaction(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<PurchaseRequest>,
) -> AppResult<Json<PurchaseResponse>> {
    let receipt = state
        .services
        .transactions
        .purchase(auth_user.user_id, payload.product_id, payload.quantity)
        .await?;

    Ok(Json(PurchaseResponse {
        message: "You have successfully purchased the product".to_string(),
        transaction_bill: TransactionBill::from(receipt),
    }))
}

/// GET /transactions/my-transactions - The acting user's own history
pub async fn my_transactions(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<MyTransactionResponse>>> {
    let transactions = state
        .services
        .transactions
        .my_transactions(auth_user.user_id)
        .await?;
    Ok(Json(
        transactions
            .into_iter()
            .map(MyTransactionResponse::from)
            .collect(),
    ))
}

/// GET /transactions/user-transactions - Every user's history, admin-only
pub async fn all_transactions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AdminTransactionResponse>>> {
    let transactions = state.services.transactions.all_transactions().await?;
    Ok(Json(
        transactions
            .into_iter()
            .map(AdminTransactionResponse::from)
            .collect(),
    ))
}
