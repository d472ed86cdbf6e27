//! Product catalog handlers.
//!
//! Reading the product list requires any authenticated user; mutations
//! are admin-only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{MessageResponse, ProductRequest, ProductSummary, UpdatedProductResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// POST /products - Create a product
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<(StatusCode, Json<ProductSummary>)> {
    let product = state
        .services
        .products
        .create(
            payload.title,
            payload.price,
            payload.stock,
            payload.category_id,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ProductSummary::from(product))))
}

/// GET /products - List all products
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductSummary>>> {
    let products = state.services.products.list().await?;
    Ok(Json(
        products.into_iter().map(ProductSummary::from).collect(),
    ))
}

/// PUT /products/{productId} - Replace a product
///
/// Responds with the product wrapped in `{"product": ...}` and the
/// price formatted as Rupiah.
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<Json<UpdatedProductResponse>> {
    let product = state
        .services
        .products
        .update(
            product_id,
            payload.title,
            payload.price,
            payload.stock,
            payload.category_id,
        )
        .await?;
    Ok(Json(UpdatedProductResponse::from(product)))
}

/// DELETE /products/{productId} - Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.products.delete(product_id).await?;
    Ok(Json(MessageResponse::new(
        "Product has been successfully deleted",
    )))
}
