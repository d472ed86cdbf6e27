//! Category catalog handlers. All routes here are admin-only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{
    CategoryResponse, CategoryWithProducts, CreateCategoryRequest, MessageResponse,
    UpdateCategoryRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// POST /categories - Create a category
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    let category = state.services.categories.create(payload.type_).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

/// GET /categories - List categories with their products
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryWithProducts>>> {
    let categories = state.services.categories.list().await?;
    Ok(Json(
        categories
            .into_iter()
            .map(CategoryWithProducts::from)
            .collect(),
    ))
}

/// PATCH /categories/{categoryId} - Rename a category
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state
        .services
        .categories
        .update(category_id, payload.type_)
        .await?;
    Ok(Json(CategoryResponse::from(category)))
}

/// DELETE /categories/{categoryId} - Delete a category
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.categories.delete(category_id).await?;
    Ok(Json(MessageResponse::new(
        "Category has been successfully deleted",
    )))
}
