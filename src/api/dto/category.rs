//! Category-related Data Transfer Objects

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::ProductSummary;
use crate::models::{Category, Product};

/// Create category payload.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "Type cannot be empty"))]
    #[serde(rename = "type")]
    pub type_: String,
}

/// Rename category payload.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, message = "Type can't be empty"))]
    #[serde(rename = "type")]
    pub type_: String,
}

/// Category returned by create and update.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub type_: String,
    pub sold_product_amount: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            type_: category.type_,
            sold_product_amount: category.sold_product_amount,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Category with its products, for the list endpoint.
#[derive(Debug, Serialize)]
pub struct CategoryWithProducts {
    pub id: i32,
    #[serde(rename = "type")]
    pub type_: String,
    pub sold_product_amount: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub products: Vec<ProductSummary>,
}

impl From<(Category, Vec<Product>)> for CategoryWithProducts {
    fn from((category, products): (Category, Vec<Product>)) -> Self {
        Self {
            id: category.id,
            type_: category.type_,
            sold_product_amount: category.sold_product_amount,
            created_at: category.created_at,
            updated_at: category.updated_at,
            products: products.into_iter().map(ProductSummary::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_serializes_under_its_json_name() {
        let category = Category {
            id: 1,
            type_: "electronics".to_string(),
            sold_product_amount: 0,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        };
        let json = serde_json::to_value(CategoryResponse::from(category)).unwrap();
        assert_eq!(json["type"], "electronics");
    }

    #[test]
    fn empty_type_fails_validation() {
        let req = CreateCategoryRequest {
            type_: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
