//! Product-related Data Transfer Objects

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Product;
use crate::utils::format_rupiah;

/// Create/replace product payload.
///
/// PUT replaces every field, so create and update share the shape.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub category_id: i32,
}

/// Full product as stored.
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub id: i32,
    pub title: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Product returned by the update endpoint, with the price formatted
/// as Rupiah, wrapped as `{"product": {...}}`.
#[derive(Debug, Serialize)]
pub struct UpdatedProductResponse {
    pub product: FormattedProduct,
}

#[derive(Debug, Serialize)]
pub struct FormattedProduct {
    pub title: String,
    pub price: String,
    pub stock: i32,
    pub category_id: i32,
}

impl From<Product> for UpdatedProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product: FormattedProduct {
                title: product.title,
                price: format_rupiah(product.price),
                stock: product.stock,
                category_id: product.category_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: 3,
            title: "Keyboard".to_string(),
            price: 1_250_000,
            stock: 10,
            category_id: 1,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn updated_product_formats_price_as_rupiah() {
        let json = serde_json::to_value(UpdatedProductResponse::from(sample_product())).unwrap();
        assert_eq!(json["product"]["price"], "Rp. 1,250,000");
        assert_eq!(json["product"]["title"], "Keyboard");
        assert_eq!(json["product"]["stock"], 10);
    }

    #[test]
    fn empty_title_fails_validation() {
        let req = ProductRequest {
            title: String::new(),
            price: 1_000,
            stock: 1,
            category_id: 1,
        };
        assert!(req.validate().is_err());
    }
}
