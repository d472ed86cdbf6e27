//! Product service for catalog business logic.

use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::repositories::{CategoryRepository, ProductRepository};

/// Upper bound on a product price.
pub const MAX_PRICE: i64 = 50_000_000;

/// Validates the numeric fields of a product payload.
pub fn validate_product(price: i64, stock: i32, category_id: i32) -> AppResult<()> {
    if price == 0 {
        return Err(AppError::bad_request("Price can't be empty or zero"));
    }
    if price < 0 || price > MAX_PRICE {
        return Err(AppError::bad_request(
            "Price must be between 0 and 50,000,000",
        ));
    }
    if stock <= 0 {
        return Err(AppError::bad_request("Stock can't be empty or zero"));
    }
    if category_id <= 0 {
        return Err(AppError::bad_request("Category can't be empty or zero"));
    }
    Ok(())
}

#[derive(Clone)]
pub struct ProductService {
    products: ProductRepository,
    categories: CategoryRepository,
}

impl ProductService {
    pub fn new(products: ProductRepository, categories: CategoryRepository) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Creates a product after checking price, stock, category and title.
    pub async fn create(
        &self,
        title: String,
        price: i64,
        stock: i32,
        category_id: i32,
    ) -> AppResult<Product> {
        validate_product(price, stock, category_id)?;

        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", category_id))?;

        if self.products.find_by_title(&title).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "Product".to_string(),
                field: "title".to_string(),
                value: title,
            });
        }

        self.products
            .create(NewProduct {
                title,
                price,
                stock,
                category_id,
            })
            .await
    }

    /// Lists all products. An empty catalog is an empty list.
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        self.products.list_all().await
    }

    /// Replaces every mutable field of a product.
    pub async fn update(
        &self,
        id: i32,
        title: String,
        price: i64,
        stock: i32,
        category_id: i32,
    ) -> AppResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product", id))?;

        validate_product(price, stock, category_id)?;

        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", category_id))?;

        self.products
            .update(
                id,
                UpdateProduct {
                    title,
                    price,
                    stock,
                    category_id,
                },
            )
            .await
    }

    /// Deletes a product.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product", id))?;

        self.products.delete(id).await?;
        Ok(())
    }
}
