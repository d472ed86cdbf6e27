//! Category service for catalog grouping logic.

use crate::error::{AppError, AppResult};
use crate::models::{Category, NewCategory, Product, UpdateCategory};
use crate::repositories::CategoryRepository;

#[derive(Clone)]
pub struct CategoryService {
    repo: CategoryRepository,
}

impl CategoryService {
    pub fn new(repo: CategoryRepository) -> Self {
        Self { repo }
    }

    /// Creates a category with a fresh sold counter.
    pub async fn create(&self, type_: String) -> AppResult<Category> {
        if self.repo.find_by_type(&type_).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "Category".to_string(),
                field: "type".to_string(),
                value: type_,
            });
        }

        self.repo
            .create(NewCategory {
                type_,
                sold_product_amount: 0,
            })
            .await
    }

    /// Lists all categories with their products.
    ///
    /// An empty catalog is an empty list, never an error.
    pub async fn list(&self) -> AppResult<Vec<(Category, Vec<Product>)>> {
        self.repo.list_with_products().await
    }

    /// Renames a category's type.
    pub async fn update(&self, id: i32, type_: String) -> AppResult<Category> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", id))?;

        self.repo.update(id, UpdateCategory { type_ }).await
    }

    /// Deletes a category.
    ///
    /// Deletion does not cascade; a category that still has products is
    /// protected by the foreign key and the attempt fails.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category", id))?;

        self.repo.delete(id).await?;
        Ok(())
    }
}
