//! Category repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Category, NewCategory, Product, UpdateCategory};

#[derive(Clone)]
pub struct CategoryRepository {
    pool: AsyncDbPool,
}

impl CategoryRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new category.
    ///
    /// A violation of the type unique constraint surfaces as `Duplicate`.
    pub async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(categories)
            .values(&new_category)
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists all categories, each paired with the products that belong to it.
    ///
    /// Loads categories and products in two queries and groups in memory.
    pub async fn list_with_products(&self) -> Result<Vec<(Category, Vec<Product>)>, AppError> {
        let mut conn = self.pool.get().await?;

        let all_categories: Vec<Category> = crate::schema::categories::table
            .select(Category::as_select())
            .order(crate::schema::categories::id.asc())
            .load(&mut conn)
            .await?;

        let all_products: Vec<Product> = Product::belonging_to(&all_categories)
            .select(Product::as_select())
            .load(&mut conn)
            .await?;

        Ok(all_products
            .grouped_by(&all_categories)
            .into_iter()
            .zip(all_categories)
            .map(|(products, category)| (category, products))
            .collect())
    }

    /// Finds a category by its ID.
    pub async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>, AppError> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        categories
            .filter(id.eq(category_id))
            .select(Category::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a category by its type name.
    pub async fn find_by_type(&self, category_type: &str) -> Result<Option<Category>, AppError> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        categories
            .filter(type_.eq(category_type))
            .select(Category::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Renames a category's type.
    pub async fn update(
        &self,
        category_id: i32,
        update_data: UpdateCategory,
    ) -> Result<Category, AppError> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(categories.filter(id.eq(category_id)))
            .set(&update_data)
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a category.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, category_id: i32) -> Result<usize, AppError> {
        use crate::schema::categories::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(categories.filter(id.eq(category_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
