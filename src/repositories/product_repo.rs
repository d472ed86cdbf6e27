//! Product repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewProduct, Product, UpdateProduct};

#[derive(Clone)]
pub struct ProductRepository {
    pool: AsyncDbPool,
}

impl ProductRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new product.
    ///
    /// A violation of the title unique constraint surfaces as `Duplicate`,
    /// a missing category as a foreign key `Validation` error.
    pub async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(products)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists all products ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .select(Product::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a product by its ID.
    pub async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .filter(id.eq(product_id))
            .select(Product::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a product by its title.
    pub async fn find_by_title(&self, product_title: &str) -> Result<Option<Product>, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .filter(title.eq(product_title))
            .select(Product::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Replaces a product's mutable fields.
    pub async fn update(
        &self,
        product_id: i32,
        update_data: UpdateProduct,
    ) -> Result<Product, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(products.filter(id.eq(product_id)))
            .set(&update_data)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a product.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, product_id: i32) -> Result<usize, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(products.filter(id.eq(product_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
