use diesel::prelude::*;
use serde::Deserialize;

use crate::models::Category;

/// Product model for reading from database.
///
/// Price is in the smallest currency unit; stock may never go negative.
#[derive(Debug, Queryable, Selectable, Identifiable, Associations, Clone, PartialEq)]
#[diesel(table_name = crate::schema::products)]
#[diesel(belongs_to(Category))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: i32,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// NewProduct model for inserting new records.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub title: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: i32,
}

/// UpdateProduct model overwriting all mutable fields.
#[derive(Debug, AsChangeset, Deserialize, Clone)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct {
    pub title: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: i32,
}
