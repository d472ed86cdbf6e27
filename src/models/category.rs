use diesel::prelude::*;
use serde::Deserialize;

/// Category model for reading from database.
///
/// `sold_product_amount` is the running counter of units sold across all
/// products in the category, bumped only by successful purchases.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub id: i32,
    pub type_: String,
    pub sold_product_amount: i32,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// NewCategory model for inserting new records.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub type_: String,
    pub sold_product_amount: i32,
}

/// UpdateCategory model for renaming a category.
#[derive(Debug, AsChangeset, Deserialize, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct UpdateCategory {
    pub type_: String,
}
