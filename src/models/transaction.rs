use diesel::prelude::*;

use crate::models::{Product, User};

/// Immutable record of one purchase.
///
/// Rows are only ever inserted by the purchase workflow; there is no
/// changeset struct on purpose.
#[derive(Debug, Queryable, Selectable, Identifiable, Associations, Clone, PartialEq)]
#[diesel(table_name = crate::schema::transaction_histories)]
#[diesel(belongs_to(Product))]
#[diesel(belongs_to(User))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TransactionHistory {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub quantity: i32,
    pub total_price: i64,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::transaction_histories)]
pub struct NewTransactionHistory {
    pub product_id: i32,
    pub user_id: i32,
    pub quantity: i32,
    pub total_price: i64,
}

/// Receipt returned to the buyer after a successful purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseReceipt {
    pub total_price: i64,
    pub quantity: i32,
    pub product_title: String,
}
