//! Transaction-related Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::api::dto::{ProductSummary, UserResponse};
use crate::models::{Product, PurchaseReceipt, TransactionHistory, User};

/// Purchase request payload.
#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub product_id: i32,
    #[serde(default)]
    pub quantity: i32,
}

/// Bill describing a completed purchase.
#[derive(Debug, Serialize)]
pub struct TransactionBill {
    pub total_price: i64,
    pub quantity: i32,
    pub product_title: String,
}

impl From<PurchaseReceipt> for TransactionBill {
    fn from(receipt: PurchaseReceipt) -> Self {
        Self {
            total_price: receipt.total_price,
            quantity: receipt.quantity,
            product_title: receipt.product_title,
        }
    }
}

/// Successful purchase response.
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub message: String,
    pub transaction_bill: TransactionBill,
}

/// One of the acting user's own transactions, with the product attached.
#[derive(Debug, Serialize)]
pub struct MyTransactionResponse {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub quantity: i32,
    pub total_price: i64,
    pub product: ProductSummary,
}

impl From<(TransactionHistory, Product)> for MyTransactionResponse {
    fn from((history, product): (TransactionHistory, Product)) -> Self {
        Self {
            id: history.id,
            product_id: history.product_id,
            user_id: history.user_id,
            quantity: history.quantity,
            total_price: history.total_price,
            product: ProductSummary::from(product),
        }
    }
}

/// A transaction with product and buyer, for admin reporting.
#[derive(Debug, Serialize)]
pub struct AdminTransactionResponse {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub quantity: i32,
    pub total_price: i64,
    pub product: ProductSummary,
    pub user: UserResponse,
}

impl From<(TransactionHistory, Product, User)> for AdminTransactionResponse {
    fn from((history, product, user): (TransactionHistory, Product, User)) -> Self {
        Self {
            id: history.id,
            product_id: history.product_id,
            user_id: history.user_id,
            quantity: history.quantity,
            total_price: history.total_price,
            product: ProductSummary::from(product),
            user: UserResponse::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_response_excludes_the_buyer_password() {
        use crate::models::UserRole;
        use chrono::NaiveDateTime;

        let history = TransactionHistory {
            id: 1,
            product_id: 2,
            user_id: 3,
            quantity: 4,
            total_price: 400,
            created_at: NaiveDateTime::default(),
        };
        let product = Product {
            id: 2,
            title: "Mouse".to_string(),
            price: 100,
            stock: 6,
            category_id: 1,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        };
        let user = User {
            id: 3,
            full_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "$argon2id$hash".to_string(),
            role: UserRole::Customer,
            balance: 600,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        };

        let json =
            serde_json::to_string(&AdminTransactionResponse::from((history, product, user)))
                .unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"total_price\":400"));
    }
}
