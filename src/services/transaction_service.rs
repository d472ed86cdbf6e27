//! Transaction service for the purchase workflow and history listings.

use crate::error::{AppError, AppResult};
use crate::models::{Product, PurchaseReceipt, TransactionHistory, User};
use crate::repositories::TransactionRepository;

/// Validates the shape of a purchase request before touching the database.
pub fn validate_purchase_request(product_id: i32, quantity: i32) -> AppResult<()> {
    if quantity <= 0 {
        return Err(AppError::bad_request("Quantity can't be 0 or empty"));
    }
    if product_id <= 0 {
        return Err(AppError::bad_request("Product can't be empty"));
    }
    Ok(())
}

#[derive(Clone)]
pub struct TransactionService {
    repo: TransactionRepository,
}

impl TransactionService {
    pub fn new(repo: TransactionRepository) -> Self {
        Self { repo }
    }

    /// Purchases a product on behalf of a user and returns the bill.
    ///
    /// Stock, balance, the sold counter and the history row all change
    /// together or not at all.
    pub async fn purchase(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> AppResult<PurchaseReceipt> {
        validate_purchase_request(product_id, quantity)?;
        self.repo.purchase(user_id, product_id, quantity).await
    }

    /// Lists the acting user's own transactions with the purchased products.
    pub async fn my_transactions(
        &self,
        user_id: i32,
    ) -> AppResult<Vec<(TransactionHistory, Product)>> {
        self.repo.list_for_user(user_id).await
    }

    /// Lists every transaction with product and buyer. Admin only.
    pub async fn all_transactions(&self) -> AppResult<Vec<(TransactionHistory, Product, User)>> {
        self.repo.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_rejected() {
        let err = validate_purchase_request(1, 0).unwrap_err();
        match err {
            AppError::BadRequest { message } => {
                assert_eq!(message, "Quantity can't be 0 or empty");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn missing_product_id_is_rejected() {
        let err = validate_purchase_request(0, 2).unwrap_err();
        match err {
            AppError::BadRequest { message } => {
                assert_eq!(message, "Product can't be empty");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn positive_ids_and_quantities_pass() {
        assert!(validate_purchase_request(3, 2).is_ok());
    }
}
