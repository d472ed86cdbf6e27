//! Transaction history repository.
//!
//! The purchase path runs as a single database transaction with row locks,
//! so stock, balance and the sold counter can never drift apart under
//! concurrent purchases.

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewTransactionHistory, Product, PurchaseReceipt, TransactionHistory, User};
use crate::utils::format_rupiah;

/// Validates a purchase against the current product and buyer state.
///
/// Returns the total price when the purchase is possible.
pub fn check_purchase(stock: i32, price: i64, balance: i64, quantity: i32) -> Result<i64, AppError> {
    if stock == 0 {
        return Err(AppError::bad_request("Product is out of stock"));
    }
    if quantity > stock {
        return Err(AppError::bad_request(format!(
            "Insufficient stock. Only {stock} stocks left."
        )));
    }

    let total_price = price
        .checked_mul(i64::from(quantity))
        .ok_or_else(|| AppError::bad_request("Total price is out of range"))?;

    if balance < total_price {
        return Err(AppError::bad_request(format!(
            "Insufficient balance. Total price: {}, your balance: {}",
            format_rupiah(total_price),
            format_rupiah(balance)
        )));
    }

    Ok(total_price)
}

/// Row operations the purchase workflow performs inside its transaction.
///
/// Factored out of the Postgres connection so the workflow itself can be
/// driven against an in-memory store in tests.
trait PurchaseOps {
    async fn lock_product(&mut self, product_id: i32) -> Result<Option<Product>, AppError>;
    async fn lock_buyer(&mut self, user_id: i32) -> Result<Option<User>, AppError>;
    async fn set_stock(&mut self, product_id: i32, stock: i32) -> Result<(), AppError>;
    async fn set_balance(&mut self, user_id: i32, balance: i64) -> Result<(), AppError>;
    async fn bump_sold_counter(&mut self, category_id: i32, quantity: i32)
        -> Result<(), AppError>;
    async fn record_history(&mut self, record: NewTransactionHistory) -> Result<(), AppError>;
}

/// The purchase mutation sequence: lock both rows, validate, then the four
/// writes (stock, balance, sold counter, history row).
///
/// Validation happens strictly before the first write and the caller wraps
/// the sequence in one transaction, so a failure on any step leaves every
/// row as it was.
async fn run_purchase<S: PurchaseOps>(
    store: &mut S,
    buyer_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<PurchaseReceipt, AppError> {
    let product = store
        .lock_product(product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product", product_id))?;
    let buyer = store
        .lock_buyer(buyer_id)
        .await?
        .ok_or_else(|| AppError::not_found("User", buyer_id))?;

    let total_price = check_purchase(product.stock, product.price, buyer.balance, quantity)?;

    store.set_stock(product.id, product.stock - quantity).await?;
    store
        .set_balance(buyer.id, buyer.balance - total_price)
        .await?;
    store
        .bump_sold_counter(product.category_id, quantity)
        .await?;
    store
        .record_history(NewTransactionHistory {
            product_id: product.id,
            user_id: buyer.id,
            quantity,
            total_price,
        })
        .await?;

    Ok(PurchaseReceipt {
        total_price,
        quantity,
        product_title: product.title,
    })
}

/// Purchase operations backed by a live Postgres connection.
///
/// The product and buyer reads take `FOR UPDATE` row locks, product first,
/// serializing concurrent purchases per product and per buyer.
struct PgPurchaseOps<'a> {
    conn: &'a mut AsyncPgConnection,
}

impl PurchaseOps for PgPurchaseOps<'_> {
    async fn lock_product(&mut self, product_id: i32) -> Result<Option<Product>, AppError> {
        use crate::schema::products;

        products::table
            .filter(products::id.eq(product_id))
            .select(Product::as_select())
            .for_update()
            .first(&mut *self.conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn lock_buyer(&mut self, user_id: i32) -> Result<Option<User>, AppError> {
        use crate::schema::users;

        users::table
            .filter(users::id.eq(user_id))
            .select(User::as_select())
            .for_update()
            .first(&mut *self.conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn set_stock(&mut self, product_id: i32, stock: i32) -> Result<(), AppError> {
        use crate::schema::products;

        diesel::update(products::table.filter(products::id.eq(product_id)))
            .set(products::stock.eq(stock))
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }

    async fn set_balance(&mut self, user_id: i32, balance: i64) -> Result<(), AppError> {
        use crate::schema::users;

        diesel::update(users::table.filter(users::id.eq(user_id)))
            .set(users::balance.eq(balance))
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }

    async fn bump_sold_counter(
        &mut self,
        category_id: i32,
        quantity: i32,
    ) -> Result<(), AppError> {
        use crate::schema::categories;

        diesel::update(categories::table.filter(categories::id.eq(category_id)))
            .set(categories::sold_product_amount.eq(categories::sold_product_amount + quantity))
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }

    async fn record_history(&mut self, record: NewTransactionHistory) -> Result<(), AppError> {
        use crate::schema::transaction_histories;

        diesel::insert_into(transaction_histories::table)
            .values(&record)
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct TransactionRepository {
    pool: AsyncDbPool,
}

impl TransactionRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Purchases `quantity` units of a product on behalf of a user.
    ///
    /// Runs [`run_purchase`] inside one transaction; any failure rolls the
    /// whole purchase back.
    pub async fn purchase(
        &self,
        buyer_id: i32,
        wanted_product_id: i32,
        wanted_quantity: i32,
    ) -> Result<PurchaseReceipt, AppError> {
        let mut pooled = self.pool.get().await?;
        let conn: &mut AsyncPgConnection = &mut pooled;

        conn.transaction::<PurchaseReceipt, AppError, _>(|conn| {
            async move {
                let mut ops = PgPurchaseOps { conn };
                run_purchase(&mut ops, buyer_id, wanted_product_id, wanted_quantity).await
            }
            .scope_boxed()
        })
        .await
    }

    /// Lists a user's transactions, each joined with the purchased product.
    pub async fn list_for_user(
        &self,
        buyer_id: i32,
    ) -> Result<Vec<(TransactionHistory, Product)>, AppError> {
        use crate::schema::{products, transaction_histories};
        let mut conn = self.pool.get().await?;

        transaction_histories::table
            .inner_join(products::table)
            .filter(transaction_histories::user_id.eq(buyer_id))
            .order(transaction_histories::id.asc())
            .select((TransactionHistory::as_select(), Product::as_select()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists every transaction with product and buyer, for admin reporting.
    pub async fn list_all(
        &self,
    ) -> Result<Vec<(TransactionHistory, Product, User)>, AppError> {
        use crate::schema::{products, transaction_histories, users};
        let mut conn = self.pool.get().await?;

        transaction_histories::table
            .inner_join(products::table)
            .inner_join(users::table)
            .order(transaction_histories::id.asc())
            .select((
                TransactionHistory::as_select(),
                Product::as_select(),
                User::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use chrono::NaiveDateTime;

    #[test]
    fn valid_purchase_returns_total_price() {
        // stock 5, price 100, balance 1000, buying 3
        assert_eq!(check_purchase(5, 100, 1_000, 3).unwrap(), 300);
    }

    #[test]
    fn buying_the_entire_stock_is_allowed() {
        assert_eq!(check_purchase(5, 100, 1_000, 5).unwrap(), 500);
    }

    #[test]
    fn out_of_stock_product_is_rejected() {
        let err = check_purchase(0, 100, 1_000, 1).unwrap_err();
        match err {
            AppError::BadRequest { message } => {
                assert_eq!(message, "Product is out of stock");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn insufficient_stock_reports_remaining_units() {
        let err = check_purchase(2, 100, 1_000, 3).unwrap_err();
        match err {
            AppError::BadRequest { message } => {
                assert_eq!(message, "Insufficient stock. Only 2 stocks left.");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn insufficient_balance_reports_formatted_amounts() {
        let err = check_purchase(10, 25_000, 40_000, 2).unwrap_err();
        match err {
            AppError::BadRequest { message } => {
                assert_eq!(
                    message,
                    "Insufficient balance. Total price: Rp. 50,000, your balance: Rp. 40,000"
                );
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn balance_exactly_equal_to_total_is_enough() {
        assert_eq!(check_purchase(10, 25_000, 50_000, 2).unwrap(), 50_000);
    }

    #[test]
    fn total_price_overflow_is_rejected() {
        let err = check_purchase(i32::MAX, i64::MAX / 2, i64::MAX, i32::MAX).unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    /// In-memory store standing in for the locked Postgres rows. Writes
    /// apply immediately, so any write reaching it on a failed purchase
    /// shows up in the assertions.
    #[derive(Default)]
    struct MemStore {
        product: Option<Product>,
        buyer: Option<User>,
        sold_by_category: Vec<(i32, i32)>,
        history: Vec<NewTransactionHistory>,
    }

    impl PurchaseOps for MemStore {
        async fn lock_product(&mut self, product_id: i32) -> Result<Option<Product>, AppError> {
            Ok(self.product.clone().filter(|p| p.id == product_id))
        }

        async fn lock_buyer(&mut self, user_id: i32) -> Result<Option<User>, AppError> {
            Ok(self.buyer.clone().filter(|u| u.id == user_id))
        }

        async fn set_stock(&mut self, product_id: i32, stock: i32) -> Result<(), AppError> {
            if let Some(product) = self.product.as_mut().filter(|p| p.id == product_id) {
                product.stock = stock;
            }
            Ok(())
        }

        async fn set_balance(&mut self, user_id: i32, balance: i64) -> Result<(), AppError> {
            if let Some(buyer) = self.buyer.as_mut().filter(|u| u.id == user_id) {
                buyer.balance = balance;
            }
            Ok(())
        }

        async fn bump_sold_counter(
            &mut self,
            category_id: i32,
            quantity: i32,
        ) -> Result<(), AppError> {
            self.sold_by_category.push((category_id, quantity));
            Ok(())
        }

        async fn record_history(&mut self, record: NewTransactionHistory) -> Result<(), AppError> {
            self.history.push(record);
            Ok(())
        }
    }

    fn seeded_store(stock: i32, price: i64, balance: i64) -> MemStore {
        MemStore {
            product: Some(Product {
                id: 7,
                title: "Mechanical Keyboard".to_string(),
                price,
                stock,
                category_id: 2,
                created_at: NaiveDateTime::default(),
                updated_at: NaiveDateTime::default(),
            }),
            buyer: Some(User {
                id: 3,
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                password: "$argon2id$hash".to_string(),
                role: UserRole::Customer,
                balance,
                created_at: NaiveDateTime::default(),
                updated_at: NaiveDateTime::default(),
            }),
            ..MemStore::default()
        }
    }

    #[tokio::test]
    async fn purchase_applies_all_four_writes() {
        let mut store = seeded_store(5, 100, 1_000);

        let receipt = run_purchase(&mut store, 3, 7, 3).await.unwrap();
        assert_eq!(receipt.total_price, 300);
        assert_eq!(receipt.quantity, 3);
        assert_eq!(receipt.product_title, "Mechanical Keyboard");

        assert_eq!(store.product.as_ref().unwrap().stock, 2);
        assert_eq!(store.buyer.as_ref().unwrap().balance, 700);
        assert_eq!(store.sold_by_category, vec![(2, 3)]);
        assert_eq!(store.history.len(), 1);
        let row = &store.history[0];
        assert_eq!(row.product_id, 7);
        assert_eq!(row.user_id, 3);
        assert_eq!(row.quantity, 3);
        assert_eq!(row.total_price, 300);
    }

    #[tokio::test]
    async fn insufficient_stock_leaves_every_row_untouched() {
        let mut store = seeded_store(2, 100, 1_000);

        let err = run_purchase(&mut store, 3, 7, 3).await.unwrap_err();
        match err {
            AppError::BadRequest { message } => {
                assert_eq!(message, "Insufficient stock. Only 2 stocks left.");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }

        assert_eq!(store.product.as_ref().unwrap().stock, 2);
        assert_eq!(store.buyer.as_ref().unwrap().balance, 1_000);
        assert!(store.sold_by_category.is_empty());
        assert!(store.history.is_empty());
    }

    #[tokio::test]
    async fn insufficient_balance_leaves_every_row_untouched() {
        let mut store = seeded_store(5, 100, 200);

        let err = run_purchase(&mut store, 3, 7, 3).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        assert_eq!(store.product.as_ref().unwrap().stock, 5);
        assert_eq!(store.buyer.as_ref().unwrap().balance, 200);
        assert!(store.sold_by_category.is_empty());
        assert!(store.history.is_empty());
    }

    #[tokio::test]
    async fn missing_product_writes_nothing() {
        let mut store = seeded_store(5, 100, 1_000);

        let err = run_purchase(&mut store, 3, 99, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        assert_eq!(store.buyer.as_ref().unwrap().balance, 1_000);
        assert!(store.sold_by_category.is_empty());
        assert!(store.history.is_empty());
    }

    #[tokio::test]
    async fn missing_buyer_writes_nothing() {
        let mut store = seeded_store(5, 100, 1_000);

        let err = run_purchase(&mut store, 99, 7, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        assert_eq!(store.product.as_ref().unwrap().stock, 5);
        assert!(store.sold_by_category.is_empty());
        assert!(store.history.is_empty());
    }
}
