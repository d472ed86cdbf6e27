//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod category_service;
mod product_service;
mod transaction_service;
mod user_service;

pub use category_service::CategoryService;
pub use product_service::{validate_product, ProductService, MAX_PRICE};
pub use transaction_service::{validate_purchase_request, TransactionService};
pub use user_service::{validate_top_up, UserService, MAX_BALANCE};

use crate::config::JwtConfig;
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub categories: CategoryService,
    pub products: ProductService,
    pub transactions: TransactionService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories, jwt_config: JwtConfig) -> Self {
        Self {
            users: UserService::new(repos.users, jwt_config),
            categories: CategoryService::new(repos.categories.clone()),
            products: ProductService::new(repos.products, repos.categories),
            transactions: TransactionService::new(repos.transactions),
        }
    }
}
