//! Data Transfer Objects for API requests and responses.

mod auth;
mod category;
mod error;
mod product;
mod transaction;
mod user;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use category::{
    CategoryResponse, CategoryWithProducts, CreateCategoryRequest, UpdateCategoryRequest,
};
pub use error::{ErrorResponse, MessageResponse};
pub use product::{FormattedProduct, ProductRequest, ProductSummary, UpdatedProductResponse};
pub use transaction::{
    AdminTransactionResponse, MyTransactionResponse, PurchaseRequest, PurchaseResponse,
    TransactionBill,
};
pub use user::{TopUpRequest, UserResponse};
