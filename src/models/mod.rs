mod category;
mod product;
mod transaction;
mod user;

pub use category::{Category, NewCategory, UpdateCategory};
pub use product::{NewProduct, Product, UpdateProduct};
pub use transaction::{NewTransactionHistory, PurchaseReceipt, TransactionHistory};
pub use user::{NewUser, User, UserRole};
