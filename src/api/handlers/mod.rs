//! HTTP request handlers.

pub mod auth;
pub mod categories;
pub mod health;
pub mod products;
pub mod transactions;
pub mod users;
