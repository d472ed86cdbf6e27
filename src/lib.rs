//! Minimart
//!
//! REST backend for a small e-commerce platform: user accounts with
//! role-based authorization, a category/product catalog and a
//! balance-funded purchase workflow.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
