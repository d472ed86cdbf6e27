//! Middleware components for request processing.
//!
//! This module contains middleware for logging, request ID tracking,
//! error handling, and authentication.

mod auth;
mod error_handler;
mod logging;
mod request_id;

pub use auth::{admin_middleware, auth_middleware, AuthUser};
pub use logging::logging_middleware;
pub use request_id::{request_id_middleware, RequestId};
