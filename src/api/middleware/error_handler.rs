//! Error handler for converting AppError to HTTP responses.
//!
//! Implements IntoResponse for AppError with consistent status code
//! mapping. Internal error details stay in the logs; clients get a
//! sanitized message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Status code mapping:
    /// - Validation / BadRequest → 400
    /// - Unauthorized → 401
    /// - Forbidden → 403
    /// - NotFound → 404
    /// - Duplicate → 409
    /// - Database / Configuration / Internal → 500
    /// - ConnectionPool → 503
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::NotFound { entity, .. } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", &format!("{entity} not found")),
            ),
            AppError::Duplicate { entity, field, .. } => (
                StatusCode::CONFLICT,
                ErrorResponse::new("DUPLICATE", &format!("{entity} {field} already exists")),
            ),
            AppError::Validation { reason, .. } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_ERROR", reason),
            ),
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message),
            ),
            AppError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("UNAUTHORIZED", message),
            ),
            AppError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("FORBIDDEN", message),
            ),
            AppError::Database { operation, source } => {
                error!(operation = %operation, error = %source, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("DATABASE_ERROR", "Database operation failed"),
                )
            }
            AppError::Configuration { key, source } => {
                error!(key = %key, error = %source, "configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("CONFIGURATION_ERROR", "Configuration error"),
                )
            }
            AppError::ConnectionPool { source } => {
                warn!(error = %source, "connection pool exhausted or unreachable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable"),
                )
            }
            AppError::Internal { source } => {
                error!(error = %source, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}
