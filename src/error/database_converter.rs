use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::{AppError, ConstraintParser};

/// Utility for converting database errors to structured AppError variants.
///
/// Unique violations become `Duplicate` (the authoritative conflict signal,
/// service-level pre-checks are only a fast path), foreign key and check
/// violations become `Validation`, and everything else stays `Database`.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message();
        let constraint_name = info.constraint_name();

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                if let Some((entity, field, value)) =
                    ConstraintParser::parse_unique_violation(message, constraint_name)
                {
                    AppError::Duplicate {
                        entity,
                        field,
                        value,
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::anyhow!("unique constraint violation: {message}"),
                    }
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                if let Some((entity, field)) =
                    ConstraintParser::parse_foreign_key_violation(constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!("invalid reference in {entity}"),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::anyhow!("foreign key constraint violation: {message}"),
                    }
                }
            }
            DatabaseErrorKind::CheckViolation => {
                if let Some((entity, field)) =
                    ConstraintParser::parse_check_violation(constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!("value out of range for {entity}"),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::anyhow!("check constraint violation: {message}"),
                    }
                }
            }
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::anyhow!("database error: {message}"),
            },
        }
    }
}
