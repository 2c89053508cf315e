//! # Database Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! sqlx::Error → DbError (this module) → CoreError::{Conflict, Store}
//! ```
//!
//! The services above only know the domain taxonomy, so every database
//! failure crosses the port boundary as either a Conflict (duplicate
//! detection) or an opaque Store failure.

use sqlx::error::ErrorKind;
use thiserror::Error;

use checkout_core::CoreError;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found where one was required.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation (duplicate username).
    #[error("Duplicate {field}: already exists")]
    UniqueViolation { field: String },

    /// Foreign key constraint violation.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),

            sqlx::Error::Database(db_err) => match db_err.kind() {
                // SQLite reports "UNIQUE constraint failed: <table>.<column>";
                // keep the <table>.<column> part as the offending field.
                ErrorKind::UniqueViolation => {
                    let message = db_err.message();
                    let field = message
                        .rsplit("constraint failed: ")
                        .next()
                        .unwrap_or(message)
                        .to_string();
                    DbError::UniqueViolation { field }
                }
                ErrorKind::ForeignKeyViolation => {
                    DbError::ForeignKeyViolation(db_err.message().to_string())
                }
                _ => DbError::QueryFailed(db_err.message().to_string()),
            },

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                DbError::ConnectionFailed(err.to_string())
            }

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Translate store failures into the domain taxonomy at the port boundary.
impl From<DbError> for CoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { field } => {
                CoreError::conflict(field, "already exists")
            }
            other => CoreError::Store(other.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::not_found("User", "42");
        assert_eq!(err.to_string(), "User not found: 42");

        let err = DbError::UniqueViolation {
            field: "users.username".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate users.username: already exists");
    }

    #[test]
    fn test_unique_violation_becomes_conflict() {
        let err = DbError::UniqueViolation {
            field: "users.username".to_string(),
        };
        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::Conflict { .. }));
    }

    #[test]
    fn test_other_errors_become_store_failures() {
        let err = DbError::QueryFailed("disk I/O error".to_string());
        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::Store(_)));
    }
}
