//! Database error types

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored value could not be mapped back to its domain type
    #[error("Row mapping error: {0}")]
    RowMapping(String),

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Creates a not found error for a specific entity type and identifier
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound { .. })
    }
}

/// Maps database failures onto the storage port error the domain understands.
impl From<DatabaseError> for PortError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { entity, id } => PortError::NotFound {
                entity_type: entity,
                id,
            },
            DatabaseError::ConnectionFailed(msg) => PortError::Connection { message: msg },
            other => PortError::internal(other.to_string()),
        }
    }
}

/// Converts SQLx errors to more specific DatabaseError variants
///
/// Analyzes the underlying PostgreSQL error code where one is available.
/// <https://www.postgresql.org/docs/current/errcodes-appendix.html>
pub(crate) fn classify_sqlx_error(error: sqlx::Error) -> DatabaseError {
    match &error {
        sqlx::Error::RowNotFound => DatabaseError::not_found("Record", "unknown"),
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                    "23514" => DatabaseError::ConstraintViolation(db_err.message().to_string()),
                    _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                }
            } else {
                DatabaseError::QueryFailed(db_err.message().to_string())
            }
        }
        _ => DatabaseError::SqlError(error),
    }
}
