//! Port error type for the persistence boundary
//!
//! Domain crates define port traits (e.g. `LoanStore`) that depend only on
//! this crate; infrastructure adapters implement them and map their own
//! errors into `PortError`. The HTTP layer translates `PortError` into
//! user-visible responses.

use thiserror::Error;

/// Error type for port operations
///
/// A unified error type that all port implementations use, keeping domain
/// code independent of any particular storage backend.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PortError {
    /// Creates a not-found error for an entity type and identifier
    pub fn not_found(entity_type: impl Into<String>, id: impl std::fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a missing entity
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}
