//! Loan domain errors

use thiserror::Error;

/// Errors that can occur in the loan domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoanError {
    /// A loan term failed validation; `field` names the offending input
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },
}

impl LoanError {
    /// Creates a field-qualified validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        LoanError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Returns the offending field name, if this is a validation error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            LoanError::Validation { field, .. } => Some(field),
        }
    }
}
