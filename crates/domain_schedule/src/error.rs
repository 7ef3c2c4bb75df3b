//! Schedule domain errors

use domain_loan::LoanError;
use thiserror::Error;

/// Errors that can occur during schedule generation
///
/// The engine either returns a complete, invariant-satisfying schedule or one
/// of these errors; no partial schedule is ever produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// A loan term is outside the engine's domain; `field` names the input
    #[error("Invalid loan terms - {field}: {message}")]
    InvalidTerms { field: &'static str, message: String },
}

impl ScheduleError {
    /// Creates a field-qualified terms error
    pub fn invalid_terms(field: &'static str, message: impl Into<String>) -> Self {
        ScheduleError::InvalidTerms {
            field,
            message: message.into(),
        }
    }

    /// Returns the offending field name
    pub fn field(&self) -> &'static str {
        match self {
            ScheduleError::InvalidTerms { field, .. } => field,
        }
    }
}

impl From<LoanError> for ScheduleError {
    fn from(err: LoanError) -> Self {
        match err {
            LoanError::Validation { field, message } => {
                ScheduleError::InvalidTerms { field, message }
            }
        }
    }
}
