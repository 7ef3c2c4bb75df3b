//! API error handling

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_kernel::PortError;
use domain_loan::LoanError;
use domain_schedule::ScheduleError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation {
        message: String,
        field_errors: HashMap<String, String>,
    },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl ApiError {
    /// Creates a validation error for a single offending field
    pub fn field_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.into(), message.into());
        ApiError::Validation {
            message: "One or more fields have validation errors".to_string(),
            field_errors,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<HashMap<String, String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, field_errors) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Validation {
                message,
                field_errors,
            } => (
                StatusCode::BAD_REQUEST,
                "validation_failed",
                message,
                Some(field_errors),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
            ApiError::Database(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            field_errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => {
                ApiError::NotFound(format!("{} not found: {}", entity_type, id))
            }
            PortError::Validation { message, field } => match field {
                Some(field) => ApiError::field_validation(field, message),
                None => ApiError::BadRequest(message),
            },
            PortError::Connection { message } => ApiError::Database(message),
            PortError::Internal { message } => ApiError::Internal(message),
        }
    }
}

impl From<LoanError> for ApiError {
    fn from(err: LoanError) -> Self {
        match err {
            LoanError::Validation { field, message } => ApiError::field_validation(field, message),
        }
    }
}

impl From<ScheduleError> for ApiError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::InvalidTerms { field, message } => {
                ApiError::field_validation(field, message)
            }
        }
    }
}

/// Flattens `validator` errors into the per-field error map of the response
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string());
                (field.to_string(), message)
            })
            .collect();

        ApiError::Validation {
            message: "One or more fields have validation errors".to_string(),
            field_errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::NotFound("Loan not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400_with_fields() {
        let err = ApiError::field_validation("amount", "Amount must be greater than 0");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_port_not_found_conversion() {
        let err: ApiError = PortError::not_found("Loan", "LN-123").into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
