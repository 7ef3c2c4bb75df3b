//! HTTP API Layer
//!
//! This crate provides the REST API for the loan management system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for loans and health checks
//! - **DTOs**: Request/Response data transfer objects (camelCase wire format)
//! - **Error Handling**: Consistent error responses with per-field messages
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use domain_loan::LoanStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, loan};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LoanStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Loan persistence port implementation
/// * `config` - API configuration
pub fn create_router(store: Arc<dyn LoanStore>, config: ApiConfig) -> Router {
    let state = AppState { store, config };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Loan routes
    let loan_routes = Router::new()
        .route("/", post(loan::create_loan))
        .route("/", get(loan::list_loans))
        .route("/:id", get(loan::get_loan))
        .route("/:id/schedule", get(loan::get_schedule));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1/loans", loan_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
