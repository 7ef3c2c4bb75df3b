//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the loan management
//! system on PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: [`repositories::LoanRepository`]
//! implements the `LoanStore` port from `domain_loan`, hiding all SQL and
//! row-mapping details from the domain and HTTP layers.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, repositories::LoanRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/loans")).await?;
//! let repo = LoanRepository::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use repositories::LoanRepository;
