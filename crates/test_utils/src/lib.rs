//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! Loan Management Core test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test loans for common scenarios
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for schedules and money values
//! - `generators`: Property-based test data generators
//! - `stores`: In-memory port implementations for API tests

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod stores;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use stores::*;
