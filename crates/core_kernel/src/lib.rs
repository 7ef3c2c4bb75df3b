//! Core Kernel - Foundational types and utilities for the loan management system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Currency rounding policy and interest rate types with precise decimal arithmetic
//! - Calendar month arithmetic with end-of-month clamping
//! - Common identifiers and the persistence port error type

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use money::{round_currency, Rate, CURRENCY_SCALE};
pub use temporal::{months_after, payment_dates};
pub use identifiers::LoanId;
pub use ports::PortError;
