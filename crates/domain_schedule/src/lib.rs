//! Schedule Domain - Amortization Schedule Generation
//!
//! This crate turns validated loan terms into a repayment schedule: the
//! ordered sequence of payments with their interest/principal split,
//! remaining balance, and calendar date.
//!
//! # Amortization styles
//!
//! - **Annuity**: fixed total payment per period; the interest share shrinks
//!   and the principal share grows as the balance falls.
//! - **Equal principal**: fixed principal per period; the total payment
//!   shrinks as the interest base falls.
//!
//! In both styles the final period's principal is the remaining balance
//! itself, which forces the schedule to zero out exactly and pushes all
//! cumulative rounding drift into the last row.
//!
//! # Invariants
//!
//! For every generated schedule:
//! - the last remaining balance is exactly `0.00`
//! - the principal components sum to the loan amount exactly
//! - `payment = principal + interest` in every row
//! - every value is rounded to the cent at computation time, and the rounded
//!   balance is the next period's interest base
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_schedule::generate;
//!
//! let schedule = generate(&loan)?;
//! assert!(schedule.items().last().unwrap().remaining_balance.is_zero());
//! ```

pub mod schedule;
pub mod generator;
pub mod error;

mod annuity;
mod equal_principal;

pub use schedule::{Schedule, ScheduleItem};
pub use generator::generate;
pub use error::ScheduleError;
