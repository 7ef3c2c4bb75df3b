//! Loan Domain - loan terms and validation
//!
//! A [`Loan`] is an immutable value object describing the terms of a loan:
//! principal, term in months, annual interest rate, amortization style, and
//! start date. Terms are validated on construction; once built, a `Loan` is
//! a valid input for schedule generation.
//!
//! Persistence is expressed through the [`LoanStore`] port so the domain
//! stays independent of any storage backend.

pub mod loan;
pub mod error;
pub mod ports;

pub use loan::{Loan, LoanType, ScheduleType, StoredLoan};
pub use error::LoanError;
pub use ports::LoanStore;
