//! Request/Response data transfer objects

pub mod loan;
pub mod schedule;

pub use loan::{CreateLoanRequest, ListLoansParams, LoanResponse};
pub use schedule::{ScheduleItemResponse, ScheduleResponse};
