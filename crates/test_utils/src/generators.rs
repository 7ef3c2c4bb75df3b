//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random loan terms that
//! maintain domain invariants.

use chrono::NaiveDate;
use domain_loan::{Loan, LoanType, ScheduleType};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid LoanType values
pub fn loan_type_strategy() -> impl Strategy<Value = LoanType> {
    prop_oneof![
        Just(LoanType::Consumer),
        Just(LoanType::Car),
        Just(LoanType::Mortgage),
    ]
}

/// Strategy for generating valid ScheduleType values
pub fn schedule_type_strategy() -> impl Strategy<Value = ScheduleType> {
    prop_oneof![Just(ScheduleType::Annuity), Just(ScheduleType::EqualPrincipal)]
}

/// Strategy for generating positive loan amounts in cents (0.01 to 10,000,000.00)
pub fn amount_cents_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating repayment periods in months (1 to 480)
pub fn period_months_strategy() -> impl Strategy<Value = u32> {
    1u32..=480u32
}

/// Strategy for generating annual interest rates in basis points (0% to 100%)
pub fn rate_basis_points_strategy() -> impl Strategy<Value = u32> {
    0u32..=10_000u32
}

/// Strategy for generating valid start dates between 2000 and 2050
pub fn start_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2050i32, 1u32..=12u32, 1u32..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for generating complete valid loans
pub fn loan_strategy() -> impl Strategy<Value = Loan> {
    (
        loan_type_strategy(),
        amount_cents_strategy(),
        period_months_strategy(),
        rate_basis_points_strategy(),
        schedule_type_strategy(),
        start_date_strategy(),
    )
        .prop_map(|(loan_type, cents, months, bp, schedule_type, start)| {
            Loan::new(
                loan_type,
                Decimal::new(cents, 2),
                months,
                Decimal::new(bp as i64, 2),
                schedule_type,
                start,
            )
            .unwrap()
        })
}
