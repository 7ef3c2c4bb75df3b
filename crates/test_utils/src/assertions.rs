//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for repayment schedules that give
//! more meaningful error messages than standard assertions.

use core_kernel::{round_currency, CURRENCY_SCALE};
use domain_loan::Loan;
use domain_schedule::Schedule;
use rust_decimal::Decimal;

/// Asserts the structural invariants every repayment schedule must satisfy
///
/// Checks, per row and in aggregate:
/// - the schedule has exactly one row per month of the period
/// - payment = principal + interest
/// - all monetary values carry at most two decimal places
/// - the final remaining balance is exactly zero
/// - the principal portions sum exactly to the loan amount
///
/// # Panics
///
/// Panics with a row-indexed message on the first violated invariant.
pub fn assert_schedule_invariants(loan: &Loan, schedule: &Schedule) {
    assert_eq!(
        schedule.len(),
        loan.period_months as usize,
        "Expected {} rows, got {}",
        loan.period_months,
        schedule.len()
    );

    let mut expected_balance = round_currency(loan.amount);
    for (i, item) in schedule.items().iter().enumerate() {
        assert_eq!(
            item.payment,
            item.principal + item.interest,
            "Row {}: payment {} != principal {} + interest {}",
            i,
            item.payment,
            item.principal,
            item.interest
        );
        assert_scaled(item.payment, i, "payment");
        assert_scaled(item.principal, i, "principal");
        assert_scaled(item.interest, i, "interest");
        assert_scaled(item.remaining_balance, i, "remaining_balance");

        expected_balance -= item.principal;
        assert_eq!(
            item.remaining_balance, expected_balance,
            "Row {}: balance {} inconsistent with principal paid so far",
            i, item.remaining_balance
        );
    }

    let last = schedule
        .items()
        .last()
        .expect("schedule must not be empty");
    assert_eq!(
        last.remaining_balance,
        Decimal::ZERO,
        "Final balance must be zero, got {}",
        last.remaining_balance
    );

    assert_eq!(
        schedule.total_principal(),
        round_currency(loan.amount),
        "Principal portions must sum exactly to the loan amount"
    );
}

/// Asserts that two monetary values differ by at most `tolerance`
pub fn assert_amount_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

fn assert_scaled(value: Decimal, row: usize, field: &str) {
    assert!(
        value.scale() <= CURRENCY_SCALE,
        "Row {}: {} {} has more than {} decimal places",
        row,
        field,
        value,
        CURRENCY_SCALE
    );
}
