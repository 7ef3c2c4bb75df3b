//! Annuity amortization - fixed total payment per period
//!
//! The constant payment comes from the annuity formula
//! `P * r * (1+r)^n / ((1+r)^n - 1)`, rounded once to the cent and then held
//! for every period except the last. Per period the interest is taken from
//! the outstanding balance and the principal is whatever remains of the
//! constant payment, so the principal share grows as the balance falls.

use domain_loan::Loan;
use rust_decimal::{Decimal, MathematicalOps};

use crate::error::ScheduleError;
use crate::generator::build_items;
use crate::schedule::ScheduleItem;

pub(crate) fn build(
    loan: &Loan,
    monthly_rate: Decimal,
) -> Result<Vec<ScheduleItem>, ScheduleError> {
    let payment = core_kernel::round_currency(annuity_payment(
        loan.amount,
        monthly_rate,
        loan.period_months,
    )?);
    Ok(build_items(loan, monthly_rate, |interest| payment - interest))
}

/// Computes the nominal constant payment before rounding.
///
/// A zero rate degenerates the formula to `0/0`; in that case the payment is
/// a straight division of the principal over the term. The compound factor
/// `(1+r)^n` outgrows `Decimal` for extreme rate/term combinations, so every
/// step is checked and overflow surfaces as a term error rather than a panic.
fn annuity_payment(
    amount: Decimal,
    monthly_rate: Decimal,
    period_months: u32,
) -> Result<Decimal, ScheduleError> {
    if monthly_rate.is_zero() {
        return Ok(amount / Decimal::from(period_months));
    }

    let compound_factor = (Decimal::ONE + monthly_rate)
        .checked_powi(period_months as i64)
        .ok_or_else(term_overflow)?;

    amount
        .checked_mul(monthly_rate)
        .and_then(|numerator| numerator.checked_mul(compound_factor))
        .and_then(|numerator| numerator.checked_div(compound_factor - Decimal::ONE))
        .ok_or_else(term_overflow)
}

fn term_overflow() -> ScheduleError {
    ScheduleError::invalid_terms(
        "period_months",
        "Term is too long to amortize at this interest rate",
    )
}
