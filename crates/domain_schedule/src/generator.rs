//! Schedule generation entry point and the shared amortization loop

use core_kernel::{payment_dates, round_currency, Rate};
use domain_loan::{Loan, ScheduleType};
use rust_decimal::Decimal;

use crate::annuity;
use crate::equal_principal;
use crate::error::ScheduleError;
use crate::schedule::{Schedule, ScheduleItem};

/// Generates the repayment schedule for a loan.
///
/// Pure and deterministic: the same terms always produce the same schedule.
/// Dispatches on the loan's [`ScheduleType`] to the annuity or
/// equal-principal strategy.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTerms`] if the amount is not positive,
/// the term is shorter than one month, or the rate is outside `[0, 100]`.
/// A zero term would also divide by zero in both strategies, so terms are
/// re-checked here even when the caller has already validated. Annuity terms
/// whose compound factor exceeds `Decimal`'s range are likewise reported as
/// a term error rather than overflowing.
pub fn generate(loan: &Loan) -> Result<Schedule, ScheduleError> {
    loan.validate()?;

    let monthly_rate = Rate::from_percentage(loan.annual_interest_rate).monthly();

    tracing::debug!(
        schedule_type = loan.schedule_type.as_str(),
        amount = %loan.amount,
        period_months = loan.period_months,
        %monthly_rate,
        "Generating repayment schedule"
    );

    let items = match loan.schedule_type {
        ScheduleType::Annuity => annuity::build(loan, monthly_rate)?,
        ScheduleType::EqualPrincipal => equal_principal::build(loan, monthly_rate),
    };

    Ok(Schedule::new(items))
}

/// Runs the amortization loop shared by both strategies.
///
/// Per period: interest is the rounded product of the outstanding balance and
/// the monthly rate; the strategy supplies the principal from that interest.
/// The final period ignores the strategy and repays the outstanding balance
/// itself, so the schedule zeroes out exactly and cumulative rounding drift
/// lands in the last row.
///
/// Every figure here is kept at currency precision: the balance starts
/// rounded and only ever changes by rounded principals.
pub(crate) fn build_items<F>(
    loan: &Loan,
    monthly_rate: Decimal,
    principal_for: F,
) -> Vec<ScheduleItem>
where
    F: Fn(Decimal) -> Decimal,
{
    let period_months = loan.period_months;
    let mut balance = round_currency(loan.amount);
    let mut items = Vec::with_capacity(period_months as usize);

    for (index, payment_date) in payment_dates(loan.start_date, period_months).enumerate() {
        let interest = round_currency(balance * monthly_rate);
        let is_last = index as u32 == period_months - 1;

        let principal = if is_last {
            balance
        } else {
            principal_for(interest)
        };
        let payment = principal + interest;
        balance -= principal;

        items.push(ScheduleItem {
            payment_date,
            payment,
            principal,
            interest,
            remaining_balance: balance,
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain_loan::LoanType;
    use rust_decimal_macros::dec;

    fn loan(schedule_type: ScheduleType) -> Loan {
        Loan::new(
            LoanType::Consumer,
            dec!(1200.00),
            12,
            dec!(12.00),
            schedule_type,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_generate_dispatches_on_schedule_type() {
        let annuity = generate(&loan(ScheduleType::Annuity)).unwrap();
        let equal = generate(&loan(ScheduleType::EqualPrincipal)).unwrap();

        // Annuity holds the payment flat; equal-principal holds the principal flat
        assert_eq!(annuity.items()[0].payment, annuity.items()[1].payment);
        assert_eq!(equal.items()[0].principal, equal.items()[1].principal);
        assert_ne!(equal.items()[0].payment, equal.items()[1].payment);
    }

    #[test]
    fn test_generate_rejects_invalid_terms() {
        let mut bad = loan(ScheduleType::Annuity);
        bad.amount = dec!(0.00);
        let err = generate(&bad).unwrap_err();
        assert_eq!(err.field(), "amount");

        let mut bad = loan(ScheduleType::Annuity);
        bad.period_months = 0;
        assert_eq!(generate(&bad).unwrap_err().field(), "period_months");

        let mut bad = loan(ScheduleType::EqualPrincipal);
        bad.annual_interest_rate = dec!(101);
        assert_eq!(generate(&bad).unwrap_err().field(), "annual_interest_rate");
    }

    #[test]
    fn test_single_period_loan() {
        let mut one = loan(ScheduleType::Annuity);
        one.period_months = 1;
        let schedule = generate(&one).unwrap();

        assert_eq!(schedule.len(), 1);
        let item = &schedule.items()[0];
        assert_eq!(item.principal, dec!(1200.00));
        assert_eq!(item.interest, dec!(12.00));
        assert_eq!(item.payment, dec!(1212.00));
        assert_eq!(item.remaining_balance, dec!(0.00));
    }
}
