//! Equal-principal amortization - fixed principal per period
//!
//! The principal is a straight division of the loan amount over the term,
//! rounded once to the cent. Interest still accrues on the shrinking balance,
//! so the total payment strictly decreases period over period. The last
//! period repays whatever balance the rounded division left behind.

use domain_loan::Loan;
use rust_decimal::Decimal;

use crate::generator::build_items;
use crate::schedule::ScheduleItem;

pub(crate) fn build(loan: &Loan, monthly_rate: Decimal) -> Vec<ScheduleItem> {
    let base_principal =
        core_kernel::round_currency(loan.amount / Decimal::from(loan.period_months));
    build_items(loan, monthly_rate, move |_| base_principal)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain_loan::{Loan, LoanType, ScheduleType};
    use rust_decimal_macros::dec;

    use crate::generate;

    #[test]
    fn test_base_principal_is_rounded_division() {
        // 1000 / 12 = 83.333... -> 83.33, with the last row absorbing the rest
        let loan = Loan::new(
            LoanType::Consumer,
            dec!(1000.00),
            12,
            dec!(0.00),
            ScheduleType::EqualPrincipal,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .unwrap();

        let schedule = generate(&loan).unwrap();
        let items = schedule.items();

        for item in &items[..11] {
            assert_eq!(item.principal, dec!(83.33));
        }
        // 1000 - 11 * 83.33 = 83.37
        assert_eq!(items[11].principal, dec!(83.37));
        assert_eq!(schedule.total_principal(), dec!(1000.00));
    }
}
