//! Tests for the shared test utilities themselves

use chrono::NaiveDate;
use domain_loan::{LoanType, ScheduleType};
use domain_schedule::generate;
use proptest::prelude::*;
use rust_decimal_macros::dec;
use test_utils::{
    assert_amount_approx_eq, assert_schedule_invariants, loan_strategy, LoanFixtures,
    TestLoanBuilder,
};

#[test]
fn test_builder_defaults_produce_valid_loan() {
    let loan = TestLoanBuilder::new().build();
    assert_eq!(loan.loan_type, LoanType::Consumer);
    assert_eq!(loan.period_months, 12);
    assert_eq!(loan.schedule_type, ScheduleType::Annuity);
}

#[test]
fn test_builder_overrides() {
    let loan = TestLoanBuilder::new()
        .with_loan_type(LoanType::Mortgage)
        .with_amount(dec!(250000.00))
        .with_period_months(240)
        .with_annual_rate(dec!(3.75))
        .with_schedule_type(ScheduleType::EqualPrincipal)
        .with_start_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        .build();

    assert_eq!(loan.loan_type, LoanType::Mortgage);
    assert_eq!(loan.amount, dec!(250000.00));
    assert_eq!(loan.period_months, 240);
    assert_eq!(loan.schedule_type, ScheduleType::EqualPrincipal);
}

#[test]
fn test_builder_rejects_invalid_terms() {
    let result = TestLoanBuilder::new().with_amount(dec!(-10)).try_build();
    assert!(result.is_err());
}

#[test]
fn test_fixtures_generate_valid_schedules() {
    for loan in [
        LoanFixtures::consumer_annuity(),
        LoanFixtures::car_equal_principal(),
        LoanFixtures::mortgage_annuity(),
        LoanFixtures::zero_rate(),
        LoanFixtures::month_end_start(),
    ] {
        let schedule = generate(&loan).unwrap();
        assert_schedule_invariants(&loan, &schedule);
    }
}

#[test]
fn test_amount_approx_eq_tolerance() {
    assert_amount_approx_eq(dec!(106.62), dec!(106.60), dec!(0.05));
}

proptest! {
    #[test]
    fn generated_loans_always_schedule(loan in loan_strategy()) {
        let schedule = generate(&loan).unwrap();
        assert_schedule_invariants(&loan, &schedule);
    }
}
