//! Comprehensive tests for domain_schedule

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_loan::{Loan, LoanType, ScheduleType};
use domain_schedule::{generate, Schedule};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn loan(
    amount: Decimal,
    period_months: u32,
    annual_rate: Decimal,
    schedule_type: ScheduleType,
    start_date: NaiveDate,
) -> Loan {
    Loan::new(
        LoanType::Consumer,
        amount,
        period_months,
        annual_rate,
        schedule_type,
        start_date,
    )
    .unwrap()
}

/// Asserts the structural invariants that every valid schedule satisfies.
fn assert_schedule_invariants(schedule: &Schedule, amount: Decimal) {
    let items = schedule.items();
    assert!(!items.is_empty());

    // Zero-out: the last balance is exactly 0.00
    assert_eq!(items.last().unwrap().remaining_balance, dec!(0.00));

    // Conservation: principals sum to the loan amount to the cent
    assert_eq!(schedule.total_principal(), amount);

    // Consistency and balance recurrence
    let mut balance_before = amount;
    for item in items {
        assert_eq!(item.payment, item.principal + item.interest);
        assert_eq!(item.remaining_balance, balance_before - item.principal);
        balance_before = item.remaining_balance;
    }
}

// ============================================================================
// Annuity Schedule Tests
// ============================================================================

mod annuity_tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // 1200.00 over 12 months at 12% -> monthly rate 0.01
        let schedule = generate(&loan(
            dec!(1200.00),
            12,
            dec!(12.00),
            ScheduleType::Annuity,
            date(2024, 1, 1),
        ))
        .unwrap();

        assert_eq!(schedule.len(), 12);
        assert_schedule_invariants(&schedule, dec!(1200.00));

        let first = &schedule.items()[0];
        assert_eq!(first.interest, dec!(12.00));
        assert_eq!(first.payment, dec!(106.62));
        assert_eq!(first.principal, dec!(94.62));
        assert_eq!(first.remaining_balance, dec!(1105.38));

        // The final payment absorbs the rounding drift and differs slightly
        // from the nominal constant payment
        let last = schedule.items().last().unwrap();
        assert_eq!(last.principal, dec!(105.54));
        assert_eq!(last.interest, dec!(1.06));
        assert_eq!(last.payment, dec!(106.60));
        assert_eq!(last.remaining_balance, dec!(0.00));
    }

    #[test]
    fn test_constant_payment_except_last() {
        let schedule = generate(&loan(
            dec!(10000.00),
            24,
            dec!(6.00),
            ScheduleType::Annuity,
            date(2024, 1, 1),
        ))
        .unwrap();

        let items = schedule.items();
        let nominal = items[0].payment;
        for item in &items[..items.len() - 1] {
            assert_eq!(item.payment, nominal);
        }
        assert_schedule_invariants(&schedule, dec!(10000.00));
    }

    #[test]
    fn test_interest_decreases_and_principal_increases() {
        // Long-term loan: interest dominates early payments
        let schedule = generate(&loan(
            dec!(100000.00),
            360,
            dec!(4.50),
            ScheduleType::Annuity,
            date(2024, 1, 1),
        ))
        .unwrap();

        let items = schedule.items();
        assert!(items[0].interest > items[0].principal);

        for pair in items.windows(2) {
            assert!(pair[0].interest >= pair[1].interest);
        }
        for pair in items[..items.len() - 1].windows(2) {
            assert!(pair[0].principal <= pair[1].principal);
        }

        assert_schedule_invariants(&schedule, dec!(100000.00));
    }

    #[test]
    fn test_zero_rate_degenerates_to_straight_division() {
        let schedule = generate(&loan(
            dec!(1200.00),
            12,
            dec!(0.00),
            ScheduleType::Annuity,
            date(2024, 1, 1),
        ))
        .unwrap();

        for item in schedule.items() {
            assert_eq!(item.interest, dec!(0.00));
            assert_eq!(item.payment, item.principal);
            assert_eq!(item.payment, dec!(100.00));
        }
        assert_schedule_invariants(&schedule, dec!(1200.00));
    }

    #[test]
    fn test_long_term_max_rate_is_rejected_without_panicking() {
        // (1 + 1/12)^1000 exceeds Decimal's range; the engine must report
        // the term instead of overflowing mid-formula
        let err = generate(&loan(
            dec!(1200.00),
            1000,
            dec!(100.00),
            ScheduleType::Annuity,
            date(2024, 1, 1),
        ))
        .unwrap_err();
        assert_eq!(err.field(), "period_months");
    }

    #[test]
    fn test_zero_rate_rounding_residual_lands_in_last_row() {
        // 1000 / 12 does not divide evenly
        let schedule = generate(&loan(
            dec!(1000.00),
            12,
            dec!(0.00),
            ScheduleType::Annuity,
            date(2024, 1, 1),
        ))
        .unwrap();

        let items = schedule.items();
        for item in &items[..11] {
            assert_eq!(item.payment, dec!(83.33));
        }
        assert_eq!(items[11].payment, dec!(83.37));
        assert_schedule_invariants(&schedule, dec!(1000.00));
    }
}

// ============================================================================
// Equal-Principal Schedule Tests
// ============================================================================

mod equal_principal_tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // Same terms as the annuity reference: 1200.00, 12 months, 12%
        let schedule = generate(&loan(
            dec!(1200.00),
            12,
            dec!(12.00),
            ScheduleType::EqualPrincipal,
            date(2024, 1, 1),
        ))
        .unwrap();

        assert_eq!(schedule.len(), 12);
        assert_schedule_invariants(&schedule, dec!(1200.00));

        let first = &schedule.items()[0];
        assert_eq!(first.principal, dec!(100.00));
        assert_eq!(first.interest, dec!(12.00));
        assert_eq!(first.payment, dec!(112.00));

        // Principal flat, payments strictly decreasing
        for item in schedule.items() {
            assert_eq!(item.principal, dec!(100.00));
        }
        for pair in schedule.items().windows(2) {
            assert!(pair[0].payment > pair[1].payment);
        }
    }

    #[test]
    fn test_flat_principal_with_residual_in_last_row() {
        let schedule = generate(&loan(
            dec!(10000.00),
            20,
            dec!(5.50),
            ScheduleType::EqualPrincipal,
            date(2024, 1, 1),
        ))
        .unwrap();

        for item in schedule.items() {
            assert_eq!(item.principal, dec!(500.00));
        }
        assert_schedule_invariants(&schedule, dec!(10000.00));
    }

    #[test]
    fn test_long_term_max_rate_still_generates() {
        // No compound factor here, so the same terms that overflow the
        // annuity formula amortize fine
        let schedule = generate(&loan(
            dec!(1200.00),
            1000,
            dec!(100.00),
            ScheduleType::EqualPrincipal,
            date(2024, 1, 1),
        ))
        .unwrap();

        assert_eq!(schedule.len(), 1000);
        assert_schedule_invariants(&schedule, dec!(1200.00));
    }

    #[test]
    fn test_interest_and_payment_decrease() {
        let schedule = generate(&loan(
            dec!(60000.00),
            30,
            dec!(4.00),
            ScheduleType::EqualPrincipal,
            date(2024, 1, 1),
        ))
        .unwrap();

        for pair in schedule.items().windows(2) {
            assert!(pair[0].interest > pair[1].interest);
            assert!(pair[0].payment > pair[1].payment);
            assert!(pair[0].remaining_balance > pair[1].remaining_balance);
        }
    }
}

// ============================================================================
// Payment Date Tests
// ============================================================================

mod payment_date_tests {
    use super::*;

    #[test]
    fn test_dates_advance_monthly_from_start() {
        let schedule = generate(&loan(
            dec!(5000.00),
            6,
            dec!(8.00),
            ScheduleType::Annuity,
            date(2024, 3, 15),
        ))
        .unwrap();

        let expected = [
            date(2024, 4, 15),
            date(2024, 5, 15),
            date(2024, 6, 15),
            date(2024, 7, 15),
            date(2024, 8, 15),
            date(2024, 9, 15),
        ];
        let actual: Vec<NaiveDate> = schedule.items().iter().map(|i| i.payment_date).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_end_of_month_clamping_without_drift() {
        // Starting Jan 31: February clamps, later months recover the 31st
        let schedule = generate(&loan(
            dec!(4000.00),
            4,
            dec!(6.00),
            ScheduleType::EqualPrincipal,
            date(2024, 1, 31),
        ))
        .unwrap();

        let actual: Vec<NaiveDate> = schedule.items().iter().map(|i| i.payment_date).collect();
        assert_eq!(
            actual,
            vec![
                date(2024, 2, 29),
                date(2024, 3, 31),
                date(2024, 4, 30),
                date(2024, 5, 31),
            ]
        );
    }

    #[test]
    fn test_year_boundary() {
        let schedule = generate(&loan(
            dec!(3000.00),
            3,
            dec!(7.50),
            ScheduleType::Annuity,
            date(2024, 11, 30),
        ))
        .unwrap();

        let actual: Vec<NaiveDate> = schedule.items().iter().map(|i| i.payment_date).collect();
        assert_eq!(
            actual,
            vec![date(2024, 12, 30), date(2025, 1, 30), date(2025, 2, 28)]
        );
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_schedule_type() -> impl Strategy<Value = ScheduleType> {
        prop_oneof![
            Just(ScheduleType::Annuity),
            Just(ScheduleType::EqualPrincipal),
        ]
    }

    proptest! {
        #[test]
        fn schedule_invariants_hold(
            amount_cents in 10_000i64..100_000_000i64,
            period_months in 1u32..=360u32,
            rate_basis_points in 0i64..=10_000i64,
            schedule_type in arb_schedule_type(),
        ) {
            let amount = Decimal::new(amount_cents, 2);
            let rate = Decimal::new(rate_basis_points, 2);
            let schedule = generate(&loan(
                amount,
                period_months,
                rate,
                schedule_type,
                date(2024, 1, 31),
            ))
            .unwrap();

            prop_assert_eq!(schedule.len(), period_months as usize);
            prop_assert_eq!(
                schedule.items().last().unwrap().remaining_balance,
                dec!(0.00)
            );
            prop_assert_eq!(schedule.total_principal(), amount);

            let mut balance_before = amount;
            for item in schedule.items() {
                prop_assert_eq!(item.payment, item.principal + item.interest);
                prop_assert_eq!(item.remaining_balance, balance_before - item.principal);
                balance_before = item.remaining_balance;
            }
        }

        #[test]
        fn balance_strictly_decreases(
            amount_cents in 100_000i64..100_000_000i64,
            period_months in 1u32..=120u32,
            rate_basis_points in 0i64..=2_500i64,
            schedule_type in arb_schedule_type(),
        ) {
            // Bounded terms: extreme rate/term combinations can round an
            // annuity period's principal down to zero, which stalls the
            // balance without breaking the other invariants
            let amount = Decimal::new(amount_cents, 2);
            let rate = Decimal::new(rate_basis_points, 2);
            let schedule = generate(&loan(
                amount,
                period_months,
                rate,
                schedule_type,
                date(2024, 1, 1),
            ))
            .unwrap();

            let mut balance_before = amount;
            for item in schedule.items() {
                prop_assert!(item.remaining_balance < balance_before);
                balance_before = item.remaining_balance;
            }
        }

        #[test]
        fn zero_rate_schedules_carry_no_interest(
            amount_cents in 10_000i64..100_000_000i64,
            period_months in 1u32..=120u32,
            schedule_type in arb_schedule_type(),
        ) {
            let amount = Decimal::new(amount_cents, 2);
            let schedule = generate(&loan(
                amount,
                period_months,
                dec!(0.00),
                schedule_type,
                date(2024, 6, 15),
            ))
            .unwrap();

            for item in schedule.items() {
                prop_assert_eq!(item.interest, dec!(0.00));
                prop_assert_eq!(item.payment, item.principal);
            }
            prop_assert_eq!(schedule.total_payments(), amount);
        }

        #[test]
        fn totals_are_consistent(
            amount_cents in 10_000i64..10_000_000i64,
            period_months in 1u32..=120u32,
            rate_basis_points in 0i64..=10_000i64,
            schedule_type in arb_schedule_type(),
        ) {
            let amount = Decimal::new(amount_cents, 2);
            let rate = Decimal::new(rate_basis_points, 2);
            let schedule = generate(&loan(
                amount,
                period_months,
                rate,
                schedule_type,
                date(2024, 1, 1),
            ))
            .unwrap();

            prop_assert_eq!(
                schedule.total_payments(),
                schedule.total_principal() + schedule.total_interest()
            );
        }
    }
}
