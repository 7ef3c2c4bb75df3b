//! Test Fixtures
//!
//! Pre-built loans covering the scenarios most tests care about. Values are
//! deliberately small and round so expected schedule figures can be checked
//! by hand.

use chrono::NaiveDate;
use domain_loan::{Loan, LoanType, ScheduleType};
use rust_decimal_macros::dec;

/// Common loan fixtures
pub struct LoanFixtures;

impl LoanFixtures {
    /// A one-year consumer annuity loan: 1200.00 at 12% over 12 months.
    ///
    /// With a 1% monthly rate the constant payment works out to 106.62.
    pub fn consumer_annuity() -> Loan {
        Loan::new(
            LoanType::Consumer,
            dec!(1200.00),
            12,
            dec!(12.0),
            ScheduleType::Annuity,
            Self::start_date(),
        )
        .unwrap()
    }

    /// A one-year car loan with equal principal: 1000.00 at 6% over 12 months.
    pub fn car_equal_principal() -> Loan {
        Loan::new(
            LoanType::Car,
            dec!(1000.00),
            12,
            dec!(6.0),
            ScheduleType::EqualPrincipal,
            Self::start_date(),
        )
        .unwrap()
    }

    /// A 30-year mortgage annuity: 100000.00 at 4.5% over 360 months.
    pub fn mortgage_annuity() -> Loan {
        Loan::new(
            LoanType::Mortgage,
            dec!(100000.00),
            360,
            dec!(4.5),
            ScheduleType::Annuity,
            Self::start_date(),
        )
        .unwrap()
    }

    /// An interest-free loan: 1000.00 at 0% over 12 months.
    pub fn zero_rate() -> Loan {
        Loan::new(
            LoanType::Consumer,
            dec!(1000.00),
            12,
            dec!(0.0),
            ScheduleType::Annuity,
            Self::start_date(),
        )
        .unwrap()
    }

    /// A loan starting on a month-end date, exercising end-of-month clamping.
    pub fn month_end_start() -> Loan {
        Loan::new(
            LoanType::Consumer,
            dec!(1200.00),
            4,
            dec!(12.0),
            ScheduleType::Annuity,
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap()
    }

    /// Default start date used by fixtures: 2024-01-15.
    pub fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }
}
