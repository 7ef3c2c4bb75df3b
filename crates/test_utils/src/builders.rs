//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use domain_loan::{Loan, LoanError, LoanType, ScheduleType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::LoanFixtures;

/// Builder for constructing test loans
pub struct TestLoanBuilder {
    loan_type: LoanType,
    amount: Decimal,
    period_months: u32,
    annual_interest_rate: Decimal,
    schedule_type: ScheduleType,
    start_date: NaiveDate,
}

impl Default for TestLoanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLoanBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            loan_type: LoanType::Consumer,
            amount: dec!(1200.00),
            period_months: 12,
            annual_interest_rate: dec!(12.0),
            schedule_type: ScheduleType::Annuity,
            start_date: LoanFixtures::start_date(),
        }
    }

    /// Sets the loan type
    pub fn with_loan_type(mut self, loan_type: LoanType) -> Self {
        self.loan_type = loan_type;
        self
    }

    /// Sets the principal amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the repayment period in months
    pub fn with_period_months(mut self, months: u32) -> Self {
        self.period_months = months;
        self
    }

    /// Sets the annual interest rate as a percentage
    pub fn with_annual_rate(mut self, rate: Decimal) -> Self {
        self.annual_interest_rate = rate;
        self
    }

    /// Sets the schedule type
    pub fn with_schedule_type(mut self, schedule_type: ScheduleType) -> Self {
        self.schedule_type = schedule_type;
        self
    }

    /// Sets the start date
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }

    /// Builds the loan, panicking on invalid terms
    ///
    /// Use [`try_build`](Self::try_build) when the test exercises validation.
    pub fn build(self) -> Loan {
        self.try_build().expect("builder produced invalid loan terms")
    }

    /// Builds the loan, returning validation errors
    pub fn try_build(self) -> Result<Loan, LoanError> {
        Loan::new(
            self.loan_type,
            self.amount,
            self.period_months,
            self.annual_interest_rate,
            self.schedule_type,
            self.start_date,
        )
    }
}
