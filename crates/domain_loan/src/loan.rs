//! Loan terms and their validation rules

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::LoanId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanError;

/// The product category of a loan.
///
/// Carried through unchanged for reporting; it does not affect schedule
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanType {
    Consumer,
    Car,
    Mortgage,
}

impl LoanType {
    /// Returns the canonical string form used on the wire and in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::Consumer => "CONSUMER",
            LoanType::Car => "CAR",
            LoanType::Mortgage => "MORTGAGE",
        }
    }
}

impl std::str::FromStr for LoanType {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONSUMER" => Ok(LoanType::Consumer),
            "CAR" => Ok(LoanType::Car),
            "MORTGAGE" => Ok(LoanType::Mortgage),
            other => Err(LoanError::validation(
                "loan_type",
                format!("Unknown loan type: {}", other),
            )),
        }
    }
}

/// The amortization style of a loan's repayment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleType {
    /// Fixed total payment per period; principal share grows over time
    Annuity,
    /// Fixed principal per period; total payment shrinks over time
    EqualPrincipal,
}

impl ScheduleType {
    /// Returns the canonical string form used on the wire and in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleType::Annuity => "ANNUITY",
            ScheduleType::EqualPrincipal => "EQUAL_PRINCIPAL",
        }
    }
}

impl std::str::FromStr for ScheduleType {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANNUITY" => Ok(ScheduleType::Annuity),
            "EQUAL_PRINCIPAL" => Ok(ScheduleType::EqualPrincipal),
            other => Err(LoanError::validation(
                "schedule_type",
                format!("Unknown schedule type: {}", other),
            )),
        }
    }
}

/// Immutable loan terms - the input to schedule generation.
///
/// All numeric fields are validated by [`Loan::new`]; the schedule engine
/// re-checks them before generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub loan_type: LoanType,
    /// Principal, in major currency units with at most 2 decimal places
    pub amount: Decimal,
    /// Term of the loan in months, at least 1
    pub period_months: u32,
    /// Fixed annual rate as a percentage, `0 <= rate <= 100`
    pub annual_interest_rate: Decimal,
    pub schedule_type: ScheduleType,
    /// Disbursement date; the first payment falls one month later
    pub start_date: NaiveDate,
}

impl Loan {
    /// Creates a loan after validating its terms.
    ///
    /// # Errors
    ///
    /// Returns a field-qualified [`LoanError::Validation`] when the amount is
    /// not positive, the term is shorter than one month, or the rate falls
    /// outside `[0, 100]`.
    pub fn new(
        loan_type: LoanType,
        amount: Decimal,
        period_months: u32,
        annual_interest_rate: Decimal,
        schedule_type: ScheduleType,
        start_date: NaiveDate,
    ) -> Result<Self, LoanError> {
        let loan = Self {
            loan_type,
            amount,
            period_months,
            annual_interest_rate,
            schedule_type,
            start_date,
        };
        loan.validate()?;
        Ok(loan)
    }

    /// Validates the numeric terms of the loan.
    pub fn validate(&self) -> Result<(), LoanError> {
        if self.amount <= Decimal::ZERO {
            return Err(LoanError::validation(
                "amount",
                "Amount must be greater than 0",
            ));
        }
        if self.period_months < 1 {
            return Err(LoanError::validation(
                "period_months",
                "Period must be at least 1 month",
            ));
        }
        if self.annual_interest_rate < Decimal::ZERO {
            return Err(LoanError::validation(
                "annual_interest_rate",
                "Interest rate must be at least 0",
            ));
        }
        if self.annual_interest_rate > dec!(100) {
            return Err(LoanError::validation(
                "annual_interest_rate",
                "Interest rate must be at most 100",
            ));
        }
        Ok(())
    }
}

/// A loan as persisted, with its generated identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredLoan {
    pub id: LoanId,
    #[serde(flatten)]
    pub loan: Loan,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> (Decimal, u32, Decimal, NaiveDate) {
        (
            dec!(1000.00),
            12,
            dec!(5.00),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_valid_loan() {
        let (amount, months, rate, start) = terms();
        let loan = Loan::new(
            LoanType::Consumer,
            amount,
            months,
            rate,
            ScheduleType::Annuity,
            start,
        );
        assert!(loan.is_ok());
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let (_, months, rate, start) = terms();
        for bad in [Decimal::ZERO, dec!(-1.00)] {
            let err = Loan::new(
                LoanType::Consumer,
                bad,
                months,
                rate,
                ScheduleType::Annuity,
                start,
            )
            .unwrap_err();
            assert_eq!(err.field(), Some("amount"));
        }
    }

    #[test]
    fn test_rejects_zero_period() {
        let (amount, _, rate, start) = terms();
        let err = Loan::new(
            LoanType::Car,
            amount,
            0,
            rate,
            ScheduleType::EqualPrincipal,
            start,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("period_months"));
    }

    #[test]
    fn test_rejects_out_of_range_rate() {
        let (amount, months, _, start) = terms();
        for bad in [dec!(-0.01), dec!(100.01)] {
            let err = Loan::new(
                LoanType::Mortgage,
                amount,
                months,
                bad,
                ScheduleType::Annuity,
                start,
            )
            .unwrap_err();
            assert_eq!(err.field(), Some("annual_interest_rate"));
        }
    }

    #[test]
    fn test_boundary_rates_accepted() {
        let (amount, months, _, start) = terms();
        for ok in [Decimal::ZERO, dec!(100.00)] {
            assert!(Loan::new(
                LoanType::Consumer,
                amount,
                months,
                ok,
                ScheduleType::Annuity,
                start,
            )
            .is_ok());
        }
    }

    #[test]
    fn test_enum_wire_format() {
        assert_eq!(
            serde_json::to_string(&LoanType::Consumer).unwrap(),
            "\"CONSUMER\""
        );
        assert_eq!(
            serde_json::to_string(&ScheduleType::EqualPrincipal).unwrap(),
            "\"EQUAL_PRINCIPAL\""
        );
        let parsed: ScheduleType = serde_json::from_str("\"ANNUITY\"").unwrap();
        assert_eq!(parsed, ScheduleType::Annuity);
    }

    #[test]
    fn test_enum_round_trip_via_str() {
        for lt in [LoanType::Consumer, LoanType::Car, LoanType::Mortgage] {
            assert_eq!(lt.as_str().parse::<LoanType>().unwrap(), lt);
        }
        for st in [ScheduleType::Annuity, ScheduleType::EqualPrincipal] {
            assert_eq!(st.as_str().parse::<ScheduleType>().unwrap(), st);
        }
    }
}
