//! Loan DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use domain_loan::{Loan, LoanError, LoanType, ScheduleType, StoredLoan};

/// Request body for creating a loan
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    pub loan_type: LoanType,
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
    #[validate(range(min = 1, message = "Period must be at least 1 month"))]
    pub period_months: u32,
    #[validate(custom(function = "validate_rate"))]
    pub annual_interest_rate: Decimal,
    pub schedule_type: ScheduleType,
    pub start_date: NaiveDate,
}

impl CreateLoanRequest {
    /// Converts the request into a validated domain loan
    pub fn into_domain(self) -> Result<Loan, LoanError> {
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

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        let mut err = ValidationError::new("amount_positive");
        err.message = Some("Amount must be greater than 0".into());
        return Err(err);
    }
    Ok(())
}

fn validate_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if *rate < Decimal::ZERO || *rate > Decimal::ONE_HUNDRED {
        let mut err = ValidationError::new("rate_range");
        err.message = Some("Interest rate must be between 0 and 100".into());
        return Err(err);
    }
    Ok(())
}

/// Query parameters for listing loans
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLoansParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListLoansParams {
    const DEFAULT_LIMIT: i64 = 50;
    const MAX_LIMIT: i64 = 200;

    /// Returns the effective limit, clamped to the allowed range
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    /// Returns the effective offset
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Response body for a loan
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    pub id: Uuid,
    pub loan_type: LoanType,
    pub amount: Decimal,
    pub period_months: u32,
    pub annual_interest_rate: Decimal,
    pub schedule_type: ScheduleType,
    pub start_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<StoredLoan> for LoanResponse {
    fn from(stored: StoredLoan) -> Self {
        Self {
            id: *stored.id.as_uuid(),
            loan_type: stored.loan.loan_type,
            amount: stored.loan.amount,
            period_months: stored.loan.period_months,
            annual_interest_rate: stored.loan.annual_interest_rate,
            schedule_type: stored.loan.schedule_type,
            start_date: stored.loan.start_date,
            created_at: stored.created_at,
        }
    }
}
