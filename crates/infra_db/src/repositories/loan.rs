//! Loan repository implementation
//!
//! PostgreSQL persistence for loan records, implementing the `LoanStore`
//! port from the loan domain.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use core_kernel::{LoanId, PortError};
use domain_loan::{Loan, LoanStore, StoredLoan};

use crate::error::{classify_sqlx_error, DatabaseError};

/// Repository for loan records
#[derive(Debug, Clone)]
pub struct LoanRepository {
    pool: PgPool,
}

impl LoanRepository {
    /// Creates a new LoanRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a loan, generating its identifier and creation timestamp
    pub async fn insert_loan(&self, loan: Loan) -> Result<StoredLoan, DatabaseError> {
        let id = LoanId::new_v7();
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO loans (
                id, loan_type, amount, period_months, annual_interest_rate,
                schedule_type, start_date, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id.as_uuid())
        .bind(loan.loan_type.as_str())
        .bind(loan.amount)
        .bind(loan.period_months as i32)
        .bind(loan.annual_interest_rate)
        .bind(loan.schedule_type.as_str())
        .bind(loan.start_date)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(classify_sqlx_error)?;

        tracing::info!(%id, "Created loan");

        Ok(StoredLoan {
            id,
            loan,
            created_at,
        })
    }

    /// Fetches a loan by identifier
    pub async fn find_loan(&self, id: LoanId) -> Result<StoredLoan, DatabaseError> {
        let row: Option<LoanRow> = sqlx::query_as(
            r#"
            SELECT id, loan_type, amount, period_months, annual_interest_rate,
                   schedule_type, start_date, created_at
            FROM loans
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(classify_sqlx_error)?;

        match row {
            Some(row) => row.try_into(),
            None => {
                tracing::warn!(%id, "Loan not found");
                Err(DatabaseError::not_found("Loan", id))
            }
        }
    }

    /// Lists loans ordered by creation time, newest first
    pub async fn list_loans(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StoredLoan>, DatabaseError> {
        let rows: Vec<LoanRow> = sqlx::query_as(
            r#"
            SELECT id, loan_type, amount, period_months, annual_interest_rate,
                   schedule_type, start_date, created_at
            FROM loans
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(classify_sqlx_error)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

#[async_trait]
impl LoanStore for LoanRepository {
    async fn insert(&self, loan: Loan) -> Result<StoredLoan, PortError> {
        Ok(self.insert_loan(loan).await?)
    }

    async fn find_by_id(&self, id: LoanId) -> Result<StoredLoan, PortError> {
        Ok(self.find_loan(id).await?)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<StoredLoan>, PortError> {
        Ok(self.list_loans(limit, offset).await?)
    }
}

/// Database row for a loan record
#[derive(Debug, Clone, FromRow)]
struct LoanRow {
    id: Uuid,
    loan_type: String,
    amount: Decimal,
    period_months: i32,
    annual_interest_rate: Decimal,
    schedule_type: String,
    start_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl TryFrom<LoanRow> for StoredLoan {
    type Error = DatabaseError;

    fn try_from(row: LoanRow) -> Result<Self, Self::Error> {
        let loan_type = row
            .loan_type
            .parse()
            .map_err(|e: domain_loan::LoanError| DatabaseError::RowMapping(e.to_string()))?;
        let schedule_type = row
            .schedule_type
            .parse()
            .map_err(|e: domain_loan::LoanError| DatabaseError::RowMapping(e.to_string()))?;
        let period_months = u32::try_from(row.period_months).map_err(|_| {
            DatabaseError::RowMapping(format!("Invalid period_months: {}", row.period_months))
        })?;

        Ok(StoredLoan {
            id: LoanId::from(row.id),
            loan: Loan {
                loan_type,
                amount: row.amount,
                period_months,
                annual_interest_rate: row.annual_interest_rate,
                schedule_type,
                start_date: row.start_date,
            },
            created_at: row.created_at,
        })
    }
}
