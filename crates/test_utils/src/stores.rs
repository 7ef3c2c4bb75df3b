//! In-Memory Store Implementations
//!
//! Provides a `LoanStore` backed by a `Vec` so API and service tests can run
//! without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use core_kernel::{LoanId, PortError};
use domain_loan::{Loan, LoanStore, StoredLoan};

/// An in-memory `LoanStore` for tests
///
/// Loans are kept in insertion order; `list` returns newest first to match
/// the database adapter.
#[derive(Debug, Default)]
pub struct InMemoryLoanStore {
    loans: Mutex<Vec<StoredLoan>>,
}

impl InMemoryLoanStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored loans
    pub fn len(&self) -> usize {
        self.loans.lock().unwrap().len()
    }

    /// Returns true if no loans are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LoanStore for InMemoryLoanStore {
    async fn insert(&self, loan: Loan) -> Result<StoredLoan, PortError> {
        let stored = StoredLoan {
            id: LoanId::new_v7(),
            loan,
            created_at: Utc::now(),
        };
        self.loans.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: LoanId) -> Result<StoredLoan, PortError> {
        self.loans
            .lock()
            .unwrap()
            .iter()
            .find(|stored| stored.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Loan", id))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<StoredLoan>, PortError> {
        let loans = self.loans.lock().unwrap();
        Ok(loans
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
