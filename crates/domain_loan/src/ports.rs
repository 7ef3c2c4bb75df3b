//! Persistence port for loans
//!
//! Adapters (PostgreSQL in `infra_db`) implement [`LoanStore`]; the HTTP
//! layer consumes it through `Arc<dyn LoanStore>` so handlers never see a
//! concrete database type.

use async_trait::async_trait;
use core_kernel::{LoanId, PortError};

use crate::loan::{Loan, StoredLoan};

/// Storage abstraction for loan records
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Persists a loan and returns it with its generated identifier
    async fn insert(&self, loan: Loan) -> Result<StoredLoan, PortError>;

    /// Fetches a loan by identifier
    ///
    /// # Errors
    ///
    /// Returns [`PortError::NotFound`] when no loan has the given id.
    async fn find_by_id(&self, id: LoanId) -> Result<StoredLoan, PortError>;

    /// Lists loans ordered by creation time, newest first
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<StoredLoan>, PortError>;
}
