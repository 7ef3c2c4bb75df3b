//! Loan handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::LoanId;
use domain_schedule::generate;

use crate::dto::{CreateLoanRequest, ListLoansParams, LoanResponse, ScheduleResponse};
use crate::{error::ApiError, AppState};

/// Creates a new loan
pub async fn create_loan(
    State(state): State<AppState>,
    Json(request): Json<CreateLoanRequest>,
) -> Result<(StatusCode, Json<LoanResponse>), ApiError> {
    tracing::debug!(
        loan_type = ?request.loan_type,
        amount = %request.amount,
        "Received loan creation request"
    );

    request.validate()?;
    let loan = request.into_domain()?;
    let stored = state.store.insert(loan).await?;

    Ok((StatusCode::CREATED, Json(stored.into())))
}

/// Lists loans, newest first
pub async fn list_loans(
    State(state): State<AppState>,
    Query(params): Query<ListLoansParams>,
) -> Result<Json<Vec<LoanResponse>>, ApiError> {
    let loans = state.store.list(params.limit(), params.offset()).await?;
    Ok(Json(loans.into_iter().map(Into::into).collect()))
}

/// Gets a loan by ID
pub async fn get_loan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LoanResponse>, ApiError> {
    let stored = state.store.find_by_id(LoanId::from(id)).await?;
    Ok(Json(stored.into()))
}

/// Computes the repayment schedule for a stored loan
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    tracing::debug!(%id, "Computing repayment schedule");

    let stored = state.store.find_by_id(LoanId::from(id)).await?;
    let schedule = generate(&stored.loan)?;

    Ok(Json(schedule.into()))
}
