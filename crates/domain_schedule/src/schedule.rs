//! Schedule output types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a repayment schedule.
///
/// All monetary fields are rounded to the minor currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Due date of this payment
    pub payment_date: NaiveDate,
    /// Total amount due (`principal + interest`)
    pub payment: Decimal,
    /// Principal component of the payment
    pub principal: Decimal,
    /// Interest component of the payment
    pub interest: Decimal,
    /// Outstanding balance after this payment
    pub remaining_balance: Decimal,
}

/// An ordered repayment schedule - exactly one item per month of the term.
///
/// Computed on demand from a loan and never mutated once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    items: Vec<ScheduleItem>,
}

impl Schedule {
    pub(crate) fn new(items: Vec<ScheduleItem>) -> Self {
        Self { items }
    }

    /// The schedule rows, payment 1 first
    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    /// Number of payments in the schedule
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the schedule, returning its rows
    pub fn into_items(self) -> Vec<ScheduleItem> {
        self.items
    }

    /// Sum of all principal components
    pub fn total_principal(&self) -> Decimal {
        self.items.iter().map(|item| item.principal).sum()
    }

    /// Sum of all interest components
    pub fn total_interest(&self) -> Decimal {
        self.items.iter().map(|item| item.interest).sum()
    }

    /// Sum of all payments
    pub fn total_payments(&self) -> Decimal {
        self.items.iter().map(|item| item.payment).sum()
    }
}
