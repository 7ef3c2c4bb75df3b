//! Schedule DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use domain_schedule::{Schedule, ScheduleItem};

/// One row of a repayment schedule on the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItemResponse {
    pub payment_date: NaiveDate,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    pub remaining_balance: Decimal,
}

impl From<ScheduleItem> for ScheduleItemResponse {
    fn from(item: ScheduleItem) -> Self {
        Self {
            payment_date: item.payment_date,
            payment: item.payment,
            principal: item.principal,
            interest: item.interest,
            remaining_balance: item.remaining_balance,
        }
    }
}

/// Response body for a loan's repayment schedule
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub items: Vec<ScheduleItemResponse>,
}

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            items: schedule.into_items().into_iter().map(Into::into).collect(),
        }
    }
}
