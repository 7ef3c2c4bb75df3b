//! Calendar month arithmetic for repayment schedules
//!
//! Month advancement is the most error-prone part of schedule generation
//! (leap years, 30/31-day months), so it lives in one place. The rule:
//! advancing by a month preserves the day-of-month where possible, and clamps
//! to the last valid day when the target month is shorter.

use chrono::{Months, NaiveDate};

/// Advances `start` by `months` whole calendar months.
///
/// If the target month has fewer days than `start`'s day-of-month, the result
/// is clamped to the last day of the target month (Jan 31 -> Feb 28/29).
///
/// Each offset is computed from `start` itself, never from a previously
/// clamped date, so the clamp does not carry forward: starting Jan 31 yields
/// Feb 29, Mar 31, Apr 30 - not Feb 29 -> Mar 29.
pub fn months_after(start: NaiveDate, months: u32) -> NaiveDate {
    start
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Returns the payment dates for a schedule of `period_months` payments.
///
/// Payment `i` (1-indexed) falls `i` calendar months after `start`.
pub fn payment_dates(start: NaiveDate, period_months: u32) -> impl Iterator<Item = NaiveDate> {
    (1..=period_months).map(move |i| months_after(start, i))
}
