//! Currency rounding policy and interest rate types
//!
//! All monetary values in the system are `rust_decimal::Decimal` values rounded
//! to the minor currency unit. Rounding is applied at the point of computation,
//! not deferred to presentation, so a balance carried into the next period is
//! the same figure a statement would show.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places of the minor currency unit (cents).
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a monetary value to the minor currency unit.
///
/// Uses half-up rounding (midpoint away from zero), matching standard
/// bank-statement rounding for repayment schedules.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// An interest rate, stored as a decimal fraction (e.g. `0.05` for 5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal fraction (e.g. `0.05` for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g. `5.0` for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Returns true if the rate is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Derives the nominal monthly rate from an annual rate.
    ///
    /// Straight division by twelve: no day-count convention and no
    /// nominal/effective compounding adjustment.
    pub fn monthly(&self) -> Decimal {
        self.value / dec!(12)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4))
    }
}
