//! Rounding and calendar conventions shared across the engine.
//!
//! Every monetary figure is rounded to 2 decimal places at each arithmetic
//! step, not just at the end. Schedules are sensitive to this: deferring the
//! rounding shifts later rows by cents, so all callers must go through
//! [`round2`].

use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::LoanEngineError;
use crate::LoanEngineResult;

/// Percentage divisor
pub const PCT_DIVISOR: Decimal = dec!(100);

/// Fixed day-count convention: every month is treated as 30 days when
/// pro-rating a monthly rate to days.
pub const DAYS_PER_MONTH: Decimal = dec!(30);

/// Round to 2 decimal places, midpoint away from zero (currency rounding).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Add whole calendar months to a date, clamping to the end of shorter
/// months (Jan 31 + 1 month = Feb 28/29) and rolling years over.
pub fn add_months(date: NaiveDate, months: u32) -> LoanEngineResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| LoanEngineError::DateError(format!("{date} + {months} months overflows")))
}
