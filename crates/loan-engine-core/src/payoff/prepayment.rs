//! Accrued interest and early-closure (foreclosure) amounts.

use rust_decimal::Decimal;

use crate::conventions::{round2, DAYS_PER_MONTH, PCT_DIVISOR};
use crate::types::{Money, RatePct};

/// Interest accrued on a balance over `days`, pro-rating the monthly
/// rate with a fixed 30-day month: `balance · rate/100/30 · days`.
///
/// Not an actual-day-count convention; the 30-day divisor is the
/// engine's contract regardless of the calendar month involved.
pub fn interest_for_period(balance: Money, rate_pct: RatePct, days: u32) -> Money {
    let daily_rate = rate_pct / PCT_DIVISOR / DAYS_PER_MONTH;
    round2(balance * daily_rate * Decimal::from(days))
}

/// Amount required to close a loan early: the outstanding balance plus
/// interest accrued since the last payment.
pub fn prepayment_amount(balance: Money, rate_pct: RatePct, days_in_month: u32) -> Money {
    round2(balance + interest_for_period(balance, rate_pct, days_in_month))
}
