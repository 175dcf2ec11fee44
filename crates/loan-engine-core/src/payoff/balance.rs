//! Aggregate totals and payoff progress against a generated schedule.

use rust_decimal::Decimal;

use crate::conventions::round2;
use crate::types::{Money, ScheduleEntry};

/// Total interest over the NOMINAL term: `emi × term − principal`.
///
/// Deliberately uses the nominal term, not the possibly-shorter actual
/// schedule length, even when rounding closes the loan early.
pub fn total_interest(emi: Money, term_months: u32, principal: Money) -> Money {
    round2(emi * Decimal::from(term_months) - principal)
}

/// Total amount payable over the nominal term: `emi × term`.
pub fn total_payable(emi: Money, term_months: u32) -> Money {
    round2(emi * Decimal::from(term_months))
}

/// Balance still owed after `payments_received` installments.
///
/// Assumes a 1:1 correspondence between payments received and schedule
/// periods; partial and overpayments are not modelled. Zero or negative
/// counts return the opening balance, counts at or past the end of the
/// schedule return zero.
pub fn remaining_balance(schedule: &[ScheduleEntry], payments_received: i64) -> Money {
    if payments_received <= 0 {
        // Pre-first-payment balance: first entry's balance plus the
        // principal it retired.
        return schedule
            .first()
            .map(|e| e.remaining_balance + e.principal_component)
            .unwrap_or(Decimal::ZERO);
    }
    if payments_received >= schedule.len() as i64 {
        return Decimal::ZERO;
    }
    schedule[(payments_received - 1) as usize].remaining_balance
}
