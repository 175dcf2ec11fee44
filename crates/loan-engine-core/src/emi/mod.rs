//! EMI formulas and amortization schedule generators.

pub mod installment;
pub mod schedule;

pub use installment::{compound_emi, simple_emi};
pub use schedule::{compound_schedule, simple_schedule};

use rust_decimal::Decimal;

use crate::error::LoanEngineError;
use crate::types::{Money, RatePct};
use crate::LoanEngineResult;

/// Shared caller-contract checks for the base loan inputs.
pub(crate) fn validate_loan_inputs(
    principal: Money,
    rate_pct: RatePct,
    term_months: u32,
) -> LoanEngineResult<()> {
    if principal <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidPrincipal {
            value: principal,
            reason: "Principal must be positive".into(),
        });
    }
    if rate_pct < Decimal::ZERO {
        return Err(LoanEngineError::InvalidRate {
            value: rate_pct,
            reason: "Monthly rate must not be negative".into(),
        });
    }
    if term_months == 0 {
        return Err(LoanEngineError::InvalidTerm {
            value: 0,
            reason: "Term must be at least 1 month".into(),
        });
    }
    Ok(())
}
