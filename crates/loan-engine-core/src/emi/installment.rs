//! Fixed-installment (EMI) formulas under the two interest conventions.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::conventions::{round2, PCT_DIVISOR};
use crate::error::LoanEngineError;
use crate::types::{Money, RatePct};
use crate::LoanEngineResult;

use super::validate_loan_inputs;

/// Flat-rate EMI.
///
/// Interest accrues on the original principal for the whole tenure, the
/// same nominal amount every period:
/// `emi = (P + P·rate/100·n) / n`, rounded to the cent.
pub fn simple_emi(
    principal: Money,
    rate_pct: RatePct,
    term_months: u32,
) -> LoanEngineResult<Money> {
    validate_loan_inputs(principal, rate_pct, term_months)?;

    let term = Decimal::from(term_months);
    let interest_total = principal * (rate_pct / PCT_DIVISOR) * term;
    Ok(round2((principal + interest_total) / term))
}

/// Reducing-balance EMI via the standard amortized-loan formula:
/// `emi = P·r·(1+r)^n / ((1+r)^n − 1)` with `r = rate/100`.
///
/// At `r == 0` the annuity factor degenerates, so the installment falls
/// back to a straight split of the principal.
///
/// Strictly increasing in `rate_pct` for fixed principal and term, which
/// lets callers root-find the rate implied by a negotiated EMI.
pub fn compound_emi(
    principal: Money,
    rate_pct: RatePct,
    term_months: u32,
) -> LoanEngineResult<Money> {
    validate_loan_inputs(principal, rate_pct, term_months)?;

    let term = Decimal::from(term_months);
    let r = rate_pct / PCT_DIVISOR;

    if r.is_zero() {
        return Ok(round2(principal / term));
    }

    let factor = (Decimal::ONE + r)
        .checked_powi(term_months as i64)
        .ok_or_else(|| LoanEngineError::InvalidRate {
            value: rate_pct,
            reason: format!("Annuity factor overflows at {term_months} months"),
        })?;
    Ok(round2(principal * r * factor / (factor - Decimal::ONE)))
}
