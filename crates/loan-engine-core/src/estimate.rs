//! Unified loan estimate: one call producing EMI, schedule, totals, and
//! end date from a single set of terms.
//!
//! Every call is a pure, stateless recomputation; results are never
//! cached, so concurrent callers need no coordination.

use std::time::Instant;

use rust_decimal::Decimal;

use crate::conventions::add_months;
use crate::emi::{self, compound_emi, compound_schedule, simple_emi, simple_schedule};
use crate::error::LoanEngineError;
use crate::payoff::{total_interest, total_payable};
use crate::types::{with_metadata, ComputationOutput, InterestMethod, LoanEstimate, LoanTerms};
use crate::LoanEngineResult;

/// Compose EMI, amortization schedule, totals, and end date for a loan.
///
/// A positive `manual_emi` is used verbatim in place of the computed
/// installment, letting lenders issue loans at a negotiated figure.
/// Totals always use the resolved EMI and the NOMINAL term, even when
/// rounding closes the schedule early; the discrepancy is surfaced as a
/// warning rather than silently reconciled.
pub fn estimate_loan(terms: &LoanTerms) -> LoanEngineResult<ComputationOutput<LoanEstimate>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_terms(terms)?;

    let emi = match terms.manual_emi {
        Some(manual) => {
            warnings.push(format!(
                "Negotiated EMI {manual} in effect; the computed installment was not used"
            ));
            manual
        }
        None => match terms.interest_method {
            InterestMethod::Simple => {
                simple_emi(terms.principal, terms.monthly_rate_pct, terms.term_months)?
            }
            InterestMethod::Compound => {
                compound_emi(terms.principal, terms.monthly_rate_pct, terms.term_months)?
            }
        },
    };

    let schedule = match terms.interest_method {
        InterestMethod::Simple => simple_schedule(
            terms.principal,
            terms.monthly_rate_pct,
            terms.term_months,
            emi,
            terms.start_date,
        )?,
        InterestMethod::Compound => compound_schedule(
            terms.principal,
            terms.monthly_rate_pct,
            terms.term_months,
            emi,
            terms.start_date,
        )?,
    };

    if (schedule.len() as u32) < terms.term_months {
        warnings.push(format!(
            "Loan closes at period {} of {}; totals assume the nominal term",
            schedule.len(),
            terms.term_months
        ));
    }

    let estimate = LoanEstimate {
        emi,
        total_payable: total_payable(emi, terms.term_months),
        total_interest: total_interest(emi, terms.term_months, terms.principal),
        schedule,
        end_date: add_months(terms.start_date, terms.term_months)?,
        terms: terms.clone(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Loan Estimate — EMI, amortization schedule, totals, end date",
        &serde_json::json!({
            "principal": terms.principal.to_string(),
            "monthly_rate_pct": terms.monthly_rate_pct.to_string(),
            "term_months": terms.term_months,
            "interest_method": terms.interest_method,
            "emi_source": if terms.manual_emi.is_some() { "manual" } else { "computed" },
        }),
        warnings,
        elapsed,
        estimate,
    ))
}

fn validate_terms(terms: &LoanTerms) -> LoanEngineResult<()> {
    emi::validate_loan_inputs(terms.principal, terms.monthly_rate_pct, terms.term_months)?;
    if let Some(manual) = terms.manual_emi {
        if manual <= Decimal::ZERO {
            return Err(LoanEngineError::InvalidManualEmi {
                value: manual,
                reason: "Manual EMI must be positive when supplied".into(),
            });
        }
    }
    Ok(())
}
