use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use loan_engine_core::types::{InterestMethod, LoanTerms};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Request shapes for the JS callers (creation form, portal, calculator)
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct EmiRequest {
    principal: Decimal,
    monthly_rate_pct: Decimal,
    term_months: u32,
    #[serde(default)]
    interest_method: InterestMethod,
}

#[derive(Deserialize)]
struct PayoffRequest {
    balance: Decimal,
    monthly_rate_pct: Decimal,
    #[serde(default = "default_days_in_month")]
    days_in_month: u32,
}

#[derive(Deserialize)]
struct BalanceRequest {
    #[serde(flatten)]
    terms: LoanTerms,
    payments_received: i64,
}

fn default_days_in_month() -> u32 {
    30
}

// ---------------------------------------------------------------------------
// Estimate
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_loan(input_json: String) -> NapiResult<String> {
    let terms: LoanTerms = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = loan_engine_core::estimate::estimate_loan(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// EMI
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let req: EmiRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let emi = match req.interest_method {
        InterestMethod::Simple => {
            loan_engine_core::emi::simple_emi(req.principal, req.monthly_rate_pct, req.term_months)
        }
        InterestMethod::Compound => loan_engine_core::emi::compound_emi(
            req.principal,
            req.monthly_rate_pct,
            req.term_months,
        ),
    }
    .map_err(to_napi_error)?;
    serde_json::to_string(&serde_json::json!({ "emi": emi })).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Payoff
// ---------------------------------------------------------------------------

#[napi]
pub fn prepayment_amount(input_json: String) -> NapiResult<String> {
    let req: PayoffRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let accrued = loan_engine_core::payoff::interest_for_period(
        req.balance,
        req.monthly_rate_pct,
        req.days_in_month,
    );
    let amount = loan_engine_core::payoff::prepayment_amount(
        req.balance,
        req.monthly_rate_pct,
        req.days_in_month,
    );
    serde_json::to_string(&serde_json::json!({
        "accrued_interest": accrued,
        "prepayment_amount": amount,
    }))
    .map_err(to_napi_error)
}

#[napi]
pub fn remaining_balance(input_json: String) -> NapiResult<String> {
    let req: BalanceRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_engine_core::estimate::estimate_loan(&req.terms).map_err(to_napi_error)?;
    let balance = loan_engine_core::payoff::remaining_balance(
        &output.result.schedule,
        req.payments_received,
    );
    serde_json::to_string(&serde_json::json!({ "remaining_balance": balance }))
        .map_err(to_napi_error)
}
