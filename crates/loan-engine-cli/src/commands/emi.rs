use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use loan_engine_core::emi::{compound_emi, simple_emi};

use super::MethodArg;

const MAX_BISECTION_ITERATIONS: u32 = 200;
/// Search bracket for the monthly rate, in percent.
const RATE_BRACKET_HIGH: Decimal = dec!(50);

/// Arguments for EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Principal amount lent
    #[arg(long)]
    pub principal: Decimal,

    /// Monthly interest rate as a percentage (2 = 2%/month)
    #[arg(long, alias = "rate")]
    pub monthly_rate_pct: Decimal,

    /// Tenure in months
    #[arg(long, alias = "term")]
    pub term_months: u32,

    /// Interest convention
    #[arg(long, value_enum, default_value = "simple")]
    pub interest_method: MethodArg,
}

/// Arguments for reverse rate solving
#[derive(Args)]
pub struct SolveRateArgs {
    /// Principal amount lent
    #[arg(long)]
    pub principal: Decimal,

    /// Tenure in months
    #[arg(long, alias = "term")]
    pub term_months: u32,

    /// Negotiated installment to match (reducing balance)
    #[arg(long)]
    pub emi: Decimal,

    /// Acceptable EMI mismatch in currency units
    #[arg(long, default_value = "0.005")]
    pub tolerance: Decimal,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi = match args.interest_method {
        MethodArg::Simple => simple_emi(args.principal, args.monthly_rate_pct, args.term_months)?,
        MethodArg::Compound => {
            compound_emi(args.principal, args.monthly_rate_pct, args.term_months)?
        }
    };

    Ok(serde_json::json!({
        "principal": args.principal,
        "monthly_rate_pct": args.monthly_rate_pct,
        "term_months": args.term_months,
        "interest_method": format!("{:?}", args.interest_method).to_lowercase(),
        "emi": emi,
    }))
}

/// Bisection over the reducing-balance EMI formula, which is strictly
/// increasing in rate. The engine keeps root-finding out of the core;
/// this is the calling layer's half of that contract.
pub fn run_solve_rate(args: SolveRateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let floor = compound_emi(args.principal, Decimal::ZERO, args.term_months)?;
    if args.emi < floor {
        return Err(format!(
            "EMI {} is below the zero-rate installment {}; no non-negative rate matches",
            args.emi, floor
        )
        .into());
    }

    // The annuity factor can overflow decimal range at the top of the
    // bracket for very long terms; an overflowing ceiling is simply
    // "larger than any realistic EMI" and the check is skipped.
    if let Ok(ceiling) = compound_emi(args.principal, RATE_BRACKET_HIGH, args.term_months) {
        if args.emi > ceiling {
            return Err(format!(
                "EMI {} exceeds the installment at {}%/month ({}); rate out of range",
                args.emi, RATE_BRACKET_HIGH, ceiling
            )
            .into());
        }
    }

    let mut lo = Decimal::ZERO;
    let mut hi = RATE_BRACKET_HIGH;

    for iteration in 0..MAX_BISECTION_ITERATIONS {
        let mid = (lo + hi) / dec!(2);
        let emi_at_mid = match compound_emi(args.principal, mid, args.term_months) {
            Ok(emi) => emi,
            // Overflowed annuity factor: the rate is far too high
            Err(_) => {
                hi = mid;
                continue;
            }
        };
        let delta = emi_at_mid - args.emi;

        if delta.abs() <= args.tolerance {
            return Ok(serde_json::json!({
                "monthly_rate_pct": mid,
                "emi_at_rate": emi_at_mid,
                "target_emi": args.emi,
                "iterations": iteration + 1,
            }));
        }

        if delta < Decimal::ZERO {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(format!(
        "Rate solve did not converge after {} iterations (target EMI {})",
        MAX_BISECTION_ITERATIONS, args.emi
    )
    .into())
}
