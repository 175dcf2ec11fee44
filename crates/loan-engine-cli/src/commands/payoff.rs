use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::payoff::{interest_for_period, prepayment_amount};

/// Arguments for an early-closure (foreclosure) quote
#[derive(Args)]
pub struct PayoffArgs {
    /// Balance outstanding on the loan
    #[arg(long)]
    pub balance: Decimal,

    /// Monthly interest rate as a percentage (2 = 2%/month)
    #[arg(long, alias = "rate")]
    pub monthly_rate_pct: Decimal,

    /// Days elapsed since the last payment (30-day month convention)
    #[arg(long, default_value = "30")]
    pub days: u32,
}

pub fn run_payoff(args: PayoffArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let accrued = interest_for_period(args.balance, args.monthly_rate_pct, args.days);
    let amount = prepayment_amount(args.balance, args.monthly_rate_pct, args.days);

    Ok(serde_json::json!({
        "balance": args.balance,
        "monthly_rate_pct": args.monthly_rate_pct,
        "days": args.days,
        "accrued_interest": accrued,
        "prepayment_amount": amount,
    }))
}
