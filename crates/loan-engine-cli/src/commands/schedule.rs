use clap::Args;
use serde_json::Value;

use loan_engine_core::estimate::estimate_loan;
use loan_engine_core::payoff::remaining_balance;

use super::TermsArgs;

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub terms: TermsArgs,
}

/// Arguments for payoff-progress lookup
#[derive(Args)]
pub struct BalanceArgs {
    #[command(flatten)]
    pub terms: TermsArgs,

    /// Number of installments already received
    #[arg(long)]
    pub payments_received: i64,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = args.terms.resolve()?;
    let output = estimate_loan(&terms)?;
    // Just the rows; the estimate command carries the full envelope
    Ok(serde_json::to_value(&output.result.schedule)?)
}

pub fn run_balance(args: BalanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = args.terms.resolve()?;
    let output = estimate_loan(&terms)?;
    let balance = remaining_balance(&output.result.schedule, args.payments_received);

    Ok(serde_json::json!({
        "payments_received": args.payments_received,
        "schedule_periods": output.result.schedule.len(),
        "remaining_balance": balance,
    }))
}
