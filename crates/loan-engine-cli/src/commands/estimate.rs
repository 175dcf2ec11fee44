use clap::Args;
use serde_json::Value;

use loan_engine_core::estimate::estimate_loan;

use super::TermsArgs;

/// Arguments for the full loan estimate
#[derive(Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub terms: TermsArgs,
}

pub fn run_estimate(args: EstimateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = args.terms.resolve()?;
    let output = estimate_loan(&terms)?;
    Ok(serde_json::to_value(output)?)
}
