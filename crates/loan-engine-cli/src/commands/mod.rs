pub mod emi;
pub mod estimate;
pub mod payoff;
pub mod schedule;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use loan_engine_core::types::{InterestMethod, LoanTerms};

use crate::input;

/// Interest convention flag shared by commands that take loan terms.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    /// Flat rate: interest on the original principal every period
    Simple,
    /// Reducing balance: interest on the outstanding balance
    Compound,
}

impl From<MethodArg> for InterestMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Simple => InterestMethod::Simple,
            MethodArg::Compound => InterestMethod::Compound,
        }
    }
}

/// Loan term flags shared by the schedule, estimate, and balance commands.
#[derive(Args)]
pub struct TermsArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal amount lent
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Monthly interest rate as a percentage (2 = 2%/month)
    #[arg(long, alias = "rate")]
    pub monthly_rate_pct: Option<Decimal>,

    /// Tenure in months
    #[arg(long, alias = "term")]
    pub term_months: Option<u32>,

    /// Interest convention
    #[arg(long, value_enum, default_value = "simple")]
    pub interest_method: MethodArg,

    /// Disbursal date (YYYY-MM-DD); period k falls due k months later
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Negotiated EMI overriding the computed installment
    #[arg(long)]
    pub manual_emi: Option<Decimal>,
}

impl TermsArgs {
    /// Resolve loan terms from an input file, piped stdin, or flags.
    pub fn resolve(self) -> Result<LoanTerms, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return input::file::read_input(path);
        }
        if let Some(data) = input::stdin::read_stdin()? {
            return Ok(serde_json::from_value(data)?);
        }
        Ok(LoanTerms {
            principal: self
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            monthly_rate_pct: self
                .monthly_rate_pct
                .ok_or("--monthly-rate-pct is required (or provide --input)")?,
            term_months: self
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
            interest_method: self.interest_method.into(),
            start_date: self
                .start_date
                .ok_or("--start-date is required (or provide --input)")?,
            manual_emi: self.manual_emi,
        })
    }
}
