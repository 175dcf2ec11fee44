mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::emi::{EmiArgs, SolveRateArgs};
use commands::estimate::EstimateArgs;
use commands::payoff::PayoffArgs;
use commands::schedule::{BalanceArgs, ScheduleArgs};

/// Loan amortization and EMI calculations
#[derive(Parser)]
#[command(
    name = "loan",
    version,
    about = "Loan amortization and EMI calculations",
    long_about = "A CLI for loan amortization and EMI calculations with decimal \
                  precision. Supports flat-rate and reducing-balance installments, \
                  full payment schedules, payoff progress, foreclosure quotes, and \
                  reverse rate solving from a negotiated EMI."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the fixed installment for a loan
    Emi(EmiArgs),
    /// Generate the full amortization schedule
    Schedule(ScheduleArgs),
    /// Full loan estimate: EMI, schedule, totals, end date
    Estimate(EstimateArgs),
    /// Balance outstanding after a number of received payments
    Balance(BalanceArgs),
    /// Early-closure amount including accrued interest
    Payoff(PayoffArgs),
    /// Solve the monthly rate implied by a negotiated EMI
    SolveRate(SolveRateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Estimate(args) => commands::estimate::run_estimate(args),
        Commands::Balance(args) => commands::schedule::run_balance(args),
        Commands::Payoff(args) => commands::payoff::run_payoff(args),
        Commands::SolveRate(args) => commands::emi::run_solve_rate(args),
        Commands::Version => {
            println!("loan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
