use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Monthly rates expressed as percentages (2 = 2% per month). Never as decimals.
pub type RatePct = Decimal;

/// Interest convention applied to a loan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestMethod {
    /// Flat rate: interest computed once on the original principal,
    /// identical every period.
    #[default]
    Simple,
    /// Reducing balance: interest recomputed each period on the
    /// outstanding balance.
    Compound,
}

/// Parameters describing a loan to be issued or previewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount lent to the customer.
    pub principal: Money,
    /// Monthly interest rate as a percentage (2 = 2%/month).
    pub monthly_rate_pct: RatePct,
    /// Tenure in months.
    pub term_months: u32,
    pub interest_method: InterestMethod,
    /// Date the loan is disbursed; period k falls due k calendar
    /// months later.
    pub start_date: NaiveDate,
    /// Negotiated installment that overrides the computed EMI when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_emi: Option<Money>,
}

/// One row of an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based period index.
    pub period: u32,
    /// Amount actually due this period. Equals the resolved EMI except
    /// on the closing row, where it records the exact final payment.
    pub emi: Money,
    pub principal_component: Money,
    pub interest_component: Money,
    /// Balance outstanding after this payment. Zero on the closing row.
    pub remaining_balance: Money,
    pub due_date: NaiveDate,
}

/// Full loan preview: EMI, totals, schedule, and end date.
///
/// Derived on every call, never cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanEstimate {
    pub emi: Money,
    /// Resolved EMI times the nominal term.
    pub total_payable: Money,
    /// Total payable less the principal.
    pub total_interest: Money,
    pub schedule: Vec<ScheduleEntry>,
    /// Start date plus the nominal term in calendar months.
    pub end_date: NaiveDate,
    /// Echo of the input terms.
    pub terms: LoanTerms,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
