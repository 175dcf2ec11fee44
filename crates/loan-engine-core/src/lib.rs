pub mod conventions;
pub mod emi;
pub mod error;
pub mod estimate;
pub mod payoff;
pub mod types;

pub use error::LoanEngineError;
pub use estimate::estimate_loan;
pub use types::*;

/// Standard result type for all loan-engine operations
pub type LoanEngineResult<T> = Result<T, LoanEngineError>;
