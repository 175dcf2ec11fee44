use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanEngineError {
    #[error("Invalid principal {value}: {reason}")]
    InvalidPrincipal { value: Decimal, reason: String },

    #[error("Invalid term {value}: {reason}")]
    InvalidTerm { value: i64, reason: String },

    #[error("Invalid rate {value}: {reason}")]
    InvalidRate { value: Decimal, reason: String },

    #[error("Invalid manual EMI {value}: {reason}")]
    InvalidManualEmi { value: Decimal, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanEngineError {
    fn from(e: serde_json::Error) -> Self {
        LoanEngineError::SerializationError(e.to_string())
    }
}
