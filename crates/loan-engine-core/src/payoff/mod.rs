//! Loan totals, payoff progress, and early-closure amounts.

pub mod balance;
pub mod prepayment;

pub use balance::{remaining_balance, total_interest, total_payable};
pub use prepayment::{interest_for_period, prepayment_amount};
