//! Period-by-period amortization schedule generators.
//!
//! Both generators share the same termination rules: the final period
//! absorbs whatever balance remains so the schedule closes at exactly
//! zero despite per-period rounding drift, and if the balance closes
//! before the nominal final period the schedule stops early. Downstream
//! code indexes schedules by period count, so the early-exit policy is
//! part of the contract.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::conventions::{add_months, round2, PCT_DIVISOR};
use crate::error::LoanEngineError;
use crate::types::{Money, RatePct, ScheduleEntry};
use crate::LoanEngineResult;

use super::validate_loan_inputs;

/// Flat-rate schedule: interest per period is constant, computed once
/// from the ORIGINAL principal rather than the amortizing balance.
pub fn simple_schedule(
    principal: Money,
    rate_pct: RatePct,
    term_months: u32,
    emi: Money,
    start_date: NaiveDate,
) -> LoanEngineResult<Vec<ScheduleEntry>> {
    validate_loan_inputs(principal, rate_pct, term_months)?;
    validate_installment(emi)?;

    let interest_per_period = round2(principal * rate_pct / PCT_DIVISOR);
    build_schedule(principal, term_months, emi, start_date, |_| interest_per_period)
}

/// Reducing-balance schedule: interest per period is recomputed each
/// iteration from the CURRENT outstanding balance.
pub fn compound_schedule(
    principal: Money,
    rate_pct: RatePct,
    term_months: u32,
    emi: Money,
    start_date: NaiveDate,
) -> LoanEngineResult<Vec<ScheduleEntry>> {
    validate_loan_inputs(principal, rate_pct, term_months)?;
    validate_installment(emi)?;

    let r = rate_pct / PCT_DIVISOR;
    build_schedule(principal, term_months, emi, start_date, |balance| {
        round2(balance * r)
    })
}

fn validate_installment(emi: Money) -> LoanEngineResult<()> {
    if emi <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidManualEmi {
            value: emi,
            reason: "Installment must be positive".into(),
        });
    }
    Ok(())
}

/// Shared amortization loop. `interest_for` yields the interest charge
/// for the period given the balance outstanding before the payment.
fn build_schedule(
    principal: Money,
    term_months: u32,
    emi: Money,
    start_date: NaiveDate,
    interest_for: impl Fn(Money) -> Money,
) -> LoanEngineResult<Vec<ScheduleEntry>> {
    let mut schedule: Vec<ScheduleEntry> = Vec::with_capacity(term_months as usize);
    let mut balance = principal;

    for period in 1..=term_months {
        let interest_component = interest_for(balance);
        let scheduled = round2(emi - interest_component);

        // The final period always absorbs the remaining balance so the
        // schedule terminates at exactly zero; an earlier period that
        // would overshoot the balance closes the loan the same way.
        let closes = period == term_months || scheduled >= balance;

        // An installment that fails to cover the period interest would
        // grow the balance instead of retiring it.
        if !closes && scheduled <= Decimal::ZERO {
            return Err(LoanEngineError::InvalidManualEmi {
                value: emi,
                reason: format!(
                    "Installment {emi} does not cover the period interest {interest_component}"
                ),
            });
        }

        let principal_component = if closes { balance } else { scheduled };

        balance = round2(balance - principal_component);

        // On the closing row the installment recorded is the actual
        // final payment, keeping principal + interest == emi exact.
        let installment = if closes {
            round2(principal_component + interest_component)
        } else {
            emi
        };

        schedule.push(ScheduleEntry {
            period,
            emi: installment,
            principal_component,
            interest_component,
            remaining_balance: balance,
            due_date: add_months(start_date, period)?,
        });

        if closes {
            break;
        }
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_simple_schedule_reference_case() {
        // principal 100000, 2%/month flat, 12 months, emi 10333.33
        let schedule =
            simple_schedule(dec!(100000), dec!(2), 12, dec!(10333.33), start()).unwrap();
        assert_eq!(schedule.len(), 12);

        // Constant flat-rate interest off the original principal
        for entry in &schedule {
            assert_eq!(entry.interest_component, dec!(2000));
        }

        assert_eq!(schedule[0].principal_component, dec!(8333.33));
        assert_eq!(schedule[0].remaining_balance, dec!(91666.67));
        assert_eq!(schedule[10].remaining_balance, dec!(8333.37));

        // Final period absorbs the rounding drift exactly
        let last = schedule.last().unwrap();
        assert_eq!(last.principal_component, dec!(8333.37));
        assert_eq!(last.remaining_balance, Decimal::ZERO);
        assert_eq!(last.emi, dec!(10333.37));
    }

    #[test]
    fn test_compound_schedule_reference_case() {
        // principal 100000, 2%/month reducing, 12 months, emi 9455.96
        let schedule =
            compound_schedule(dec!(100000), dec!(2), 12, dec!(9455.96), start()).unwrap();
        assert_eq!(schedule.len(), 12);

        // Interest recomputed from the live balance each period
        assert_eq!(schedule[0].interest_component, dec!(2000));
        assert_eq!(schedule[0].principal_component, dec!(7455.96));
        assert_eq!(schedule[0].remaining_balance, dec!(92544.04));
        assert_eq!(schedule[1].interest_component, dec!(1850.88));
        assert_eq!(schedule[1].remaining_balance, dec!(84938.96));

        let last = schedule.last().unwrap();
        assert_eq!(last.interest_component, dec!(185.41));
        assert_eq!(last.principal_component, dec!(9270.56));
        assert_eq!(last.remaining_balance, Decimal::ZERO);
        // Actual closing payment drifts one cent above the nominal EMI
        assert_eq!(last.emi, dec!(9455.97));
    }

    #[test]
    fn test_component_sum_matches_installment() {
        let schedule =
            compound_schedule(dec!(100000), dec!(2), 12, dec!(9455.96), start()).unwrap();
        for entry in &schedule {
            assert_eq!(
                round2(entry.principal_component + entry.interest_component),
                entry.emi,
                "period {}",
                entry.period
            );
        }
    }

    #[test]
    fn test_balance_non_increasing() {
        let schedule =
            simple_schedule(dec!(75000), dec!(1.5), 24, dec!(4250), start()).unwrap();
        let mut prev = dec!(75000);
        for entry in &schedule {
            assert!(
                entry.remaining_balance <= prev,
                "balance rose at period {}",
                entry.period
            );
            prev = entry.remaining_balance;
        }
        assert_eq!(schedule.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_early_payoff_truncates_schedule() {
        // Oversized negotiated installment closes a 12-month loan in 4.
        let schedule =
            compound_schedule(dec!(100000), dec!(2), 12, dec!(30000), start()).unwrap();
        assert_eq!(schedule.len(), 4);

        assert_eq!(schedule[2].remaining_balance, dec!(14308.80));
        let last = &schedule[3];
        assert_eq!(last.principal_component, dec!(14308.80));
        assert_eq!(last.interest_component, dec!(286.18));
        assert_eq!(last.remaining_balance, Decimal::ZERO);
        assert_eq!(last.emi, dec!(14594.98));
    }

    #[test]
    fn test_due_dates_calendar_aware() {
        // Start Jan 31: Feb due date clamps to the 29th (leap year),
        // later months return to the 31st/30th as available.
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let schedule = simple_schedule(dec!(12000), dec!(1), 12, dec!(1120), start).unwrap();

        assert_eq!(
            schedule[0].due_date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            schedule[1].due_date,
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
        assert_eq!(
            schedule[2].due_date,
            NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()
        );
        // Year rollover on the final period
        assert_eq!(
            schedule.last().unwrap().due_date,
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
    }

    #[test]
    fn test_zero_rate_schedule_splits_principal() {
        let schedule =
            compound_schedule(dec!(12000), dec!(0), 12, dec!(1000), start()).unwrap();
        assert_eq!(schedule.len(), 12);
        for entry in &schedule {
            assert_eq!(entry.interest_component, Decimal::ZERO);
            assert_eq!(entry.principal_component, dec!(1000));
        }
        assert_eq!(schedule.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_nonpositive_installment_rejected() {
        let err = simple_schedule(dec!(100000), dec!(2), 12, dec!(0), start()).unwrap_err();
        assert!(matches!(err, LoanEngineError::InvalidManualEmi { .. }));
    }

    #[test]
    fn test_installment_below_period_interest_rejected() {
        // 2%/month on 100000 accrues 2000 per period; an installment of
        // 100 would let the balance grow every period instead of
        // amortizing it.
        let err =
            compound_schedule(dec!(100000), dec!(2), 12, dec!(100), start()).unwrap_err();
        assert!(matches!(err, LoanEngineError::InvalidManualEmi { .. }));

        // Same breach under the flat-rate convention, just below the
        // constant charge.
        let err =
            simple_schedule(dec!(100000), dec!(2), 12, dec!(1999.99), start()).unwrap_err();
        assert!(matches!(err, LoanEngineError::InvalidManualEmi { .. }));

        // Exactly covering the interest still never retires principal.
        let err = simple_schedule(dec!(100000), dec!(2), 12, dec!(2000), start()).unwrap_err();
        assert!(matches!(err, LoanEngineError::InvalidManualEmi { .. }));
    }
}
