use chrono::NaiveDate;
use loan_engine_core::conventions::round2;
use loan_engine_core::emi::{compound_emi, compound_schedule, simple_emi, simple_schedule};
use loan_engine_core::payoff::{prepayment_amount, remaining_balance};
use loan_engine_core::types::ScheduleEntry;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Schedule invariant tests
// ===========================================================================

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

/// Realistic lender scenarios: (principal, monthly rate %, term months)
fn scenarios() -> Vec<(Decimal, Decimal, u32)> {
    vec![
        (dec!(10000), dec!(0.5), 6),
        (dec!(50000), dec!(1.5), 18),
        (dec!(100000), dec!(2), 12),
        (dec!(250000), dec!(3), 36),
        (dec!(1200), dec!(1), 2),
        (dec!(999999), dec!(2.75), 60),
        (dec!(5000), dec!(0), 10),
    ]
}

fn assert_invariants(schedule: &[ScheduleEntry], principal: Decimal) {
    assert!(!schedule.is_empty());

    // Zero-sum: the last entry closes at exactly zero
    assert_eq!(schedule.last().unwrap().remaining_balance, Decimal::ZERO);

    let mut prev_balance = principal;
    let mut prev_due: Option<NaiveDate> = None;
    for entry in schedule {
        // Component-sum: principal + interest == installment within a cent
        let drift = (entry.principal_component + entry.interest_component - entry.emi).abs();
        assert!(
            drift <= dec!(0.01),
            "period {}: components drift {} from installment",
            entry.period,
            drift
        );

        // Monotonic balance, never negative
        assert!(entry.remaining_balance >= Decimal::ZERO);
        assert!(
            entry.remaining_balance <= prev_balance,
            "period {}: balance rose",
            entry.period
        );
        prev_balance = entry.remaining_balance;

        // Due dates strictly advance
        if let Some(prev) = prev_due {
            assert!(entry.due_date > prev, "period {}: due date regressed", entry.period);
        }
        prev_due = Some(entry.due_date);
    }
}

#[test]
fn test_simple_schedule_invariants_across_scenarios() {
    for (principal, rate, term) in scenarios() {
        let emi = simple_emi(principal, rate, term).unwrap();
        let schedule = simple_schedule(principal, rate, term, emi, start()).unwrap();
        assert_eq!(schedule.len(), term as usize);
        assert_invariants(&schedule, principal);
    }
}

#[test]
fn test_compound_schedule_invariants_across_scenarios() {
    for (principal, rate, term) in scenarios() {
        let emi = compound_emi(principal, rate, term).unwrap();
        let schedule = compound_schedule(principal, rate, term, emi, start()).unwrap();
        assert_invariants(&schedule, principal);
    }
}

#[test]
fn test_compound_emi_strictly_below_simple() {
    for (principal, rate, term) in scenarios() {
        if rate.is_zero() || term <= 1 {
            continue;
        }
        let simple = simple_emi(principal, rate, term).unwrap();
        let compound = compound_emi(principal, rate, term).unwrap();
        assert!(
            compound < simple,
            "{principal} at {rate}% over {term}m: compound {compound} not below simple {simple}"
        );
    }
}

#[test]
fn test_flat_rate_interest_fixed_on_original_principal() {
    // 50000 at 1.5%/month over 18 months, EMI 3527.78
    let schedule = simple_schedule(dec!(50000), dec!(1.5), 18, dec!(3527.78), start()).unwrap();

    for entry in &schedule {
        assert_eq!(entry.interest_component, dec!(750));
    }
    assert_eq!(schedule[0].principal_component, dec!(2777.78));
    assert_eq!(schedule[0].remaining_balance, dec!(47222.22));
    // Final period absorbs the 4-cent rounding shortfall
    let last = schedule.last().unwrap();
    assert_eq!(last.principal_component, dec!(2777.74));
    assert_eq!(last.emi, dec!(3527.74));
}

#[test]
fn test_reducing_balance_interest_declines() {
    // Same loan on reducing balance, EMI 3190.29
    let schedule = compound_schedule(dec!(50000), dec!(1.5), 18, dec!(3190.29), start()).unwrap();

    assert_eq!(schedule[0].interest_component, dec!(750));
    assert_eq!(schedule[1].interest_component, dec!(713.40));
    assert_eq!(schedule[1].principal_component, dec!(2476.89));

    let mut prev_interest = dec!(750.01);
    for entry in &schedule {
        assert!(
            entry.interest_component < prev_interest,
            "period {}: interest should shrink as principal is retired",
            entry.period
        );
        prev_interest = entry.interest_component;
    }

    let last = schedule.last().unwrap();
    assert_eq!(last.interest_component, dec!(47.15));
    assert_eq!(last.emi, dec!(3190.27));
}

// ===========================================================================
// Payoff progress against generated schedules
// ===========================================================================

#[test]
fn test_remaining_balance_tracks_schedule() {
    let emi = compound_emi(dec!(50000), dec!(1.5), 18).unwrap();
    let schedule = compound_schedule(dec!(50000), dec!(1.5), 18, emi, start()).unwrap();

    assert_eq!(remaining_balance(&schedule, 0), dec!(50000));
    assert_eq!(remaining_balance(&schedule, 1), dec!(47559.71));
    assert_eq!(remaining_balance(&schedule, 2), dec!(45082.82));
    assert_eq!(remaining_balance(&schedule, 18), Decimal::ZERO);
    assert_eq!(remaining_balance(&schedule, 25), Decimal::ZERO);
}

#[test]
fn test_foreclosure_quote_after_six_payments() {
    // Customer forecloses after 6 of 18 payments, 30 days of accrual
    let emi = compound_emi(dec!(50000), dec!(1.5), 18).unwrap();
    let schedule = compound_schedule(dec!(50000), dec!(1.5), 18, emi, start()).unwrap();

    let balance = remaining_balance(&schedule, 6);
    let quote = prepayment_amount(balance, dec!(1.5), 30);

    // One month of accrual at 1.5% on the live balance
    assert_eq!(quote, round2(balance + round2(balance * dec!(0.015))));
    assert!(quote > balance);
}
