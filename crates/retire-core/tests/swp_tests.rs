use retire_core::swp::{simulate_withdrawals, SwpInput};
use retire_core::RetireError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Withdrawal simulation tests
// ===========================================================================

fn crore_corpus() -> SwpInput {
    // 1 crore corpus, 40k/month withdrawal, 8% assumed return, 30 years
    SwpInput {
        starting_corpus: dec!(10_000_000),
        monthly_withdrawal: dec!(40_000),
        annual_return_pct: dec!(8),
        years: 30,
    }
}

#[test]
fn test_swp_length_is_horizon_when_sustainable() {
    let result = simulate_withdrawals(&crore_corpus()).unwrap();
    let out = &result.result;

    assert_eq!(out.schedule.len(), 360);
    assert!(!out.depleted);
    assert!(out.schedule.iter().all(|p| p.balance > Decimal::ZERO));
}

#[test]
fn test_swp_length_is_depletion_month_when_depleted() {
    let input = SwpInput {
        starting_corpus: dec!(500_000),
        monthly_withdrawal: dec!(50_000),
        annual_return_pct: dec!(8),
        years: 10,
    };
    let result = simulate_withdrawals(&input).unwrap();
    let out = &result.result;

    // ~10 months of runway against 120 allowed
    assert!(out.depleted);
    let depletion = out.depletion_month.unwrap();
    assert_eq!(out.schedule.len() as u32, depletion);
    assert!(depletion < 120);
}

#[test]
fn test_swp_never_empty_for_one_year_horizon() {
    let input = SwpInput {
        starting_corpus: dec!(1_000),
        monthly_withdrawal: dec!(2_000),
        annual_return_pct: dec!(8),
        years: 1,
    };
    let result = simulate_withdrawals(&input).unwrap();
    let out = &result.result;

    assert_eq!(out.schedule.len(), 1);
    assert_eq!(out.depletion_month, Some(1));
    assert!(out.schedule[0].balance <= Decimal::ZERO);
}

#[test]
fn test_swp_months_are_strictly_increasing_without_gaps() {
    let result = simulate_withdrawals(&crore_corpus()).unwrap();
    for (i, point) in result.result.schedule.iter().enumerate() {
        assert_eq!(point.month, i as u32 + 1);
    }
}

#[test]
fn test_swp_first_month_formula() {
    let result = simulate_withdrawals(&crore_corpus()).unwrap();
    let out = &result.result;

    let expected = dec!(10_000_000) + dec!(10_000_000) * out.monthly_return - dec!(40_000);
    assert_eq!(out.schedule[0].balance, expected);
}

#[test]
fn test_swp_each_month_compounds_the_previous_balance() {
    let result = simulate_withdrawals(&crore_corpus()).unwrap();
    let out = &result.result;

    let mut balance = dec!(10_000_000);
    for point in out.schedule.iter().take(24) {
        balance = balance + balance * out.monthly_return - dec!(40_000);
        assert_eq!(point.balance, balance, "month {}", point.month);
    }
}

#[test]
fn test_swp_fault_for_impossible_return() {
    let mut input = crore_corpus();
    input.annual_return_pct = dec!(-120);

    let err = simulate_withdrawals(&input).unwrap_err();
    assert!(matches!(err, RetireError::ComputationFault { .. }));
}

#[test]
fn test_swp_depletion_warning_names_the_month() {
    let input = SwpInput {
        starting_corpus: dec!(60_000),
        monthly_withdrawal: dec!(10_000),
        annual_return_pct: Decimal::ZERO,
        years: 1,
    };
    let result = simulate_withdrawals(&input).unwrap();

    assert_eq!(result.result.depletion_month, Some(6));
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("month 6"));
}
