use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::monthly_rate;
use crate::types::{with_metadata, BalancePoint, ComputationOutput, Money, Rate};
use crate::RetireResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a systematic withdrawal plan simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpInput {
    pub starting_corpus: Money,
    /// Fixed amount withdrawn at the end of each month.
    pub monthly_withdrawal: Money,
    /// Assumed annual return, as a percentage (8 = 8%).
    pub annual_return_pct: Rate,
    /// Simulation horizon in whole years; the loop runs at most years * 12
    /// months.
    pub years: u32,
}

/// Output from `simulate_withdrawals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpOutput {
    /// Effective monthly compounding rate derived from the annual rate.
    pub monthly_return: Rate,
    pub months_simulated: u32,
    pub depleted: bool,
    /// First month at which the balance fell to or below zero, if any.
    pub depletion_month: Option<u32>,
    pub final_balance: Money,
    pub total_interest: Money,
    pub total_withdrawn: Money,
    /// Month-by-month ending balances, truncated at depletion.
    pub schedule: Vec<BalancePoint>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Simulate monthly compounding growth interleaved with a fixed withdrawal.
///
/// Each month credits interest on the running balance, deducts the
/// withdrawal, and records the ending balance. The loop stops at the first
/// month the balance falls to or below zero; that terminal point stays in
/// the schedule.
pub fn simulate_withdrawals(input: &SwpInput) -> RetireResult<ComputationOutput<SwpOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let monthly_return = monthly_rate(input.annual_return_pct)?;

    let total_months = input.years * 12;
    let mut schedule: Vec<BalancePoint> = Vec::with_capacity(total_months as usize);
    let mut balance = input.starting_corpus;
    let mut total_interest = Decimal::ZERO;
    let mut total_withdrawn = Decimal::ZERO;
    let mut depletion_month: Option<u32> = None;

    for month in 1..=total_months {
        let interest = balance * monthly_return;
        balance = balance + interest - input.monthly_withdrawal;

        total_interest += interest;
        total_withdrawn += input.monthly_withdrawal;

        schedule.push(BalancePoint { month, balance });

        if balance <= Decimal::ZERO {
            depletion_month = Some(month);
            break;
        }
    }

    if let Some(month) = depletion_month {
        let year = (month - 1) / 12 + 1;
        warnings.push(format!("Corpus exhausted at month {month} (year {year})"));
    }

    let output = SwpOutput {
        monthly_return,
        months_simulated: schedule.len() as u32,
        depleted: depletion_month.is_some(),
        depletion_month,
        final_balance: schedule
            .last()
            .map(|p| p.balance)
            .unwrap_or(input.starting_corpus),
        total_interest,
        total_withdrawn,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Systematic withdrawal plan (monthly compounding, fixed withdrawal)",
        &serde_json::json!({
            "starting_corpus": input.starting_corpus.to_string(),
            "monthly_withdrawal": input.monthly_withdrawal.to_string(),
            "annual_return_pct": input.annual_return_pct.to_string(),
            "years": input.years,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
