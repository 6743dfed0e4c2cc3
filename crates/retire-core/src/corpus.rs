use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::RetireError;
use crate::time_value::compound;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::RetireResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for the corpus requirement estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusInput {
    /// Current monthly living expense, in today's money.
    pub monthly_expense: Money,
    pub years_until_retirement: u32,
    /// Assumed annual inflation, as a percentage (6 = 6%).
    pub inflation_rate_pct: Rate,
    pub post_retirement_years: u32,
}

/// Output from `estimate_corpus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusOutput {
    /// Monthly expense projected to the retirement date.
    pub future_monthly_expense: Money,
    /// Annualised expense at the retirement date.
    pub annual_expense_at_retirement: Money,
    /// Lump sum required at retirement to fund the expense stream.
    pub corpus_required: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Estimate the lump sum needed at the retirement date to sustain an
/// inflation-adjusted expense stream for a fixed number of years.
///
/// The expense stream is discounted at the inflation rate itself, not an
/// investment return rate. That is the model, not an oversight.
pub fn estimate_corpus(input: &CorpusInput) -> RetireResult<ComputationOutput<CorpusOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let inflation = input.inflation_rate_pct / dec!(100);

    let future_monthly_expense =
        input.monthly_expense * compound(inflation, input.years_until_retirement);
    let annual_expense = future_monthly_expense * dec!(12);

    let mut corpus_required = Decimal::ZERO;
    for year in 0..input.post_retirement_years {
        let discount = compound(inflation, year);
        if discount.is_zero() {
            return Err(RetireError::DivisionByZero {
                context: format!("corpus discount factor at retirement year {year}"),
            });
        }
        corpus_required += annual_expense / discount;
    }

    if input.inflation_rate_pct < Decimal::ZERO {
        warnings.push("Negative inflation rate: projected expenses shrink over time".into());
    }

    let output = CorpusOutput {
        future_monthly_expense,
        annual_expense_at_retirement: annual_expense,
        corpus_required,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Retirement corpus requirement (expenses compounded and discounted at inflation)",
        &serde_json::json!({
            "monthly_expense": input.monthly_expense.to_string(),
            "years_until_retirement": input.years_until_retirement,
            "inflation_rate_pct": input.inflation_rate_pct.to_string(),
            "post_retirement_years": input.post_retirement_years,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
