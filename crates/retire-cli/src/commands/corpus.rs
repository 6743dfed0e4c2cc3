use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use retire_core::corpus::{self, CorpusInput};

use crate::input;

/// Arguments for the corpus requirement estimate
#[derive(Args)]
pub struct CorpusArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Current monthly expense
    #[arg(long)]
    pub monthly_expense: Option<Decimal>,

    /// Years left until retirement
    #[arg(long)]
    pub years_until_retirement: Option<u32>,

    /// Expected annual inflation rate in percent (6 = 6%)
    #[arg(long, allow_hyphen_values = true)]
    pub inflation_rate: Option<Decimal>,

    /// Expected number of years in retirement
    #[arg(long)]
    pub post_retirement_years: Option<u32>,
}

pub fn run_corpus(args: CorpusArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let corpus_input: CorpusInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        CorpusInput {
            monthly_expense: args
                .monthly_expense
                .ok_or("--monthly-expense is required (or provide --input)")?,
            years_until_retirement: args
                .years_until_retirement
                .ok_or("--years-until-retirement is required (or provide --input)")?,
            inflation_rate_pct: args
                .inflation_rate
                .ok_or("--inflation-rate is required (or provide --input)")?,
            post_retirement_years: args
                .post_retirement_years
                .ok_or("--post-retirement-years is required (or provide --input)")?,
        }
    };

    // Domain validation happens here, not in the core
    if corpus_input.monthly_expense <= Decimal::ZERO {
        return Err("monthly expense must be positive".into());
    }

    let result = corpus::estimate_corpus(&corpus_input)?;
    Ok(serde_json::to_value(result)?)
}
