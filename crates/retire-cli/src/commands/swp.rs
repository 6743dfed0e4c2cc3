use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use retire_core::swp::{self, SwpInput};
use retire_core::types::{BalancePoint, Money};

use crate::input;

/// Arguments for the withdrawal plan simulation
#[derive(Args)]
pub struct SwpArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Starting retirement corpus
    #[arg(long)]
    pub corpus: Option<Decimal>,

    /// Monthly withdrawal amount
    #[arg(long)]
    pub withdrawal: Option<Decimal>,

    /// Expected annual return in percent (8 = 8%)
    #[arg(long, allow_hyphen_values = true)]
    pub return_rate: Option<Decimal>,

    /// Number of years to simulate
    #[arg(long)]
    pub years: Option<u32>,

    /// Report year-end balances instead of the monthly schedule
    #[arg(long)]
    pub yearly: bool,
}

/// Year-end view of the schedule: each year's last recorded balance.
#[derive(Debug, Serialize)]
struct YearEndBalance {
    year: u32,
    balance: Money,
}

pub fn run_swp(args: SwpArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let swp_input: SwpInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SwpInput {
            starting_corpus: args
                .corpus
                .ok_or("--corpus is required (or provide --input)")?,
            monthly_withdrawal: args
                .withdrawal
                .ok_or("--withdrawal is required (or provide --input)")?,
            annual_return_pct: args
                .return_rate
                .ok_or("--return-rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };

    // Domain validation happens here, not in the core
    if swp_input.years == 0 {
        return Err("--years must be at least 1".into());
    }

    let result = swp::simulate_withdrawals(&swp_input)?;

    let yearly = args
        .yearly
        .then(|| year_end_series(&result.result.schedule));

    let mut value = serde_json::to_value(result)?;
    if let Some(series) = yearly {
        if let Some(obj) = value["result"].as_object_mut() {
            obj.remove("schedule");
            obj.insert("yearly_schedule".into(), serde_json::to_value(series)?);
        }
    }
    Ok(value)
}

/// Collapse the monthly schedule to one point per year, keeping each year's
/// last balance. Year numbering follows the schedule: months 1-12 are year 1.
fn year_end_series(schedule: &[BalancePoint]) -> Vec<YearEndBalance> {
    let mut series: Vec<YearEndBalance> = Vec::new();
    for point in schedule {
        let year = (point.month - 1) / 12 + 1;
        match series.last_mut() {
            Some(last) if last.year == year => last.balance = point.balance,
            _ => series.push(YearEndBalance {
                year,
                balance: point.balance,
            }),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_year_end_series_takes_last_balance_of_each_year() {
        let schedule: Vec<BalancePoint> = (1..=30)
            .map(|month| BalancePoint {
                month,
                balance: Decimal::from(1000 - month as i64),
            })
            .collect();

        let series = year_end_series(&schedule);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].year, 1);
        assert_eq!(series[0].balance, dec!(988)); // month 12
        assert_eq!(series[1].balance, dec!(976)); // month 24
        assert_eq!(series[2].year, 3);
        assert_eq!(series[2].balance, dec!(970)); // month 30, partial year
    }

    #[test]
    fn test_year_end_series_empty_schedule() {
        assert!(year_end_series(&[]).is_empty());
    }
}
