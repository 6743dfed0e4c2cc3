mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::corpus::CorpusArgs;
use commands::swp::SwpArgs;
use output::currency::CurrencyStyle;

/// Retirement corpus and SWP calculations
#[derive(Parser)]
#[command(
    name = "retire",
    version,
    about = "Retirement corpus and systematic withdrawal plan calculations",
    long_about = "A CLI for personal retirement planning with decimal precision. \
                  Estimates the lump sum needed to fund an inflation-adjusted \
                  expense stream and simulates a systematic withdrawal plan \
                  month by month, reporting when the corpus runs out."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Currency styling for table and minimal output (display only)
    #[arg(long, default_value = "none", global = true)]
    currency: CurrencyStyle,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the corpus required at retirement
    Corpus(CorpusArgs),
    /// Simulate a systematic withdrawal plan against a corpus
    Swp(SwpArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Corpus(args) => commands::corpus::run_corpus(args),
        Commands::Swp(args) => commands::swp::run_swp(args),
        Commands::Version => {
            println!("retire {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &cli.currency, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
