pub mod csv_out;
pub mod currency;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use currency::CurrencyStyle;
use serde_json::Value;

/// Dispatch output to the appropriate formatter. Currency styling applies
/// only to the human-facing formats; JSON and CSV stay raw.
pub fn format_output(format: &OutputFormat, style: &CurrencyStyle, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value, style),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value, style),
    }
}
