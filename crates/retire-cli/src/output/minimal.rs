use rust_decimal::Decimal;
use serde_json::Value;

use super::currency::{self, CurrencyStyle};

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first field in the result object.
pub fn print_minimal(value: &Value, style: &CurrencyStyle) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "corpus_required",
        "final_balance",
        "depletion_month",
        "months_simulated",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(key, val, style));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(key, val, style));
            return;
        }
    }

    println!("{}", format_minimal("", result_obj, style));
}

fn format_minimal(name: &str, value: &Value, style: &CurrencyStyle) -> String {
    if currency::is_money_field(name) {
        if let Some(amount) = value.as_str().and_then(|s| s.parse::<Decimal>().ok()) {
            return currency::format_money(amount, style);
        }
    }
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
