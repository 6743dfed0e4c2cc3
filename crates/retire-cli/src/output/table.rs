use rust_decimal::Decimal;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::currency::{self, CurrencyStyle};

const SCHEDULE_KEYS: &[&str] = &["schedule", "yearly_schedule"];

/// Format output as tables using the tabled crate: a field/value summary,
/// then the balance schedule as its own table when present.
pub fn print_table(value: &Value, style: &CurrencyStyle) {
    let Value::Object(map) = value else {
        println!("{}", value);
        return;
    };

    let Some(result) = map.get("result") else {
        print_fields(value, style);
        return;
    };

    match result {
        Value::Object(res_map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in res_map {
                if SCHEDULE_KEYS.contains(&key.as_str()) {
                    continue;
                }
                builder.push_record([key.as_str(), &format_field(key, val, style)]);
            }
            println!("{}", Table::from(builder));

            for key in SCHEDULE_KEYS {
                if let Some(Value::Array(points)) = res_map.get(*key) {
                    println!();
                    print_schedule(points, style);
                }
            }
        }
        Value::Array(points) => print_schedule(points, style),
        other => println!("{}", other),
    }

    if let Some(Value::Array(warnings)) = map.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = map.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_fields(value: &Value, style: &CurrencyStyle) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_field(key, val, style)]);
        }
        println!("{}", Table::from(builder));
    }
}

/// Render an array of schedule points (month/balance or year/balance rows).
fn print_schedule(points: &[Value], style: &CurrencyStyle) {
    if points.is_empty() {
        println!("(empty schedule)");
        return;
    }

    let Some(Value::Object(first)) = points.first() else {
        for p in points {
            println!("{}", format_value(p));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for point in points {
        if let Value::Object(map) = point {
            let row: Vec<String> = headers
                .iter()
                .map(|h| {
                    map.get(h.as_str())
                        .map(|v| format_field(h, v, style))
                        .unwrap_or_default()
                })
                .collect();
            builder.push_record(row);
        }
    }

    println!("{}", Table::from(builder));
}

/// Money fields get currency styling; everything else renders raw.
fn format_field(name: &str, value: &Value, style: &CurrencyStyle) -> String {
    if currency::is_money_field(name) {
        if let Some(amount) = value.as_str().and_then(|s| s.parse::<Decimal>().ok()) {
            return currency::format_money(amount, style);
        }
    }
    format_value(value)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
