use clap::ValueEnum;
use rust_decimal::Decimal;

/// Display-only currency styling. Formatting never feeds back into the
/// numbers the core produced.
#[derive(Debug, Clone, ValueEnum)]
pub enum CurrencyStyle {
    /// Raw decimal values, no symbol or grouping
    None,
    /// Indian rupee with lakh/crore digit grouping
    Inr,
    Usd,
    Eur,
    Gbp,
}

impl CurrencyStyle {
    fn symbol(&self) -> &'static str {
        match self {
            CurrencyStyle::None => "",
            CurrencyStyle::Inr => "₹",
            CurrencyStyle::Usd => "$",
            CurrencyStyle::Eur => "€",
            CurrencyStyle::Gbp => "£",
        }
    }

    fn indian_grouping(&self) -> bool {
        matches!(self, CurrencyStyle::Inr)
    }
}

/// Fields in core outputs that hold monetary amounts. Months, rates, and
/// counts render raw.
const MONEY_FIELDS: &[&str] = &[
    "balance",
    "final_balance",
    "total_interest",
    "total_withdrawn",
    "starting_corpus",
    "monthly_withdrawal",
    "corpus_required",
    "future_monthly_expense",
    "annual_expense_at_retirement",
    "monthly_expense",
];

pub fn is_money_field(name: &str) -> bool {
    MONEY_FIELDS.contains(&name)
}

/// Render a monetary amount in the chosen style, rounded to two places.
pub fn format_money(amount: Decimal, style: &CurrencyStyle) -> String {
    if matches!(style, CurrencyStyle::None) {
        return amount.to_string();
    }

    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
        None => (text, "00".to_string()),
    };

    let grouped = if style.indian_grouping() {
        group_indian(&int_part)
    } else {
        group_thousands(&int_part)
    };

    let sign = if negative { "-" } else { "" };
    format!("{}{}{}.{}", sign, style.symbol(), grouped, frac_part)
}

/// Western grouping: a separator every three digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Indian grouping: three digits, then pairs (1,00,00,000).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_chars: Vec<char> = head.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut i = head_chars.len();
    while i > 0 {
        let start = i.saturating_sub(2);
        groups.push(head_chars[start..i].iter().collect());
        i = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_western_grouping() {
        assert_eq!(format_money(dec!(1234567.891), &CurrencyStyle::Usd), "$1,234,567.89");
        assert_eq!(format_money(dec!(999), &CurrencyStyle::Usd), "$999.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(
            format_money(dec!(10000000), &CurrencyStyle::Inr),
            "₹1,00,00,000.00"
        );
        assert_eq!(format_money(dec!(96214.3), &CurrencyStyle::Inr), "₹96,214.30");
        assert_eq!(format_money(dec!(123), &CurrencyStyle::Inr), "₹123.00");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_money(dec!(-993.57), &CurrencyStyle::Inr), "-₹993.57");
    }

    #[test]
    fn test_plain_style_is_untouched() {
        assert_eq!(format_money(dec!(1234.5678), &CurrencyStyle::None), "1234.5678");
    }
}
