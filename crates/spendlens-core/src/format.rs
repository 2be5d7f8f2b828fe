//! Number formatting for user-facing text
//!
//! Amounts are rounded to whole tenge and grouped in threes with a plain space:
//! `1234567.4` renders as `1 234 567`.

use crate::config::CURRENCY;

/// Separator placed between digit groups
pub const GROUP_SEPARATOR: char = ' ';

/// Absolute value, rounded, grouped (`-9000.0` -> `9 000`)
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    group_digits(&format!("{:.0}", value.abs().round()))
}

/// Like [`format_amount`] but keeps a leading `-` for outflows
pub fn format_signed_amount(value: f64) -> String {
    let formatted = format_amount(value);
    if value < 0.0 && formatted != "0" {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Formatted absolute amount followed by the currency symbol
pub fn format_money(value: f64) -> String {
    format!("{} {}", format_amount(value), CURRENCY)
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
