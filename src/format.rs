//! Display helpers for API values.

use chrono::{Datelike, NaiveDate};

/// Format an amount with its currency for display.
///
/// Known currencies use their symbol, others are suffixed with the code.
/// Thousands are grouped with commas; yen has no minor unit.
#[must_use]
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let decimals: usize = if code == "JPY" { 0 } else { 2 };
    let sign = if amount < 0.0 { "-" } else { "" };
    let digits = group_thousands(&format!("{:.*}", decimals, amount.abs()));

    match code.as_str() {
        "USD" => format!("{sign}${digits}"),
        "EUR" => format!("{sign}€{digits}"),
        "GBP" => format!("{sign}£{digits}"),
        "JPY" => format!("{sign}¥{digits}"),
        "" => format!("{sign}{digits}"),
        _ => format!("{sign}{digits} {code}"),
    }
}

fn group_thousands(number: &str) -> String {
    let (int_part, frac_part) = number.split_once('.').map_or((number, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

/// Format a date like `May 01, 2026`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Format a date range compactly, e.g. `May 01 - 05, 2026`.
#[must_use]
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        format_date(start)
    } else if start.year() != end.year() {
        format!("{} - {}", format_date(start), format_date(end))
    } else if start.month() != end.month() {
        format!("{} - {}", start.format("%b %d"), format_date(end))
    } else {
        format!("{} - {}", start.format("%b %d"), end.format("%d, %Y"))
    }
}

/// Format a number of days, e.g. `1 day` or `5 days`.
#[must_use]
pub fn format_duration_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}
