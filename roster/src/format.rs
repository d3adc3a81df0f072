//! Display formatting helpers.

/// Currency code prefixed to money amounts.
pub const CURRENCY: &str = "QAR";

/// Format `value` with en-US digit grouping and at most three fraction digits.
#[must_use]
pub fn group_thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let text = format!("{:.3}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Money amount such as `QAR 27,500`.
#[must_use]
pub fn currency(value: f64) -> String {
    format!("{CURRENCY} {}", group_thousands(value))
}

/// Uppercased first letter of each whitespace-separated part of `name`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Today's local date as `YYYY-MM-DD`.
#[must_use]
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
