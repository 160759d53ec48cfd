//! Display formatting for quote and fundamentals values (en-US conventions).

use crate::{LooseNumber, MetricValue};

pub const NOT_AVAILABLE: &str = "N/A";

/// `1234.5` → `$1,234.50`, `-3.2` → `-$3.20`.
pub fn currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", two_decimals(value.abs()))
}

/// Two decimals with grouping and a leading minus when negative: `-1,234.50`.
pub fn signed(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}", two_decimals(value.abs()))
}

/// Thousands separators for whole numbers: `51234567` → `51,234,567`.
pub fn grouped(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Loose whole number with separators, or `N/A`.
pub fn grouped_loose(value: Option<&LooseNumber>) -> String {
    match value.and_then(LooseNumber::value) {
        Some(number) if number >= 0.0 => grouped(number.round() as u64),
        Some(number) => format!("-{}", grouped(number.abs().round() as u64)),
        None => String::from(NOT_AVAILABLE),
    }
}

/// Ratio shown as a percentage: `0.0052` → `0.52%`.
pub fn percent_ratio(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Two-decimal metric, or `N/A`.
pub fn metric(value: MetricValue) -> String {
    value
        .value()
        .map_or_else(|| String::from(NOT_AVAILABLE), |v| format!("{v:.2}"))
}

/// Ratio metric shown as a percentage, or `N/A`.
pub fn metric_percent(value: MetricValue) -> String {
    value
        .value()
        .map_or_else(|| String::from(NOT_AVAILABLE), percent_ratio)
}

/// Missing text fields render as `N/A`.
pub fn text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => String::from(NOT_AVAILABLE),
    }
}

fn two_decimals(value: f64) -> String {
    let rendered = format!("{value:.2}");
    match rendered.split_once('.') {
        Some((whole, fraction)) => format!("{}.{fraction}", group_digits(whole)),
        None => group_digits(&rendered),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(1234.5), "$1,234.50");
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(999.999), "$1,000.00");
        assert_eq!(currency(-3.2), "-$3.20");
        assert_eq!(currency(3_000_000_000.0), "$3,000,000,000.00");
    }

    #[test]
    fn signed_keeps_minus() {
        assert_eq!(signed(-1.234), "-1.23");
        assert_eq!(signed(1234.0), "1,234.00");
    }

    #[test]
    fn grouped_inserts_separators() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1000), "1,000");
        assert_eq!(grouped(51_234_567), "51,234,567");
    }

    #[test]
    fn grouped_loose_handles_strings_and_gaps() {
        assert_eq!(
            grouped_loose(Some(&LooseNumber::Text(String::from("164000")))),
            "164,000"
        );
        assert_eq!(grouped_loose(None), "N/A");
    }

    #[test]
    fn metrics_render_two_decimals_or_placeholder() {
        assert_eq!(metric(MetricValue::Value(28.456)), "28.46");
        assert_eq!(metric(MetricValue::NotAvailable), "N/A");
        assert_eq!(metric_percent(MetricValue::Value(0.0052)), "0.52%");
        assert_eq!(metric_percent(MetricValue::NotAvailable), "N/A");
    }

    #[test]
    fn text_fills_blanks() {
        assert_eq!(text(Some("Apple Inc.")), "Apple Inc.");
        assert_eq!(text(Some("  ")), "N/A");
        assert_eq!(text(None), "N/A");
    }
}
