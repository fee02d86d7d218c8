//! Display formatting for money, percentages and dates
//!
//! Amounts are stored and aggregated in whole rupees; scaling to lakh/crore
//! only happens here, at render time.

use chrono::NaiveDate;

use super::list_view::ListViewError;

pub const LAKH: f64 = 100_000.0;
pub const CRORE: f64 = 10_000_000.0;

/// Indian digit grouping: last three digits, then groups of two
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `1234567` -> `₹12,34,567`
pub fn format_inr(amount: i64) -> String {
    let grouped = group_indian(&amount.unsigned_abs().to_string());
    if amount < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Compact form used on KPI cards: `₹6.00 Cr`, `₹2.50 L`, or the full amount
pub fn format_inr_compact(amount: f64) -> String {
    let abs = amount.abs();
    let sign = if amount < 0.0 { "-" } else { "" };
    if abs >= CRORE {
        format!("{}₹{:.2} Cr", sign, abs / CRORE)
    } else if abs >= LAKH {
        format!("{}₹{:.2} L", sign, abs / LAKH)
    } else {
        format_inr(amount.round() as i64)
    }
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.prec$}%", value, prec = decimals)
}

/// Mean of an empty subset has no value and renders as a dash
pub fn format_mean(value: Option<f64>, fmt: fn(f64) -> String) -> String {
    match value {
        Some(v) => fmt(v),
        None => "—".to_string(),
    }
}

/// Strict `YYYY-MM-DD` parsing; malformed input is an error, never a silent default
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, ListViewError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ListViewError::InvalidDate(value.to_string()))
}

/// `2025-10-15` -> `15.10.2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1000), "₹1,000");
        assert_eq!(format_inr(100000), "₹1,00,000");
        assert_eq!(format_inr(1234567), "₹12,34,567");
        assert_eq!(format_inr(123456789), "₹12,34,56,789");
        assert_eq!(format_inr(-45000), "-₹45,000");
    }

    #[test]
    fn test_format_inr_compact() {
        assert_eq!(format_inr_compact(60_000_000.0), "₹6.00 Cr");
        assert_eq!(format_inr_compact(250_000.0), "₹2.50 L");
        assert_eq!(format_inr_compact(45_500.0), "₹45,500");
        assert_eq!(format_inr_compact(-15_000_000.0), "-₹1.50 Cr");
    }

    #[test]
    fn test_format_mean() {
        assert_eq!(format_mean(None, |v| format_percent(v, 1)), "—");
        assert_eq!(format_mean(Some(72.26), |v| format_percent(v, 1)), "72.3%");
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("2025-10-15").unwrap();
        assert_eq!(format_date(date), "15.10.2025");
        assert_eq!(
            parse_iso_date("15/10/2025"),
            Err(ListViewError::InvalidDate("15/10/2025".into()))
        );
        assert!(parse_iso_date("2025-02-30").is_err());
        assert!(parse_iso_date("").is_err());
    }
}
