//! Shared formatting utilities for the UI layer.

use chrono::NaiveDate;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a date as "Jan 20, 2026".
pub fn format_date_human(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!(
        "{} {}, {}",
        MONTH_NAMES[date.month0() as usize],
        date.day(),
        date.year()
    )
}

/// Format an optional average as a two-decimal string, or "N/A".
pub fn format_avg(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    }
}

/// Format a compound sentiment score for inline display.
pub fn format_score(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        assert_eq!(format_date_human(d), "Jan 20, 2026");
    }

    #[test]
    fn formats_averages() {
        assert_eq!(format_avg(Some(0.12345)), "0.12");
        assert_eq!(format_avg(None), "N/A");
    }

    #[test]
    fn formats_scores() {
        assert_eq!(format_score(Some(-0.5)), "-0.50");
        assert_eq!(format_score(None), "n/a");
    }
}
