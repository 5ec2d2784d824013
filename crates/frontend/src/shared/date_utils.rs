/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format a timestamp as DD/MM/YYYY (UTC).
/// Example: 2025-06-27T11:00:00Z -> "27/06/2025"
pub fn format_date_utc(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

/// Format a timestamp as "HH:MM AM/PM DD/MM/YYYY" (UTC).
/// Example: 2025-06-27T11:00:00Z -> "11:00 AM 27/06/2025"
pub fn format_datetime_utc(at: DateTime<Utc>) -> String {
    at.format("%I:%M %p %d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ts(value: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
            .expect("bad test timestamp")
            .and_utc()
    }

    #[test]
    fn test_format_date_utc() {
        assert_eq!(format_date_utc(ts("2025-06-27 11:00:00")), "27/06/2025");
        assert_eq!(format_date_utc(ts("2024-12-31 23:59:59")), "31/12/2024");
    }

    #[test]
    fn test_format_datetime_utc() {
        assert_eq!(
            format_datetime_utc(ts("2025-06-27 11:00:00")),
            "11:00 AM 27/06/2025"
        );
        assert_eq!(
            format_datetime_utc(ts("2025-06-27 17:05:00")),
            "05:05 PM 27/06/2025"
        );
    }
}
