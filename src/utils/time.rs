//! Time utilities: epoch timestamps and countdown formatting.

use chrono::Utc;

/// Current wall-clock time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a millisecond duration as HH:MM:SS (clamped at zero).
pub fn format_hms(millis: i64) -> String {
    let total_secs = millis.max(0) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_one_hour() {
        assert_eq!(format_hms(3_600_000), "01:00:00");
    }

    #[test]
    fn formats_partial_and_negative() {
        assert_eq!(format_hms(61_000), "00:01:01");
        assert_eq!(format_hms(-5_000), "00:00:00");
    }
}
