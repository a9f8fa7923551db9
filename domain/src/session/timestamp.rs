//! Timestamp format for session creation.
//!
//! The backend parses `date` as UTC ISO-8601 with exactly three fractional
//! digits and a `Z` suffix, e.g. `2024-01-01T00:00:00.000Z`. Sub-millisecond
//! precision is truncated, never rounded.

use chrono::{DateTime, Utc};

const SESSION_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format `instant` the way the session endpoint expects.
pub fn format_session_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(SESSION_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncates_to_milliseconds() {
        let instant = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap()
            + chrono::Duration::microseconds(123_456);
        assert_eq!(format_session_timestamp(instant), "2023-05-01T12:00:00.123Z");
    }

    #[test]
    fn test_does_not_round_up() {
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap()
            + chrono::Duration::microseconds(999_999);
        assert_eq!(format_session_timestamp(instant), "2023-12-31T23:59:59.999Z");
    }

    #[test]
    fn test_whole_seconds_keep_three_digits() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_session_timestamp(instant), "2024-01-01T00:00:00.000Z");
    }
}
