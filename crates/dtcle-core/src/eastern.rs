//! Eastern-time formatting for displayed dates and timestamps.
//!
//! Everything the site shows is anchored to America/New_York regardless of
//! where the server runs. Calendar dates are pinned to local noon before
//! formatting so UTC conversion and DST transitions can never shift the
//! displayed day.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::US::Eastern;

/// Format a `YYYY-MM-DD` calendar date as a long-form Eastern date,
/// e.g. "Tuesday, Dec 3".
///
/// Returns `None` for malformed input; the caller omits the line.
pub fn display_date(date: &str) -> Option<String> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let noon = day.and_time(NaiveTime::from_hms_opt(12, 0, 0)?);
    // Noon is never inside a US DST gap (transitions happen at 2 AM).
    let anchored = Eastern.from_local_datetime(&noon).single()?;
    Some(anchored.format("%A, %b %-d").to_string())
}

/// Format an ISO 8601 instant as an Eastern "last checked" stamp,
/// e.g. "12/03/2024, 5:45 PM".
///
/// Returns `None` for malformed input; the caller omits the footer.
pub fn checked_at_stamp(checked_at: &str) -> Option<String> {
    let instant = DateTime::parse_from_rfc3339(checked_at).ok()?;
    Some(
        instant
            .with_timezone(&Eastern)
            .format("%m/%d/%Y, %-I:%M %p")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_long_form() {
        assert_eq!(display_date("2024-12-03").as_deref(), Some("Tuesday, Dec 3"));
        assert_eq!(display_date("2024-07-04").as_deref(), Some("Thursday, Jul 4"));
    }

    #[test]
    fn display_date_single_digit_day_unpadded() {
        assert_eq!(display_date("2025-03-09").as_deref(), Some("Sunday, Mar 9"));
    }

    #[test]
    fn display_date_dst_transition_day() {
        // US spring-forward date; noon anchoring keeps the calendar day.
        assert_eq!(display_date("2024-03-10").as_deref(), Some("Sunday, Mar 10"));
    }

    #[test]
    fn display_date_malformed() {
        assert_eq!(display_date("12/03/2024"), None);
        assert_eq!(display_date("2024-13-40"), None);
        assert_eq!(display_date(""), None);
    }

    #[test]
    fn checked_at_converts_utc_to_eastern() {
        // 22:45 UTC in December is 5:45 PM EST.
        assert_eq!(
            checked_at_stamp("2024-12-03T22:45:00Z").as_deref(),
            Some("12/03/2024, 5:45 PM")
        );
    }

    #[test]
    fn checked_at_respects_dst() {
        // 16:00 UTC in July is noon EDT.
        assert_eq!(
            checked_at_stamp("2024-07-04T16:00:00Z").as_deref(),
            Some("07/04/2024, 12:00 PM")
        );
    }

    #[test]
    fn checked_at_crosses_the_date_line() {
        // Just past UTC midnight is still the previous evening in Cleveland.
        assert_eq!(
            checked_at_stamp("2024-12-04T03:30:00Z").as_deref(),
            Some("12/03/2024, 10:30 PM")
        );
    }

    #[test]
    fn checked_at_accepts_offset_input() {
        assert_eq!(
            checked_at_stamp("2024-12-03T17:45:00-05:00").as_deref(),
            Some("12/03/2024, 5:45 PM")
        );
    }

    #[test]
    fn checked_at_morning_is_am() {
        assert_eq!(
            checked_at_stamp("2024-12-03T14:05:00Z").as_deref(),
            Some("12/03/2024, 9:05 AM")
        );
    }

    #[test]
    fn checked_at_malformed() {
        assert_eq!(checked_at_stamp("yesterday"), None);
        assert_eq!(checked_at_stamp(""), None);
    }
}
