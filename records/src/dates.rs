//! Date parsing and window helpers shared by tasks and scheduling.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

/// Parse an RFC 3339 timestamp, e.g. `2026-03-14T10:30:00Z`.
///
/// Returns `None` on malformed input — absent or garbage backend timestamps
/// degrade to "unscheduled" rather than failing a whole page load.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(moment) => Some(moment),
        Err(_) => None,
    }
}

/// Parse a bare `YYYY-MM-DD` date.
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    match Date::parse(raw, format_description!("[year]-[month]-[day]")) {
        Ok(date) => Some(date),
        Err(_) => None,
    }
}

/// Whole days from `from` until `to`; negative when `to` is in the past.
#[must_use]
pub fn days_until(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}

/// Whether `moment` falls in the half-open window `[now, now + days)`.
#[must_use]
pub fn within_days(now: OffsetDateTime, moment: OffsetDateTime, days: i64) -> bool {
    moment >= now && moment < now + Duration::days(days)
}
