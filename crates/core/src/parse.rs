//! Lenient parsers for the string values typed into the hangout forms.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parses a calendar day, discarding any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, local date-times (`YYYY-MM-DDTHH:MM[:SS]`) and RFC 3339.
pub fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day);
    }
    parse_local_date_time(raw).map(|date_time| date_time.date())
}

/// Parses a time of day written as `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Parses a wall-clock date-time without an offset.
///
/// RFC 3339 input keeps its local reading; the offset is dropped.
pub fn parse_local_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|date_time| date_time.naive_local())
        })
}
