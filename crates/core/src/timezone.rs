//! Local wall-clock values are interpreted in the creating user's timezone
//! and only leave the process as UTC instants.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::errors::{HangoutError, HangoutResult};

/// Parses an IANA timezone name such as `Europe/Prague`.
pub fn parse_timezone(name: &str) -> HangoutResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| HangoutError::Validation(format!("Unknown timezone {:?}: {}", name, e)))
}

/// Converts a local date-time in `tz` to UTC.
///
/// Ambiguous local times (the repeated hour when clocks go back) resolve to
/// the earlier instant. Local times skipped by a forward transition do not
/// exist and are rejected.
pub fn to_utc(local: NaiveDateTime, tz: Tz) -> HangoutResult<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(resolved) => Ok(resolved.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, latest) => {
            debug!(
                "{} is ambiguous in {} ({} or {}), using the earlier instant",
                local, tz, earliest, latest
            );
            Ok(earliest.with_timezone(&Utc))
        }
        LocalResult::None => Err(HangoutError::Validation(format!(
            "{} does not exist in timezone {}",
            local, tz
        ))),
    }
}
