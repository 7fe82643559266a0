//! # Hangout Proposal
//!
//! Metadata a user attaches to a hangout before submitting it: title,
//! password, description, location and a response deadline. Every field is
//! optional; the checks below only reject values that are present and out
//! of bounds.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{HangoutError, HangoutResult},
    models::calendar::CreateCalendarRequest,
    parse::parse_local_date_time,
    timezone::to_utc,
};

pub const DEFAULT_TITLE: &str = "Hangout";
pub const MIN_PASSWORD_LENGTH: usize = 3;
pub const MIN_TITLE_LENGTH: usize = 3;
pub const MAX_TITLE_LENGTH: usize = 256;
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;
pub const MAX_LOCATION_LENGTH: usize = 512;

/// Raw metadata fields of a hangout, as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangoutProposal {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub accept_responses_until: String,
}

impl HangoutProposal {
    /// Checks every field, returning the first violation.
    pub fn validate(&self) -> HangoutResult<()> {
        let password_length = self.password.chars().count();
        if password_length > 0 && password_length < MIN_PASSWORD_LENGTH {
            return Err(HangoutError::Validation(
                "Password must be optional or at least 3 characters long.".to_string(),
            ));
        }

        let title_length = self.title.trim().chars().count();
        if title_length > 0 && !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&title_length) {
            return Err(HangoutError::Validation(
                "Title must be between 3 and 256 characters long.".to_string(),
            ));
        }

        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(HangoutError::Validation(
                "Description cannot exceed 1024 characters.".to_string(),
            ));
        }

        if self.location.chars().count() > MAX_LOCATION_LENGTH {
            return Err(HangoutError::Validation(
                "Location cannot exceed 512 characters.".to_string(),
            ));
        }

        if !self.accept_responses_until.trim().is_empty()
            && !is_parseable_deadline(&self.accept_responses_until)
        {
            return Err(HangoutError::Validation(
                "Accept responses until must be a valid date.".to_string(),
            ));
        }

        Ok(())
    }

    /// The trimmed title to submit; blank titles fall back to [`DEFAULT_TITLE`].
    pub fn effective_title(&self) -> &str {
        match self.title.trim() {
            "" => DEFAULT_TITLE,
            title => title,
        }
    }

    /// Validates the proposal and builds the create-calendar request.
    ///
    /// Blank optional fields are left out and the deadline is resolved in
    /// `tz` before being sent as UTC.
    pub fn to_request(&self, tz: Tz) -> HangoutResult<CreateCalendarRequest> {
        self.validate()?;

        let accept_responses_until = if self.accept_responses_until.trim().is_empty() {
            None
        } else {
            Some(resolve_deadline(&self.accept_responses_until, tz)?)
        };

        Ok(CreateCalendarRequest {
            title: self.effective_title().to_string(),
            description: non_blank(&self.description),
            location: non_blank(&self.location),
            // Sent as typed, whitespace included
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            accept_responses_until,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_parseable_deadline(raw: &str) -> bool {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw).is_ok()
        || parse_local_date_time(raw).is_some()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

/// Resolves a deadline to UTC.
///
/// RFC 3339 values carry their own offset. Local date-times are read in `tz`
/// and a bare date means midnight at the start of that day.
fn resolve_deadline(raw: &str, tz: Tz) -> HangoutResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Some(local) = parse_local_date_time(raw) {
        return to_utc(local, tz);
    }
    let midnight = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            HangoutError::Validation("Accept responses until must be a valid date.".to_string())
        })?;
    to_utc(midnight, tz)
}
