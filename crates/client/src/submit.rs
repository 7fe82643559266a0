use chrono_tz::Tz;
use eyre::{Result, WrapErr};
use hangout_core::{
    errors::HangoutError,
    models::calendar::CreateTimeSlotsRequest, proposal::HangoutProposal,
    slot_list::TimeSlotList,
};
use tracing::info;
use uuid::Uuid;

use crate::api::CalendarApi;

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub calendar_id: Uuid,
    pub slot_count: usize,
}

/// Submits a hangout: creates the calendar, then attaches its slots.
///
/// Everything that can fail locally (metadata validation, timezone
/// resolution of the slots) is checked before the first request, so a bad
/// proposal never leaves a half-created calendar behind. With no slots the
/// second request is skipped and participants may pick any time.
///
/// # Errors
///
/// Local problems surface as [`HangoutError::Validation`]. Failures of
/// either API call are wrapped in [`HangoutError::Remote`], so callers can
/// tell them apart by downcasting the returned report.
pub async fn submit_hangout<A>(
    api: &A,
    proposal: &HangoutProposal,
    slots: &TimeSlotList,
    tz: Tz,
) -> Result<Submission>
where
    A: CalendarApi + ?Sized,
{
    let calendar_request = proposal
        .to_request(tz)
        .wrap_err("Invalid hangout details")?;
    let time_slots = slots
        .to_payloads(tz)
        .wrap_err("Invalid time slots")?;

    let calendar = api
        .create_calendar(&calendar_request)
        .await
        .map_err(HangoutError::Remote)?;

    if time_slots.is_empty() {
        info!(
            "Calendar {} has no time slots, participants can pick any time",
            calendar.id
        );
    } else {
        api.create_time_slots(calendar.id, &CreateTimeSlotsRequest { time_slots })
            .await
            .map_err(HangoutError::Remote)
            .wrap_err_with(|| format!("Calendar {} was created without its slots", calendar.id))?;
    }

    Ok(Submission {
        calendar_id: calendar.id,
        slot_count: slots.len(),
    })
}
