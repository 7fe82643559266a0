//! # Quick Slot Generator
//!
//! Expands a compact [`GenerationSpec`] into the explicit list of slots a
//! hangout proposal starts from.
//!
//! ## Algorithm
//!
//! For every day of the inclusive date range:
//!
//! 1. In whole-day mode, emit a single `00:00`-`23:59` slot.
//! 2. Otherwise start a cursor at the daily start time and, while a slot of
//!    the requested duration still ends at or before the daily end time,
//!    emit it and advance the cursor by the step.
//!
//! The step is the full duration (back-to-back slots) or half of it when
//! overlapping slots are requested. All arithmetic is done on whole minutes
//! since midnight, flooring fractional durations.
//!
//! Slots come out ordered by day, then by start time. Each one gets a fresh
//! random identifier, so two runs over the same spec agree on content but
//! never on identity.

use chrono::{NaiveDate, NaiveTime, Timelike};
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::{HangoutError, HangoutResult},
    models::{generation::GenerationSpec, time_slot::TimeSlot},
};

const MINUTES_PER_DAY: u32 = 24 * 60;
const WHOLE_DAY_END_MINUTES: u32 = 23 * 60 + 59;
const MINUTE_EPSILON: f64 = 1e-9;

/// The windowed branch of a spec, resolved to minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DailyWindow {
    start: u32,
    end: u32,
    duration: u32,
    step: u32,
}

impl DailyWindow {
    fn from_spec(spec: &GenerationSpec) -> HangoutResult<Self> {
        let start = spec
            .daily_start_time
            .ok_or_else(|| HangoutError::InvalidSpec("Daily start time is required".to_string()))?;
        let end = spec
            .daily_end_time
            .ok_or_else(|| HangoutError::InvalidSpec("Daily end time is required".to_string()))?;
        let hours = spec
            .duration_hours
            .ok_or_else(|| HangoutError::InvalidSpec("Slot duration is required".to_string()))?;

        if !hours.is_finite() || hours <= 0.0 {
            return Err(HangoutError::InvalidSpec(format!(
                "Slot duration must be a positive number of hours, got {}",
                hours
            )));
        }

        let exact_minutes = hours * 60.0;
        let duration = whole_minutes(exact_minutes);
        let step = if spec.is_overlapping {
            whole_minutes(exact_minutes / 2.0)
        } else {
            duration
        };

        if step == 0 {
            return Err(HangoutError::InvalidSpec(format!(
                "Slot duration of {} hours is too short to advance between slots",
                hours
            )));
        }

        Ok(Self {
            start: minutes_since_midnight(start),
            end: minutes_since_midnight(end),
            duration,
            step,
        })
    }

    /// Start/end minute pairs of every slot that fits in one day.
    fn slot_bounds(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let mut cursor = Some(self.start);
        std::iter::from_fn(move || {
            let current = cursor?;
            let end = current.checked_add(self.duration)?;
            if end > self.end {
                return None;
            }
            cursor = current.checked_add(self.step);
            Some((current, end))
        })
    }
}

/// Generates the time slots described by `spec`.
///
/// An inverted date range yields no slots. A missing or malformed window or
/// duration in a non-whole-day spec fails with [`HangoutError::InvalidSpec`].
pub fn generate_time_slots(spec: &GenerationSpec) -> HangoutResult<Vec<TimeSlot>> {
    let window = if spec.is_whole_day {
        None
    } else {
        Some(DailyWindow::from_spec(spec)?)
    };

    if spec.start_date > spec.end_date {
        debug!(
            "Date range {} to {} is inverted, generating no slots",
            spec.start_date, spec.end_date
        );
        return Ok(Vec::new());
    }

    let mut generated = Vec::new();
    for day in spec.days() {
        match &window {
            None => generated.push(slot_on(day, 0, WHOLE_DAY_END_MINUTES)?),
            Some(window) => {
                for (start, end) in window.slot_bounds() {
                    generated.push(slot_on(day, start, end)?);
                }
            }
        }
    }

    debug!(
        "Generated {} slots over {} days (whole day: {}, overlapping: {})",
        generated.len(),
        spec.day_count(),
        spec.is_whole_day,
        spec.is_overlapping
    );

    Ok(generated)
}

/// Floors a minute count, first snapping values that only miss a whole
/// minute through binary rounding (4.1 h is 245.99999999999997 min).
fn whole_minutes(exact: f64) -> u32 {
    let nearest = exact.round();
    let minutes = if (exact - nearest).abs() < MINUTE_EPSILON {
        nearest
    } else {
        exact.floor()
    };
    minutes.min(u32::MAX as f64) as u32
}

fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn time_from_minutes(minutes: u32) -> HangoutResult<NaiveTime> {
    if minutes >= MINUTES_PER_DAY {
        return Err(HangoutError::InvalidSpec(format!(
            "Slot boundary {:02}:{:02} falls outside the day",
            minutes / 60,
            minutes % 60
        )));
    }
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).ok_or_else(|| {
        HangoutError::InvalidSpec(format!("Invalid slot boundary at minute {}", minutes))
    })
}

fn slot_on(day: NaiveDate, start: u32, end: u32) -> HangoutResult<TimeSlot> {
    Ok(TimeSlot {
        id: Uuid::new_v4(),
        start_date: day.and_time(time_from_minutes(start)?),
        end_date: day.and_time(time_from_minutes(end)?),
        created_at: None,
        updated_at: None,
    })
}
