use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{HangoutError, HangoutResult},
    parse::{parse_calendar_day, parse_time_of_day},
};

/// Input of the quick slot generator.
///
/// The date range is inclusive on both ends. When `is_whole_day` is set the
/// daily window, duration and overlap policy are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSpec {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_start_time: Option<NaiveTime>,
    pub daily_end_time: Option<NaiveTime>,
    pub duration_hours: Option<f64>,
    pub is_overlapping: bool,
    pub is_whole_day: bool,
}

impl GenerationSpec {
    /// One `00:00`-`23:59` slot for every day in the range.
    pub fn whole_day(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            daily_start_time: None,
            daily_end_time: None,
            duration_hours: None,
            is_overlapping: false,
            is_whole_day: true,
        }
    }

    /// Slots of `duration_hours` tiled inside a daily window.
    pub fn windowed(
        start_date: NaiveDate,
        end_date: NaiveDate,
        daily_start_time: NaiveTime,
        daily_end_time: NaiveTime,
        duration_hours: f64,
        is_overlapping: bool,
    ) -> Self {
        Self {
            start_date,
            end_date,
            daily_start_time: Some(daily_start_time),
            daily_end_time: Some(daily_end_time),
            duration_hours: Some(duration_hours),
            is_overlapping,
            is_whole_day: false,
        }
    }

    /// Every calendar day of the range, ascending. Empty when the range is inverted.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |day| *day <= self.end_date)
    }

    /// Inclusive number of days in the range.
    pub fn day_count(&self) -> usize {
        if self.start_date > self.end_date {
            0
        } else {
            (self.end_date - self.start_date).num_days() as usize + 1
        }
    }
}

/// The quick slot form as typed by the user, before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickSlotForm {
    pub start_date: String,
    pub end_date: String,
    pub daily_start_time: String,
    pub daily_end_time: String,
    pub duration: String,
    pub is_overlapping: bool,
    pub is_whole_day: bool,
}

impl Default for QuickSlotForm {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            daily_start_time: String::new(),
            daily_end_time: String::new(),
            duration: String::new(),
            is_overlapping: true,
            is_whole_day: false,
        }
    }
}

impl QuickSlotForm {
    /// Toggles whole-day mode, filling or clearing the daily window to match.
    pub fn set_whole_day(&mut self, is_whole_day: bool) {
        self.is_whole_day = is_whole_day;
        if is_whole_day {
            self.daily_start_time = "00:00".to_string();
            self.daily_end_time = "23:59".to_string();
        } else {
            self.daily_start_time.clear();
            self.daily_end_time.clear();
        }
    }

    /// Whether every field the current mode needs has been filled in.
    pub fn is_valid(&self) -> bool {
        let has_dates = !self.start_date.trim().is_empty() && !self.end_date.trim().is_empty();
        if self.is_whole_day {
            return has_dates;
        }
        has_dates
            && !self.daily_start_time.trim().is_empty()
            && !self.daily_end_time.trim().is_empty()
            && !self.duration.trim().is_empty()
    }

    /// Parses the form into a [`GenerationSpec`].
    ///
    /// Range checks on the duration are left to the generator; this only
    /// rejects values that cannot be read at all.
    pub fn parse(&self) -> HangoutResult<GenerationSpec> {
        let start_date = required_day("start date", &self.start_date)?;
        let end_date = required_day("end date", &self.end_date)?;

        if self.is_whole_day {
            return Ok(GenerationSpec::whole_day(start_date, end_date));
        }

        let daily_start_time = required_time("daily start time", &self.daily_start_time)?;
        let daily_end_time = required_time("daily end time", &self.daily_end_time)?;
        let duration_hours = self.duration.trim().parse::<f64>().map_err(|_| {
            HangoutError::InvalidSpec(format!("Invalid duration: {:?}", self.duration))
        })?;

        Ok(GenerationSpec::windowed(
            start_date,
            end_date,
            daily_start_time,
            daily_end_time,
            duration_hours,
            self.is_overlapping,
        ))
    }
}

fn required_day(field: &str, raw: &str) -> HangoutResult<NaiveDate> {
    if raw.trim().is_empty() {
        return Err(HangoutError::InvalidSpec(format!("The {} is required", field)));
    }
    parse_calendar_day(raw)
        .ok_or_else(|| HangoutError::InvalidSpec(format!("Invalid {}: {:?}", field, raw)))
}

fn required_time(field: &str, raw: &str) -> HangoutResult<NaiveTime> {
    if raw.trim().is_empty() {
        return Err(HangoutError::InvalidSpec(format!("The {} is required", field)));
    }
    parse_time_of_day(raw)
        .ok_or_else(|| HangoutError::InvalidSpec(format!("Invalid {}: {:?}", field, raw)))
}
