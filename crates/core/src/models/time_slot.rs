use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{HangoutError, HangoutResult},
    models::calendar::TimeSlotPayload,
    timezone::to_utc,
};

/// A single proposed time interval.
///
/// `start_date` and `end_date` are local wall-clock values in the creating
/// user's timezone. They are only turned into absolute instants when the
/// slot is handed to the API (see [`TimeSlot::to_payload`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TimeSlot {
    /// Creates a slot with a fresh identifier, rejecting empty or inverted intervals.
    pub fn new(start_date: NaiveDateTime, end_date: NaiveDateTime) -> HangoutResult<Self> {
        Self::with_id(Uuid::new_v4(), start_date, end_date)
    }

    /// Creates a slot keeping an existing identifier.
    pub fn with_id(
        id: Uuid,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> HangoutResult<Self> {
        if start_date >= end_date {
            return Err(HangoutError::Validation(format!(
                "Slot must start before it ends ({} >= {})",
                start_date, end_date
            )));
        }

        Ok(Self {
            id,
            start_date,
            end_date,
            created_at: None,
            updated_at: None,
        })
    }

    /// Creates a slot on a single day between two times of day.
    pub fn on_day(day: NaiveDate, start: NaiveTime, end: NaiveTime) -> HangoutResult<Self> {
        Self::new(day.and_time(start), day.and_time(end))
    }

    /// Stamps `created_at` and `updated_at` with the current time.
    pub fn touched(mut self) -> Self {
        let now = Utc::now();
        self.created_at.get_or_insert(now);
        self.updated_at = Some(now);
        self
    }

    pub fn day(&self) -> NaiveDate {
        self.start_date.date()
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_date.time()
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_date.time()
    }

    pub fn duration(&self) -> Duration {
        self.end_date - self.start_date
    }

    /// Resolves the slot in `tz` and returns its UTC wire form.
    pub fn to_payload(&self, tz: Tz) -> HangoutResult<TimeSlotPayload> {
        Ok(TimeSlotPayload {
            start_date: to_utc(self.start_date, tz)?,
            end_date: to_utc(self.end_date, tz)?,
        })
    }
}

/// Sorts slots ascending by start for display.
///
/// The sort is stable, so slots sharing a start keep their insertion order.
pub fn sort_for_display(slots: &mut [TimeSlot]) {
    slots.sort_by_key(|slot| slot.start_date);
}

/// The older `{slot_date, start_time, end_time}` slot shape.
///
/// Only accepted as input; convert it with `TimeSlot::try_from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySlot {
    pub id: Uuid,
    pub slot_date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
}

impl TryFrom<LegacySlot> for TimeSlot {
    type Error = HangoutError;

    fn try_from(legacy: LegacySlot) -> HangoutResult<Self> {
        TimeSlot::with_id(
            legacy.id,
            legacy.slot_date.and_time(legacy.start_time),
            legacy.slot_date.and_time(legacy.end_time),
        )
    }
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }
}
