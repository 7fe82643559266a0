//! In-memory calendar storage.
//!
//! Calendars live for the lifetime of the process. The store is shared
//! between request handlers through [`crate::ApiState`].

use chrono::Utc;
use hangout_core::{
    errors::{HangoutError, HangoutResult},
    models::calendar::{Calendar, TimeSlotPayload, TimeSlotResponse},
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Fields of a calendar being created.
#[derive(Debug, Clone, Default)]
pub struct NewCalendar {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub password_hash: Option<String>,
    pub accept_responses_until: Option<chrono::DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct StoredCalendar {
    calendar: Calendar,
    time_slots: Vec<TimeSlotResponse>,
}

/// Calendars and their slots, keyed by calendar id.
///
/// Reads take a shared lock, so concurrent `GET` requests never wait on
/// each other; creating a calendar or adding slots takes the write lock.
#[derive(Debug, Default)]
pub struct CalendarStore {
    calendars: RwLock<HashMap<Uuid, StoredCalendar>>,
}

impl CalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new calendar with no slots
    ///
    /// # Arguments
    ///
    /// * `new` - Validated fields of the calendar, password already hashed
    ///
    /// # Returns
    ///
    /// * `Calendar` - The stored calendar with its generated id and timestamps
    pub async fn create_calendar(&self, new: NewCalendar) -> Calendar {
        let now = Utc::now();
        let calendar = Calendar {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            location: new.location,
            accept_responses_until: new.accept_responses_until,
            password_hash: new.password_hash,
            created_at: now,
            updated_at: now,
        };

        self.calendars.write().await.insert(
            calendar.id,
            StoredCalendar {
                calendar: calendar.clone(),
                time_slots: Vec::new(),
            },
        );
        debug!("Stored calendar {}", calendar.id);

        calendar
    }

    /// Appends slots to a calendar
    ///
    /// Each slot gets its own id. The calendar's `updated_at` is bumped.
    ///
    /// # Arguments
    ///
    /// * `calendar_id` - Calendar to attach the slots to
    /// * `slots` - UTC start/end pairs, already checked to be non-empty intervals
    ///
    /// # Returns
    ///
    /// * `HangoutResult<usize>` - How many slots were added, or
    ///   [`HangoutError::NotFound`] if the calendar does not exist
    pub async fn add_time_slots(
        &self,
        calendar_id: Uuid,
        slots: &[TimeSlotPayload],
    ) -> HangoutResult<usize> {
        let mut calendars = self.calendars.write().await;
        let stored = calendars.get_mut(&calendar_id).ok_or_else(|| {
            HangoutError::NotFound(format!("Calendar with ID {} not found", calendar_id))
        })?;

        stored
            .time_slots
            .extend(slots.iter().map(|slot| TimeSlotResponse {
                id: Uuid::new_v4(),
                start_date: slot.start_date,
                end_date: slot.end_date,
            }));
        stored.calendar.updated_at = Utc::now();

        Ok(slots.len())
    }

    /// The calendar and its slots ordered by start.
    pub async fn get_calendar(
        &self,
        calendar_id: Uuid,
    ) -> Option<(Calendar, Vec<TimeSlotResponse>)> {
        let calendars = self.calendars.read().await;
        let stored = calendars.get(&calendar_id)?;

        let mut time_slots = stored.time_slots.clone();
        time_slots.sort_by_key(|slot| slot.start_date);

        Some((stored.calendar.clone(), time_slots))
    }

    /// Stored password hash of a calendar; `None` for unprotected calendars.
    pub async fn password_hash(&self, calendar_id: Uuid) -> HangoutResult<Option<String>> {
        self.calendars
            .read()
            .await
            .get(&calendar_id)
            .map(|stored| stored.calendar.password_hash.clone())
            .ok_or_else(|| {
                HangoutError::NotFound(format!("Calendar with ID {} not found", calendar_id))
            })
    }

    /// Number of calendars created since startup
    pub async fn calendar_count(&self) -> usize {
        self.calendars.read().await.len()
    }
}
