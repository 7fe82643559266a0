//! Calendar views over a proposal's slots.
//!
//! Both views start weeks on Monday and place a slot on the day its start
//! falls on, keeping slots of a day in display order.

pub mod month;
pub mod week;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::time_slot::{sort_for_display, TimeSlot};

/// Monday of the week containing `day`.
pub fn start_of_week(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// Slots starting on `day`, in display order.
pub(crate) fn slots_on(slots: &[TimeSlot], day: NaiveDate) -> Vec<TimeSlot> {
    let mut on_day: Vec<TimeSlot> = slots
        .iter()
        .filter(|slot| slot.day() == day)
        .cloned()
        .collect();
    sort_for_display(&mut on_day);
    on_day
}
