use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::time_slot::TimeSlot;

use super::{slots_on, start_of_week};

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub day_name: &'static str,
    pub day_number: u32,
    pub slots: Vec<TimeSlot>,
}

/// The seven days of the Monday-started week containing `reference`.
pub fn week_view(slots: &[TimeSlot], reference: NaiveDate) -> Vec<WeekDay> {
    let monday = start_of_week(reference);

    (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            WeekDay {
                date,
                day_name: DAY_NAMES[date.weekday().num_days_from_monday() as usize],
                day_number: date.day(),
                slots: slots_on(slots, date),
            }
        })
        .collect()
}
