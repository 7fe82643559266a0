use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::time_slot::TimeSlot;

use super::{slots_on, start_of_week};

const MIN_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    pub week_number: usize,
    pub days: Vec<MonthDay>,
}

/// Monday-started grid covering the month of `reference`.
///
/// Leading and trailing cells belong to the neighbouring months. The grid
/// has five rows, or six when the month spills over.
pub fn month_grid(slots: &[TimeSlot], reference: NaiveDate) -> Vec<WeekRow> {
    let first_of_month = reference.with_day(1).unwrap_or(reference);
    let grid_start = start_of_week(first_of_month);
    let leading = (first_of_month - grid_start).num_days() as usize;
    let rows = MIN_ROWS.max((leading + days_in_month(first_of_month)).div_ceil(7));

    (0..rows)
        .map(|week_number| {
            let days = (0..7)
                .map(|weekday| {
                    let date = grid_start + Duration::days((week_number * 7 + weekday) as i64);
                    MonthDay {
                        date,
                        is_current_month: date.month() == first_of_month.month()
                            && date.year() == first_of_month.year(),
                        slots: slots_on(slots, date),
                    }
                })
                .collect();
            WeekRow { week_number, days }
        })
        .collect()
}

fn days_in_month(first_of_month: NaiveDate) -> usize {
    let next_month = if first_of_month.month() == 12 {
        NaiveDate::from_ymd_opt(first_of_month.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first_of_month.year(), first_of_month.month() + 1, 1)
    };

    next_month
        .map(|next| (next - first_of_month).num_days() as usize)
        .unwrap_or(31)
}
