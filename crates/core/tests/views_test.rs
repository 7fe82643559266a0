use chrono::{NaiveDate, NaiveDateTime};
use hangout_core::{
    models::time_slot::TimeSlot,
    views::{month::month_grid, start_of_week, week::week_view},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn day(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn slot(start: &str, end: &str) -> TimeSlot {
    TimeSlot::new(
        NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M").unwrap(),
        NaiveDateTime::parse_from_str(end, "%Y-%m-%d %H:%M").unwrap(),
    )
    .unwrap()
}

#[rstest]
#[case("2025-01-01", "2024-12-30")]
#[case("2024-12-30", "2024-12-30")]
#[case("2025-01-05", "2024-12-30")]
#[case("2025-01-06", "2025-01-06")]
fn test_start_of_week_is_monday(#[case] reference: &str, #[case] monday: &str) {
    assert_eq!(start_of_week(day(reference)), day(monday));
}

#[test]
fn test_week_view() {
    let slots = vec![
        slot("2025-01-01 14:00", "2025-01-01 15:00"),
        slot("2025-01-01 09:00", "2025-01-01 10:00"),
        slot("2025-01-05 20:00", "2025-01-05 21:00"),
        // Next week, must not show up
        slot("2025-01-06 09:00", "2025-01-06 10:00"),
    ];

    let week = week_view(&slots, day("2025-01-01"));

    assert_eq!(week.len(), 7);
    let names: Vec<_> = week.iter().map(|entry| entry.day_name).collect();
    assert_eq!(
        names,
        vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );
    let numbers: Vec<_> = week.iter().map(|entry| entry.day_number).collect();
    assert_eq!(numbers, vec![30, 31, 1, 2, 3, 4, 5]);

    let wednesday = &week[2];
    assert_eq!(wednesday.date, day("2025-01-01"));
    assert_eq!(wednesday.slots, vec![slots[1].clone(), slots[0].clone()]);
    assert_eq!(week[6].slots, vec![slots[2].clone()]);
    assert!(week[0].slots.is_empty());
}

#[test]
fn test_month_grid_five_rows() {
    let slots = vec![
        slot("2025-01-15 18:00", "2025-01-15 19:00"),
        slot("2024-12-31 18:00", "2024-12-31 19:00"),
    ];

    let grid = month_grid(&slots, day("2025-01-20"));

    assert_eq!(grid.len(), 5);
    for (index, row) in grid.iter().enumerate() {
        assert_eq!(row.week_number, index);
        assert_eq!(row.days.len(), 7);
    }

    let first = &grid[0].days[0];
    assert_eq!(first.date, day("2024-12-30"));
    assert!(!first.is_current_month);
    // Slots of leading days from the previous month still show up
    assert_eq!(grid[0].days[1].slots.len(), 1);
    assert!(grid[0].days[2].is_current_month);

    let last = &grid[4].days[6];
    assert_eq!(last.date, day("2025-02-02"));
    assert!(!last.is_current_month);

    let fifteenth = grid
        .iter()
        .flat_map(|row| row.days.iter())
        .find(|cell| cell.date == day("2025-01-15"))
        .unwrap();
    assert_eq!(fifteenth.slots, vec![slots[0].clone()]);
}

#[rstest]
#[case("2025-03-10", 6)]
#[case("2025-06-30", 6)]
#[case("2021-02-14", 5)]
#[case("2025-01-01", 5)]
fn test_month_grid_covers_whole_month(#[case] reference: &str, #[case] rows: usize) {
    let grid = month_grid(&[], day(reference));

    assert_eq!(grid.len(), rows);
    let in_month = grid
        .iter()
        .flat_map(|row| row.days.iter())
        .filter(|cell| cell.is_current_month)
        .count();
    let expected_days = match reference {
        "2025-03-10" => 31,
        "2025-06-30" => 30,
        "2021-02-14" => 28,
        _ => 31,
    };
    assert_eq!(in_month, expected_days);
}
