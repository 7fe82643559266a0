use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use hangout_core::{
    errors::HangoutError,
    generator::generate_time_slots,
    models::{
        generation::{GenerationSpec, QuickSlotForm},
        time_slot::TimeSlot,
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn day(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn time(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
}

// Renders slots as "YYYY-MM-DD HH:MM-HH:MM" for readable comparisons
fn labels(slots: &[TimeSlot]) -> Vec<String> {
    slots
        .iter()
        .map(|slot| {
            format!(
                "{} {}-{}",
                slot.day(),
                slot.start_time().format("%H:%M"),
                slot.end_time().format("%H:%M")
            )
        })
        .collect()
}

fn windowed(start: &str, end: &str, duration: f64, overlapping: bool) -> GenerationSpec {
    GenerationSpec::windowed(
        day("2025-01-01"),
        day("2025-01-01"),
        time(start),
        time(end),
        duration,
        overlapping,
    )
}

#[test]
fn test_back_to_back_slots() {
    let slots = generate_time_slots(&windowed("09:00", "11:00", 1.0, false)).unwrap();

    assert_eq!(
        labels(&slots),
        vec!["2025-01-01 09:00-10:00", "2025-01-01 10:00-11:00"]
    );
}

#[test]
fn test_overlapping_slots() {
    let slots = generate_time_slots(&windowed("09:00", "11:00", 1.0, true)).unwrap();

    assert_eq!(
        labels(&slots),
        vec![
            "2025-01-01 09:00-10:00",
            "2025-01-01 09:30-10:30",
            "2025-01-01 10:00-11:00",
        ]
    );
}

#[test]
fn test_window_shorter_than_duration() {
    let slots = generate_time_slots(&windowed("09:00", "10:00", 2.0, false)).unwrap();

    assert!(slots.is_empty());
}

#[test]
fn test_whole_day_slots() {
    let spec = GenerationSpec::whole_day(day("2025-03-01"), day("2025-03-03"));

    let slots = generate_time_slots(&spec).unwrap();

    assert_eq!(
        labels(&slots),
        vec![
            "2025-03-01 00:00-23:59",
            "2025-03-02 00:00-23:59",
            "2025-03-03 00:00-23:59",
        ]
    );
}

#[test]
fn test_whole_day_ignores_window_and_duration() {
    // Garbage in the windowed fields must not matter in whole-day mode
    let mut spec = GenerationSpec::whole_day(day("2025-03-01"), day("2025-03-01"));
    spec.daily_start_time = Some(time("18:00"));
    spec.daily_end_time = Some(time("08:00"));
    spec.duration_hours = Some(-3.0);
    spec.is_overlapping = true;

    let slots = generate_time_slots(&spec).unwrap();

    assert_eq!(labels(&slots), vec!["2025-03-01 00:00-23:59"]);
}

#[test]
fn test_fractional_duration_back_to_back() {
    let slots = generate_time_slots(&windowed("09:00", "12:00", 1.5, false)).unwrap();

    assert_eq!(
        labels(&slots),
        vec!["2025-01-01 09:00-10:30", "2025-01-01 10:30-12:00"]
    );
}

#[test]
fn test_fractional_duration_overlapping() {
    let slots = generate_time_slots(&windowed("09:00", "12:00", 1.5, true)).unwrap();

    assert_eq!(
        labels(&slots),
        vec![
            "2025-01-01 09:00-10:30",
            "2025-01-01 09:45-11:15",
            "2025-01-01 10:30-12:00",
        ]
    );
}

#[test]
fn test_slot_ending_late_in_the_day() {
    let slots = generate_time_slots(&windowed("22:00", "23:59", 0.5, false)).unwrap();

    assert_eq!(
        labels(&slots),
        vec![
            "2025-01-01 22:00-22:30",
            "2025-01-01 22:30-23:00",
            "2025-01-01 23:00-23:30",
        ]
    );
}

#[test]
fn test_multi_day_range_is_ordered_by_day_then_time() {
    let spec = GenerationSpec::windowed(
        day("2025-01-30"),
        day("2025-02-01"),
        time("09:00"),
        time("11:00"),
        1.0,
        false,
    );

    let slots = generate_time_slots(&spec).unwrap();

    assert_eq!(
        labels(&slots),
        vec![
            "2025-01-30 09:00-10:00",
            "2025-01-30 10:00-11:00",
            "2025-01-31 09:00-10:00",
            "2025-01-31 10:00-11:00",
            "2025-02-01 09:00-10:00",
            "2025-02-01 10:00-11:00",
        ]
    );
}

#[test]
fn test_inverted_range_yields_nothing() {
    let spec = GenerationSpec::windowed(
        day("2025-01-05"),
        day("2025-01-01"),
        time("09:00"),
        time("17:00"),
        1.0,
        false,
    );
    assert!(generate_time_slots(&spec).unwrap().is_empty());

    let spec = GenerationSpec::whole_day(day("2025-01-05"), day("2025-01-01"));
    assert!(generate_time_slots(&spec).unwrap().is_empty());
}

#[test]
fn test_inverted_daily_window_yields_nothing() {
    let slots = generate_time_slots(&windowed("17:00", "09:00", 1.0, false)).unwrap();

    assert!(slots.is_empty());
}

#[rstest]
#[case(0.0)]
#[case(-1.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(0.01)]
fn test_unusable_duration_is_rejected(#[case] duration: f64) {
    let result = generate_time_slots(&windowed("09:00", "17:00", duration, false));

    assert!(matches!(result, Err(HangoutError::InvalidSpec(_))));
}

#[rstest]
#[case::four_point_one(4.1, 246, 123)]
#[case::two_point_oh_five(2.05, 123, 61)]
#[case::eight_point_two(8.2, 492, 246)]
#[case::one_point_one(1.1, 66, 33)]
fn test_decimal_durations_keep_whole_minutes(
    #[case] duration: f64,
    #[case] duration_minutes: i64,
    #[case] overlap_step_minutes: i64,
) {
    let back_to_back = generate_time_slots(&windowed("09:00", "23:00", duration, false)).unwrap();
    assert_eq!(back_to_back[0].start_time(), time("09:00"));
    assert_eq!(back_to_back[0].duration().num_minutes(), duration_minutes);

    let overlapping = generate_time_slots(&windowed("09:00", "23:00", duration, true)).unwrap();
    assert_eq!(overlapping[0].duration().num_minutes(), duration_minutes);
    assert_eq!(
        (overlapping[1].start_date - overlapping[0].start_date).num_minutes(),
        overlap_step_minutes
    );
}

#[test]
fn test_missing_window_is_rejected() {
    let mut spec = windowed("09:00", "17:00", 1.0, false);
    spec.daily_end_time = None;

    let result = generate_time_slots(&spec);

    assert!(matches!(result, Err(HangoutError::InvalidSpec(_))));
}

#[rstest]
fn test_generated_slots_respect_the_window(
    #[values(0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0)] duration: f64,
    #[values(true, false)] overlapping: bool,
) {
    let spec = GenerationSpec::windowed(
        day("2025-06-01"),
        day("2025-06-04"),
        time("08:15"),
        time("19:45"),
        duration,
        overlapping,
    );
    let duration_minutes = (duration * 60.0) as i64;
    let step_minutes = if overlapping {
        duration_minutes / 2
    } else {
        duration_minutes
    };

    let slots = generate_time_slots(&spec).unwrap();
    assert!(!slots.is_empty());

    for slot in &slots {
        assert!(slot.start_date < slot.end_date);
        assert!(slot.start_time() >= time("08:15"));
        assert!(slot.end_time() <= time("19:45"));
        assert_eq!(slot.duration().num_minutes(), duration_minutes);
    }

    for pair in slots.windows(2) {
        if pair[0].day() != pair[1].day() {
            continue;
        }
        let gap = (pair[1].start_date - pair[0].start_date).num_minutes();
        assert_eq!(gap, step_minutes);
        if !overlapping {
            assert_eq!(pair[0].end_date, pair[1].start_date);
        }
    }

    // Every day of the range gets the same number of slots
    let per_day = slots.len() / spec.day_count();
    assert_eq!(slots.len(), per_day * 4);
}

#[test]
fn test_whole_day_count_matches_range() {
    let spec = GenerationSpec::whole_day(day("2024-02-27"), day("2024-03-02"));

    let slots = generate_time_slots(&spec).unwrap();

    // 2024 is a leap year: Feb 27, 28, 29, Mar 1, 2
    assert_eq!(slots.len(), 5);
    assert_eq!(slots.len(), spec.day_count());
    for slot in &slots {
        assert_eq!(slot.start_time(), time("00:00"));
        assert_eq!(slot.end_time(), time("23:59"));
    }
}

#[test_log::test]
fn test_same_spec_gives_same_content_with_new_ids() {
    let spec = GenerationSpec::windowed(
        day("2025-01-01"),
        day("2025-01-07"),
        time("10:00"),
        time("18:00"),
        2.0,
        true,
    );

    let first = generate_time_slots(&spec).unwrap();
    let second = generate_time_slots(&spec).unwrap();

    assert_eq!(labels(&first), labels(&second));

    let ids: HashSet<_> = first.iter().chain(second.iter()).map(|slot| slot.id).collect();
    assert_eq!(ids.len(), first.len() + second.len());
}

#[test]
fn test_generate_from_form() {
    let form = QuickSlotForm {
        start_date: "2025-01-01T15:30".to_string(),
        end_date: "2025-01-02".to_string(),
        daily_start_time: "09:00".to_string(),
        daily_end_time: "11:00".to_string(),
        duration: "1".to_string(),
        is_overlapping: false,
        is_whole_day: false,
    };

    let spec = form.parse().unwrap();
    assert_eq!(spec.start_date, day("2025-01-01"));

    let slots = generate_time_slots(&spec).unwrap();
    assert_eq!(
        labels(&slots),
        vec![
            "2025-01-01 09:00-10:00",
            "2025-01-01 10:00-11:00",
            "2025-01-02 09:00-10:00",
            "2025-01-02 10:00-11:00",
        ]
    );
}

#[rstest]
#[case("9am", "11:00", "1")]
#[case("09:00", "25:00", "1")]
#[case("09:00", "11:00", "one")]
#[case("09:00", "", "1")]
fn test_malformed_form_is_rejected(
    #[case] daily_start_time: &str,
    #[case] daily_end_time: &str,
    #[case] duration: &str,
) {
    let form = QuickSlotForm {
        start_date: "2025-01-01".to_string(),
        end_date: "2025-01-01".to_string(),
        daily_start_time: daily_start_time.to_string(),
        daily_end_time: daily_end_time.to_string(),
        duration: duration.to_string(),
        is_overlapping: true,
        is_whole_day: false,
    };

    assert!(matches!(form.parse(), Err(HangoutError::InvalidSpec(_))));
}

#[test]
fn test_whole_day_form_needs_only_dates() {
    let mut form = QuickSlotForm {
        start_date: "2025-03-01".to_string(),
        end_date: "2025-03-02".to_string(),
        ..QuickSlotForm::default()
    };
    assert!(!form.is_valid());

    form.set_whole_day(true);
    assert!(form.is_valid());
    assert_eq!(form.daily_start_time, "00:00");
    assert_eq!(form.daily_end_time, "23:59");

    let slots = generate_time_slots(&form.parse().unwrap()).unwrap();
    assert_eq!(slots.len(), 2);

    form.set_whole_day(false);
    assert!(form.daily_start_time.is_empty());
    assert!(form.daily_end_time.is_empty());
    assert!(!form.is_valid());
}
