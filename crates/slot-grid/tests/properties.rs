use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use proptest::prelude::*;

use slot_grid::{
    daily_time_slots, is_available, merge_date_and_time, weekly_date_values, AvailableSlot,
    CalendarDay, TimeOfDay,
};

const ZONES: [Tz; 6] = [
    chrono_tz::UTC,
    chrono_tz::America::New_York,
    chrono_tz::Europe::London,
    chrono_tz::Australia::Sydney,
    chrono_tz::Asia::Kolkata,
    chrono_tz::America::Sao_Paulo,
];

/// Zones with no offset changes between 1990 and 2040.
const FIXED_ZONES: [Tz; 3] = [
    chrono_tz::UTC,
    chrono_tz::Asia::Kolkata,
    chrono_tz::Asia::Tokyo,
];

fn zone() -> impl Strategy<Value = Tz> {
    (0..ZONES.len()).prop_map(|i| ZONES[i])
}

fn fixed_zone() -> impl Strategy<Value = Tz> {
    (0..FIXED_ZONES.len()).prop_map(|i| FIXED_ZONES[i])
}

/// Instants between 1990 and 2040.
fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (631_152_000i64..2_208_988_800).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

fn hours() -> impl Strategy<Value = (u32, u32)> {
    (0u32..24).prop_flat_map(|open| (Just(open), open + 1..=24))
}

fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
    (0u32..86_400_000).prop_map(|ms| TimeOfDay::from_millis_since_midnight(ms).unwrap())
}

proptest! {
    #[test]
    fn daily_slots_count_and_spacing((open, close) in hours()) {
        let slots = daily_time_slots(open, close);
        prop_assert_eq!(slots.len() as u32, (close - open) * 2);
        prop_assert_eq!(slots[0], TimeOfDay::from_hms_milli(open, 0, 0, 0).unwrap());
        for pair in slots.windows(2) {
            prop_assert_eq!(
                pair[1].millis_since_midnight() - pair[0].millis_since_midnight(),
                30 * 60 * 1000
            );
        }
    }

    #[test]
    fn inverted_hours_are_empty(open in 0u32..=24, close in 0u32..=24) {
        prop_assume!(close <= open);
        prop_assert!(daily_time_slots(open, close).is_empty());
    }

    #[test]
    fn week_is_seven_consecutive_midnights(at in instant(), tz in zone()) {
        let days = weekly_date_values(&at.with_timezone(&tz)).unwrap();
        prop_assert_eq!(days.len(), 7);
        prop_assert_eq!(days[0].date(), at.with_timezone(&tz).date_naive());
        for pair in days.windows(2) {
            prop_assert_eq!(pair[0].date().succ_opt().unwrap(), pair[1].date());
            prop_assert!(pair[0].starts_at() < pair[1].starts_at());
        }
    }

    #[test]
    fn merge_keeps_day_and_time(at in instant(), time in time_of_day()) {
        // UTC has no gaps, so every time of day exists on every date
        let day = CalendarDay::containing(&at, chrono_tz::UTC).unwrap();
        let slot = merge_date_and_time(&day, time).unwrap();
        prop_assert_eq!(slot.starts_at().date_naive(), day.date());
        prop_assert_eq!(TimeOfDay::of(&slot.starts_at()), time);
    }

    #[test]
    fn merge_is_strictly_increasing_without_dst(
        at in instant(),
        tz in fixed_zone(),
        a in time_of_day(),
        b in time_of_day(),
    ) {
        prop_assume!(a < b);
        let day = CalendarDay::containing(&at, tz).unwrap();
        let first = merge_date_and_time(&day, a).unwrap();
        let second = merge_date_and_time(&day, b).unwrap();
        prop_assert!(first.timestamp_millis() < second.timestamp_millis());
    }

    #[test]
    fn merge_never_decreases_with_dst(
        at in instant(),
        tz in zone(),
        a in time_of_day(),
        b in time_of_day(),
    ) {
        // Gap times share an instant with the time one gap later
        prop_assume!(a < b);
        let day = CalendarDay::containing(&at, tz).unwrap();
        let first = merge_date_and_time(&day, a).unwrap();
        let second = merge_date_and_time(&day, b).unwrap();
        prop_assert!(first.timestamp_millis() <= second.timestamp_millis());
    }

    #[test]
    fn availability_is_exact(at in instant(), tz in zone(), time in time_of_day(), delta in 1i64..1_000) {
        let day = CalendarDay::containing(&at, tz).unwrap();
        let stamp = merge_date_and_time(&day, time).unwrap().timestamp_millis();
        prop_assert!(is_available(&day, time, &[AvailableSlot::at(stamp)]));
        prop_assert!(!is_available(&day, time, &[AvailableSlot::at(stamp + delta)]));
        prop_assert!(!is_available(&day, time, &[AvailableSlot::at(stamp - delta)]));
    }
}

#[test]
fn week_across_spring_forward_in_london() {
    // Clocks go forward on 2026-03-29 in London
    let reference = chrono_tz::Europe::London
        .with_ymd_and_hms(2026, 3, 27, 15, 0, 0)
        .unwrap();
    let days = weekly_date_values(&reference).unwrap();
    let dates: Vec<u32> = days.iter().map(|d| d.date().day()).collect();
    assert_eq!(dates, [27, 28, 29, 30, 31, 1, 2]);
    assert!(days.iter().all(|d| d.starts_at().hour() == 0));
    assert_eq!(
        days[3].timestamp_millis() - days[2].timestamp_millis(),
        23 * 60 * 60 * 1000
    );
}

#[test]
fn scenario_available_first_cell_only() {
    let tz = chrono_tz::UTC;
    let day0 = CalendarDay::from_date(NaiveDate::from_ymd_opt(2018, 12, 1).unwrap(), tz).unwrap();
    let day1 = CalendarDay::from_date(NaiveDate::from_ymd_opt(2018, 12, 2).unwrap(), tz).unwrap();
    let nine = TimeOfDay::from_hms_milli(9, 0, 0, 0).unwrap();
    let nine_thirty = TimeOfDay::from_hms_milli(9, 30, 0, 0).unwrap();
    let available = [AvailableSlot::at(
        merge_date_and_time(&day0, nine).unwrap().timestamp_millis(),
    )];

    assert!(is_available(&day0, nine, &available));
    assert!(!is_available(&day0, nine_thirty, &available));
    assert!(!is_available(&day1, nine, &available));
}
