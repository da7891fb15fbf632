//! Slot-grid computation.
//!
//! Pure functions that produce the two axes of a weekly booking grid and
//! combine them into bookable instants:
//!
//! - [`daily_time_slots`] — half-hour times of day between opening and closing
//! - [`weekly_date_values`] — seven consecutive days from a reference instant
//! - [`merge_date_and_time`] — one day plus one time of day → one [`Slot`]
//! - [`is_available`] — whether a (day, time) cell matches a bookable slot
//!
//! Nothing here reads the system clock or the host time zone; the caller
//! passes the reference instant and the zone explicitly.

use chrono::{DateTime, NaiveTime, TimeDelta};
use chrono_tz::Tz;
use serde::Serialize;

use crate::appointment::AvailableSlot;
use crate::calendar_day::{days_after, CalendarDay, DayStep};
use crate::error::{Result, SlotError};
use crate::local::localize;
use crate::time_of_day::TimeOfDay;

/// Slot length in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Number of day columns in the weekly grid.
pub const DAYS_PER_WEEK: usize = 7;

// ── Slot ────────────────────────────────────────────────────────────────────

/// A time of day pinned to a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    day: CalendarDay,
    time: TimeOfDay,
    starts_at: DateTime<Tz>,
}

impl Slot {
    pub fn day(&self) -> CalendarDay {
        self.day
    }

    /// The requested time of day.
    ///
    /// Equal to the wall-clock time of [`Slot::starts_at`] except when that
    /// time does not exist on `day` (a DST gap), in which case `starts_at`
    /// lies just after the gap.
    pub fn time_of_day(&self) -> TimeOfDay {
        self.time
    }

    pub fn starts_at(&self) -> DateTime<Tz> {
        self.starts_at
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.starts_at.timestamp_millis()
    }
}

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.timestamp_millis())
    }
}

// ── daily_time_slots ────────────────────────────────────────────────────────

/// The half-hour times of day from `opens_at:00` up to, not including,
/// `closes_at:00`.
///
/// Produces `(closes_at - opens_at) * 2` entries. An inverted or empty range
/// (`closes_at <= opens_at`) yields no slots rather than an error. Hours past
/// 24 are not representable as a time of day and are dropped.
///
/// # Examples
///
/// ```
/// use slot_grid::daily_time_slots;
///
/// let slots = daily_time_slots(9, 11);
/// let labels: Vec<String> = slots
///     .iter()
///     .map(|t| t.as_naive().format("%H:%M").to_string())
///     .collect();
/// assert_eq!(labels, ["09:00", "09:30", "10:00", "10:30"]);
/// ```
pub fn daily_time_slots(opens_at: u32, closes_at: u32) -> Vec<TimeOfDay> {
    if closes_at <= opens_at {
        tracing::debug!(opens_at, closes_at, "closing hour not after opening hour, no slots");
        return Vec::new();
    }

    let total = (closes_at - opens_at).saturating_mul(60 / SLOT_MINUTES);
    (0..total)
        .map_while(|i| {
            let secs = opens_at
                .checked_mul(3600)?
                .checked_add(i.checked_mul(SLOT_MINUTES * 60)?)?;
            NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).map(TimeOfDay::from)
        })
        .collect()
}

// ── weekly_date_values ──────────────────────────────────────────────────────

/// Seven consecutive days starting with the day that contains `reference`,
/// stepping by calendar date.
///
/// The zone of `reference` decides which day it falls on.
pub fn weekly_date_values(reference: &DateTime<Tz>) -> Result<Vec<CalendarDay>> {
    weekly_date_values_with(reference, DayStep::Calendar)
}

/// [`weekly_date_values`] with an explicit stepping rule.
pub fn weekly_date_values_with(
    reference: &DateTime<Tz>,
    step: DayStep,
) -> Result<Vec<CalendarDay>> {
    let first = CalendarDay::containing(reference, reference.timezone())?;
    (0..DAYS_PER_WEEK as u32)
        .map(|n| days_after(&first, n, step))
        .collect()
}

// ── merge ───────────────────────────────────────────────────────────────────

/// Combine a day and a time of day into one instant.
///
/// The result carries `day`'s date and `time`'s hour, minute, second and
/// millisecond. For a fixed day the result strictly increases with `time`,
/// except on a day with a DST gap: a time inside the gap is moved forward by
/// the gap's length, so it lands on the same instant as the matching time
/// after the gap (02:30 and 03:30 in a one-hour gap merge to one instant).
/// Outside that case the ordering is strict.
///
/// # Errors
///
/// Returns [`SlotError::InvalidDatetime`] only at the edges of chrono's
/// representable range.
pub fn merge_date_and_time(day: &CalendarDay, time: TimeOfDay) -> Result<Slot> {
    let tz = day.timezone();
    let naive = day.date().and_time(time.as_naive());
    let starts_at = localize(tz, naive).ok_or_else(|| {
        SlotError::InvalidDatetime(format!("cannot place {time} on {} in {tz}", day.date()))
    })?;
    Ok(Slot {
        day: *day,
        time,
        starts_at,
    })
}

/// Combine a day with raw time components, normalizing overflow the way
/// calendar arithmetic does.
///
/// Components may exceed their usual ranges or be negative: hour 24 is
/// midnight of the following day, minute 90 is an hour and a half, and
/// hour -1 is 23:00 on the previous day. The returned slot's day is the day
/// the normalized time lands on.
pub fn merge_date_and_hms(
    day: &CalendarDay,
    hour: i64,
    minute: i64,
    second: i64,
    milli: i64,
) -> Result<Slot> {
    let overflow = || {
        SlotError::InvalidDatetime(format!(
            "{hour}:{minute}:{second}.{milli} overflows on {}",
            day.date()
        ))
    };

    let offset = hour
        .checked_mul(3_600_000)
        .and_then(|h| minute.checked_mul(60_000).and_then(|m| h.checked_add(m)))
        .and_then(|hm| second.checked_mul(1000).and_then(|s| hm.checked_add(s)))
        .and_then(|hms| hms.checked_add(milli))
        .and_then(TimeDelta::try_milliseconds)
        .ok_or_else(overflow)?;

    let naive = day
        .date()
        .and_time(NaiveTime::MIN)
        .checked_add_signed(offset)
        .ok_or_else(overflow)?;

    let tz = day.timezone();
    let landed = CalendarDay::from_date(naive.date(), tz)?;
    merge_date_and_time(&landed, TimeOfDay::from(naive.time()))
}

// ── availability ────────────────────────────────────────────────────────────

/// Whether `(day, time)` is one of the `available` slots.
///
/// Matches on exact millisecond equality. Entries without a start time never
/// match, and neither does a cell whose instant cannot be computed.
///
/// On a DST gap day a time inside the gap shares its instant with the time
/// one gap-length later (see [`merge_date_and_time`]), so one available slot
/// makes both cells available.
pub fn is_available(day: &CalendarDay, time: TimeOfDay, available: &[AvailableSlot]) -> bool {
    match merge_date_and_time(day, time) {
        Ok(slot) => available.iter().any(|a| a.matches(&slot)),
        Err(_) => false,
    }
}
