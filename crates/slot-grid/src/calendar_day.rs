//! Calendar days in an explicit time zone, and stepping between them.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};
use crate::local::{from_timestamp_millis, localize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A local date together with the instant it begins in its zone.
///
/// `starts_at` is local midnight. In the handful of zones that skip
/// midnight itself on a DST change, it is the first instant after the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    date: NaiveDate,
    starts_at: DateTime<Tz>,
}

impl CalendarDay {
    /// The day `date` in `tz`.
    pub fn from_date(date: NaiveDate, tz: Tz) -> Result<Self> {
        let starts_at = localize(tz, date.and_time(NaiveTime::MIN)).ok_or_else(|| {
            SlotError::InvalidDatetime(format!("no midnight for {date} in {tz}"))
        })?;
        Ok(CalendarDay { date, starts_at })
    }

    /// The day in `tz` that contains the instant `dt`.
    pub fn containing<T: TimeZone>(dt: &DateTime<T>, tz: Tz) -> Result<Self> {
        Self::from_date(dt.with_timezone(&tz).date_naive(), tz)
    }

    /// The day in `tz` that contains a millisecond timestamp.
    pub fn from_timestamp_millis(millis: i64, tz: Tz) -> Result<Self> {
        Self::containing(&from_timestamp_millis(millis, tz)?, tz)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn timezone(&self) -> Tz {
        self.starts_at.timezone()
    }

    /// Local midnight as a zoned instant.
    pub fn starts_at(&self) -> DateTime<Tz> {
        self.starts_at
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.starts_at.timestamp_millis()
    }
}

/// How [`days_after`] counts days forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayStep {
    /// Follow the calendar: `n` days later is always `n` dates later,
    /// whatever the length of the days in between.
    #[default]
    Calendar,
    /// Add exactly `n * 86 400 000` ms to midnight and take the day containing
    /// the result. After a 25-hour day this lands on 23:00 of the previous
    /// date, so one date repeats; a 23-hour day is absorbed silently.
    FixedOffset,
}

/// The day after `day` in the same zone, by calendar date.
pub fn next_calendar_day(day: &CalendarDay) -> Result<CalendarDay> {
    days_after(day, 1, DayStep::Calendar)
}

/// The day `n` days after `first` in the same zone.
pub fn days_after(first: &CalendarDay, n: u32, step: DayStep) -> Result<CalendarDay> {
    let tz = first.timezone();
    match step {
        DayStep::Calendar => {
            let date = first
                .date
                .checked_add_days(Days::new(u64::from(n)))
                .ok_or_else(|| {
                    SlotError::InvalidDatetime(format!("no date {n} days after {}", first.date))
                })?;
            CalendarDay::from_date(date, tz)
        }
        DayStep::FixedOffset => {
            let later = TimeDelta::try_milliseconds(i64::from(n) * MILLIS_PER_DAY)
                .and_then(|offset| first.starts_at.checked_add_signed(offset))
                .ok_or_else(|| {
                    SlotError::InvalidDatetime(format!(
                        "no instant {n} days after {}",
                        first.date
                    ))
                })?;
            CalendarDay::containing(&later, tz)
        }
    }
}
