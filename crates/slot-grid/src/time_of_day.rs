//! Time-of-day values, detached from any calendar date.

use std::fmt;

use chrono::{DateTime, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::error::Result;
use crate::local::from_timestamp_millis;

/// The hour/minute/second/millisecond portion of a timestamp.
///
/// Two values are equal iff those components are equal. There is no date
/// component, so a time-of-day can never be compared against a full
/// timestamp by accident; use [`crate::merge_date_and_time`] to pin it to a
/// [`crate::CalendarDay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Midnight, `00:00:00.000`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(NaiveTime::MIN);

    /// Build from components. Returns `None` if any component is out of range.
    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, milli: u32) -> Option<Self> {
        NaiveTime::from_hms_milli_opt(hour, minute, second, milli).map(TimeOfDay)
    }

    /// Build from a whole number of milliseconds after midnight.
    ///
    /// Returns `None` for values of a full day or more.
    pub fn from_millis_since_midnight(millis: u32) -> Option<Self> {
        let secs = millis / 1000;
        let nanos = (millis % 1000) * 1_000_000;
        NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos).map(TimeOfDay)
    }

    /// The local time-of-day of `dt`, truncated to milliseconds.
    pub fn of<T: TimeZone>(dt: &DateTime<T>) -> Self {
        Self::truncated(dt.time())
    }

    /// The time-of-day in `tz` of a millisecond timestamp.
    pub fn from_timestamp_millis(millis: i64, tz: Tz) -> Result<Self> {
        from_timestamp_millis(millis, tz).map(|dt| Self::of(&dt))
    }

    pub(crate) fn truncated(time: NaiveTime) -> Self {
        let nanos = time.nanosecond() % 1_000_000_000;
        let truncated = time
            .with_nanosecond(nanos - nanos % 1_000_000)
            .unwrap_or(time);
        TimeOfDay(truncated)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.0.nanosecond() / 1_000_000
    }

    /// Milliseconds elapsed since midnight.
    pub fn millis_since_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight() * 1000 + self.millisecond()
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::truncated(time)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S%.3f"))
    }
}
