//! Local-time helpers.
//!
//! The grid never reads the system time zone. Every function here takes the
//! IANA zone explicitly so results are reproducible on any host.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| SlotError::InvalidTimezone(format!("'{}'", s)))
}

/// Convert milliseconds since the Unix epoch into a datetime in `tz`.
///
/// # Errors
///
/// Returns [`SlotError::InvalidTimestamp`] if `millis` is outside chrono's
/// representable range.
pub fn from_timestamp_millis(millis: i64, tz: Tz) -> Result<DateTime<Tz>> {
    DateTime::from_timestamp_millis(millis)
        .map(|utc| utc.with_timezone(&tz))
        .ok_or(SlotError::InvalidTimestamp(millis))
}

/// Resolve a wall-clock datetime in `tz` to a single instant.
///
/// - Ambiguous times (the repeated hour when clocks fall back) resolve to
///   the earlier instant.
/// - Non-existent times (the skipped hour when clocks spring forward) are
///   read with the offset in force before the gap, so 02:30 in a one-hour
///   gap becomes 03:30.
///
/// Returns `None` only when the arithmetic leaves chrono's range.
pub fn localize(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            // A day earlier is always on the far side of the transition.
            let before = naive.checked_sub_signed(TimeDelta::days(1))?;
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = naive.checked_sub_signed(TimeDelta::seconds(i64::from(
                offset.local_minus_utc(),
            )))?;
            Some(tz.from_utc_datetime(&utc))
        }
    }
}
