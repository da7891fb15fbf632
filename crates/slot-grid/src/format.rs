//! Short labels for grid headers and appointment lists.
//!
//! The three formatters pad the hour differently and callers depend on the
//! difference, so each one is kept separate.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// Weekday abbreviation and two-digit day of month, e.g. `"Sat 01"`.
pub fn to_short_date<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: Display,
{
    dt.format("%a %d").to_string()
}

/// 24-hour `HH:MM` with a zero-padded hour, e.g. `"09:00"`.
pub fn to_time_value<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: Display,
{
    dt.format("%H:%M").to_string()
}

/// 24-hour `H:MM` with no padding on the hour, e.g. `"9:00"` or `"12:00"`.
pub fn appointment_time_of_day<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: Display,
{
    dt.format("%-H:%M").to_string()
}
