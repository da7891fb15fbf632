//! # slot-grid
//!
//! Deterministic slot computation for appointment booking.
//!
//! Given a salon's opening hours, a time zone, and a reference instant, the
//! crate produces the half-hour time slots of a day, the seven day columns of
//! a week, and the merged instant for every (day, time) cell. Bookable slots
//! supplied by a backend are matched against those instants by exact
//! millisecond equality.
//!
//! ## Modules
//!
//! - [`grid`] — time slots, week days, day/time merging, availability
//! - [`time_of_day`] — [`TimeOfDay`], a time with no date attached
//! - [`calendar_day`] — [`CalendarDay`] and DST-aware day stepping
//! - [`format`] — short date and time labels
//! - [`table`] — the weekly table a booking form renders
//! - [`appointment`] — appointment records, customer and booking drafts, day view
//! - [`config`] — salon hours and services
//! - [`local`] — time-zone parsing and local-time resolution
//! - [`error`] — Error types

pub mod appointment;
pub mod calendar_day;
pub mod config;
pub mod error;
pub mod format;
pub mod grid;
pub mod local;
pub mod table;
pub mod time_of_day;

pub use appointment::{
    Appointment, AppointmentDraft, AvailableSlot, Customer, CustomerDraft, CustomerField, DayView,
    SubmittedAppointment, NO_APPOINTMENTS_MESSAGE,
};
pub use calendar_day::{days_after, next_calendar_day, CalendarDay, DayStep};
pub use config::{SalonConfig, SalonHours, DEFAULT_SERVICES};
pub use error::SlotError;
pub use format::{appointment_time_of_day, to_short_date, to_time_value};
pub use grid::{
    daily_time_slots, is_available, merge_date_and_hms, merge_date_and_time, weekly_date_values,
    weekly_date_values_with, Slot, DAYS_PER_WEEK, SLOT_MINUTES,
};
pub use local::{from_timestamp_millis, parse_timezone};
pub use table::{TimeSlotRow, TimeSlotTable};
pub use time_of_day::TimeOfDay;
