//! The weekly time-slot table a booking form renders.
//!
//! Columns are days, rows are half-hour times. The top-left header cell is
//! empty; each cell holds a selectable slot or nothing at all.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::appointment::AvailableSlot;
use crate::calendar_day::CalendarDay;
use crate::config::SalonHours;
use crate::error::Result;
use crate::format::to_short_date;
use crate::grid::{merge_date_and_time, weekly_date_values, Slot};
use crate::time_of_day::TimeOfDay;

#[derive(Debug, Clone, Serialize)]
pub struct TimeSlotRow {
    /// `HH:MM` row header.
    pub label: String,
    #[serde(skip)]
    pub time: TimeOfDay,
    /// One entry per day column; `Some` only where the slot is available.
    pub cells: Vec<Option<Slot>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeSlotTable {
    /// Short-date header per day column, e.g. `"Sat 01"`.
    pub column_headers: Vec<String>,
    #[serde(skip)]
    pub days: Vec<CalendarDay>,
    pub rows: Vec<TimeSlotRow>,
}

impl TimeSlotTable {
    /// Lay out the week starting on the day that contains `reference` in the
    /// salon's zone.
    pub fn build(
        hours: &SalonHours,
        reference: DateTime<Utc>,
        available: &[AvailableSlot],
    ) -> Result<Self> {
        let tz = hours.tz()?;
        let days = weekly_date_values(&reference.with_timezone(&tz))?;
        let column_headers = days.iter().map(|d| to_short_date(&d.starts_at())).collect();

        let rows = hours
            .time_slots()
            .into_iter()
            .map(|time| -> Result<TimeSlotRow> {
                let cells = days
                    .iter()
                    .map(|day| -> Result<Option<Slot>> {
                        let slot = merge_date_and_time(day, time)?;
                        Ok(available.iter().any(|a| a.matches(&slot)).then_some(slot))
                    })
                    .collect::<Result<Vec<_>>>()?;
                let label = time.as_naive().format("%H:%M").to_string();
                Ok(TimeSlotRow { label, time, cells })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(
            days = days.len(),
            rows = rows.len(),
            available = available.len(),
            "built time slot table"
        );

        Ok(TimeSlotTable {
            column_headers,
            days,
            rows,
        })
    }

    /// Every selectable slot, row by row.
    pub fn selectable_slots(&self) -> impl Iterator<Item = &Slot> {
        self.rows.iter().flat_map(|row| row.cells.iter().flatten())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
