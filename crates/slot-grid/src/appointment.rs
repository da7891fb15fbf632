//! Appointment records exchanged with a booking backend, the draft a booking
//! form builds up, and the day-view selection model.

use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::format::appointment_time_of_day;
use crate::grid::Slot;
use crate::local::from_timestamp_millis;

/// A bookable instant supplied by the backend, serialized as
/// `{"startsAt": <ms>}`.
///
/// A record without `startsAt` deserializes with `starts_at: None` and is
/// never available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<i64>,
}

impl AvailableSlot {
    pub fn at(starts_at: i64) -> Self {
        AvailableSlot {
            starts_at: Some(starts_at),
        }
    }

    /// Exact millisecond match against `slot`.
    pub fn matches(&self, slot: &Slot) -> bool {
        self.starts_at == Some(slot.timestamp_millis())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A booked appointment as listed in the day view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub starts_at: i64,
    pub customer: Customer,
    pub stylist: String,
    pub service: String,
    #[serde(default)]
    pub notes: String,
}

// ── Customer form ───────────────────────────────────────────────────────────

/// An editable field of the customer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl CustomerField {
    pub const ALL: [CustomerField; 3] = [
        CustomerField::FirstName,
        CustomerField::LastName,
        CustomerField::PhoneNumber,
    ];

    /// The form field name, matching the record's JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            CustomerField::FirstName => "firstName",
            CustomerField::LastName => "lastName",
            CustomerField::PhoneNumber => "phoneNumber",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerField::FirstName => "First name",
            CustomerField::LastName => "Last name",
            CustomerField::PhoneNumber => "Phone number",
        }
    }
}

impl FromStr for CustomerField {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        CustomerField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| SlotError::UnknownField(s.to_string()))
    }
}

/// The customer form's in-progress state, seeded from an existing customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    customer: Customer,
}

impl CustomerDraft {
    pub fn new(existing: Customer) -> Self {
        CustomerDraft { customer: existing }
    }

    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::FirstName => &self.customer.first_name,
            CustomerField::LastName => &self.customer.last_name,
            CustomerField::PhoneNumber => &self.customer.phone_number,
        }
    }

    pub fn with_field(mut self, field: CustomerField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            CustomerField::FirstName => self.customer.first_name = value,
            CustomerField::LastName => self.customer.last_name = value,
            CustomerField::PhoneNumber => self.customer.phone_number = value,
        }
        self
    }

    /// Update the field whose form name is `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::UnknownField`] for a name that is not a customer field.
    pub fn change(self, name: &str, value: impl Into<String>) -> Result<Self> {
        let field = name.parse::<CustomerField>()?;
        Ok(self.with_field(field, value))
    }

    /// The customer as it stands, edited fields included.
    pub fn submit(&self) -> Customer {
        self.customer.clone()
    }
}

// ── Booking form ────────────────────────────────────────────────────────────

/// What the booking form submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAppointment {
    pub service: String,
    pub starts_at: i64,
}

/// The booking form's in-progress state: a chosen service and, once the user
/// picks a cell, a start time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    service: String,
    starts_at: Option<i64>,
}

impl AppointmentDraft {
    pub fn new(service: impl Into<String>) -> Self {
        AppointmentDraft {
            service: service.into(),
            starts_at: None,
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn with_slot(mut self, slot: &Slot) -> Self {
        self.starts_at = Some(slot.timestamp_millis());
        self
    }

    pub fn with_starts_at(mut self, starts_at: i64) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn starts_at(&self) -> Option<i64> {
        self.starts_at
    }

    /// # Errors
    ///
    /// Returns [`SlotError::MissingStartTime`] if no slot has been chosen.
    pub fn submit(&self) -> Result<SubmittedAppointment> {
        let starts_at = self.starts_at.ok_or(SlotError::MissingStartTime)?;
        Ok(SubmittedAppointment {
            service: self.service.clone(),
            starts_at,
        })
    }
}

// ── Day view ────────────────────────────────────────────────────────────────

/// Shown in place of an appointment when the day is empty.
pub const NO_APPOINTMENTS_MESSAGE: &str = "There are no appointments scheduled for today.";

/// One day's appointments with one of them selected.
///
/// The first appointment is selected initially.
#[derive(Debug, Clone)]
pub struct DayView {
    appointments: Vec<Appointment>,
    timezone: Tz,
    selected: usize,
}

impl DayView {
    pub fn new(appointments: Vec<Appointment>, timezone: Tz) -> Self {
        DayView {
            appointments,
            timezone,
            selected: 0,
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// # Errors
    ///
    /// Returns [`SlotError::InvalidSelection`] if `index` is past the end.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.appointments.len() {
            return Err(SlotError::InvalidSelection {
                index,
                len: self.appointments.len(),
            });
        }
        self.selected = index;
        Ok(())
    }

    pub fn selected(&self) -> Option<&Appointment> {
        self.appointments.get(self.selected)
    }

    /// One `H:MM` label per appointment, in list order.
    pub fn button_labels(&self) -> Result<Vec<String>> {
        self.appointments
            .iter()
            .map(|a| self.time_label(a.starts_at))
            .collect()
    }

    /// The heading above the selected appointment's details, or the empty-day
    /// message.
    pub fn heading(&self) -> Result<String> {
        match self.selected() {
            Some(appointment) => Ok(format!(
                "Today\u{2019}s appointment at {}",
                self.time_label(appointment.starts_at)?
            )),
            None => Ok(NO_APPOINTMENTS_MESSAGE.to_string()),
        }
    }

    fn time_label(&self, starts_at: i64) -> Result<String> {
        let dt = from_timestamp_millis(starts_at, self.timezone)?;
        Ok(appointment_time_of_day(&dt))
    }
}
