//! Appointment date-time assembly — the downstream consumer of a chosen slot.
//!
//! Combines the calendar date from the date picker with the `HH:MM` slot the
//! user selected into the exact wire string the booking endpoint expects.
//! The engine knows nothing about timezones, existing bookings, or barber
//! blackout periods; those are server-side concerns.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// The POST body for creating an appointment.
///
/// `appointment_date` carries the combined local date-time in the
/// `YYYY-MM-DDTHH:MM:00` shape produced by [`combine`]; it is sent verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub barber_id: i64,
    pub service_id: i64,
    pub appointment_date: String,
}

impl AppointmentRequest {
    /// Build a request from the booking form's selections.
    ///
    /// # Errors
    /// Returns an error when the date is not `YYYY-MM-DD` or the slot is not
    /// a valid `HH:MM` time.
    pub fn new(barber_id: i64, service_id: i64, date: &str, slot: &str) -> Result<Self> {
        Ok(Self {
            barber_id,
            service_id,
            appointment_date: combine(date, slot)?,
        })
    }
}

/// Parse a `YYYY-MM-DD` date and an `HH:MM` slot into a naive local date-time.
///
/// No check is made that the result lies in the future; a same-day booking
/// can combine with a slot that has already passed. The server is the
/// authority on whether that is accepted.
pub fn combine_naive(date: &str, slot: &str) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(date.to_string()))?;
    let time = NaiveTime::parse_from_str(slot, "%H:%M")
        .map_err(|_| BookingError::InvalidTime(slot.to_string()))?;
    Ok(date.and_time(time))
}

/// Combine a date and slot into the `YYYY-MM-DDTHH:MM:00` wire string.
pub fn combine(date: &str, slot: &str) -> Result<String> {
    Ok(combine_naive(date, slot)?
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string())
}
