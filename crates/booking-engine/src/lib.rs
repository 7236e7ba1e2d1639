//! # booking-engine
//!
//! Deterministic scheduling and booking primitives for the barbershop web
//! client. The core of the crate is availability slot generation: given a
//! service duration and a named day segment, compute every start time at
//! which an appointment fits entirely inside the segment.
//!
//! Everything here is pure computation — no I/O, no shared mutable state.
//! Candidate slots are not guaranteed-available times; double-booking
//! prevention belongs to the booking backend.
//!
//! ## Modules
//!
//! - [`segment`] — the fixed day-segment catalog (morning/afternoon/evening)
//! - [`slots`] — slot generation and `HH:MM` time-of-day helpers
//! - [`booking`] — combining a date and a chosen slot into the wire payload
//! - [`catalog`] — service and barber records from the REST catalog
//! - [`session`] — explicit authentication context and JWT claim decoding
//! - [`error`] — error types

pub mod booking;
pub mod catalog;
pub mod error;
pub mod segment;
pub mod session;
pub mod slots;

pub use booking::{combine, AppointmentRequest};
pub use catalog::{Barber, Service};
pub use error::BookingError;
pub use segment::{find_segment, DaySegment, SEGMENTS};
pub use session::{Role, Session};
pub use slots::{generate, slot_starts, DEFAULT_DURATION_MINUTES};
