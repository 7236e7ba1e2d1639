//! Error types for booking-engine operations.
//!
//! Most invalid input degrades gracefully instead of erroring (unknown
//! segment → empty slot list, bad duration → default, bad token → anonymous
//! session); errors are reserved for malformed date/time strings.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, BookingError>;
