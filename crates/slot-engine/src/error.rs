//! Error types for slot-engine operations.

use std::num::ParseIntError;

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The cutter was handed no slots at all.
    #[error("Nothing to cut: slot list is empty")]
    EmptyInput,

    #[error("Booking {booking_id} has no snapshot packages")]
    NoSnapshot { booking_id: i64 },

    #[error("Malformed duration '{value}' in booking {booking_id}: {source}")]
    MalformedDuration {
        booking_id: i64,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid RRULE: {0}")]
    InvalidRule(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
