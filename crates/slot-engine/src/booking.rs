//! Booking records and their conversion into blocking ranges.
//!
//! Only the fields the engine reads are modelled; everything else a booking
//! carries upstream is ignored on deserialization.

use chrono::{DateTime, Duration, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SlotError};
use crate::range::TimeRange;
use crate::slot::BlockingRange;

/// A committed booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default)]
    pub id: i64,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub date_start: DateTime<Utc>,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_ref: Option<Value>,
    #[serde(default)]
    pub snapshot_packages: Vec<SnapshotPackage>,
}

/// The package (service) a booking was taken for, frozen at booking time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPackage {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub professional_id: i64,
    pub price: SnapshotPrice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPrice {
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    /// Length of the service in minutes, as decimal text.
    pub duration: String,
}

impl Booking {
    /// The time this booking occupies: `date_start` plus the first package's duration.
    ///
    /// Bookings with several packages are not supported: only the first
    /// package's duration is used.
    ///
    /// # Errors
    /// - `SlotError::NoSnapshot` if the booking has no snapshot package.
    /// - `SlotError::MalformedDuration` if the duration is not a non-negative integer.
    pub fn to_blocking_range(&self) -> Result<BlockingRange> {
        let package = self
            .snapshot_packages
            .first()
            .ok_or(SlotError::NoSnapshot { booking_id: self.id })?;

        if self.snapshot_packages.len() > 1 {
            warn!(
                "booking {} has {} snapshot packages; only the first one blocks time",
                self.id,
                self.snapshot_packages.len()
            );
        }

        let minutes: u32 = package
            .price
            .duration
            .parse()
            .map_err(|source| SlotError::MalformedDuration {
                booking_id: self.id,
                value: package.price.duration.clone(),
                source,
            })?;

        let end = self.date_start + Duration::minutes(i64::from(minutes));
        let range = TimeRange::new(self.date_start, end)?;

        Ok(BlockingRange {
            id: self.id,
            range,
            professional_id: package.professional_id,
            recurrence_id: 0,
            partner_ref: self.partner_ref.clone(),
        })
    }
}

/// Convert every booking, stopping at the first one that fails.
pub fn blocking_ranges_from_bookings(bookings: &[Booking]) -> Result<Vec<BlockingRange>> {
    bookings.iter().map(Booking::to_blocking_range).collect()
}
