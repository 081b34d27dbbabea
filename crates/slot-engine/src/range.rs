//! Closed time ranges over UTC instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A `[start, end]` pair of instants with `start <= end`.
///
/// Ranges are plain values: operations that "change" a range return a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawRange {
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    start: DateTime<Utc>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    end: DateTime<Utc>,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = SlotError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::new(raw.start, raw.end)
    }
}

impl TimeRange {
    /// Build a range, rejecting `start > end`. Zero-length ranges are allowed.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// One range ends exactly where the other starts, in either direction.
    pub fn touches(&self, other: &TimeRange) -> bool {
        self.end == other.start || self.start == other.end
    }

    /// The interiors intersect. Touching ranges do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Smallest range covering both `self` and `other`.
    pub fn span(&self, other: &TimeRange) -> TimeRange {
        TimeRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    // The two setters below are only called by the cutter with a boundary
    // taken from inside the range, so `start <= end` is preserved.

    pub(crate) fn with_start(self, start: DateTime<Utc>) -> TimeRange {
        debug_assert!(start <= self.end, "new start {start} past end {}", self.end);
        TimeRange { start, ..self }
    }

    pub(crate) fn with_end(self, end: DateTime<Utc>) -> TimeRange {
        debug_assert!(self.start <= end, "new end {end} before start {}", self.start);
        TimeRange { end, ..self }
    }
}
