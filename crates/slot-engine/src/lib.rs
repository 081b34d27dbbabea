//! # slot-engine
//!
//! Computes a professional's bookable time slots.
//!
//! Declared availability (schedules) is turned into slots, time that is
//! already committed (bookings, blackouts, existing slots) is cut out of it,
//! and touching slots that share a discount rate are merged back together.
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange`, a validated pair of UTC instants
//! - [`slot`] — `Slot` and `BlockingRange`
//! - [`overlap`] — classify a blocking range against a slot
//! - [`cutter`] — remove blocked time from a list of slots
//! - [`merger`] — merge touching slots with equal discount
//! - [`reconcile`] — schedules + existing slots → final slot set
//! - [`booking`] — booking records → blocking ranges
//! - [`schedule`] — declared availability windows
//! - [`recurrence`] — recurring templates → schedules
//! - [`timestamp`] — boundary timestamp parsing
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use slot_engine::{cut_slots, BlockingRange, Slot, TimeRange};
//!
//! let at = |h, m| Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap();
//! let slot = Slot::new(TimeRange::new(at(9, 0), at(12, 0)).unwrap(), 0.0, 7);
//! let lunch = BlockingRange::new(TimeRange::new(at(10, 0), at(10, 30)).unwrap(), 7);
//!
//! let left = cut_slots(&[slot], &[lunch]).unwrap();
//! assert_eq!(left.len(), 2);
//! assert_eq!(left[0].range.end(), at(10, 0));
//! assert_eq!(left[1].range.start(), at(10, 30));
//! ```

pub mod booking;
pub mod cutter;
pub mod error;
pub mod merger;
pub mod overlap;
pub mod range;
pub mod reconcile;
pub mod recurrence;
pub mod schedule;
pub mod slot;
pub mod timestamp;

pub use booking::{blocking_ranges_from_bookings, Booking};
pub use cutter::cut_slots;
pub use error::SlotError;
pub use merger::merge_slots;
pub use overlap::{classify, Overlap};
pub use range::TimeRange;
pub use reconcile::{bookable_slots, reconcile};
pub use recurrence::{expand_schedule, RecurringSchedule};
pub use schedule::{slots_from_schedules, Schedule};
pub use slot::{BlockingRange, Slot};
