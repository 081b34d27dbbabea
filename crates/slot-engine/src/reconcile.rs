//! Combine declared schedules with what is already on offer or booked.

use log::debug;

use crate::booking::{blocking_ranges_from_bookings, Booking};
use crate::cutter::cut_slots;
use crate::error::Result;
use crate::merger::merge_slots;
use crate::schedule::{slots_from_schedules, Schedule};
use crate::slot::{BlockingRange, Slot};

/// Fold `schedules` into `existing` slots.
///
/// Each schedule becomes a candidate slot; the parts already covered by an
/// existing slot are cut away, and what remains is merged with the existing
/// slots so that touching slots of equal discount become one.
///
/// With no schedules, `existing` comes back unchanged.
pub fn reconcile(existing: &[Slot], schedules: &[Schedule]) -> Result<Vec<Slot>> {
    if schedules.is_empty() {
        return Ok(existing.to_vec());
    }

    let blocks: Vec<BlockingRange> = existing.iter().map(BlockingRange::from).collect();
    let candidates = slots_from_schedules(schedules);
    let uncovered = cut_slots(&candidates, &blocks)?;

    debug!(
        "reconciling {} existing slot(s) with {} schedule(s): {} new slot(s) after cut",
        existing.len(),
        schedules.len(),
        uncovered.len()
    );

    Ok(merge_slots(existing.to_vec(), uncovered))
}

/// The parts of `slots` a client can still book: booked time and declared
/// blackouts are cut out.
///
/// An empty `slots` list has nothing bookable and yields an empty result.
///
/// # Errors
/// Propagates `NoSnapshot` / `MalformedDuration` from booking conversion.
pub fn bookable_slots(
    slots: &[Slot],
    bookings: &[Booking],
    blackouts: &[BlockingRange],
) -> Result<Vec<Slot>> {
    let mut blocks = blocking_ranges_from_bookings(bookings)?;
    blocks.extend_from_slice(blackouts);

    if slots.is_empty() {
        return Ok(Vec::new());
    }
    cut_slots(slots, &blocks)
}
