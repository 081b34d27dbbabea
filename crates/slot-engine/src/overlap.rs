//! Classify how a blocking range sits against a slot's range.
//!
//! Endpoints are compared with plain `<`, `>` and `==`. Eight elementary
//! comparisons combine into four relations that can never hold together,
//! so classification is a single ordered check that returns at most one.

use crate::range::TimeRange;

/// How a blocking range relates to a slot, and therefore what the cutter does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// The block lies strictly inside the slot: split the slot in two.
    Contains,
    /// The slot lies inside (or equals) the block: delete the slot.
    FullyBlocked,
    /// The block covers the slot's beginning: the slot now starts at the block's end.
    BlockedAtStart,
    /// The block covers the slot's end: the slot now ends at the block's start.
    BlockedAtEnd,
}

/// Classify `block` against `slot`. `None` means the cutter leaves the slot alone.
pub fn classify(slot: &TimeRange, block: &TimeRange) -> Option<Overlap> {
    let (s0, s1) = (slot.start(), slot.end());
    let (u0, u1) = (block.start(), block.end());

    let starts_before = s0 < u0;
    let starts_within = s0 >= u0;
    let ends_after = s1 > u1;
    let ends_within = s1 <= u1;
    let same_end = s1 == u1;
    let block_ends_after_start = u1 > s0;
    let block_starts_before_end = u0 < s1;

    let contains = starts_before && ends_after;
    let fully_blocked = starts_within && ends_within;
    let at_start = starts_within && (same_end || block_ends_after_start);
    let at_end = starts_before && (same_end || block_starts_before_end);

    debug_assert!(
        [
            contains,
            fully_blocked,
            at_start && !contains && !fully_blocked,
            at_end && !contains && !fully_blocked,
        ]
        .iter()
        .filter(|&&hit| hit)
        .count()
            <= 1
    );

    if contains {
        Some(Overlap::Contains)
    } else if fully_blocked {
        Some(Overlap::FullyBlocked)
    } else if at_start {
        Some(Overlap::BlockedAtStart)
    } else if at_end {
        Some(Overlap::BlockedAtEnd)
    } else {
        None
    }
}
