//! Coalesce touching slots that share a discount rate.

use log::debug;

use crate::slot::Slot;

/// Concatenate `first` and `second`, then merge every pair of touching slots
/// with equal discount rate until none is left.
///
/// Inputs must not overlap, within or across the two lists; only touching is
/// expected. That precondition is not checked and overlapping input gives an
/// unspecified result.
pub fn merge_slots(first: Vec<Slot>, second: Vec<Slot>) -> Vec<Slot> {
    let input_len = first.len() + second.len();
    let mut slots = first;
    slots.extend(second);

    let mut i = 0;
    while i < slots.len() {
        // A widened slot may now touch another neighbour, so rescan until dry.
        while let Some(j) = find_mergeable(&slots, i) {
            let other = slots.remove(j);
            if j < i {
                i -= 1;
            }
            slots[i].absorb(&other);
        }
        i += 1;
    }

    debug!("merged {} slot(s) into {}", input_len, slots.len());
    slots
}

fn find_mergeable(slots: &[Slot], index: usize) -> Option<usize> {
    let current = &slots[index];
    slots
        .iter()
        .enumerate()
        .position(|(j, other)| j != index && current.can_merge_with(other))
}
