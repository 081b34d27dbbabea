//! Remove blocked time from a sequence of slots.
//!
//! The slots are threaded onto a singly-linked list whose nodes live in an
//! arena and link by index. The head is an index too, so deleting or splitting
//! the first slot only reassigns it. Split-off tails are spliced in right after
//! the slot they came from and get their own pass over every block when the
//! cursor reaches them.

use log::debug;

use crate::error::{Result, SlotError};
use crate::overlap::{classify, Overlap};
use crate::range::TimeRange;
use crate::slot::{BlockingRange, Slot};

struct AvailabilityNode {
    slot: Slot,
    next: Option<usize>,
}

struct AvailabilityList {
    nodes: Vec<AvailabilityNode>,
    head: Option<usize>,
}

impl AvailabilityList {
    fn from_slots(slots: &[Slot]) -> Self {
        let count = slots.len();
        let nodes = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| AvailabilityNode {
                slot: slot.clone(),
                next: (i + 1 < count).then_some(i + 1),
            })
            .collect();
        Self {
            nodes,
            head: (count > 0).then_some(0),
        }
    }

    fn range(&self, node: usize) -> TimeRange {
        self.nodes[node].slot.range
    }

    fn next(&self, node: usize) -> Option<usize> {
        self.nodes[node].next
    }

    fn trim_start(&mut self, node: usize, block: &TimeRange) {
        let slot = &mut self.nodes[node].slot;
        slot.range = slot.range.with_start(block.end());
    }

    fn trim_end(&mut self, node: usize, block: &TimeRange) {
        let slot = &mut self.nodes[node].slot;
        slot.range = slot.range.with_end(block.start());
    }

    /// Detach `node`. Its own `next` link is left intact so a cursor sitting
    /// on it can still step forward.
    fn unlink(&mut self, previous: Option<usize>, node: usize) {
        let successor = self.nodes[node].next;
        match previous {
            Some(prev) => self.nodes[prev].next = successor,
            None => self.head = successor,
        }
    }

    /// Keep `[start, block.start]` in `node` and insert `[block.end, end]` after it.
    fn split(&mut self, node: usize, block: &TimeRange) {
        let original = self.nodes[node].slot.range;
        let successor = self.nodes[node].next;
        let mut tail = self.nodes[node].slot.clone();
        tail.range = original.with_start(block.end());

        let tail_index = self.nodes.len();
        self.nodes.push(AvailabilityNode {
            slot: tail,
            next: successor,
        });

        let current = &mut self.nodes[node];
        current.slot.range = original.with_end(block.start());
        current.next = Some(tail_index);
    }

    fn into_slots(self) -> Vec<Slot> {
        let mut order = Vec::new();
        let mut cursor = self.head;
        while let Some(node) = cursor {
            order.push(node);
            cursor = self.nodes[node].next;
        }

        let mut slots: Vec<Option<Slot>> = self.nodes.into_iter().map(|n| Some(n.slot)).collect();
        order
            .into_iter()
            .filter_map(|node| slots[node].take())
            .collect()
    }
}

/// Cut every block out of `slots`, keeping the original order.
///
/// Slots are assumed not to overlap one another; that is not checked. A slot
/// fully covered by a block disappears, a slot with a block strictly inside it
/// becomes two slots, and partially covered slots are trimmed.
///
/// # Errors
/// Returns `SlotError::EmptyInput` if `slots` is empty.
pub fn cut_slots(slots: &[Slot], blocks: &[BlockingRange]) -> Result<Vec<Slot>> {
    if slots.is_empty() {
        return Err(SlotError::EmptyInput);
    }

    let mut list = AvailabilityList::from_slots(slots);
    let mut last_retained: Option<usize> = None;
    let mut cursor = list.head;

    while let Some(node) = cursor {
        let mut removed = false;

        for block in blocks {
            let Some(overlap) = classify(&list.range(node), &block.range) else {
                continue;
            };
            match overlap {
                Overlap::FullyBlocked => {
                    list.unlink(last_retained, node);
                    removed = true;
                    break;
                }
                Overlap::BlockedAtStart => list.trim_start(node, &block.range),
                Overlap::BlockedAtEnd => list.trim_end(node, &block.range),
                Overlap::Contains => list.split(node, &block.range),
            }
        }

        if !removed {
            last_retained = Some(node);
        }
        cursor = list.next(node);
    }

    let result = list.into_slots();
    debug!(
        "cut {} slot(s) against {} block(s): {} slot(s) remain",
        slots.len(),
        blocks.len(),
        result.len()
    );
    Ok(result)
}
