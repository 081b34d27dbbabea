//! Property-based tests for classification, cutting and merging.
//!
//! Instants live on a 15-minute grid so covered time can be counted exactly
//! unit by unit.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use slot_engine::{classify, cut_slots, merge_slots, BlockingRange, Overlap, Slot, TimeRange};

const UNIT_MINUTES: i64 = 15;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 6, 0, 0).unwrap()
}

fn instant(unit: i64) -> DateTime<Utc> {
    base() + Duration::minutes(unit * UNIT_MINUTES)
}

fn unit_of(t: DateTime<Utc>) -> i64 {
    (t - base()).num_minutes() / UNIT_MINUTES
}

fn range(start: i64, len: i64) -> TimeRange {
    TimeRange::new(instant(start), instant(start + len)).unwrap()
}

/// Grid units covered by `r`, as half-open `[start, end)` cells.
fn cells(r: &TimeRange) -> impl Iterator<Item = i64> {
    unit_of(r.start())..unit_of(r.end())
}

fn coverage_by_rate(slots: &[Slot]) -> BTreeMap<String, BTreeSet<i64>> {
    let mut out: BTreeMap<String, BTreeSet<i64>> = BTreeMap::new();
    for s in slots {
        out.entry(format!("{}", s.discount_rate))
            .or_default()
            .extend(cells(&s.range));
    }
    out
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_range() -> impl Strategy<Value = TimeRange> {
    (0i64..40, 0i64..12).prop_map(|(start, len)| range(start, len))
}

fn arb_discount() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(0.1), Just(0.25)]
}

/// Non-overlapping slots in ascending order; neighbours may touch.
fn arb_slots(max: usize) -> impl Strategy<Value = Vec<Slot>> {
    prop::collection::vec((0i64..4, 1i64..8, arb_discount()), 1..max).prop_map(|specs| {
        let mut cursor = 0;
        specs
            .into_iter()
            .map(|(gap, len, discount)| {
                let start = cursor + gap;
                cursor = start + len;
                Slot::new(range(start, len), discount, 1)
            })
            .collect()
    })
}

fn arb_blocks() -> impl Strategy<Value = Vec<BlockingRange>> {
    prop::collection::vec(
        (0i64..80, 0i64..10).prop_map(|(start, len)| BlockingRange::new(range(start, len), 1)),
        0..8,
    )
}

/// Two disjoint lists whose union is non-overlapping.
fn arb_split_slots() -> impl Strategy<Value = (Vec<Slot>, Vec<Slot>)> {
    arb_slots(14).prop_flat_map(|slots| {
        let n = slots.len();
        (Just(slots), prop::collection::vec(any::<bool>(), n))
    })
    .prop_map(|(slots, sides)| {
        let mut a = Vec::new();
        let mut b = Vec::new();
        for (slot, left) in slots.into_iter().zip(sides) {
            if left {
                a.push(slot);
            } else {
                b.push(slot);
            }
        }
        (a, b)
    })
}

// ---------------------------------------------------------------------------
// Property 1: at most one relation holds, and the one returned is geometric
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn classification_is_exclusive(slot in arb_range(), block in arb_range()) {
        let (s0, s1, u0, u1) = (slot.start(), slot.end(), block.start(), block.end());

        let contains = s0 < u0 && s1 > u1;
        let fully = s0 >= u0 && s1 <= u1;
        let at_start = s0 >= u0 && (s1 == u1 || u1 > s0) && !contains && !fully;
        let at_end = s0 < u0 && (s1 == u1 || u0 < s1) && !contains && !fully;
        let hits = [contains, fully, at_start, at_end].iter().filter(|&&h| h).count();
        prop_assert!(hits <= 1, "{} relations hold for {:?} / {:?}", hits, slot, block);

        match classify(&slot, &block) {
            Some(Overlap::Contains) => prop_assert!(contains),
            Some(Overlap::FullyBlocked) => prop_assert!(fully),
            Some(Overlap::BlockedAtStart) => prop_assert!(at_start),
            Some(Overlap::BlockedAtEnd) => prop_assert!(at_end),
            None => prop_assert_eq!(hits, 0),
        }
    }

    #[test]
    fn no_relation_means_no_overlap(slot in arb_range(), block in arb_range()) {
        if classify(&slot, &block).is_none() {
            prop_assert!(!slot.overlaps(&block));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: cut output never intersects a block
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn cut_removes_all_blocked_time(slots in arb_slots(10), blocks in arb_blocks()) {
        let result = cut_slots(&slots, &blocks).unwrap();
        for kept in &result {
            for block in &blocks {
                prop_assert!(
                    !kept.range.overlaps(&block.range),
                    "{:?} still overlaps {:?}",
                    kept.range,
                    block.range
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: cut removes exactly the blocked time and nothing else
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn cut_retains_exactly_unblocked_time(slots in arb_slots(10), blocks in arb_blocks()) {
        let blocked: BTreeSet<i64> = blocks.iter().flat_map(|b| cells(&b.range)).collect();
        let expected: BTreeSet<i64> = slots
            .iter()
            .flat_map(|s| cells(&s.range))
            .filter(|c| !blocked.contains(c))
            .collect();

        let result = cut_slots(&slots, &blocks).unwrap();
        let kept_minutes: i64 = result.iter().map(|s| s.range.duration_minutes()).sum();
        let kept: BTreeSet<i64> = result.iter().flat_map(|s| cells(&s.range)).collect();

        prop_assert_eq!(kept_minutes, expected.len() as i64 * UNIT_MINUTES);
        prop_assert_eq!(kept, expected);
    }
}

// ---------------------------------------------------------------------------
// Property 4: merging an already merged list changes nothing
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_is_idempotent((a, b) in arb_split_slots()) {
        let once = merge_slots(a, b);
        let twice = merge_slots(once.clone(), Vec::new());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn merged_slots_of_equal_rate_never_touch((a, b) in arb_split_slots()) {
        let merged = merge_slots(a, b);
        for (i, x) in merged.iter().enumerate() {
            for y in merged.iter().skip(i + 1) {
                prop_assert!(!x.can_merge_with(y), "{:?} and {:?} should have merged", x, y);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: input order does not change per-rate coverage
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_order_keeps_coverage_per_rate((a, b) in arb_split_slots()) {
        let before = coverage_by_rate(&[a.clone(), b.clone()].concat());
        let ab = merge_slots(a.clone(), b.clone());
        let ba = merge_slots(b, a);

        prop_assert_eq!(coverage_by_rate(&ab), before.clone());
        prop_assert_eq!(coverage_by_rate(&ba), before);
        prop_assert_eq!(ab.len(), ba.len());
    }
}
