//! Slots offered to clients and the ranges that block them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::range::TimeRange;

/// An offerable, bookable interval for one professional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(default)]
    pub id: i64,
    pub range: TimeRange,
    #[serde(default)]
    pub discount_rate: f64,
    #[serde(default)]
    pub professional_id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub recurrence_id: i64,
    /// Opaque partner reference, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_ref: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_ids: Vec<i64>,
}

impl Slot {
    /// A bare slot: only range, discount and professional are set.
    pub fn new(range: TimeRange, discount_rate: f64, professional_id: i64) -> Self {
        Self {
            id: 0,
            range,
            discount_rate,
            professional_id,
            status: String::new(),
            recurrence_id: 0,
            partner_ref: None,
            category_ids: Vec::new(),
        }
    }

    /// Same discount rate and touching ranges.
    pub fn can_merge_with(&self, other: &Slot) -> bool {
        self.discount_rate == other.discount_rate && self.range.touches(&other.range)
    }

    /// Widen this slot's range to also cover `other`'s.
    pub fn absorb(&mut self, other: &Slot) {
        self.range = self.range.span(&other.range);
    }
}

/// An interval during which a professional cannot be booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockingRange {
    #[serde(default)]
    pub id: i64,
    pub range: TimeRange,
    #[serde(default)]
    pub professional_id: i64,
    #[serde(default)]
    pub recurrence_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_ref: Option<Value>,
}

impl BlockingRange {
    pub fn new(range: TimeRange, professional_id: i64) -> Self {
        Self {
            id: 0,
            range,
            professional_id,
            recurrence_id: 0,
            partner_ref: None,
        }
    }
}

/// An existing slot blocks its own range; only range and professional carry over.
impl From<&Slot> for BlockingRange {
    fn from(slot: &Slot) -> Self {
        BlockingRange::new(slot.range, slot.professional_id)
    }
}
