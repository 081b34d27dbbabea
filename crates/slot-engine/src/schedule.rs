//! Declared availability windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::range::TimeRange;
use crate::slot::Slot;

/// A window in which a professional declared they can take bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub professional_id: i64,
    #[serde(default)]
    pub discount_rate: f64,
    pub range: TimeRange,
    #[serde(
        default,
        deserialize_with = "crate::timestamp::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Schedule> for Slot {
    fn from(schedule: &Schedule) -> Self {
        Slot::new(
            schedule.range,
            schedule.discount_rate,
            schedule.professional_id,
        )
    }
}

pub fn slots_from_schedules(schedules: &[Schedule]) -> Vec<Slot> {
    schedules.iter().map(Slot::from).collect()
}
