//! Timestamp parsing at the record boundary.
//!
//! Records exchanged with callers carry timestamps as text. Both RFC 3339
//! (with an offset) and naive `YYYY-MM-DDTHH:MM:SS` forms are accepted; the
//! naive form is read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::{Result, SlotError};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a boundary timestamp into a UTC instant.
///
/// # Errors
/// Returns `SlotError::InvalidTimestamp` when neither accepted form matches.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
        .map(|ndt| ndt.and_utc())
        .map_err(|e| SlotError::InvalidTimestamp(format!("'{}': {}", s, e)))
}

/// Serde adapter for fields that go through [`parse_timestamp`].
pub(crate) fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Like [`deserialize`], for optional fields.
pub(crate) fn deserialize_option<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn naive_form_is_utc() {
        let parsed = parse_timestamp("2024-01-01T09:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn offset_is_normalized() {
        let parsed = parse_timestamp("2024-01-01T10:00:00+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            parse_timestamp("tomorrow morning"),
            Err(SlotError::InvalidTimestamp(_))
        ));
    }
}
