//! Expand recurring schedule templates into concrete availability windows.
//!
//! A professional typically declares "Tuesdays and Thursdays 09:00-17:00"
//! once. The template is an RFC 5545 RRULE anchored at a local start time in
//! an IANA timezone; expansion goes through the `rrule` crate, which keeps
//! wall-clock times stable across DST changes.

use chrono::{DateTime, Duration, Utc};
use log::debug;
use rrule::RRuleSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::range::TimeRange;
use crate::schedule::Schedule;

/// Hard cap on instances when neither `count` nor the rule bounds expansion.
const UNBOUNDED_LIMIT: u16 = 500;

/// A recurring availability declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringSchedule {
    pub professional_id: i64,
    #[serde(default)]
    pub discount_rate: f64,
    /// RRULE body, e.g. `FREQ=WEEKLY;BYDAY=TU,TH`.
    pub rrule: String,
    /// Local start of the first window, `YYYY-MM-DDTHH:MM:SS`.
    pub dtstart: String,
    pub duration_minutes: u32,
    /// IANA zone the local times are expressed in.
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Local start times of occurrences to drop.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exdates: Vec<String>,
}

/// Expand a template into one [`Schedule`] per occurrence, in chronological order.
///
/// # Errors
/// - `SlotError::InvalidRule` if the rule is empty or rejected by the parser.
/// - `SlotError::InvalidTimezone` if `timezone` is not an IANA identifier.
pub fn expand_schedule(template: &RecurringSchedule) -> Result<Vec<Schedule>> {
    if template.rrule.trim().is_empty() {
        return Err(SlotError::InvalidRule("empty RRULE string".to_string()));
    }
    if template.count == Some(0) {
        return Ok(Vec::new());
    }

    template
        .timezone
        .parse::<chrono_tz::Tz>()
        .map_err(|_| SlotError::InvalidTimezone(template.timezone.clone()))?;

    let rule_set: RRuleSet = ical_text(template)
        .parse()
        .map_err(|e| SlotError::InvalidRule(format!("{}", e)))?;

    // `all` applies its limit before EXDATE filtering, hence the headroom.
    let limit = match template.count {
        Some(count) => u16::try_from(count)
            .unwrap_or(u16::MAX)
            .saturating_add(u16::try_from(template.exdates.len()).unwrap_or(u16::MAX)),
        None => UNBOUNDED_LIMIT,
    };

    let length = Duration::minutes(i64::from(template.duration_minutes));
    let mut schedules = rule_set
        .all(limit)
        .dates
        .into_iter()
        .map(|occurrence| {
            let start: DateTime<Utc> = occurrence.with_timezone(&Utc);
            Ok(Schedule {
                professional_id: template.professional_id,
                discount_rate: template.discount_rate,
                range: TimeRange::new(start, start + length)?,
                created_at: None,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(count) = template.count {
        schedules.truncate(count as usize);
    }

    debug!(
        "expanded '{}' for professional {} into {} window(s)",
        template.rrule,
        template.professional_id,
        schedules.len()
    );
    Ok(schedules)
}

/// `2026-02-17T14:00:00` → `20260217T140000`
fn compact_local(local: &str) -> String {
    local.replace(['-', ':'], "")
}

/// Build the DTSTART / RRULE / EXDATE block the parser expects.
fn ical_text(template: &RecurringSchedule) -> String {
    let tz = &template.timezone;
    let mut rule = template.rrule.clone();
    let upper = rule.to_uppercase();

    if let Some(count) = template.count {
        if !upper.contains("COUNT=") {
            rule.push_str(&format!(";COUNT={}", count));
        }
    }
    if let Some(until) = &template.until {
        if !upper.contains("UNTIL=") {
            // UNTIL must share DTSTART's zone; in UTC that means a trailing Z.
            let suffix = if tz == "UTC" { "Z" } else { "" };
            rule.push_str(&format!(";UNTIL={}{}", compact_local(until), suffix));
        }
    }

    let mut text = format!(
        "DTSTART;TZID={}:{}\nRRULE:{}",
        tz,
        compact_local(&template.dtstart),
        rule
    );
    if !template.exdates.is_empty() {
        let excluded: Vec<String> = template.exdates.iter().map(|d| compact_local(d)).collect();
        text.push_str(&format!("\nEXDATE;TZID={}:{}", tz, excluded.join(",")));
    }
    text
}
