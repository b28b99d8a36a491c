//! School event records.
//!
//! Events arrive either from the remote events endpoint or from the
//! built-in fallback schedule. Both the site server and the CLI work
//! exclusively with these types for ordering and rendering.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single calendar entry on the school schedule.
///
/// `id` is unique by convention only; nothing enforces it. `date` is an
/// ISO date (`YYYY-MM-DD`) and may be absent for recurring entries,
/// which instead carry a `time` label like `"8:00 AM"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Display label, not derived from `date`
    pub month: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub description: String,
}

impl Event {
    /// Parse the ISO `date` field. Missing or unparseable dates yield `None`.
    pub fn date_value(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Human-readable "when" label for the event, e.g.
    /// `"March • March 15, 2026"` for dated entries or
    /// `"January • 8:00 AM"` for undated ones.
    pub fn when_label(&self) -> String {
        match self.date_value() {
            Some(date) => format!("{} • {}", self.month, format_display_date(date)),
            None => match &self.time {
                Some(time) => format!("{} • {}", self.month, time),
                None => self.month.clone(),
            },
        }
    }
}

/// Format a date as a human-readable label (e.g. "March 15, 2026")
fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Chronological ordering for the schedule. Events without a valid date
/// sort after all dated events.
pub fn schedule_order(a: &Event, b: &Event) -> Ordering {
    match (a.date_value(), b.date_value()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort events chronologically. The sort is stable, so undated events
/// keep their relative order at the end of the schedule.
pub fn sort_schedule(events: &mut [Event]) {
    events.sort_by(schedule_order);
}
