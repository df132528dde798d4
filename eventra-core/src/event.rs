//! Calendar event types.
//!
//! Events travel over the wire in camelCase (`dateTime`), matching what the
//! browser client sends and expects back.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::validate;

/// A stored calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque id assigned by storage, never changes once set
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO calendar date (YYYY-MM-DD)
    pub date: String,
    /// Wall-clock time (HH:MM), empty for events without a time
    pub time: String,
    /// Combined date and time used for ordering and same-day matching
    pub date_time: String,
}

/// A validated event ready to be stored: every `Event` field but the id.
///
/// `description` and `time` default to empty strings when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertEvent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub date_time: String,
}

/// A partial event. Absent fields are left untouched on update.
///
/// Also the raw shape request bodies are read into before validation, so
/// missing required fields can be reported per field. A field may be left
/// out, but an explicit `null` is rejected like any other non-string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_time: Option<String>,
}

/// Only called for keys that are present, so `null` fails as a non-string.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl Event {
    pub fn from_insert(id: String, insert: InsertEvent) -> Self {
        Event {
            id,
            title: insert.title,
            description: insert.description.unwrap_or_default(),
            date: insert.date,
            time: insert.time.unwrap_or_default(),
            date_time: insert.date_time,
        }
    }

    /// Shallow merge: every field present in the patch overwrites ours.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(date_time) = patch.date_time {
            self.date_time = date_time;
        }
    }

    /// Whether `date_time` falls on the given calendar day.
    ///
    /// Events whose `date_time` cannot be parsed never match.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        validate::parse_date_time(&self.date_time)
            .map(|dt| dt.date())
            .or_else(|| validate::parse_date(&self.date_time))
            .is_some_and(|d| d == day)
    }
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self == &EventPatch::default()
    }

    /// True when the patch moves the event without saying where it now starts.
    pub fn needs_date_time(&self) -> bool {
        (self.date.is_some() || self.time.is_some()) && self.date_time.is_none()
    }
}
