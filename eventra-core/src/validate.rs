//! Shape checks for event payloads.
//!
//! Every failing field is collected so a client can fix a form in one pass.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EventraError, EventraResult};
use crate::event::{EventPatch, InsertEvent};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Time used when building `dateTime` for an event without a time.
const DEFAULT_TIME: &str = "00:00";

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

// chrono accepts unpadded fields ("2024-6-3", "9:00"). Only the zero-padded
// form is allowed, since stored `dateTime` strings are ordered as text.

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .filter(|d| d.format(DATE_FORMAT).to_string() == s)
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    TIME_FORMATS.iter().find_map(|fmt| {
        NaiveTime::parse_from_str(s, fmt)
            .ok()
            .filter(|t| t.format(fmt).to_string() == s)
    })
}

pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(s, fmt)
            .ok()
            .filter(|dt| dt.format(fmt).to_string() == s)
    })
}

/// Build the `dateTime` string for a date and an optional (possibly empty) time.
pub fn combine_date_time(date: &str, time: &str) -> String {
    let time = if time.is_empty() { DEFAULT_TIME } else { time };
    format!("{date}T{time}")
}

fn check_title(title: &str) -> Option<FieldError> {
    title
        .trim()
        .is_empty()
        .then(|| FieldError::new("title", "Title cannot be empty"))
}

fn check_date(date: &str) -> Option<FieldError> {
    parse_date(date)
        .is_none()
        .then(|| FieldError::new("date", "Expected a date in YYYY-MM-DD format"))
}

fn check_time(time: &str) -> Option<FieldError> {
    (!time.is_empty() && parse_time(time).is_none())
        .then(|| FieldError::new("time", "Expected a time in HH:MM format"))
}

fn check_date_time(date_time: &str) -> Option<FieldError> {
    parse_date_time(date_time).is_none().then(|| {
        FieldError::new(
            "dateTime",
            "Expected a date and time in YYYY-MM-DDTHH:MM format",
        )
    })
}

fn check_same_day(patch: &EventPatch) -> Option<FieldError> {
    let date = parse_date(patch.date.as_deref()?)?;
    let date_time = parse_date_time(patch.date_time.as_deref()?)?;
    (date_time.date() != date)
        .then(|| FieldError::new("dateTime", "Must fall on the event's date"))
}

/// Validate a create payload and turn it into an `InsertEvent`.
///
/// `title` and `date` are required. A missing `dateTime` is built from
/// `date` and `time`; a given one must fall on `date`.
pub fn validate_new(body: EventPatch) -> EventraResult<InsertEvent> {
    let mut errors = Vec::new();

    if body.title.is_none() {
        errors.push(FieldError::new("title", "Required"));
    }
    if body.date.is_none() {
        errors.push(FieldError::new("date", "Required"));
    }
    errors.extend(check_present(&body));

    match (body.title, body.date) {
        (Some(title), Some(date)) if errors.is_empty() => {
            let date_time = body
                .date_time
                .unwrap_or_else(|| combine_date_time(&date, body.time.as_deref().unwrap_or("")));
            Ok(InsertEvent {
                title,
                description: body.description,
                date,
                time: body.time,
                date_time,
            })
        }
        _ => Err(EventraError::Validation(errors)),
    }
}

/// Validate the fields a patch carries. Absent fields are not checked.
///
/// `date` and `dateTime` are only compared when the patch carries both.
pub fn validate_patch(patch: &EventPatch) -> EventraResult<()> {
    let errors = check_present(patch);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(EventraError::Validation(errors))
    }
}

fn check_present(patch: &EventPatch) -> Vec<FieldError> {
    [
        patch.title.as_deref().and_then(check_title),
        patch.date.as_deref().and_then(check_date),
        patch.time.as_deref().and_then(check_time),
        patch.date_time.as_deref().and_then(check_date_time),
        check_same_day(patch),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(title: &str, date: &str) -> EventPatch {
        EventPatch {
            title: Some(title.to_string()),
            date: Some(date.to_string()),
            ..Default::default()
        }
    }

    fn fields(err: EventraError) -> Vec<String> {
        match err {
            EventraError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_new_builds_date_time_without_time() {
        let insert = validate_new(body("Standup", "2024-06-03")).unwrap();
        assert_eq!(insert.date_time, "2024-06-03T00:00");
        assert_eq!(insert.time, None);
    }

    #[test]
    fn test_validate_new_builds_date_time_with_time() {
        let mut input = body("Standup", "2024-06-03");
        input.time = Some("09:30".to_string());
        let insert = validate_new(input).unwrap();
        assert_eq!(insert.date_time, "2024-06-03T09:30");
        assert_eq!(insert.time.as_deref(), Some("09:30"));
    }

    #[test]
    fn test_validate_new_keeps_given_date_time() {
        let mut input = body("Standup", "2024-06-03");
        input.time = Some("09:00".to_string());
        input.date_time = Some("2024-06-03T09:00:00".to_string());
        let insert = validate_new(input).unwrap();
        assert_eq!(insert.date_time, "2024-06-03T09:00:00");
    }

    #[test]
    fn test_validate_new_reports_all_missing_fields() {
        let err = validate_new(EventPatch::default()).unwrap_err();
        assert_eq!(fields(err), vec!["title", "date"]);
    }

    #[test]
    fn test_validate_new_rejects_blank_title() {
        let err = validate_new(body("   ", "2024-06-03")).unwrap_err();
        assert_eq!(fields(err), vec!["title"]);
    }

    #[test]
    fn test_validate_new_rejects_bad_formats() {
        let mut input = body("Standup", "June 3rd");
        input.time = Some("9am".to_string());
        input.date_time = Some("2024-06-03 09:00".to_string());
        let err = validate_new(input).unwrap_err();
        assert_eq!(fields(err), vec!["date", "time", "dateTime"]);
    }

    #[test]
    fn test_validate_new_rejects_impossible_date() {
        let err = validate_new(body("Standup", "2024-02-30")).unwrap_err();
        assert_eq!(fields(err), vec!["date"]);
    }

    #[test]
    fn test_validate_new_allows_empty_time() {
        let mut input = body("Standup", "2024-06-03");
        input.time = Some(String::new());
        assert!(validate_new(input).is_ok());
    }

    #[test]
    fn test_validate_patch_checks_only_present_fields() {
        assert!(validate_patch(&EventPatch::default()).is_ok());
        assert!(
            validate_patch(&EventPatch {
                description: Some(String::new()),
                ..Default::default()
            })
            .is_ok()
        );

        let err = validate_patch(&EventPatch {
            title: Some(String::new()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(fields(err), vec!["title"]);
    }

    #[test]
    fn test_validate_new_rejects_unpadded_fields() {
        let mut input = body("June", "2024-6-3");
        input.time = Some("9:00".to_string());
        let err = validate_new(input).unwrap_err();
        assert_eq!(fields(err), vec!["date", "time"]);

        let mut input = body("June", "2024-06-03");
        input.date_time = Some("2024-06-03T9:00".to_string());
        let err = validate_new(input).unwrap_err();
        assert_eq!(fields(err), vec!["dateTime"]);
    }

    #[test]
    fn test_validate_new_rejects_date_time_on_other_day() {
        let mut input = body("Standup", "2024-06-03");
        input.date_time = Some("2025-01-01T00:00".to_string());
        let err = validate_new(input).unwrap_err();
        assert_eq!(fields(err), vec!["dateTime"]);
    }

    #[test]
    fn test_validate_patch_compares_date_and_date_time() {
        let patch = EventPatch {
            date: Some("2024-06-04".to_string()),
            date_time: Some("2024-06-03T09:00".to_string()),
            ..Default::default()
        };
        assert_eq!(fields(validate_patch(&patch).unwrap_err()), vec!["dateTime"]);

        let patch = EventPatch {
            date_time: Some("2024-06-03T09:00".to_string()),
            ..Default::default()
        };
        assert!(validate_patch(&patch).is_ok());
    }

    #[test]
    fn test_parse_helpers() {
        assert!(parse_time("23:59:59").is_some());
        assert!(parse_time("24:00").is_none());
        assert!(parse_date_time("2024-06-03T09:00").is_some());
        assert!(parse_date_time("2024-06-03").is_none());
        assert!(parse_date("2024-6-3").is_none());
        assert!(parse_time("9:00").is_none());
        assert!(parse_date_time("2024-06-03T09:00:00").is_some());
    }
}
