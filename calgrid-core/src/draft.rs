//! Create/update request body and its validation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::CalendarEvent;
use crate::date_key::{format_date_key, parse_date_key};
use crate::error::{CalGridError, CalGridResult};

/// Fields sent to the calendar API when creating or updating an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub event_title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl EventDraft {
    /// A draft pre-filled with the selected day.
    pub fn for_date(title: impl Into<String>, date: NaiveDate) -> Self {
        EventDraft {
            event_title: title.into(),
            date: format_date_key(date),
            ..Default::default()
        }
    }

    /// Start editing an existing event.
    pub fn from_event(event: &CalendarEvent) -> Self {
        EventDraft {
            event_title: event.event_title.clone(),
            date: event.date_key().unwrap_or_default().to_string(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            location: event.location.clone(),
            description: event.description.clone(),
            labels: event.labels().to_vec(),
        }
    }

    /// Add a label, ignoring blanks and duplicates. Returns whether it was added.
    pub fn add_label(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.labels.iter().any(|l| l == label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    /// Remove the label at `index`, if there is one.
    pub fn remove_label(&mut self, index: usize) -> Option<String> {
        (index < self.labels.len()).then(|| self.labels.remove(index))
    }

    pub fn validate(&self) -> CalGridResult<()> {
        if self.event_title.trim().is_empty() {
            return Err(CalGridError::Validation("Event title is required".into()));
        }

        parse_date_key(&self.date)?;

        let start = self.start_time.as_deref().map(parse_time).transpose()?;
        let end = self.end_time.as_deref().map(parse_time).transpose()?;
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(CalGridError::Validation(format!(
                    "End time {} is before start time {}",
                    end.format("%H:%M"),
                    start.format("%H:%M")
                )));
            }
        }

        Ok(())
    }
}

fn parse_time(raw: &str) -> CalGridResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
        .map_err(|_| CalGridError::InvalidTime(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EventDraft {
        EventDraft::for_date("Team Meeting", NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
    }

    #[test]
    fn for_date_uses_the_date_key() {
        assert_eq!(draft().date, "2026-01-05");
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut d = draft();
        d.event_title = "   ".into();
        let err = d.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Event title is required");
    }

    #[test]
    fn bad_date_is_rejected() {
        let mut d = draft();
        d.date = "2026-02-30".into();
        assert!(matches!(d.validate(), Err(CalGridError::InvalidDate(_))));
    }

    #[test]
    fn reversed_times_are_rejected() {
        let mut d = draft();
        d.start_time = Some("10:00".into());
        d.end_time = Some("09:30".into());
        assert!(matches!(d.validate(), Err(CalGridError::Validation(_))));

        d.end_time = Some("10:30:00".into());
        assert!(d.validate().is_ok());

        d.end_time = Some("half past".into());
        assert!(matches!(d.validate(), Err(CalGridError::InvalidTime(_))));
    }

    #[test]
    fn labels_skip_blanks_and_duplicates() {
        let mut d = draft();
        assert!(d.add_label(" work "));
        assert!(!d.add_label("work"));
        assert!(!d.add_label("  "));
        assert!(d.add_label("urgent"));
        assert_eq!(d.labels, vec!["work", "urgent"]);

        assert_eq!(d.remove_label(0), Some("work".to_string()));
        assert_eq!(d.remove_label(5), None);
        assert_eq!(d.labels, vec!["urgent"]);
    }

    #[test]
    fn from_event_keeps_fields_and_trims_timestamp() {
        let event = CalendarEvent {
            id: 4,
            event_title: "Lunch".into(),
            date: Some("2026-01-12T12:00:00Z".into()),
            location: Some("Cafe".into()),
            labels: Some(vec!["food".into()]),
            ..Default::default()
        };

        let d = EventDraft::from_event(&event);
        assert_eq!(d.date, "2026-01-12");
        assert_eq!(d.location.as_deref(), Some("Cafe"));
        assert_eq!(d.labels, vec!["food"]);
    }

    #[test]
    fn serialized_body_omits_unset_fields() {
        let value = serde_json::to_value(draft()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"event_title": "Team Meeting", "date": "2026-01-05", "labels": []})
        );
    }
}
