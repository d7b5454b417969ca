//! Calendar event as stored by the backend.
//!
//! The engine only looks at `date`; every other field is carried through
//! untouched for rendering and for building update requests.

use serde::{Deserialize, Serialize};

use crate::date_key::date_key_of;

/// A calendar event record returned by the calendar API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Backend-assigned identifier, immutable after creation
    pub id: i64,
    pub event_title: String,
    /// Full timestamp (`YYYY-MM-DDTHH:mm:ss...`) or plain `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl CalendarEvent {
    /// Date key this event is bucketed under, if it has a date at all.
    pub fn date_key(&self) -> Option<&str> {
        self.date.as_deref().map(date_key_of)
    }

    /// Labels in order, empty when the backend sent none.
    pub fn labels(&self) -> &[String] {
        self.labels.as_deref().unwrap_or_default()
    }

    /// "09:00 - 10:30" style time range, `—` standing in for a missing end.
    pub fn time_range(&self) -> String {
        let start = self.start_time.as_deref().unwrap_or("—");
        let end = self.end_time.as_deref().unwrap_or("—");
        format!("{} - {}", start, end)
    }
}

impl std::fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.event_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_record_with_nulls() {
        let json = r#"{
            "id": 7,
            "event_title": "Standup",
            "date": "2026-01-12T09:00:00.000Z",
            "start_time": "09:00",
            "end_time": null,
            "labels": null,
            "created_at": "2026-01-10T12:00:00Z"
        }"#;

        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.date_key(), Some("2026-01-12"));
        assert_eq!(event.end_time, None);
        assert!(event.labels().is_empty());
        assert_eq!(event.time_range(), "09:00 - —");
    }

    #[test]
    fn missing_date_has_no_key() {
        let event: CalendarEvent =
            serde_json::from_str(r#"{"id": 1, "event_title": "Undated"}"#).unwrap();
        assert_eq!(event.date_key(), None);
    }

    #[test]
    fn serializing_skips_unset_optionals() {
        let event = CalendarEvent {
            id: 3,
            event_title: "Demo".into(),
            date: Some("2026-01-25".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 3, "event_title": "Demo", "date": "2026-01-25"})
        );
    }
}
