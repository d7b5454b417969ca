//! Grouping events by date key and looking days up.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::CalendarEvent;
use crate::date_key::{format_date_key, parse_date_key};
use crate::error::{CalGridError, CalGridResult};

/// Events bucketed by date key. Buckets keep input order; keys iterate in
/// ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsByDate {
    buckets: BTreeMap<String, Vec<CalendarEvent>>,
}

impl EventsByDate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `event` to the bucket for `key`.
    pub fn insert(&mut self, key: &str, event: CalendarEvent) {
        self.buckets.entry(key.to_string()).or_default().push(event);
    }

    pub fn get(&self, key: &str) -> Option<&[CalendarEvent]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Number of distinct date keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of bucketed events.
    pub fn event_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }
}

impl From<Option<Vec<CalendarEvent>>> for EventsByDate {
    /// An absent event list groups to an empty mapping.
    fn from(events: Option<Vec<CalendarEvent>>) -> Self {
        group_by_date(events.unwrap_or_default())
    }
}

impl FromIterator<CalendarEvent> for EventsByDate {
    fn from_iter<I: IntoIterator<Item = CalendarEvent>>(iter: I) -> Self {
        group_by_date(iter)
    }
}

/// Bucket events under the date-only prefix of their `date`.
///
/// Malformed dates are bucketed as-is. Events with no date are skipped.
pub fn group_by_date<I>(events: I) -> EventsByDate
where
    I: IntoIterator<Item = CalendarEvent>,
{
    let mut grouped = EventsByDate::new();

    for event in events {
        let Some(key) = event.date_key().map(str::to_string) else {
            tracing::debug!(id = event.id, "skipping event without a date");
            continue;
        };
        grouped.insert(&key, event);
    }

    grouped
}

/// Like [`group_by_date`], but every derived key must be a real calendar
/// date.
pub fn group_by_date_strict<I>(events: I) -> CalGridResult<EventsByDate>
where
    I: IntoIterator<Item = CalendarEvent>,
{
    let mut grouped = EventsByDate::new();

    for event in events {
        let Some(key) = event.date_key().map(str::to_string) else {
            continue;
        };
        // Only keys format_date_key can produce are reachable from a lookup
        if parse_date_key(&key).is_err() {
            return Err(CalGridError::Validation(format!(
                "event {} ('{}') has malformed date '{}'",
                event.id,
                event.event_title,
                event.date.as_deref().unwrap_or_default()
            )));
        }
        grouped.insert(&key, event);
    }

    Ok(grouped)
}

/// Events on `date`, or an empty slice.
pub fn events_on(date: NaiveDate, events_by_date: &EventsByDate) -> &[CalendarEvent] {
    events_by_date
        .get(&format_date_key(date))
        .unwrap_or_default()
}
