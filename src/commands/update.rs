use anyhow::Result;
use calgrid_core::{EventDraft, format_date_key};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::client::Client;

/// Changes requested by `calgrid update`; unset fields are left alone.
#[derive(Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub add_labels: Vec<String>,
    /// Indexes into the event's current labels
    pub remove_labels: Vec<usize>,
}

impl EventChanges {
    fn apply(self, draft: &mut EventDraft) {
        if let Some(title) = self.title {
            draft.event_title = title;
        }
        if let Some(date) = self.date {
            draft.date = format_date_key(date);
        }
        if let Some(start) = self.start {
            draft.start_time = Some(start);
        }
        if let Some(end) = self.end {
            draft.end_time = Some(end);
        }
        if let Some(location) = self.location {
            draft.location = Some(location);
        }
        if let Some(description) = self.description {
            draft.description = Some(description);
        }

        // Highest index first so earlier removals don't shift later ones
        let mut remove = self.remove_labels;
        remove.sort_unstable();
        remove.dedup();
        for index in remove.into_iter().rev() {
            draft.remove_label(index);
        }
        for label in &self.add_labels {
            draft.add_label(label);
        }
    }
}

pub async fn run(client: &Client, id: i64, changes: EventChanges) -> Result<()> {
    let current = client.get_event(id).await?;

    let mut draft = EventDraft::from_event(&current);
    changes.apply(&mut draft);
    draft.validate()?;

    client.update_event(id, &draft).await?;

    println!("{} Updated {} {}", "~".yellow(), draft.event_title.yellow(), format!("#{}", id).dimmed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::CalendarEvent;

    fn current() -> EventDraft {
        EventDraft::from_event(&CalendarEvent {
            id: 6,
            event_title: "Standup".into(),
            date: Some("2026-01-18T09:00:00Z".into()),
            start_time: Some("09:00".into()),
            labels: Some(vec!["a".into(), "b".into(), "c".into()]),
            ..Default::default()
        })
    }

    #[test]
    fn unset_fields_are_kept() {
        let mut draft = current();
        EventChanges::default().apply(&mut draft);
        assert_eq!(draft, current());
    }

    #[test]
    fn changes_overwrite_fields() {
        let mut draft = current();
        EventChanges {
            title: Some("Daily Standup".into()),
            date: NaiveDate::from_ymd_opt(2026, 1, 19),
            end: Some("09:15".into()),
            ..Default::default()
        }
        .apply(&mut draft);

        assert_eq!(draft.event_title, "Daily Standup");
        assert_eq!(draft.date, "2026-01-19");
        assert_eq!(draft.start_time.as_deref(), Some("09:00"));
        assert_eq!(draft.end_time.as_deref(), Some("09:15"));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn labels_removed_by_current_index_then_added() {
        let mut draft = current();
        EventChanges {
            remove_labels: vec![0, 2, 2, 9],
            add_labels: vec!["d".into(), "b".into()],
            ..Default::default()
        }
        .apply(&mut draft);

        assert_eq!(draft.labels, vec!["b", "d"]);
    }
}
