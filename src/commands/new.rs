use anyhow::Result;
use calgrid_core::EventDraft;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::client::Client;

/// Fields given to `calgrid new`.
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub labels: Vec<String>,
}

impl NewEvent {
    fn into_draft(self) -> EventDraft {
        let mut draft = EventDraft::for_date(self.title, self.date);
        draft.start_time = self.start;
        draft.end_time = self.end;
        draft.location = self.location;
        draft.description = self.description;
        for label in &self.labels {
            draft.add_label(label);
        }
        draft
    }
}

pub async fn run(client: &Client, new_event: NewEvent) -> Result<()> {
    let draft = new_event.into_draft();
    draft.validate()?;

    let created = client.create_event(&draft).await?;

    let id = created
        .map(|event| format!(" #{}", event.id))
        .unwrap_or_default();
    println!(
        "{} Created {}{} on {}",
        "+".green(),
        draft.event_title.green(),
        id.dimmed(),
        draft.date
    );

    Ok(())
}
