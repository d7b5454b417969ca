pub mod day;
pub mod delete;
pub mod month;
pub mod new;
pub mod show;
pub mod update;

use anyhow::Result;
use calgrid_core::{EventsByDate, group_by_date_strict};

use crate::client::Client;

/// Fetch every event and bucket it by day.
pub async fn fetch_grouped(client: &Client, strict: bool) -> Result<EventsByDate> {
    let events = client.list_events().await?;

    if strict {
        return Ok(group_by_date_strict(events.unwrap_or_default())?);
    }
    Ok(EventsByDate::from(events))
}
