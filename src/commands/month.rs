use anyhow::Result;
use calgrid_core::{Clock, MonthCursor};

use crate::client::Client;
use crate::commands::fetch_grouped;
use crate::render::render_month;

pub async fn run(client: &Client, cursor: MonthCursor, strict: bool, clock: &impl Clock) -> Result<()> {
    let grouped = fetch_grouped(client, strict).await?;
    tracing::debug!(days = grouped.len(), events = grouped.event_count(), "grouped events");

    println!("{}", render_month(&cursor, &grouped, clock));

    Ok(())
}
