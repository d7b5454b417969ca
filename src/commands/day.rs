use anyhow::Result;
use calgrid_core::events_on;
use chrono::NaiveDate;

use crate::client::Client;
use crate::commands::fetch_grouped;
use crate::render::render_day;

pub async fn run(client: &Client, date: NaiveDate, strict: bool) -> Result<()> {
    let grouped = fetch_grouped(client, strict).await?;

    println!("{}", render_day(date, events_on(date, &grouped)));

    Ok(())
}
