use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::Client;

pub async fn run(client: &Client, id: i64) -> Result<()> {
    client.delete_event(id).await?;

    println!("{} Deleted event #{}", "-".red(), id);

    Ok(())
}
