use anyhow::Result;

use crate::client::Client;
use crate::render::render_detail;

pub async fn run(client: &Client, id: i64) -> Result<()> {
    let event = client.get_event(id).await?;

    println!("{}", render_detail(&event));

    Ok(())
}
