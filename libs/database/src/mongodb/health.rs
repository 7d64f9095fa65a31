use mongodb::{Client, bson::doc};
use std::time::{Duration, Instant};

/// Run the `ping` admin command and return the round-trip time.
///
/// Lighter than listing databases and permitted for users without
/// cluster-wide privileges.
pub async fn ping(client: &Client) -> Result<Duration, mongodb::error::Error> {
    let start = Instant::now();
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(start.elapsed())
}
