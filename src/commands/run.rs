use anyhow::Result;

use crate::pipeline;
use crate::sources::http_client;

/// Direct trigger: one pass, errors go to the caller.
pub async fn run() -> Result<()> {
    let client = http_client()?;
    pipeline::run_once(&client).await?;
    Ok(())
}
