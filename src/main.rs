mod commands;
mod config;
mod dispatch;
mod history;
mod pipeline;
mod sources;
mod state;
#[cfg(test)]
mod testing;
mod webhook;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load env before the filter reads RUST_LOG
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("relay=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            info!("Running relay once");
            commands::run().await
        }
        Command::Serve { bind } => commands::serve(&bind).await,
    }
}
