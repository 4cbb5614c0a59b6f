mod run;
mod serve;

use clap::{Parser, Subcommand};

pub use run::run;
pub use serve::serve;

/// Relay new HackerOne disclosures and r/netsec posts to a webhook
#[derive(Parser)]
#[command(name = "relay")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch, dedup and deliver once, then exit (default)
    Run,

    /// Serve an HTTP endpoint that runs the relay on every GET /
    Serve {
        /// Address to listen on
        #[arg(long, env = "RELAY_BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: String,
    },
}
