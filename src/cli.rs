//! Command-line arguments.

use clap::Parser;

/// Tails the storage events of one account.
#[derive(Debug, Parser)]
#[command(name = "event-tail", version)]
pub struct Cli {
    /// Account address to subscribe to.
    #[arg(env = "EVENT_TAIL_ADDRESS")]
    pub address: Option<String>,
}
