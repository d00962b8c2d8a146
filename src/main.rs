//! event-tail entry point.
//!
//! Loads the configuration, renders the page to stdout/stderr and runs a
//! single session until the server closes the connection.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use event_tail::cli::Cli;
use event_tail::config::{ClientConfig, LogFormat};
use event_tail::display::TerminalPage;
use event_tail::session::Session;
use event_tail::ws::{TungsteniteConnector, run_session};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Parse arguments first so `--help` never dials the server
    let cli = Cli::parse();

    // Load configuration; the address argument overrides the environment
    let config = ClientConfig::from_env()?.with_address(cli.address);

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }

    tracing::info!(endpoint = ?config.endpoint, "starting event-tail");

    let page = TerminalPage::open(
        std::io::stdout(),
        std::io::stderr(),
        config.title,
        config.address,
    )?;
    let mut session = Session::new(page);

    match run_session(&TungsteniteConnector, &mut session, &config.endpoint).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_fatal() => {
            tracing::error!(error = %err, "cannot start");
            eprintln!("error: {err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            tracing::info!(error = %err, "session not started");
            Ok(ExitCode::SUCCESS)
        }
    }
}
