//! Crossgame - unified CLI
//!
//! Plays tic-tac-toe on the console or serves the JSON HTTP adapter.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use crossgame_server::{Controller, CrossgameConfig, InMemorySessionStore, run_console, serve};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CrossgameConfig::load(&cli.config)?;
    initialize_tracing(&config);

    let controller =
        Controller::new(InMemorySessionStore::new()).with_board_size(*config.board_size());

    match cli.command {
        Command::Play => run_play(controller),
        Command::Serve { port, host } => {
            let config = config.with_http_overrides(host, port);
            info!("Starting crossgame HTTP server");
            serve(&config, controller).await
        }
    }
}

/// Run one console game on stdin/stdout
fn run_play(mut controller: Controller) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    match run_console(&mut controller, stdin.lock(), &mut stdout)? {
        Some(outcome) => info!(%outcome, "Console game finished"),
        None => info!("Console game abandoned"),
    }
    Ok(())
}

/// Logs go to stderr so game text on stdout stays readable.
fn initialize_tracing(config: &CrossgameConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
