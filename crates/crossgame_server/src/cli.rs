//! Command-line interface for crossgame.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crossgame - tic-tac-toe on the console or over HTTP
#[derive(Parser, Debug)]
#[command(name = "crossgame")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "crossgame.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game in this terminal
    Play,

    /// Run the JSON HTTP server
    Serve {
        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,
    },
}
