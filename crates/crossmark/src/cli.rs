//! Command-line interface for crossmark.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crossmark - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "crossmark")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $CROSSMARK_CONFIG, then ./crossmark.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Display name for X
    #[arg(long, global = true)]
    pub player_x: Option<String>,

    /// Display name for O
    #[arg(long, global = true)]
    pub player_o: Option<String>,

    /// Count rejected moves toward the tie and end on the ninth attempt
    #[arg(long, global = true)]
    pub legacy_rounds: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal UI
    Play,

    /// Apply a list of moves and print each round
    Script {
        /// Moves as zero-based "row,col" pairs or cell numbers 1-9
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print only the final session as JSON
        #[arg(long)]
        json: bool,
    },
}
