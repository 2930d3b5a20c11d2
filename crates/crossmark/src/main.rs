//! Crossmark - tic-tac-toe in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod script;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use crossmark_engine::GameSession;
use logging::LogTarget;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.player_x, cli.player_o, cli.legacy_rounds);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init(config.log_level(), LogTarget::File(config.log_file().clone()))?;
            info!(?config, "Starting crossmark");
            tui::run(GameSession::new(config.players(), *config.round_policy()))
        }
        Command::Script { moves, json } => {
            logging::init(config.log_level(), LogTarget::Stderr)?;
            info!(?config, moves = moves.len(), "Running scripted game");
            script::run(&mut std::io::stdout().lock(), &config, &moves, json)
        }
    }
}
