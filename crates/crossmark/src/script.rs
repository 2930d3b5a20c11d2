//! Headless mode: play a fixed list of moves and print each round.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossmark_engine::{GameSession, Position, RoundStatus};
use std::io::Write;
use tracing::{instrument, warn};

/// Plays `moves` in order, writing the round trace (or JSON) to `out`.
///
/// Moves left over after the game ends are reported and skipped.
#[instrument(skip(out, config))]
pub fn run<W: Write>(out: &mut W, config: &AppConfig, moves: &[String], json: bool) -> Result<()> {
    let mut session = GameSession::new(config.players(), *config.round_policy());
    let trace = !json;

    if trace {
        print_round(out, &session)?;
    }

    for (idx, raw) in moves.iter().enumerate() {
        if session.is_over() {
            warn!(skipped = moves.len() - idx, "Game over, ignoring remaining moves");
            if trace {
                writeln!(out, "Game over, ignoring {} remaining move(s).", moves.len() - idx)?;
            }
            break;
        }

        let pos: Position = raw
            .parse()
            .with_context(|| format!("Invalid move {raw:?}"))?;
        let name = session.current_player_name().to_string();
        let status = session.play_round(pos)?;

        if !trace {
            continue;
        }
        match status {
            RoundStatus::Continue { .. } => {
                writeln!(out, "{name} placed a token on row {}, col {}", pos.row(), pos.col())?;
                print_round(out, &session)?;
            }
            RoundStatus::Occupied(pos) => {
                writeln!(out, "{pos} is already marked, please try again!")?;
            }
            RoundStatus::Won(_) | RoundStatus::Tie => {
                writeln!(out, "{}", session.board().render_text())?;
            }
        }
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&session)?)?;
    } else if let Some(message) = session.result_message() {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

fn print_round<W: Write>(out: &mut W, session: &GameSession) -> Result<()> {
    writeln!(out, "{}", session.board().render_text())?;
    writeln!(out, "{}'s turn.", session.current_player_name())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(list: &[&str]) -> Vec<String> {
        list.iter().map(|m| m.to_string()).collect()
    }

    fn run_to_string(config: &AppConfig, list: &[&str], json: bool) -> Result<String> {
        let mut out = Vec::new();
        run(&mut out, config, &moves(list), json)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_win_trace() {
        let config = AppConfig::default().with_overrides(Some("Ada".into()), Some("Bob".into()), false);
        let output = run_to_string(&config, &["0,0", "1,1", "0,1", "2,2", "0,2"], false).unwrap();

        assert!(output.starts_with("1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\nAda's turn.\n"));
        assert!(output.contains("Ada placed a token on row 0, col 0"));
        assert!(output.contains("Bob's turn."));
        assert!(output.ends_with("X|X|X\n-+-+-\n4|O|6\n-+-+-\n7|8|O\nAda is the winner!\n"));
    }

    #[test]
    fn test_occupied_and_leftover_moves() {
        let output = run_to_string(
            &AppConfig::default(),
            &["5", "5", "1", "4", "2", "7", "3", "9"],
            false,
        )
        .unwrap();

        assert!(output.contains("Center is already marked, please try again!"));
        assert!(output.contains("Game over, ignoring 1 remaining move(s)."));
        assert!(output.ends_with("player2 is the winner!\n"));
    }

    #[test]
    fn test_invalid_move_is_an_error() {
        let err = run_to_string(&AppConfig::default(), &["0,3"], false).unwrap_err();
        assert!(err.to_string().contains("Invalid move \"0,3\""));
    }

    #[test]
    fn test_json_snapshot() {
        let output = run_to_string(&AppConfig::default(), &["1,1"], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["current_player"], "O");
        assert_eq!(value["status"], "InProgress");
        assert_eq!(value["history"][0]["position"], "Center");
    }
}
