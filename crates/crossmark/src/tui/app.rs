//! Application state and input handling.

use super::input::{digit_position, move_cursor};
use crossmark_engine::{GameSession, Player, Position, RoundStatus};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    show_result: bool,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh session.
    pub fn new(session: GameSession) -> Self {
        let status_message = turn_message(&session, session.current_player());
        Self {
            session,
            cursor: Position::Center,
            status_message,
            show_result: false,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Result text while the overlay is open.
    pub fn result_overlay(&self) -> Option<String> {
        if self.show_result {
            self.session.result_message()
        } else {
            None
        }
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where each cell was drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.show_result {
            match key {
                KeyCode::Char('r') => self.restart(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc => self.show_result = false,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(pos) = digit_position(other) {
                    self.cursor = pos;
                    self.select(pos);
                }
            }
        }
    }

    /// Handles a left click at terminal coordinates.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if self.show_result {
            return;
        }
        let hit = Position::ALL.into_iter().find(|pos| {
            let area = self.cell_areas[pos.to_index()];
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        });
        if let Some(pos) = hit {
            debug!(column, row, position = %pos, "Click resolved to cell");
            self.cursor = pos;
            self.select(pos);
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Cells that already show a mark are ignored without asking the
    /// engine, as are selections after the game has ended.
    pub fn select(&mut self, pos: Position) {
        if self.session.is_over() {
            debug!(position = %pos, "Selection ignored, game over");
            return;
        }
        if !self.session.board().is_empty(pos) {
            self.status_message = format!("{} is already marked. Pick another cell.", pos.label());
            return;
        }

        match self.session.play_round(pos) {
            Ok(RoundStatus::Continue { next }) => {
                self.status_message = turn_message(&self.session, next);
            }
            Ok(RoundStatus::Occupied(pos)) => {
                self.status_message = format!("{} is already marked. Try again.", pos.label());
            }
            Ok(RoundStatus::Won(_) | RoundStatus::Tie) => {
                let result = self.session.result_message().unwrap_or_default();
                info!(result = %result, "Game finished");
                self.status_message = format!("{result} Press 'r' to restart or 'q' to quit.");
                self.show_result = true;
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = format!("Move error: {e}");
            }
        }
    }

    /// Starts a new game with the same players.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.restart();
        self.cursor = Position::Center;
        self.show_result = false;
        self.status_message = turn_message(&self.session, self.session.current_player());
    }
}

fn turn_message(session: &GameSession, player: Player) -> String {
    format!("{}'s turn ({})", session.players().name(player), player.symbol())
}
