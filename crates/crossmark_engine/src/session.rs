//! Rules engine: one owned session per game.
//!
//! A [`GameSession`] holds the board, whose turn it is, and the round
//! counter. [`GameSession::play_round`] is the only mutating entry point
//! and returns a [`RoundStatus`] the presentation layer renders directly,
//! so the shell never re-runs win detection itself.

use crate::rules;
use crate::{Board, EngineError, Move, Player, Players, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Rounds after which a game with no winner is a tie.
pub const MAX_ROUNDS: u8 = 9;

/// How the round counter advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPolicy {
    /// Only accepted moves count. The ninth token is placed and checked
    /// for a win before a tie is declared.
    #[default]
    Standard,
    /// Every attempt counts, occupied cells included, and the ninth
    /// attempt is a tie before any token is placed.
    Legacy,
}

/// Outcome of a single [`GameSession::play_round`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Move accepted; `next` is now to move.
    Continue {
        /// Player whose turn it is now.
        next: Player,
    },
    /// The cell was already claimed. Turn does not pass.
    Occupied(Position),
    /// The mover completed a line.
    Won(Player),
    /// The game ended without a winner.
    Tie,
}

impl RoundStatus {
    /// True for [`RoundStatus::Won`] and [`RoundStatus::Tie`].
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundStatus::Won(_) | RoundStatus::Tie)
    }
}

/// Overall state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a tie.
    Tie,
}

/// A single game between X and O.
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    board: Board,
    players: Players,
    current_player: Player,
    rounds: u8,
    status: GameStatus,
    policy: RoundPolicy,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a new game. X moves first.
    #[instrument(skip(players))]
    pub fn new(players: Players, policy: RoundPolicy) -> Self {
        info!(
            x = players.name(Player::X),
            o = players.name(Player::O),
            "Starting new game"
        );
        Self {
            board: Board::new(),
            players,
            current_player: Player::X,
            rounds: 0,
            status: GameStatus::InProgress,
            policy,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the players' display names.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Display name of the player to move.
    pub fn current_player_name(&self) -> &str {
        self.players.name(self.current_player)
    }

    /// Rounds counted so far under the session's [`RoundPolicy`].
    pub fn rounds(&self) -> u8 {
        self.rounds
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the round policy.
    pub fn policy(&self) -> RoundPolicy {
        self.policy
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns true if `player` holds any full line.
    pub fn have_winner(&self, player: Player) -> bool {
        rules::have_winner(&self.board, player)
    }

    /// Hands the turn to the other player.
    pub(crate) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Plays one round for the current player at `pos`.
    ///
    /// # Errors
    ///
    /// [`EngineError::GameOver`] once the game has been won or tied. The
    /// session is not modified.
    #[instrument(skip(self), fields(player = %self.current_player, rounds = self.rounds))]
    pub fn play_round(&mut self, pos: Position) -> Result<RoundStatus, EngineError> {
        if self.is_over() {
            warn!(status = ?self.status, "Move rejected after game end");
            return Err(EngineError::GameOver);
        }

        let status = match self.policy {
            RoundPolicy::Standard => self.play_standard(pos),
            RoundPolicy::Legacy => self.play_legacy(pos),
        };
        debug!(board = %self.board.render_text(), ?status, "Round complete");
        Ok(status)
    }

    /// Plays one round at a zero-based row and column.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfRange`] for coordinates off the board, with no
    /// effect on the session, plus everything [`GameSession::play_round`]
    /// returns.
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<RoundStatus, EngineError> {
        let pos = Position::from_row_col(row, col)?;
        self.play_round(pos)
    }

    /// Overlay text for a finished game.
    pub fn result_message(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(format!("{} is the winner!", self.players.name(player))),
            GameStatus::Tie => Some("Draw!".to_string()),
        }
    }

    /// Starts over with a fresh board, keeping players and policy.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new(self.players.clone(), self.policy);
    }

    fn play_standard(&mut self, pos: Position) -> RoundStatus {
        if !self.place(pos) {
            return RoundStatus::Occupied(pos);
        }
        self.rounds += 1;

        let player = self.current_player;
        if self.have_winner(player) {
            return self.finish_won(player);
        }
        if self.rounds == MAX_ROUNDS {
            return self.finish_tie();
        }
        self.advance()
    }

    fn play_legacy(&mut self, pos: Position) -> RoundStatus {
        self.rounds += 1;
        if self.rounds == MAX_ROUNDS {
            return self.finish_tie();
        }
        if !self.place(pos) {
            return RoundStatus::Occupied(pos);
        }

        let player = self.current_player;
        if self.have_winner(player) {
            return self.finish_won(player);
        }
        self.advance()
    }

    /// Drops the current player's token at `pos`. False if the cell was taken.
    fn place(&mut self, pos: Position) -> bool {
        let player = self.current_player;
        info!(
            name = self.players.name(player),
            row = pos.row(),
            col = pos.col(),
            "Placing token"
        );
        match self.board.drop_token(player, pos) {
            Ok(()) => {
                self.history.push(Move::new(player, pos));
                true
            }
            Err(e) => {
                info!(error = %e, "Cell already marked, try again");
                false
            }
        }
    }

    fn advance(&mut self) -> RoundStatus {
        self.switch_player();
        info!(name = self.current_player_name(), "Next turn");
        RoundStatus::Continue {
            next: self.current_player,
        }
    }

    fn finish_won(&mut self, player: Player) -> RoundStatus {
        info!(name = self.players.name(player), "Player has won");
        self.status = GameStatus::Won(player);
        RoundStatus::Won(player)
    }

    fn finish_tie(&mut self) -> RoundStatus {
        info!(rounds = self.rounds, "Tie");
        self.status = GameStatus::Tie;
        RoundStatus::Tie
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Players::default(), RoundPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_with_x() {
        let session = GameSession::default();
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.rounds(), 0);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_switch_player_toggles() {
        let mut session = GameSession::default();
        session.switch_player();
        assert_eq!(session.current_player(), Player::O);
        session.switch_player();
        assert_eq!(session.current_player(), Player::X);
    }

    #[test]
    fn test_play_at_out_of_range_has_no_side_effect() {
        let mut session = GameSession::default();
        let result = session.play_at(1, 3);
        assert_eq!(result, Err(EngineError::OutOfRange { row: 1, col: 3 }));
        assert_eq!(session.rounds(), 0);
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_occupied_does_not_count_under_standard() {
        let mut session = GameSession::default();
        session.play_round(Position::Center).unwrap();
        let status = session.play_round(Position::Center).unwrap();
        assert_eq!(status, RoundStatus::Occupied(Position::Center));
        assert_eq!(session.rounds(), 1);
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn test_occupied_counts_under_legacy() {
        let mut session = GameSession::new(Players::default(), RoundPolicy::Legacy);
        session.play_round(Position::Center).unwrap();
        session.play_round(Position::Center).unwrap();
        assert_eq!(session.rounds(), 2);
        assert_eq!(session.current_player(), Player::O);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_result_message() {
        let mut session = GameSession::new(Players::new("Ada", "Bob"), RoundPolicy::Standard);
        assert_eq!(session.result_message(), None);
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            session.play_at(row, col).unwrap();
        }
        assert_eq!(session.result_message().as_deref(), Some("Ada is the winner!"));
    }

    #[test]
    fn test_restart_keeps_players_and_policy() {
        let mut session = GameSession::new(Players::new("Ada", "Bob"), RoundPolicy::Legacy);
        session.play_round(Position::TopLeft).unwrap();
        session.restart();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.rounds(), 0);
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.policy(), RoundPolicy::Legacy);
        assert_eq!(session.players().name(Player::O), "Bob");
    }
}
