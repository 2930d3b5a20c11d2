//! Win detection.

use crate::{Board, Cell, Player, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The 8 lines checked for three in a row.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `player` holds all three cells of any line.
#[instrument(skip(board))]
pub fn have_winner(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Returns the player with three in a row, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| have_winner(board, *player))
}
