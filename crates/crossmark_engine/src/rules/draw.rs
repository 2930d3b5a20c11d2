//! Full-board detection.

use crate::{Board, Cell};

/// Checks if every cell is claimed.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
