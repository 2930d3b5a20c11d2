//! Core domain types for the board.

use crate::{EngineError, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One of the two fixed players.
///
/// X always moves first. Players are compared by identity, never by
/// display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Player X (id 1, goes first).
    X,
    /// Player O (id 2, goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Numeric id: 1 for X, 2 for O.
    pub fn id(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }

    /// Looks up a player by numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::X),
            2 => Some(Player::O),
            _ => None,
        }
    }

    /// Rendered symbol. Odd ids draw "X", even ids draw "O".
    pub fn symbol(self) -> &'static str {
        if self.id() % 2 == 1 { "X" } else { "O" }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unclaimed.
    #[default]
    Empty,
    /// Claimed by a player. Never changes again for the rest of the game.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 board.
///
/// Cells are write-once: the only mutation is [`Board::drop_token`], which
/// refuses occupied cells. A new game needs a new board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Iterates the grid row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(3)
    }

    /// Checks if a cell is unclaimed.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Number of unclaimed cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Empty).count()
    }

    /// Claims `pos` for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOccupied`] if the cell is already
    /// claimed; the board is left untouched.
    #[instrument(skip(self))]
    pub fn drop_token(&mut self, player: Player, pos: Position) -> Result<(), EngineError> {
        let cell = &mut self.cells[pos.to_index()];
        if *cell != Cell::Empty {
            debug!(existing = ?cell, "Cell already claimed");
            return Err(EngineError::CellOccupied(pos));
        }
        *cell = Cell::Occupied(player);
        Ok(())
    }

    /// Formats the board as a text grid, numbering empty cells 1-9.
    pub fn render_text(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => result.push_str(&(row * 3 + col + 1).to_string()),
                    Cell::Occupied(player) => result.push_str(player.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
