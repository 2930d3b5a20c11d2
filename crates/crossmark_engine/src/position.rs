//! Board coordinates.

use super::types::Board;
use crate::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the board, row-major (index 0-8).
///
/// Every value of this type is on the board, so engine operations taking a
/// `Position` cannot be handed out-of-range coordinates. Raw input goes
/// through [`Position::from_row_col`], [`Position::from_cell_id`] or
/// [`FromStr`], which reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0-2.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column, 0-2.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from zero-based row and column.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfRange`] if either coordinate is above 2.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, EngineError> {
        if row > 2 || col > 2 {
            return Err(EngineError::OutOfRange { row, col });
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Resolves a cell element id such as `"cell-5"`.
    ///
    /// The trailing digit is a 1-indexed cell number, so `"cell-1"` is the
    /// top-left corner and `"cell-9"` the bottom-right.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidCellId`] if the id does not end in 1-9.
    #[instrument]
    pub fn from_cell_id(id: &str) -> Result<Self, EngineError> {
        id.trim()
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .filter(|digit| (1..=9).contains(digit))
            .and_then(|digit| Self::from_index(digit as usize - 1))
            .ok_or_else(|| EngineError::InvalidCellId(id.to_string()))
    }

    /// 1-indexed cell number, the inverse of [`Position::from_cell_id`].
    pub fn cell_number(self) -> usize {
        self.to_index() + 1
    }

    /// Returns the unclaimed positions on `board`.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses `"row,col"` (zero-based) or a cell id ending in 1-9.
impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((row, col)) => {
                let parse = |part: &str| {
                    part.trim()
                        .parse::<usize>()
                        .map_err(|_| EngineError::InvalidCellId(s.to_string()))
                };
                Self::from_row_col(parse(row)?, parse(col)?)
            }
            None => Self::from_cell_id(s),
        }
    }
}
