//! Engine error type.

use crate::Position;

/// Errors returned by board and session operations.
///
/// None of these leave partial state behind: a rejected call changes
/// neither the board, the turn, nor the round counter.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Row or column outside `0..=2`.
    #[display("Position ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A cell identifier that does not end in a digit from 1 to 9.
    #[display("Invalid cell id: {_0:?}")]
    InvalidCellId(String),

    /// The cell is already claimed.
    #[display("{_0} is already marked")]
    CellOccupied(Position),

    /// The game has reached a win or a tie.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for EngineError {}
