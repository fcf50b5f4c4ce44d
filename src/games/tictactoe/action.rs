//! First-class action types for noughts and crosses.
//!
//! A [`Move`] is the cell a strategy proposes. A [`Placement`] is a move
//! attributed to the mark that made it, which is what the game records.

use super::Mark;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A proposed cell, as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Move {
    /// Decodes a row-major cell index on a board of the given side.
    pub fn from_index(index: usize, side: usize) -> Self {
        Self {
            row: index / side,
            col: index % side,
        }
    }

    /// Encodes this move as a row-major cell index.
    pub fn to_index(self, side: usize) -> usize {
        self.row * side + self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move made by a specific mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it goes.
    pub at: Move,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.at)
    }
}

/// Error that can occur when choosing, validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column is outside the board.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Raw text could not be read as a `row,col` pair.
    #[display("Could not read a move from {:?}", _0)]
    UnparseableInput(String),

    /// A strategy was asked to move on a full board.
    #[display("No legal move available")]
    NoLegalMove,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Mark),

    /// The input source ended before a move was supplied.
    #[display("Input closed")]
    InputClosed,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// True for errors recovered by asking the same player again.
    ///
    /// Everything else means the caller broke the engine's contract or the
    /// input collaborator is gone.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MoveError::OutOfBounds { .. }
                | MoveError::CellOccupied { .. }
                | MoveError::UnparseableInput(_)
        )
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_corners() {
        assert_eq!(Move::from_index(0, 3), Move::new(0, 0));
        assert_eq!(Move::from_index(5, 3), Move::new(1, 2));
        assert_eq!(Move::from_index(8, 3), Move::new(2, 2));
        assert_eq!(Move::new(2, 1).to_index(3), 7);
    }

    #[test]
    fn test_retryable_errors() {
        assert!(MoveError::OutOfBounds { row: 4, col: 0 }.is_retryable());
        assert!(MoveError::CellOccupied { row: 0, col: 0 }.is_retryable());
        assert!(MoveError::UnparseableInput("abc".into()).is_retryable());
        assert!(!MoveError::NoLegalMove.is_retryable());
        assert!(!MoveError::GameOver.is_retryable());
        assert!(!MoveError::InputClosed.is_retryable());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CellOccupied { row: 1, col: 2 }.to_string(),
            "Cell (1, 2) is already occupied"
        );
        assert_eq!(
            MoveError::WrongPlayer(Mark::PlayerB).to_string(),
            "It's not O's turn"
        );
    }
}
