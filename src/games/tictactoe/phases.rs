//! Outcome and status types shared by the typestate phases and the engine.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Mark completed a line.
    Winner(Mark),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} IS THE WINNER!!!", mark),
            Outcome::Draw => write!(f, "DRAW! NOBODY WINS!"),
        }
    }
}

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the given mark to move.
    InProgress(Mark),
    /// No further moves are accepted.
    Terminal(Outcome),
}

impl GameStatus {
    /// True once the game has a winner or is drawn.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Terminal(_))
    }

    /// Mark to move, if the game is still running.
    pub fn to_move(&self) -> Option<Mark> {
        match self {
            GameStatus::InProgress(mark) => Some(*mark),
            GameStatus::Terminal(_) => None,
        }
    }
}
