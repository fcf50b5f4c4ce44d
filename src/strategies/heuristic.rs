//! Rule-based opponent: win, else block, else first empty cell.

use super::{MoveStrategy, StrategyKind};
use crate::games::tictactoe::{Board, Mark, Move, MoveError, rules};
use tracing::{debug, instrument};

/// First empty cell, row-major, where placing `mark` completes a line.
///
/// Each candidate is tried on its own copy of `board`; the caller's board
/// is never touched.
pub fn winning_move<const N: usize>(board: &Board<N>, mark: Mark) -> Option<Move> {
    board.empty_cells().find(|mv| {
        let mut trial = board.snapshot();
        trial.place(mv.row, mv.col, mark).is_ok() && rules::has_win(&trial, mark)
    })
}

/// Deterministic heuristic player.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy {
    name: String,
}

impl HeuristicStrategy {
    /// Creates a new heuristic player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<const N: usize> MoveStrategy<N> for HeuristicStrategy {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn decide(&mut self, board: &Board<N>, mark: Mark) -> Result<Move, MoveError> {
        if let Some(mv) = winning_move(board, mark) {
            debug!(%mv, "Taking winning cell");
            return Ok(mv);
        }

        if let Some(mv) = winning_move(board, mark.opponent()) {
            debug!(%mv, "Blocking opponent");
            return Ok(mv);
        }

        let mv = board.first_empty().ok_or(MoveError::NoLegalMove)?;
        debug!(%mv, "Falling back to first empty cell");
        Ok(mv)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Heuristic
    }

    fn name(&self) -> &str {
        &self.name
    }
}
