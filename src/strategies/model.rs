//! Model-driven opponent backed by an external move predictor.

use super::{MoveStrategy, StrategyKind};
use crate::games::tictactoe::{Board, Mark, Move, MoveError};
use tracing::{debug, instrument, warn};

/// Pre-trained move predictor.
///
/// Takes one feature per cell in row-major order (`X` = +1, `O` = -1,
/// empty = 0, see [`Board::features`]) and returns a row-major cell index.
pub trait Predictor {
    /// Predicts the cell index to play.
    fn predict(&self, features: &[i8]) -> usize;
}

impl<F> Predictor for F
where
    F: Fn(&[i8]) -> usize,
{
    fn predict(&self, features: &[i8]) -> usize {
        self(features)
    }
}

/// Player that asks a predictor where to move.
///
/// The predictor knows nothing about occupancy, so an index that is off
/// the board or already taken is replaced by the first empty cell in
/// row-major order.
#[derive(Debug)]
pub struct ModelStrategy<P> {
    name: String,
    predictor: P,
}

impl<P: Predictor> ModelStrategy<P> {
    /// Creates a new model player.
    pub fn new(name: impl Into<String>, predictor: P) -> Self {
        Self {
            name: name.into(),
            predictor,
        }
    }
}

impl<P: Predictor, const N: usize> MoveStrategy<N> for ModelStrategy<P> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn decide(&mut self, board: &Board<N>, mark: Mark) -> Result<Move, MoveError> {
        let fallback = board.first_empty().ok_or(MoveError::NoLegalMove)?;

        let index = self.predictor.predict(&board.features());
        let predicted = Move::from_index(index, N);

        if index < N * N && board.is_empty(predicted.row, predicted.col) {
            debug!(index, mv = %predicted, "Using predicted cell");
            return Ok(predicted);
        }

        warn!(index, mv = %fallback, "Predicted cell unavailable, using first empty cell");
        Ok(fallback)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Model
    }

    fn name(&self) -> &str {
        &self.name
    }
}
