//! Human player that gets moves from an input collaborator.

use super::{MoveStrategy, StrategyKind};
use crate::games::tictactoe::{Board, Mark, Move, MoveError};
use tracing::{debug, instrument};

/// What an input source produced for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMove {
    /// A `(row, col)` pair, not yet checked against the board.
    Pair(usize, usize),
    /// Text that could not be read as a pair.
    Unparseable(String),
}

/// Source of raw moves typed by a person.
pub trait MoveInput {
    /// Asks for a move for `mark`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InputClosed`] once no more input will arrive.
    fn read_move(&mut self, mark: Mark) -> Result<RawMove, MoveError>;
}

/// Human player.
///
/// Passes whatever the input source supplies straight through; legality
/// is the engine's business.
#[derive(Debug)]
pub struct HumanStrategy<I> {
    name: String,
    input: I,
}

impl<I: MoveInput> HumanStrategy<I> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: I) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<I: MoveInput, const N: usize> MoveStrategy<N> for HumanStrategy<I> {
    #[instrument(skip(self, _board), fields(player = %self.name))]
    fn decide(&mut self, _board: &Board<N>, mark: Mark) -> Result<Move, MoveError> {
        match self.input.read_move(mark)? {
            RawMove::Pair(row, col) => {
                debug!(row, col, "Human entered move");
                Ok(Move::new(row, col))
            }
            RawMove::Unparseable(text) => Err(MoveError::UnparseableInput(text)),
        }
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Human
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Canned(VecDeque<RawMove>);

    impl MoveInput for Canned {
        fn read_move(&mut self, _mark: Mark) -> Result<RawMove, MoveError> {
            self.0.pop_front().ok_or(MoveError::InputClosed)
        }
    }

    #[test]
    fn test_pair_passes_through_unvalidated() {
        let mut human = HumanStrategy::new("Human", Canned(VecDeque::from([RawMove::Pair(7, 9)])));
        let board = Board::<3>::new();
        assert_eq!(human.decide(&board, Mark::PlayerA), Ok(Move::new(7, 9)));
    }

    #[test]
    fn test_unparseable_becomes_error() {
        let input = Canned(VecDeque::from([RawMove::Unparseable("one,two".into())]));
        let mut human = HumanStrategy::new("Human", input);
        let board = Board::<3>::new();
        let err = human.decide(&board, Mark::PlayerA).unwrap_err();
        assert_eq!(err, MoveError::UnparseableInput("one,two".into()));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_closed_input_is_fatal() {
        let mut human = HumanStrategy::new("Human", Canned(VecDeque::new()));
        let board = Board::<3>::new();
        let err = human.decide(&board, Mark::PlayerB).unwrap_err();
        assert_eq!(err, MoveError::InputClosed);
        assert!(!err.is_retryable());
    }
}
