//! Monotonic board invariant: cells never change once set.

use super::super::{Board, GameInProgress};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the history onto an empty board must succeed at every step
/// and reproduce the live board exactly.
pub struct MonotonicBoardInvariant;

impl<const N: usize> Invariant<GameInProgress<N>> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress<N>) -> bool {
        let mut reconstructed = Board::<N>::new();

        for placement in game.history() {
            if reconstructed
                .place(placement.at.row, placement.at.col, placement.mark)
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
