//! Draw detection logic.

use super::super::{Board, Mark};
use super::win::has_win;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full<const N: usize>(board: &Board<N>) -> bool {
    board.is_full()
}

/// A draw is a full board on which neither mark holds a line.
#[instrument(skip(board))]
pub fn is_draw<const N: usize>(board: &Board<N>) -> bool {
    is_full(board) && Mark::ALL.iter().all(|mark| !has_win(board, *mark))
}
