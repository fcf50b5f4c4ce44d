//! History consistency invariant: history length matches occupied cells.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
pub struct HistoryConsistentInvariant;

impl<const N: usize> Invariant<GameInProgress<N>> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress<N>) -> bool {
        game.history().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
