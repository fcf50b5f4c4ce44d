//! Move strategies: the policies that choose a cell for a mark.
//!
//! Every player slot is driven by one [`MoveStrategy`]. The engine hands
//! strategies a board snapshot, never the live board, and validates
//! whatever they propose.

mod heuristic;
mod human;
mod model;

pub use heuristic::{HeuristicStrategy, winning_move};
pub use human::{HumanStrategy, MoveInput, RawMove};
pub use model::{ModelStrategy, Predictor};

use crate::games::tictactoe::{BOARD_SIDE, Board, Mark, Move, MoveError};
use serde::{Deserialize, Serialize};

/// Which policy drives a mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// A person typing moves.
    Human,
    /// Win, else block, else first empty cell.
    Heuristic,
    /// An external move predictor.
    Model,
}

/// Trait for policies that can choose a move.
pub trait MoveStrategy<const N: usize = BOARD_SIDE> {
    /// Chooses a cell for `mark` on `board`.
    ///
    /// # Errors
    ///
    /// Strategies report [`MoveError::NoLegalMove`] on a full board and
    /// pass through errors from their collaborators.
    fn decide(&mut self, board: &Board<N>, mark: Mark) -> Result<Move, MoveError>;

    /// Which kind of policy this is.
    fn kind(&self) -> StrategyKind;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!(StrategyKind::from_str("human").unwrap(), StrategyKind::Human);
        assert_eq!(StrategyKind::from_str("Model").unwrap(), StrategyKind::Model);
        assert!(StrategyKind::from_str("minimax").is_err());
    }

    #[test]
    fn test_kind_displays_lowercase() {
        assert_eq!(StrategyKind::Heuristic.to_string(), "heuristic");
    }
}
