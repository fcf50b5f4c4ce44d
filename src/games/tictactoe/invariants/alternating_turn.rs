//! Alternating turn invariant: marks take turns.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: Marks alternate turns.
///
/// Consecutive history entries never share a mark, and the mark to move
/// is the opponent of whoever moved last.
pub struct AlternatingTurnInvariant;

impl<const N: usize> Invariant<GameInProgress<N>> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress<N>) -> bool {
        let history = game.history();

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        match history.last() {
            Some(last) => game.to_move() == last.mark.opponent(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameResult, GameSetup, Mark, Move, Placement};

    #[test]
    fn test_single_move_holds() {
        let game = GameSetup::<3>::new().start(Mark::PlayerA);

        if let Ok(GameResult::InProgress(game)) = game.play(Move::new(1, 1)) {
            assert!(AlternatingTurnInvariant::holds(&game));
            assert_eq!(game.to_move(), Mark::PlayerB);
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let game = GameSetup::<3>::new().start(Mark::PlayerA);

        if let Ok(GameResult::InProgress(mut game)) = game.play(Move::new(1, 1)) {
            game.history
                .push(Placement::new(Mark::PlayerA, Move::new(0, 0)));
            assert!(!AlternatingTurnInvariant::holds(&game));
        } else {
            panic!("Expected in-progress game");
        }
    }
}
