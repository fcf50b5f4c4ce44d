//! Game orchestration between two strategies.

use crate::games::tictactoe::{
    BOARD_SIDE, Board, GameResult, GameSetup, GameStatus, Mark, Move, MoveError, Outcome,
    Placement,
};
use crate::strategies::MoveStrategy;
use tracing::{debug, info, instrument, warn};

/// What happened during one call to [`GameEngine::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A mark was placed; `status` is the state after the move.
    Placed {
        /// The accepted placement.
        placement: Placement,
        /// Status after the placement.
        status: GameStatus,
    },
    /// The move was refused. Nothing changed and the same mark moves again.
    Rejected {
        /// Mark whose move was refused.
        mark: Mark,
        /// Why it was refused (always retryable).
        error: MoveError,
    },
}

/// Runs a game between two strategies, one per mark.
///
/// The engine owns the only live game state. Strategies see snapshots.
pub struct GameEngine<const N: usize = BOARD_SIDE> {
    game: GameResult<N>,
    player_a: Box<dyn MoveStrategy<N>>,
    player_b: Box<dyn MoveStrategy<N>>,
}

impl<const N: usize> GameEngine<N> {
    /// Creates an engine with a fresh game, `PlayerA` to move.
    #[instrument(skip_all, fields(player_a = %player_a.name(), player_b = %player_b.name()))]
    pub fn new(player_a: Box<dyn MoveStrategy<N>>, player_b: Box<dyn MoveStrategy<N>>) -> Self {
        info!("Creating game engine");
        Self {
            game: fresh_game(),
            player_a,
            player_b,
        }
    }

    /// Current status of the game.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// The live board, read-only.
    pub fn board(&self) -> &Board<N> {
        self.game.board()
    }

    /// Independent copy of the live board.
    pub fn snapshot(&self) -> Board<N> {
        self.game.board().snapshot()
    }

    /// Placements so far, oldest first.
    pub fn history(&self) -> &[Placement] {
        self.game.history()
    }

    /// Strategy bound to `mark`.
    pub fn strategy(&self, mark: Mark) -> &dyn MoveStrategy<N> {
        match mark {
            Mark::PlayerA => self.player_a.as_ref(),
            Mark::PlayerB => self.player_b.as_ref(),
        }
    }

    /// Places the current mark at `at` without consulting a strategy.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] on a finished game, otherwise whatever the
    /// placement contract rejects. The game is unchanged on error.
    #[instrument(skip(self))]
    pub fn apply(&mut self, at: Move) -> Result<GameStatus, MoveError> {
        let GameResult::InProgress(game) = &self.game else {
            return Err(MoveError::GameOver);
        };
        let next = game.play(at)?;
        self.game = next;
        Ok(self.game.status())
    }

    /// Asks the strategy for the mark to move and applies its choice.
    ///
    /// Retryable failures (off-board, occupied, unparseable) come back as
    /// [`TurnOutcome::Rejected`] with the game untouched.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] on a finished game, and any non-retryable
    /// error from the strategy, such as [`MoveError::NoLegalMove`] or
    /// [`MoveError::InputClosed`].
    #[instrument(skip(self))]
    pub fn step(&mut self) -> Result<TurnOutcome, MoveError> {
        let GameResult::InProgress(game) = &self.game else {
            return Err(MoveError::GameOver);
        };
        let mark = game.to_move();
        let snapshot = game.board().snapshot();
        let strategy = match mark {
            Mark::PlayerA => &mut self.player_a,
            Mark::PlayerB => &mut self.player_b,
        };

        debug!(%mark, player = %strategy.name(), "Waiting for move");
        let decided = strategy
            .decide(&snapshot, mark)
            .and_then(|at| game.play(at).map(|next| (at, next)));

        match decided {
            Ok((at, next)) => {
                self.game = next;
                let status = self.game.status();
                info!(%mark, mv = %at, ?status, "Move applied");
                Ok(TurnOutcome::Placed {
                    placement: Placement::new(mark, at),
                    status,
                })
            }
            Err(error) if error.is_retryable() => {
                warn!(%mark, %error, "Move rejected");
                Ok(TurnOutcome::Rejected { mark, error })
            }
            Err(error) => Err(error),
        }
    }

    /// Steps until the game ends, calling `on_turn` after every step.
    ///
    /// # Errors
    ///
    /// Propagates the first non-retryable error from [`GameEngine::step`].
    #[instrument(skip_all)]
    pub fn play_out(
        &mut self,
        mut on_turn: impl FnMut(&TurnOutcome, &Board<N>),
    ) -> Result<Outcome, MoveError> {
        loop {
            let turn = self.step()?;
            on_turn(&turn, self.board());
            if let GameStatus::Terminal(outcome) = self.status() {
                info!(%outcome, moves = self.history().len(), "Game over");
                return Ok(outcome);
            }
        }
    }

    /// Discards the current game and starts a new one, `PlayerA` to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(previous = ?self.status(), "Restarting game");
        self.game = fresh_game();
    }
}

fn fresh_game<const N: usize>() -> GameResult<N> {
    GameSetup::new().start(Mark::PlayerA).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::HeuristicStrategy;

    fn heuristic_engine() -> GameEngine {
        GameEngine::new(
            Box::new(HeuristicStrategy::new("A")),
            Box::new(HeuristicStrategy::new("B")),
        )
    }

    #[test]
    fn test_initial_state() {
        let engine = heuristic_engine();
        assert_eq!(engine.status(), GameStatus::InProgress(Mark::PlayerA));
        assert_eq!(engine.board().occupied_count(), 0);
        assert_eq!(engine.strategy(Mark::PlayerB).name(), "B");
    }

    #[test]
    fn test_apply_rejection_keeps_turn() {
        let mut engine = heuristic_engine();
        engine.apply(Move::new(1, 1)).unwrap();
        assert_eq!(
            engine.apply(Move::new(1, 1)),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(engine.status(), GameStatus::InProgress(Mark::PlayerB));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_heuristic_self_play_finishes() {
        let mut engine = heuristic_engine();
        let mut turns = 0;
        let outcome = engine.play_out(|_, _| turns += 1).unwrap();
        assert!(turns <= 9);
        assert_eq!(engine.status(), GameStatus::Terminal(outcome));
        assert_eq!(engine.step(), Err(MoveError::GameOver));
    }
}
