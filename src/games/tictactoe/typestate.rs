//! Phase-specific typestate structs for noughts and crosses.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! A `GameFinished` ALWAYS has an outcome, and only a `GameInProgress`
//! accepts moves.

use super::action::{MoveError, Placement};
use super::contracts::{Contract, MoveContract};
use super::phases::{GameStatus, Outcome};
use super::{BOARD_SIDE, Board, Mark, Move, rules};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty.
#[derive(Debug, Clone)]
pub struct GameSetup<const N: usize = BOARD_SIDE> {
    board: Board<N>,
}

impl<const N: usize> GameSetup<N> {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Starts the game with the first mark (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self, first: Mark) -> GameInProgress<N> {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first,
        }
    }
}

impl<const N: usize> Default for GameSetup<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress<const N: usize = BOARD_SIDE> {
    pub(super) board: Board<N>,
    pub(super) history: Vec<Placement>,
    pub(super) to_move: Mark,
}

impl<const N: usize> GameInProgress<N> {
    /// Applies a placement and returns the next state.
    ///
    /// `self` is never modified: a rejected placement leaves the caller
    /// holding the same game, and an accepted one yields a new state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (`LegalMove`)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(&self, placement: Placement) -> Result<GameResult<N>, MoveError> {
        MoveContract::pre(self, &placement)?;

        let mut game = self.clone();
        game.board
            .place(placement.at.row, placement.at.col, placement.mark)?;
        game.history.push(placement);

        if rules::has_win(&game.board, placement.mark) {
            debug!(winner = %placement.mark, "Line completed");
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Winner(placement.mark),
            }));
        }

        if rules::is_full(&game.board) {
            debug!("Board full without a line");
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Draw,
            }));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(self, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Places the mark whose turn it is at `at`.
    pub fn play(&self, at: Move) -> Result<GameResult<N>, MoveError> {
        self.make_move(Placement::new(self.to_move, at))
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Returns empty cells in row-major order.
    pub fn valid_moves(&self) -> Vec<Move> {
        self.board.empty_cells().collect()
    }

    /// Replays placements from a fresh game where `PlayerA` moves first.
    ///
    /// # Errors
    ///
    /// Fails on the first illegal placement, or with [`MoveError::GameOver`]
    /// if placements remain after the game has finished.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Placement]) -> Result<GameResult<N>, MoveError> {
        let mut game = GameSetup::new().start(Mark::PlayerA);

        for (i, placement) in moves.iter().enumerate() {
            match game.make_move(*placement)? {
                GameResult::InProgress(next) => game = next,
                GameResult::Finished(done) if i + 1 == moves.len() => {
                    return Ok(GameResult::Finished(done));
                }
                GameResult::Finished(_) => return Err(MoveError::GameOver),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished<const N: usize = BOARD_SIDE> {
    board: Board<N>,
    history: Vec<Placement>,
    outcome: Outcome,
}

impl<const N: usize> GameFinished<N> {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self), fields(outcome = ?self.outcome))]
    pub fn restart(self) -> GameSetup<N> {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone)]
pub enum GameResult<const N: usize = BOARD_SIDE> {
    /// Game continues.
    InProgress(GameInProgress<N>),
    /// Game finished.
    Finished(GameFinished<N>),
}

impl<const N: usize> GameResult<N> {
    /// Returns the board in either phase.
    pub fn board(&self) -> &Board<N> {
        match self {
            GameResult::InProgress(game) => game.board(),
            GameResult::Finished(game) => game.board(),
        }
    }

    /// Returns move history in either phase.
    pub fn history(&self) -> &[Placement] {
        match self {
            GameResult::InProgress(game) => game.history(),
            GameResult::Finished(game) => game.history(),
        }
    }

    /// Runtime view of the phase.
    pub fn status(&self) -> GameStatus {
        match self {
            GameResult::InProgress(game) => GameStatus::InProgress(game.to_move()),
            GameResult::Finished(game) => GameStatus::Terminal(*game.outcome()),
        }
    }
}

impl<const N: usize> From<GameInProgress<N>> for GameResult<N> {
    fn from(game: GameInProgress<N>) -> Self {
        GameResult::InProgress(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(row: usize, col: usize) -> Placement {
        Placement::new(Mark::PlayerA, Move::new(row, col))
    }

    fn b(row: usize, col: usize) -> Placement {
        Placement::new(Mark::PlayerB, Move::new(row, col))
    }

    #[test]
    fn test_rejected_move_keeps_game() {
        let game = GameSetup::<3>::new().start(Mark::PlayerA);
        let err = game.play(Move::new(3, 0)).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds { row: 3, col: 0 });
        assert_eq!(game.to_move(), Mark::PlayerA);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_replay_stops_accepting_after_win() {
        let moves = [a(0, 0), b(1, 0), a(0, 1), b(1, 1), a(0, 2), b(2, 2)];
        assert_eq!(
            GameInProgress::<3>::replay(&moves).unwrap_err(),
            MoveError::GameOver
        );
    }

    #[test]
    fn test_status_reports_outcome() {
        let moves = [a(0, 0), b(1, 0), a(0, 1), b(1, 1), a(0, 2)];
        let result = GameInProgress::<3>::replay(&moves).unwrap();
        assert_eq!(
            result.status(),
            GameStatus::Terminal(Outcome::Winner(Mark::PlayerA))
        );
        assert_eq!(result.history().len(), 5);
    }

    #[test]
    fn test_restart_gives_empty_board() {
        let moves = [a(0, 0), b(1, 0), a(0, 1), b(1, 1), a(0, 2)];
        let GameResult::Finished(done) = GameInProgress::<3>::replay(&moves).unwrap() else {
            panic!("Game should be finished");
        };
        let setup = done.restart();
        assert_eq!(setup.board().occupied_count(), 0);
    }
}
