//! Contract-based validation for placements.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{MoveError, Placement};
use super::invariants::{GameInvariants, InvariantSet};
use super::typestate::GameInProgress;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The target cell must lie on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Checks the placement's coordinates against the board size.
    pub fn check<const N: usize>(
        placement: &Placement,
        game: &GameInProgress<N>,
    ) -> Result<(), MoveError> {
        let Placement { at, .. } = *placement;
        if game.board().is_in_bounds(at.row, at.col) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                row: at.row,
                col: at.col,
            })
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that nobody has played at the target cell.
    pub fn check<const N: usize>(
        placement: &Placement,
        game: &GameInProgress<N>,
    ) -> Result<(), MoveError> {
        let Placement { at, .. } = *placement;
        if game.board().is_empty(at.row, at.col) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied {
                row: at.row,
                col: at.col,
            })
        }
    }
}

/// Precondition: It must be the mark's turn.
pub struct MarksTurn;

impl MarksTurn {
    /// Checks the placing mark against the mark to move.
    pub fn check<const N: usize>(
        placement: &Placement,
        game: &GameInProgress<N>,
    ) -> Result<(), MoveError> {
        if placement.mark != game.to_move() {
            Err(MoveError::WrongPlayer(placement.mark))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: in bounds, empty, and the mover's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a placement.
    #[instrument(skip(game))]
    pub fn check<const N: usize>(
        placement: &Placement,
        game: &GameInProgress<N>,
    ) -> Result<(), MoveError> {
        CellInBounds::check(placement, game)?;
        CellIsEmpty::check(placement, game)?;
        MarksTurn::check(placement, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placements.
///
/// Preconditions:
/// - Cell must be on the board and empty
/// - Must be the mark's turn
///
/// Postconditions:
/// - Board remains monotonic
/// - Marks still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl<const N: usize> Contract<GameInProgress<N>, Placement> for MoveContract {
    fn pre(game: &GameInProgress<N>, action: &Placement) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress<N>, after: &GameInProgress<N>) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
