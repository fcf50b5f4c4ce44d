//! Noughts and crosses: board, rules and typestate game phases.

mod action;
mod contracts;
mod invariants;
mod phases;
pub mod rules;
mod types;
mod typestate;

pub use action::{Move, MoveError, Placement};
pub use contracts::{CellInBounds, CellIsEmpty, Contract, LegalMove, MarksTurn, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use phases::{GameStatus, Outcome};
pub use types::{BOARD_SIDE, Board, Cell, Mark};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
