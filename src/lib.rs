//! Strictly Noughts - type-safe noughts and crosses engine
//!
//! A 3×3 mark-in-a-row game with pluggable opponents.
//!
//! # Architecture
//!
//! - **Board & rules**: cells, validated placement, win and draw detection
//! - **Typestate phases**: setup, in-progress and finished games as distinct types
//! - **Strategies**: human input, a win/block heuristic, and a model-backed player
//! - **Engine**: turn order, move application, terminal detection, restart
//! - **Console**: text input parsing and grid rendering for the CLI
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{GameEngine, GameStatus, HeuristicStrategy, Mark, Outcome};
//!
//! let mut engine: GameEngine = GameEngine::new(
//!     Box::new(HeuristicStrategy::new("Computer X")),
//!     Box::new(HeuristicStrategy::new("Computer O")),
//! );
//! let outcome = engine.play_out(|_, _| {})?;
//! assert_eq!(engine.status(), GameStatus::Terminal(outcome));
//! # Ok::<(), strictly_noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod engine;
mod games;
mod predictor;
mod strategies;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Console collaborators
pub use console::{
    ConsoleInput, LineInput, ScriptedInput, parse_move, render_board, retry_message,
};

// Crate-level exports - Engine
pub use engine::{GameEngine, TurnOutcome};

// Crate-level exports - Predictors
pub use predictor::{TableEntry, TablePredictor};

// Crate-level exports - Strategies
pub use strategies::{
    HeuristicStrategy, HumanStrategy, ModelStrategy, MoveInput, MoveStrategy, Predictor, RawMove,
    StrategyKind, winning_move,
};

// Crate-level exports - Game types
pub use games::tictactoe::{
    AlternatingTurnInvariant, BOARD_SIDE, Board, Cell, CellInBounds, CellIsEmpty, Contract,
    GameFinished, GameInProgress, GameInvariants, GameResult, GameSetup, GameStatus,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation, LegalMove, Mark,
    MarksTurn, MonotonicBoardInvariant, Move, MoveContract, MoveError, Outcome, Placement, rules,
};
