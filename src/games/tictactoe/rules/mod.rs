//! Game rules for noughts and crosses.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from board storage so strategies can run them on
//! working copies and the engine can run them on the live board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_win, lines, winner};
