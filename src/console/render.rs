//! Plain-text board rendering.

use crate::games::tictactoe::Board;
use std::fmt::Write;

/// Renders the board as a grid with row and column headers.
///
/// Header and cell rows end with a trailing space. Separators are as long
/// as the header:
///
/// ```text
/// |R\C| 0 | 1 | 2 | 
/// ------------------
/// | 0 | X |   | O | 
/// ------------------
/// ```
pub fn render_board<const N: usize>(board: &Board<N>) -> String {
    let mut header = String::from("|R\\C| ");
    for col in 0..N {
        let _ = write!(header, "{col} | ");
    }
    let separator = "-".repeat(header.len());

    let mut out = format!("{header}\n{separator}\n");
    for row in 0..N {
        let _ = write!(out, "| {row} | ");
        for col in 0..N {
            let symbol = board.get(row, col).map_or(' ', |cell| cell.symbol());
            let _ = write!(out, "{symbol} | ");
        }
        let _ = write!(out, "\n{separator}\n");
    }
    out
}
