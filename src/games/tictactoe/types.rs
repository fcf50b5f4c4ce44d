//! Core domain types for noughts and crosses.

use super::action::{Move, MoveError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the standard board.
pub const BOARD_SIDE: usize = 3;

/// Mark a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// First player, shown as `X`.
    #[strum(to_string = "X")]
    PlayerA,
    /// Second player, shown as `O`.
    #[strum(to_string = "O")]
    PlayerB,
}

impl Mark {
    /// Both marks in turn order.
    pub const ALL: [Mark; 2] = [Mark::PlayerA, Mark::PlayerB];

    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB => Mark::PlayerA,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Cell holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Numeric encoding fed to move predictors: `X` is +1, `O` is -1, empty is 0.
    pub fn feature(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(Mark::PlayerA) => 1,
            Cell::Occupied(Mark::PlayerB) => -1,
        }
    }

    /// Single-character symbol used by the console renderer.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(Mark::PlayerA) => 'X',
            Cell::Occupied(Mark::PlayerB) => 'O',
        }
    }
}

/// Square N×N board, 3×3 unless stated otherwise.
///
/// The only mutation is [`Board::place`], which refuses out-of-bounds and
/// occupied cells, so a mark once written is never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = BOARD_SIDE> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Board<N> {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Side length of the board.
    pub fn side(&self) -> usize {
        N
    }

    /// True iff both indices lie in `[0, N)`.
    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < N && col < N
    }

    /// Gets the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Checks if an in-bounds cell is empty. Out-of-bounds cells report `false`.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either index is outside the board.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    ///
    /// The board is left untouched on failure.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        if !self.is_in_bounds(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.is_empty(row, col) {
            return Err(MoveError::CellOccupied { row, col });
        }
        self.cells[row][col] = Cell::Occupied(mark);
        Ok(())
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// Returns an independent copy of the board.
    ///
    /// Strategies and rules work on snapshots so the live board is never
    /// lent out mutably.
    pub fn snapshot(&self) -> Self {
        *self
    }

    /// All cells with their coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, cell)| (Move::new(row, col), *cell))
        })
    }

    /// Empty cells in row-major scan order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Empty)
            .map(|(mv, _)| mv)
    }

    /// First empty cell in row-major scan order.
    pub fn first_empty(&self) -> Option<Move> {
        self.empty_cells().next()
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell != Cell::Empty)
            .count()
    }

    /// Row-major feature vector, one entry per cell (see [`Cell::feature`]).
    pub fn features(&self) -> Vec<i8> {
        self.cells().map(|(_, cell)| cell.feature()).collect()
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}
