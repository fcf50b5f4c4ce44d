//! Win detection logic.

use super::super::{Board, Cell, Mark, Move};
use tracing::instrument;

/// Every line that wins on an N×N board: the N rows, the N columns, the
/// main diagonal and the anti-diagonal.
pub fn lines<const N: usize>() -> Vec<Vec<Move>> {
    if N == 0 {
        return Vec::new();
    }

    let rows = (0..N).map(|row| (0..N).map(|col| Move::new(row, col)).collect::<Vec<_>>());
    let cols = (0..N).map(|col| (0..N).map(|row| Move::new(row, col)).collect::<Vec<_>>());
    let main_diagonal: Vec<Move> = (0..N).map(|i| Move::new(i, i)).collect();
    let anti_diagonal: Vec<Move> = (0..N).map(|i| Move::new(i, N - 1 - i)).collect();

    rows.chain(cols)
        .chain([main_diagonal, anti_diagonal])
        .collect()
}

/// Checks whether `mark` holds a complete line.
///
/// Scans rows, columns and diagonals straight off the board.
pub fn has_win<const N: usize>(board: &Board<N>, mark: Mark) -> bool {
    if N == 0 {
        return false;
    }

    let owns = |row: usize, col: usize| board.get(row, col) == Some(Cell::Occupied(mark));

    (0..N).any(|row| (0..N).all(|col| owns(row, col)))
        || (0..N).any(|col| (0..N).all(|row| owns(row, col)))
        || (0..N).all(|i| owns(i, i))
        || (0..N).all(|i| owns(i, N - 1 - i))
}

/// Returns the mark holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner<const N: usize>(board: &Board<N>) -> Option<Mark> {
    Mark::ALL.into_iter().find(|mark| has_win(board, *mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(row, col, mark) in cells {
            board.place(row, col, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_eight_lines_on_standard_board() {
        assert_eq!(lines::<3>().len(), 8);
        assert_eq!(lines::<4>().len(), 10);
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::<3>::new();
        assert!(!has_win(&board, Mark::PlayerA));
        assert!(!has_win(&board, Mark::PlayerB));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (0, 0, Mark::PlayerA),
            (0, 1, Mark::PlayerA),
            (0, 2, Mark::PlayerA),
        ]);
        assert!(has_win(&board, Mark::PlayerA));
        assert!(!has_win(&board, Mark::PlayerB));
        assert_eq!(winner(&board), Some(Mark::PlayerA));
    }

    #[test]
    fn test_winner_every_line() {
        for line in lines::<3>() {
            let mut board = Board::<3>::new();
            for mv in &line {
                board.place(mv.row, mv.col, Mark::PlayerB).unwrap();
            }
            assert!(has_win(&board, Mark::PlayerB), "line {line:?} should win");
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (0, 2, Mark::PlayerB),
            (1, 1, Mark::PlayerB),
            (2, 0, Mark::PlayerB),
        ]);
        assert_eq!(winner(&board), Some(Mark::PlayerB));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (0, 0, Mark::PlayerA),
            (0, 1, Mark::PlayerB),
            (0, 2, Mark::PlayerA),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, 0, Mark::PlayerA), (0, 1, Mark::PlayerA)]);
        assert!(!has_win(&board, Mark::PlayerA));
    }

    #[test]
    fn test_every_line_wins_on_larger_board() {
        for line in lines::<4>() {
            let mut board = Board::<4>::new();
            for mv in &line {
                board.place(mv.row, mv.col, Mark::PlayerA).unwrap();
            }
            assert!(has_win(&board, Mark::PlayerA), "line {line:?} should win");
            assert!(!has_win(&board, Mark::PlayerB));
        }
    }

    #[test]
    fn test_broken_diagonal_is_not_a_win() {
        let board = board_with(&[
            (0, 0, Mark::PlayerA),
            (1, 1, Mark::PlayerA),
            (2, 1, Mark::PlayerA),
        ]);
        assert!(!has_win(&board, Mark::PlayerA));
    }

    #[test]
    fn test_empty_board_has_no_lines() {
        assert!(lines::<0>().is_empty());
        assert!(!has_win(&Board::<0>::new(), Mark::PlayerA));
    }

    #[test]
    fn test_larger_board_needs_full_line() {
        let mut board = Board::<4>::new();
        for col in 0..3 {
            board.place(1, col, Mark::PlayerA).unwrap();
        }
        assert!(!has_win(&board, Mark::PlayerA));

        board.place(1, 3, Mark::PlayerA).unwrap();
        assert!(has_win(&board, Mark::PlayerA));
    }
}
