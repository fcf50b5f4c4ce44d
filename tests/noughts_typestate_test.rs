//! Tests for typestate game architecture.

use strictly_noughts::{
    GameInProgress, GameResult, GameSetup, Mark, Move, MoveError, Outcome, Placement,
};

fn x(row: usize, col: usize) -> Placement {
    Placement::new(Mark::PlayerA, Move::new(row, col))
}

fn o(row: usize, col: usize) -> Placement {
    Placement::new(Mark::PlayerB, Move::new(row, col))
}

#[test]
fn test_typestate_lifecycle() {
    let game = GameSetup::<3>::new();
    let game = game.start(Mark::PlayerA);
    assert_eq!(game.to_move(), Mark::PlayerA);

    let result = game.make_move(x(1, 1)).expect("Valid move");

    let game = match result {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Game shouldn't finish after one move"),
    };

    assert_eq!(game.to_move(), Mark::PlayerB);
    assert_eq!(game.valid_moves().len(), 8);
}

#[test]
fn test_contracts_prevent_invalid_moves() {
    let game = GameSetup::<3>::new().start(Mark::PlayerA);

    let game = match game.make_move(x(1, 1)).expect("Valid move") {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Unexpected finish"),
    };

    let result = game.make_move(o(1, 1));
    assert!(matches!(result, Err(MoveError::CellOccupied { .. })));

    let result = game.make_move(o(3, 0));
    assert!(matches!(result, Err(MoveError::OutOfBounds { .. })));

    // Rejections leave the game as it was
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.to_move(), Mark::PlayerB);
}

#[test]
fn test_wrong_player_rejected() {
    let game = GameSetup::<3>::new().start(Mark::PlayerA);
    let result = game.make_move(o(1, 1));
    assert!(matches!(result, Err(MoveError::WrongPlayer(Mark::PlayerB))));
}

#[test]
fn test_replay_from_history() {
    let moves = [x(1, 1), o(0, 0), x(2, 2), o(0, 2), x(2, 0)];

    let result = GameInProgress::<3>::replay(&moves).expect("Valid replay");

    match result {
        GameResult::InProgress(game) => {
            assert_eq!(game.history().len(), 5);
            assert_eq!(game.to_move(), Mark::PlayerB);
        }
        GameResult::Finished(_) => panic!("Game shouldn't finish"),
    }
}

#[test]
fn test_win_detection() {
    let moves = [x(0, 0), o(1, 1), x(0, 1), o(2, 0), x(0, 2)];

    match GameInProgress::<3>::replay(&moves).expect("Valid replay") {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Winner(Mark::PlayerA));
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_draw_detection() {
    let moves = [
        x(0, 0),
        o(1, 1),
        x(0, 2),
        o(0, 1),
        x(1, 0),
        o(1, 2),
        x(2, 1),
        o(2, 0),
        x(2, 2),
    ];

    match GameInProgress::<3>::replay(&moves).expect("Valid replay") {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Draw);
            assert!(game.outcome().winner().is_none());
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_restart() {
    let moves = [x(0, 0), o(1, 1), x(0, 1), o(2, 0), x(0, 2)];

    let GameResult::Finished(game) = GameInProgress::<3>::replay(&moves).unwrap() else {
        panic!("Game should be finished");
    };

    let new_game = game.restart().start(Mark::PlayerA);
    assert_eq!(new_game.to_move(), Mark::PlayerA);
    assert!(new_game.history().is_empty());
    assert_eq!(new_game.board().occupied_count(), 0);
}

#[test]
fn test_larger_board_plays_out() {
    let mut game = GameSetup::<4>::new().start(Mark::PlayerA);
    for col in 0..3 {
        for mv in [Move::new(0, col), Move::new(1, col)] {
            game = match game.play(mv).expect("Valid move") {
                GameResult::InProgress(g) => g,
                GameResult::Finished(_) => panic!("No line yet on a 4x4 board"),
            };
        }
    }

    match game.play(Move::new(0, 3)).expect("Valid move") {
        GameResult::Finished(done) => {
            assert_eq!(done.outcome(), &Outcome::Winner(Mark::PlayerA));
        }
        GameResult::InProgress(_) => panic!("Top row should win"),
    }
}
