//! Applying moves: mutation, promotion, validation and rejection.

use super::{man, pos};
use crate::board::{Board, Move, MoveError, PieceKind, Player, TurnPhase};

fn quiet(from: (i8, i8), to: (i8, i8)) -> Move {
    Move {
        from: pos(from.0, from.1),
        to: pos(to.0, to.1),
        captured: Vec::new(),
        promotes: false,
    }
}

#[test]
fn capture_removes_exactly_the_jumped_piece() {
    let mut board = Board::empty()
        .with_piece(pos(6, 5), man(Player::Red))
        .with_piece(pos(5, 4), man(Player::Black))
        .with_piece(pos(0, 9), man(Player::Black));

    let before = board.total_pieces();
    let mv = board.all_moves(Player::Red, TurnPhase::Fresh).remove(0);
    board.apply_move(&mv, Player::Red, TurnPhase::Fresh).unwrap();

    assert_eq!(board.total_pieces(), before - mv.captured.len());
    assert!(board.piece_at(pos(5, 4)).is_none());
    assert!(board.piece_at(pos(6, 5)).is_none());
    assert_eq!(board.piece_at(pos(4, 3)).unwrap().kind, PieceKind::Man);
}

#[test]
fn quiet_move_keeps_piece_count() {
    let mut board = Board::new();
    let mv = board.all_moves(Player::Black, TurnPhase::Fresh).remove(0);
    board
        .apply_move(&mv, Player::Black, TurnPhase::Fresh)
        .unwrap();
    assert_eq!(board.total_pieces(), 40);
}

#[test]
fn out_of_bounds_endpoint_is_rejected() {
    let mut board = Board::new();
    let err = board
        .apply_move(&quiet((6, 1), (10, 2)), Player::Red, TurnPhase::Fresh)
        .unwrap_err();
    assert_eq!(err, MoveError::OutOfBounds { pos: pos(10, 2) });
}

#[test]
fn light_square_endpoint_is_rejected() {
    let mut board = Board::new();
    let err = board
        .apply_move(&quiet((6, 1), (5, 1)), Player::Red, TurnPhase::Fresh)
        .unwrap_err();
    assert_eq!(err, MoveError::OutOfBounds { pos: pos(5, 1) });
}

#[test]
fn moving_the_opponents_piece_is_rejected() {
    let mut board = Board::new();
    let err = board
        .apply_move(&quiet((3, 0), (4, 1)), Player::Red, TurnPhase::Fresh)
        .unwrap_err();
    assert_eq!(err, MoveError::WrongPiece { pos: pos(3, 0) });
}

#[test]
fn quiet_move_is_rejected_while_a_capture_is_mandatory() {
    let mut board = Board::empty()
        .with_piece(pos(6, 1), man(Player::Red))
        .with_piece(pos(6, 5), man(Player::Red))
        .with_piece(pos(5, 4), man(Player::Black));

    let untouched = board.clone();
    let err = board
        .apply_move(&quiet((6, 1), (5, 0)), Player::Red, TurnPhase::Fresh)
        .unwrap_err();
    assert_eq!(err, MoveError::NotLegal);
    assert_eq!(board, untouched);
}

#[test]
fn mid_chain_move_of_another_piece_is_rejected() {
    let mut board = Board::empty()
        .with_piece(pos(4, 3), man(Player::Red))
        .with_piece(pos(3, 2), man(Player::Black))
        .with_piece(pos(8, 1), man(Player::Red));

    let untouched = board.clone();
    let err = board
        .apply_move(
            &quiet((8, 1), (7, 0)),
            Player::Red,
            TurnPhase::ContinuingFrom(pos(4, 3)),
        )
        .unwrap_err();
    assert_eq!(
        err,
        MoveError::ChainOriginMismatch {
            expected: pos(4, 3),
            found: pos(8, 1),
        }
    );
    assert_eq!(board, untouched);
}

#[test]
fn rejected_moves_leave_the_board_unchanged() {
    let mut board = Board::new();
    let untouched = board.clone();
    // Diagonal distance two with nothing to jump.
    let bogus = Move {
        from: pos(6, 1),
        to: pos(4, 3),
        captured: vec![pos(5, 2)],
        promotes: false,
    };
    assert!(board.apply_move(&bogus, Player::Red, TurnPhase::Fresh).is_err());
    assert_eq!(board, untouched);
}
