//! Search behavior tests.

use crate::board::{Board, Piece, PieceKind, Player, Pos, TurnPhase};
use crate::zobrist::HashingContext;

use super::{find_best_sequence, find_best_sequence_with_report};

fn pos(row: i8, col: i8) -> Pos {
    Pos::new(row, col)
}

fn man(player: Player) -> Piece {
    Piece::new(player, PieceKind::Man)
}

fn hasher() -> HashingContext {
    HashingContext::from_seed(99)
}

#[test]
fn no_legal_moves_yields_no_sequence() {
    // Black has pieces nowhere on the board.
    let board = Board::empty().with_piece(pos(5, 4), man(Player::Red));
    let result = find_best_sequence(&board, Player::Black, TurnPhase::Fresh, 6, &hasher());
    assert!(result.is_none());
}

#[test]
fn best_sequence_is_always_a_legal_one() {
    let board = Board::new();
    for depth in [1, 2, 4] {
        let best = find_best_sequence(&board, Player::Red, TurnPhase::Fresh, depth, &hasher())
            .expect("opening has legal turns");
        let legal = board.legal_sequences(Player::Red, TurnPhase::Fresh);
        assert!(legal.contains(&best));
    }
}

#[test]
fn forced_reply_is_returned_without_deepening() {
    let board = Board::empty()
        .with_piece(pos(6, 5), man(Player::Red))
        .with_piece(pos(5, 4), man(Player::Black));

    let (best, report) =
        find_best_sequence_with_report(&board, Player::Red, TurnPhase::Fresh, 8, &hasher());
    let best = best.expect("the forced jump exists");
    assert_eq!(best.total_captures, 1);
    assert_eq!(report.nodes, 1);
}

#[test]
fn search_prefers_the_longer_capture_chain() {
    // Jumping toward (5,6) continues over (3,6) for two captures; jumping
    // toward (5,4) takes only one.
    let board = Board::empty()
        .with_piece(pos(6, 5), man(Player::Red))
        .with_piece(pos(5, 4), man(Player::Black))
        .with_piece(pos(5, 6), man(Player::Black))
        .with_piece(pos(3, 6), man(Player::Black));

    let best = find_best_sequence(&board, Player::Red, TurnPhase::Fresh, 3, &hasher())
        .expect("captures exist");
    assert_eq!(best.total_captures, 2);
    assert!(board
        .legal_sequences(Player::Red, TurnPhase::Fresh)
        .contains(&best));
}

#[test]
fn search_does_not_hang_a_man() {
    // Stepping to (5,4) or (5,2) walks into the black man's jump; the
    // other squares are safe.
    let board = Board::empty()
        .with_piece(pos(6, 1), man(Player::Red))
        .with_piece(pos(6, 5), man(Player::Red))
        .with_piece(pos(4, 3), man(Player::Black));

    let best = find_best_sequence(&board, Player::Red, TurnPhase::Fresh, 4, &hasher())
        .expect("red can move");
    let to = best.to();
    assert_ne!(to, pos(5, 4));
    assert_ne!(to, pos(5, 2));
}

#[test]
fn chain_continuation_searches_only_from_the_landed_square() {
    let board = Board::empty()
        .with_piece(pos(4, 3), man(Player::Red))
        .with_piece(pos(3, 2), man(Player::Black))
        .with_piece(pos(8, 1), man(Player::Red))
        .with_piece(pos(0, 9), man(Player::Black));

    let best = find_best_sequence(
        &board,
        Player::Red,
        TurnPhase::ContinuingFrom(pos(4, 3)),
        4,
        &hasher(),
    )
    .expect("the chain can continue");
    assert_eq!(best.from(), pos(4, 3));
    assert!(best.is_capture());
}

#[test]
fn deeper_search_still_returns_a_result_near_game_end() {
    // Requested depth far exceeds the handful of turns the position can
    // last; the search must cope with terminal leaves everywhere.
    let board = Board::empty()
        .with_piece(pos(2, 3), man(Player::Red))
        .with_piece(pos(7, 0), man(Player::Black));

    let (best, report) =
        find_best_sequence_with_report(&board, Player::Red, TurnPhase::Fresh, 8, &hasher());
    let best = best.expect("red can move");
    assert!(board
        .legal_sequences(Player::Red, TurnPhase::Fresh)
        .contains(&best));
    assert!(report.nodes > 0);
}

#[test]
fn report_counts_nodes_and_depth() {
    // The shared default context works the same as an explicit one.
    let hasher = &*crate::zobrist::DEFAULT_CONTEXT;
    let (best, report) =
        find_best_sequence_with_report(&Board::new(), Player::Black, TurnPhase::Fresh, 4, hasher);
    assert!(best.is_some());
    assert_eq!(report.depth, 4);
    assert!(report.nodes > 10);
}
