//! Static positional evaluation.
//!
//! The score is a weighted sum of material, advancement, king centrality,
//! back-rank safety, mobility, capture pressure and double-corner control,
//! always from the perspective of one player. Terminal positions short-
//! circuit to `WIN_SCORE`. The weights are tuning knobs, not rule facts;
//! tests assert the direction of each term, not its magnitude.

use super::movegen::Outcome;
use super::state::Board;
use super::types::{Piece, PieceKind, Player, Pos, TurnPhase, BOARD_SIZE};

pub(crate) const MAN_VALUE: i32 = 100;
pub(crate) const KING_VALUE: i32 = 500;
/// Kings dominate open boards, so they count for more once material thins.
const KING_VALUE_ENDGAME: i32 = 650;
const ENDGAME_PIECE_LIMIT: usize = 8;

/// Per row a man has advanced toward promotion.
const ADVANCE_WEIGHT: i32 = 5;
/// Scaled by [`centrality`] for kings.
const KING_CENTER_WEIGHT: i32 = 2;
/// Per man still guarding its own back rank.
const BACK_RANK_WEIGHT: i32 = 12;
/// Per legal move of difference.
const MOBILITY_WEIGHT: i32 = 2;
/// Percent of a hanging piece's value credited when it is the opponent's.
const PRESSURE_THEM_PCT: i32 = 40;
/// Percent debited when the hanging piece is our own. Threats we pose
/// outweigh threats against us so the engine stays aggressive.
const PRESSURE_US_PCT: i32 = 25;
/// Per piece sitting on one of the side's double-corner squares.
const DOUBLE_CORNER_WEIGHT: i32 = 10;

/// Returned for won positions; lost positions score the negation, draws 0.
pub const WIN_SCORE: i32 = 100_000;

/// 0 at the corners up to 16 on the four central squares.
pub(crate) fn centrality(pos: Pos) -> i32 {
    let span = BOARD_SIZE as i32 - 1;
    let dr = (2 * pos.row as i32 - span).abs();
    let dc = (2 * pos.col as i32 - span).abs();
    2 * span - dr - dc
}

/// The two dark squares forming `player`'s double corner.
fn double_corner(player: Player) -> [Pos; 2] {
    match player {
        Player::Red => [
            Pos::new(BOARD_SIZE as i8 - 1, BOARD_SIZE as i8 - 2),
            Pos::new(BOARD_SIZE as i8 - 2, BOARD_SIZE as i8 - 1),
        ],
        Player::Black => [Pos::new(0, 1), Pos::new(1, 0)],
    }
}

fn piece_value(piece: Piece, endgame: bool) -> i32 {
    match piece.kind {
        PieceKind::Man => MAN_VALUE,
        PieceKind::King if endgame => KING_VALUE_ENDGAME,
        PieceKind::King => KING_VALUE,
    }
}

/// Positional terms for one side.
fn side_score(board: &Board, player: Player, endgame: bool) -> i32 {
    let mut score = 0;
    for (pos, piece) in board.pieces(player) {
        score += piece_value(piece, endgame);
        match piece.kind {
            PieceKind::Man => {
                let advanced = (pos.row - player.home_row()).abs() as i32;
                score += ADVANCE_WEIGHT * advanced;
                if pos.row == player.home_row() {
                    score += BACK_RANK_WEIGHT;
                }
            }
            PieceKind::King => {
                score += KING_CENTER_WEIGHT * centrality(pos);
            }
        }
    }
    for corner in double_corner(player) {
        if matches!(board.piece_at(corner), Some(p) if p.owner == player) {
            score += DOUBLE_CORNER_WEIGHT;
        }
    }
    score
}

/// Total value of `player`'s pieces that the opponent could take with an
/// immediate jump.
fn hanging_value(board: &Board, player: Player, endgame: bool) -> i32 {
    let mut threatened: Vec<Pos> = Vec::new();
    for (pos, _) in board.pieces(player.opponent()) {
        for mv in board.single_capture_moves(pos, false) {
            for &cap in &mv.captured {
                if !threatened.contains(&cap) {
                    threatened.push(cap);
                }
            }
        }
    }
    threatened
        .iter()
        .filter_map(|&pos| board.piece_at(pos))
        .map(|p| piece_value(p, endgame))
        .sum()
}

/// Evaluate `board` for `perspective`, with `to_move` on turn (needed for
/// terminal detection). Positive favors `perspective`.
#[must_use]
pub fn evaluate(board: &Board, perspective: Player, to_move: Player) -> i32 {
    match board.winner(to_move) {
        Outcome::Win(p) if p == perspective => return WIN_SCORE,
        Outcome::Win(_) => return -WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::Ongoing => {}
    }

    let opponent = perspective.opponent();
    let endgame = board.total_pieces() <= ENDGAME_PIECE_LIMIT;

    let mut score = side_score(board, perspective, endgame) - side_score(board, opponent, endgame);

    let own_moves = board.all_moves(perspective, TurnPhase::Fresh).len() as i32;
    let opp_moves = board.all_moves(opponent, TurnPhase::Fresh).len() as i32;
    score += MOBILITY_WEIGHT * (own_moves - opp_moves);

    score += hanging_value(board, opponent, endgame) * PRESSURE_THEM_PCT / 100;
    score -= hanging_value(board, perspective, endgame) * PRESSURE_US_PCT / 100;

    score
}
