//! Board and rules tests, split by category:
//! - `movegen.rs` - single steps, slides, mandatory capture
//! - `chains.rs` - multi-jump expansion, mid-chain rules, promotion
//! - `apply.rs` - applying moves, validation, error taxonomy
//! - `outcome.rs` - win/draw/ongoing detection
//! - `eval.rs` - direction of each evaluation term
//! - `proptest.rs` - property-based invariants over random play

mod apply;

use super::{Board, Piece, PieceKind, Player, Pos};

pub(crate) fn pos(row: i8, col: i8) -> Pos {
    Pos::new(row, col)
}

pub(crate) fn man(player: Player) -> Piece {
    Piece::new(player, PieceKind::Man)
}

pub(crate) fn king(player: Player) -> Piece {
    Piece::new(player, PieceKind::King)
}

/// A position where neither side can move: interlocked walls on rows 0-2.
/// Black men on row 0 are blocked by red men on row 1, every jump landing
/// on row 2 is occupied, and the red blockers are wedged themselves.
pub(crate) fn gridlocked_board() -> Board {
    let mut board = Board::empty();
    for col in [1, 3, 5, 7, 9] {
        board.place(pos(0, col), man(Player::Black));
    }
    for col in [0, 2, 4, 6, 8] {
        board.place(pos(1, col), man(Player::Red));
    }
    for col in [1, 3, 5, 7, 9] {
        board.place(pos(2, col), man(Player::Red));
    }
    board
}
