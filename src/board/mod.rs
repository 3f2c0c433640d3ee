//! Draughts board representation and rules.
//!
//! Ten-by-ten board, men and flying kings, mandatory multi-jump capture
//! chains, promotion on the opponent's back rank.
//!
//! # Example
//! ```
//! use draughts_engine::board::{Board, Player, TurnPhase};
//!
//! let board = Board::new();
//! let turns = board.legal_sequences(Player::Red, TurnPhase::Fresh);
//! println!("Red has {} opening turns", turns.len());
//! ```

mod error;
mod eval;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::MoveError;
pub use eval::{evaluate, WIN_SCORE};
pub use movegen::Outcome;
pub use state::Board;
pub use types::{
    Cell, Move, MoveSequence, Piece, PieceKind, Player, Pos, TurnPhase, BOARD_SIZE,
};

pub(crate) use eval::centrality;
