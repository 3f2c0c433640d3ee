//! Rules engine and search-based opponent for 10x10 draughts with
//! mandatory capture chains and flying kings.
//!
//! The crate exposes four operations to a UI or game loop:
//! [`Board::legal_sequences`] for highlighting and validating turns,
//! [`Board::apply_move`] for playing one step of a turn,
//! [`Board::winner`] for terminal detection, and [`Engine::submit`] /
//! [`Engine::try_result`] for running the adversarial search off the
//! interactive thread.

pub mod board;
pub mod engine;
pub mod search;
pub mod tt;
pub mod zobrist;

pub use board::{
    evaluate, Board, Cell, Move, MoveError, MoveSequence, Outcome, Piece, PieceKind, Player, Pos,
    TurnPhase, BOARD_SIZE, WIN_SCORE,
};
pub use engine::{Engine, EngineError, SearchOutcome, SearchRequest};
pub use search::{find_best_sequence, find_best_sequence_with_report, SearchReport};
pub use tt::{BoundType, TranspositionTable, DEFAULT_TT_MB};
pub use zobrist::{HashingContext, DEFAULT_SEED};
