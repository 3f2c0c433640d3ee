//! Error types for board operations.

use std::fmt;

use super::types::Pos;

/// Why an externally-constructed move was rejected. The board is left
/// untouched in every case; the caller is expected to re-prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A move endpoint lies off the board or on a light square.
    OutOfBounds { pos: Pos },
    /// The origin square does not hold a piece of the moving player.
    WrongPiece { pos: Pos },
    /// A chain is in progress and the move does not continue it from the
    /// landed piece's square.
    ChainOriginMismatch { expected: Pos, found: Pos },
    /// The move is not among the legal moves for this position — this
    /// covers quiet moves attempted while a capture is mandatory.
    NotLegal,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { pos } => {
                write!(f, "square ({}, {}) is not a playable square", pos.row, pos.col)
            }
            MoveError::WrongPiece { pos } => {
                write!(f, "no piece of the moving player on ({}, {})", pos.row, pos.col)
            }
            MoveError::ChainOriginMismatch { expected, found } => {
                write!(
                    f,
                    "capture chain must continue from ({}, {}), move starts at ({}, {})",
                    expected.row, expected.col, found.row, found.col
                )
            }
            MoveError::NotLegal => {
                write!(f, "move is not legal in this position")
            }
        }
    }
}

impl std::error::Error for MoveError {}
