//! Core data model for the draughts board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board side length. Pieces live only on the dark squares, where
/// `(row + col)` is odd.
pub const BOARD_SIZE: usize = 10;

/// The four diagonal direction offsets as `(row, col)` deltas.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The two players. Red's back rank is row `BOARD_SIZE - 1`, Black's is
/// row 0; men advance toward the opponent's back rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    Red,
    Black,
}

impl Player {
    #[inline]
    #[must_use]
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Row delta for this player's forward direction.
    #[inline]
    pub(crate) fn forward(self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }

    /// Row on which this player's men promote (the opponent's back rank).
    #[inline]
    pub(crate) fn promotion_row(self) -> i8 {
        match self {
            Player::Red => 0,
            Player::Black => BOARD_SIZE as i8 - 1,
        }
    }

    /// This player's own back rank.
    #[inline]
    pub(crate) fn home_row(self) -> i8 {
        match self {
            Player::Red => BOARD_SIZE as i8 - 1,
            Player::Black => 0,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Black => 1,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Man,
    King,
}

impl PieceKind {
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            PieceKind::Man => 0,
            PieceKind::King => 1,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub owner: Player,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub fn new(owner: Player, kind: PieceKind) -> Self {
        Piece { owner, kind }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    /// Index in 0..4 used for Zobrist key lookup.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.owner.index() * 2 + self.kind.index()
    }
}

/// Contents of one board square.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }
}

/// A board coordinate. May lie off the board; use [`Pos::on_board`] before
/// indexing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    #[inline]
    #[must_use]
    pub fn new(row: i8, col: i8) -> Self {
        Pos { row, col }
    }

    #[inline]
    pub fn on_board(self) -> bool {
        self.row >= 0
            && self.col >= 0
            && (self.row as usize) < BOARD_SIZE
            && (self.col as usize) < BOARD_SIZE
    }

    /// Dark squares are the playable ones.
    #[inline]
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    #[inline]
    pub(crate) fn offset(self, dr: i8, dc: i8) -> Pos {
        Pos::new(self.row + dr, self.col + dc)
    }
}

/// One slide or one jump. `captured` holds the square of the piece removed
/// by a jump (empty for a quiet move); `promotes` is set when the moving
/// man lands on the promotion row.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub captured: Vec<Pos>,
    pub promotes: bool,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// A complete turn: a single quiet move, or a chain of jumps by the same
/// piece. This is the unit the search reasons about.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveSequence {
    pub moves: Vec<Move>,
    pub total_captures: usize,
}

impl MoveSequence {
    #[must_use]
    pub fn single(mv: Move) -> Self {
        let total_captures = mv.captured.len();
        MoveSequence {
            moves: vec![mv],
            total_captures,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.total_captures += mv.captured.len();
        self.moves.push(mv);
    }

    /// Starting square of the turn.
    #[must_use]
    pub fn from(&self) -> Pos {
        self.moves[0].from
    }

    /// Final landing square of the turn.
    #[must_use]
    pub fn to(&self) -> Pos {
        self.moves[self.moves.len() - 1].to
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.total_captures > 0
    }

    pub fn promotes(&self) -> bool {
        self.moves.iter().any(|m| m.promotes)
    }
}

/// Whether a turn is starting fresh or continuing a capture chain from a
/// landed piece. Mid-chain, only further jumps by the piece on the recorded
/// square are legal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnPhase {
    Fresh,
    ContinuingFrom(Pos),
}
