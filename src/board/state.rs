//! Board state: a fixed 10x10 grid of cells.
//!
//! The board is mutated in place by `apply_move` during play; the search
//! never touches the caller's board, it works on clones.

use std::fmt;

use super::types::{Cell, Piece, PieceKind, Player, Pos, BOARD_SIZE};

/// How many of the rows nearest each back rank carry men in the initial
/// setup.
const SETUP_ROWS: usize = 4;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Standard starting position: four rows of men on the dark squares
    /// for each side, Black at the top (rows 0..4), Red at the bottom.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as i8, col as i8);
                if !pos.is_dark() {
                    continue;
                }
                if row < SETUP_ROWS {
                    board.place(pos, Piece::new(Player::Black, PieceKind::Man));
                } else if row >= BOARD_SIZE - SETUP_ROWS {
                    board.place(pos, Piece::new(Player::Red, PieceKind::Man));
                }
            }
        }
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builder-style placement for setting up positions in tests and
    /// puzzles.
    #[must_use]
    pub fn with_piece(mut self, pos: Pos, piece: Piece) -> Self {
        self.place(pos, piece);
        self
    }

    /// The cell at `pos`, or `Cell::Empty` for off-board coordinates.
    #[inline]
    #[must_use]
    pub fn cell(&self, pos: Pos) -> Cell {
        if pos.on_board() {
            self.cells[pos.row as usize][pos.col as usize]
        } else {
            Cell::Empty
        }
    }

    /// The piece at `pos`, if the square is on the board and occupied.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.cell(pos).piece()
    }

    /// True when `pos` is an on-board dark square (the only squares a
    /// piece may ever occupy).
    #[inline]
    #[must_use]
    pub fn is_playable(&self, pos: Pos) -> bool {
        pos.on_board() && pos.is_dark()
    }

    /// True when `pos` is an on-board empty square.
    #[inline]
    pub(crate) fn is_free(&self, pos: Pos) -> bool {
        pos.on_board() && self.cells[pos.row as usize][pos.col as usize].is_empty()
    }

    /// True when `pos` holds a piece belonging to `player`'s opponent.
    #[inline]
    pub(crate) fn holds_opponent(&self, pos: Pos, player: Player) -> bool {
        matches!(self.piece_at(pos), Some(p) if p.owner == player.opponent())
    }

    pub fn place(&mut self, pos: Pos, piece: Piece) {
        debug_assert!(self.is_playable(pos), "piece placed on a light or off-board square");
        self.cells[pos.row as usize][pos.col as usize] = Cell::Occupied(piece);
    }

    pub fn remove(&mut self, pos: Pos) -> Option<Piece> {
        if !pos.on_board() {
            return None;
        }
        let taken = self.cells[pos.row as usize][pos.col as usize].piece();
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
        taken
    }

    #[must_use]
    pub fn piece_count(&self, player: Player) -> usize {
        let (men, kings) = self.counts(player);
        men + kings
    }

    /// `(men, kings)` for one side.
    #[must_use]
    pub fn counts(&self, player: Player) -> (usize, usize) {
        let mut men = 0;
        let mut kings = 0;
        for piece in self.pieces(player).map(|(_, p)| p) {
            match piece.kind {
                PieceKind::Man => men += 1,
                PieceKind::King => kings += 1,
            }
        }
        (men, kings)
    }

    #[must_use]
    pub fn total_pieces(&self) -> usize {
        self.piece_count(Player::Red) + self.piece_count(Player::Black)
    }

    /// Iterate over every occupied square, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                cell.piece().map(|p| (Pos::new(r as i8, c as i8), p))
            })
        })
    }

    /// Iterate over `player`'s pieces.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.owner == player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2 3 4 5 6 7 8 9")?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{r:2} ")?;
            for (c, cell) in row.iter().enumerate() {
                let ch = match cell.piece() {
                    Some(p) => match (p.owner, p.kind) {
                        (Player::Red, PieceKind::Man) => 'r',
                        (Player::Red, PieceKind::King) => 'R',
                        (Player::Black, PieceKind::Man) => 'b',
                        (Player::Black, PieceKind::King) => 'B',
                    },
                    None if Pos::new(r as i8, c as i8).is_dark() => '.',
                    None => ' ',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
