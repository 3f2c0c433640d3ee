//! Move generation: slides, jumps, the mandatory-capture rule, and chain
//! expansion into complete turns.

use super::error::MoveError;
use super::state::Board;
use super::types::{Move, MoveSequence, Piece, PieceKind, Player, Pos, TurnPhase, DIAGONALS};

/// Result of [`Board::winner`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Ongoing,
    Draw,
    Win(Player),
}

impl Board {
    /// Immediate next jump(s) available to the piece on `from`.
    ///
    /// A man jumps a diagonally-adjacent opposing piece onto the empty
    /// square beyond, normally only forward; mid-chain it may also jump
    /// backward. A king slides any distance, jumps exactly one opposing
    /// piece, and lands on the next square beyond it, which must be empty.
    #[must_use]
    pub fn single_capture_moves(&self, from: Pos, mid_chain: bool) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut moves = Vec::new();
        match piece.kind {
            PieceKind::Man => {
                let fwd = piece.owner.forward();
                for (dr, dc) in DIAGONALS {
                    if dr != fwd && !mid_chain {
                        continue;
                    }
                    let over = from.offset(dr, dc);
                    let land = from.offset(2 * dr, 2 * dc);
                    if self.holds_opponent(over, piece.owner) && self.is_free(land) {
                        moves.push(Move {
                            from,
                            to: land,
                            captured: vec![over],
                            promotes: land.row == piece.owner.promotion_row(),
                        });
                    }
                }
            }
            PieceKind::King => {
                for (dr, dc) in DIAGONALS {
                    // Walk the ray to the first occupied square; only one
                    // interposed piece is allowed, and the landing square
                    // is the one immediately beyond it.
                    let mut sq = from.offset(dr, dc);
                    while self.is_free(sq) {
                        sq = sq.offset(dr, dc);
                    }
                    if !self.holds_opponent(sq, piece.owner) {
                        continue;
                    }
                    let land = sq.offset(dr, dc);
                    if self.is_free(land) {
                        moves.push(Move {
                            from,
                            to: land,
                            captured: vec![sq],
                            promotes: false,
                        });
                    }
                }
            }
        }
        moves
    }

    /// Quiet (non-capturing) moves for the piece on `from`: one forward
    /// diagonal step for a man, any unobstructed diagonal slide for a king.
    #[must_use]
    pub fn quiet_moves(&self, from: Pos) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut moves = Vec::new();
        match piece.kind {
            PieceKind::Man => {
                let fwd = piece.owner.forward();
                for dc in [-1, 1] {
                    let to = from.offset(fwd, dc);
                    if self.is_free(to) {
                        moves.push(Move {
                            from,
                            to,
                            captured: Vec::new(),
                            promotes: to.row == piece.owner.promotion_row(),
                        });
                    }
                }
            }
            PieceKind::King => {
                for (dr, dc) in DIAGONALS {
                    let mut to = from.offset(dr, dc);
                    while self.is_free(to) {
                        moves.push(Move {
                            from,
                            to,
                            captured: Vec::new(),
                            promotes: false,
                        });
                        to = to.offset(dr, dc);
                    }
                }
            }
        }
        moves
    }

    /// Moves for one piece: its jumps if it has any (captures dominate),
    /// otherwise its quiet moves. Mid-chain, only jumps are ever offered.
    #[must_use]
    pub fn moves_for_piece(&self, from: Pos, mid_chain: bool) -> Vec<Move> {
        let captures = self.single_capture_moves(from, mid_chain);
        if !captures.is_empty() {
            return captures;
        }
        if mid_chain {
            Vec::new()
        } else {
            self.quiet_moves(from)
        }
    }

    /// True when any piece of `player` has an immediate jump.
    #[must_use]
    pub fn has_any_capture(&self, player: Player) -> bool {
        self.pieces(player)
            .any(|(pos, _)| !self.single_capture_moves(pos, false).is_empty())
    }

    /// Every legal single step for `player`'s turn.
    ///
    /// Continuing a chain restricts to jumps from the landed piece's square.
    /// On a fresh turn, capture availability anywhere on the board makes
    /// captures mandatory: quiet moves are offered only when no piece of
    /// `player` can jump.
    #[must_use]
    pub fn all_moves(&self, player: Player, phase: TurnPhase) -> Vec<Move> {
        match phase {
            TurnPhase::ContinuingFrom(origin) => {
                match self.piece_at(origin) {
                    Some(p) if p.owner == player => self.single_capture_moves(origin, true),
                    _ => Vec::new(),
                }
            }
            TurnPhase::Fresh => {
                if self.has_any_capture(player) {
                    self.pieces(player)
                        .flat_map(|(pos, _)| self.single_capture_moves(pos, false))
                        .collect()
                } else {
                    self.pieces(player)
                        .flat_map(|(pos, _)| self.quiet_moves(pos))
                        .collect()
                }
            }
        }
    }

    /// Every complete playable turn for `player`: quiet moves as-is, and
    /// each first jump expanded into every maximal chain reachable from it.
    /// A chain branch ends when the landed piece has no further jump.
    #[must_use]
    pub fn legal_sequences(&self, player: Player, phase: TurnPhase) -> Vec<MoveSequence> {
        let mut sequences = Vec::new();
        for mv in self.all_moves(player, phase) {
            if !mv.is_capture() {
                sequences.push(MoveSequence::single(mv));
                continue;
            }
            let mut after = self.clone();
            after.apply_unchecked(&mv, player);
            let landed = mv.to;
            extend_chain(&after, landed, player, MoveSequence::single(mv), &mut sequences);
        }
        sequences
    }

    /// Apply a validated move: relocate (and possibly promote) the piece
    /// and remove every captured piece. Returns whether the landed piece
    /// has a further jump, i.e. whether the turn continues.
    ///
    /// The move must come from this position's legal moves for `player`
    /// under `phase`; anything else is rejected and the board is left
    /// unchanged.
    pub fn apply_move(
        &mut self,
        mv: &Move,
        player: Player,
        phase: TurnPhase,
    ) -> Result<bool, MoveError> {
        if !self.is_playable(mv.from) {
            return Err(MoveError::OutOfBounds { pos: mv.from });
        }
        if !self.is_playable(mv.to) {
            return Err(MoveError::OutOfBounds { pos: mv.to });
        }
        match self.piece_at(mv.from) {
            Some(p) if p.owner == player => {}
            _ => return Err(MoveError::WrongPiece { pos: mv.from }),
        }
        if let TurnPhase::ContinuingFrom(origin) = phase {
            if mv.from != origin {
                return Err(MoveError::ChainOriginMismatch {
                    expected: origin,
                    found: mv.from,
                });
            }
        }
        if !self.all_moves(player, phase).contains(mv) {
            return Err(MoveError::NotLegal);
        }
        Ok(self.apply_unchecked(mv, player))
    }

    /// Apply without validation. Used on search clones, where moves come
    /// straight out of the generator.
    pub(crate) fn apply_unchecked(&mut self, mv: &Move, player: Player) -> bool {
        debug_assert!(matches!(self.piece_at(mv.from), Some(p) if p.owner == player));
        let Some(piece) = self.remove(mv.from) else {
            return false;
        };
        for &cap in &mv.captured {
            self.remove(cap);
        }
        let kind = if mv.promotes { PieceKind::King } else { piece.kind };
        self.place(mv.to, Piece::new(piece.owner, kind));
        mv.is_capture() && !self.single_capture_moves(mv.to, true).is_empty()
    }

    /// Apply a whole turn (used on search clones).
    pub(crate) fn apply_sequence(&mut self, seq: &MoveSequence, player: Player) {
        for mv in &seq.moves {
            self.apply_unchecked(mv, player);
        }
    }

    /// Game outcome with `to_move` on turn. A side with no pieces has
    /// lost; with pieces but no legal move it has lost unless the other
    /// side is also stuck, which is a draw.
    #[must_use]
    pub fn winner(&self, to_move: Player) -> Outcome {
        if self.piece_count(Player::Red) == 0 {
            return Outcome::Win(Player::Black);
        }
        if self.piece_count(Player::Black) == 0 {
            return Outcome::Win(Player::Red);
        }
        let mover_stuck = self.all_moves(to_move, TurnPhase::Fresh).is_empty();
        let other_stuck = self
            .all_moves(to_move.opponent(), TurnPhase::Fresh)
            .is_empty();
        match (mover_stuck, other_stuck) {
            (true, true) => Outcome::Draw,
            (true, false) => Outcome::Win(to_move.opponent()),
            _ => Outcome::Ongoing,
        }
    }
}

/// Depth-first expansion of a capture chain. `seq` already contains the
/// jumps made so far and `board` reflects them; a branch is emitted once
/// the piece on `landed` cannot jump again.
fn extend_chain(
    board: &Board,
    landed: Pos,
    player: Player,
    seq: MoveSequence,
    out: &mut Vec<MoveSequence>,
) {
    let continuations = board.single_capture_moves(landed, true);
    if continuations.is_empty() {
        out.push(seq);
        return;
    }
    for mv in continuations {
        let mut after = board.clone();
        after.apply_unchecked(&mv, player);
        let next = mv.to;
        let mut longer = seq.clone();
        longer.push(mv);
        extend_chain(&after, next, player, longer, out);
    }
}
