//! The minimax recursion with alpha-beta pruning and transposition
//! cutoffs. One ply is one complete turn, so the side to move always
//! alternates between levels.

use crate::board::{evaluate, Board, Outcome, Player, TurnPhase, WIN_SCORE};
use crate::tt::BoundType;

use super::move_order::order_sequences;
use super::SearchContext;

impl SearchContext<'_> {
    pub(crate) fn alphabeta(
        &mut self,
        board: &Board,
        to_move: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let original_alpha = alpha;
        let original_beta = beta;
        let hash = self.hasher.hash(board, to_move);

        let mut remembered = None;
        if let Some(entry) = self.tt.probe(hash) {
            if entry.depth >= depth {
                self.tt_hits += 1;
                match entry.bound {
                    BoundType::Exact => return entry.score,
                    BoundType::LowerBound => alpha = alpha.max(entry.score),
                    BoundType::UpperBound => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
            remembered = entry.best.clone();
        }

        let mut sequences = board.legal_sequences(to_move, TurnPhase::Fresh);
        if sequences.is_empty() {
            return self.terminal_score(board, to_move, depth);
        }
        if depth == 0 {
            return self.quiesce(board, to_move, alpha, beta, 0);
        }
        order_sequences(&mut sequences, to_move, remembered.as_ref());

        let maximizing = to_move == self.root_player;
        let mut best = if maximizing { -super::INFINITY } else { super::INFINITY };
        let mut best_seq = None;
        for seq in &sequences {
            self.nodes += 1;
            let mut child = board.clone();
            child.apply_sequence(seq, to_move);
            let score = self.alphabeta(&child, to_move.opponent(), depth - 1, alpha, beta);
            if maximizing {
                if score > best {
                    best = score;
                    best_seq = Some(seq.clone());
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_seq = Some(seq.clone());
                }
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        let bound = if best <= original_alpha {
            BoundType::UpperBound
        } else if best >= original_beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.tt.store(hash, depth, best, bound, best_seq);
        best
    }

    /// Score for a position where `to_move` has no legal turn (or any
    /// other decided position). Offset by remaining depth so nearer wins
    /// score higher than distant ones.
    pub(crate) fn terminal_score(&self, board: &Board, to_move: Player, depth: u32) -> i32 {
        match board.winner(to_move) {
            Outcome::Draw => 0,
            Outcome::Win(p) if p == self.root_player => WIN_SCORE + depth as i32,
            Outcome::Win(_) => -(WIN_SCORE + depth as i32),
            Outcome::Ongoing => evaluate(board, self.root_player, to_move),
        }
    }
}
