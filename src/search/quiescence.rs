//! Capture-only extension at the search horizon.
//!
//! A position on the edge of an exchange evaluates misleadingly; depth 0
//! therefore keeps following forced capture lines for a bounded number of
//! extra turns before trusting the static evaluation. There is no
//! stand-pat cutoff: under the mandatory-capture rule the side to move
//! cannot decline a jump, so the exchange must be played out.

use crate::board::{evaluate, Board, Player, TurnPhase};

use super::{SearchContext, INFINITY, MAX_QUIESCE_DEPTH};

impl SearchContext<'_> {
    pub(crate) fn quiesce(
        &mut self,
        board: &Board,
        to_move: Player,
        mut alpha: i32,
        mut beta: i32,
        qdepth: u32,
    ) -> i32 {
        let sequences = board.legal_sequences(to_move, TurnPhase::Fresh);
        if sequences.is_empty() {
            return self.terminal_score(board, to_move, 0);
        }
        // Mandatory capture makes the list all-jumps or all-quiet.
        let in_exchange = sequences[0].is_capture();
        if !in_exchange || qdepth >= MAX_QUIESCE_DEPTH {
            return evaluate(board, self.root_player, to_move);
        }

        let maximizing = to_move == self.root_player;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for seq in &sequences {
            self.nodes += 1;
            let mut child = board.clone();
            child.apply_sequence(seq, to_move);
            let score = self.quiesce(&child, to_move.opponent(), alpha, beta, qdepth + 1);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }
        best
    }
}
