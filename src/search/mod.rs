//! Depth-limited adversarial search.
//!
//! Minimax with alpha-beta pruning over complete turns, with:
//! - transposition-table cutoffs and window tightening
//! - move ordering (remembered best sequence first, then a cheap heuristic)
//! - a capture-only quiescence extension at the horizon
//! - iterative deepening: a shallow pass provides a fallback sequence that
//!   the full-depth pass overwrites only when it completes with a result
//!
//! The search never mutates its caller's board; every branch works on a
//! clone, so sibling branches cannot observe each other's moves.

mod alphabeta;
mod move_order;
mod quiescence;

use crate::board::{Board, MoveSequence, Player, TurnPhase};
use crate::tt::{BoundType, TranspositionTable, DEFAULT_TT_MB};
use crate::zobrist::HashingContext;

use move_order::order_sequences;

/// Scores are bounded well away from this sentinel window.
pub(crate) const INFINITY: i32 = 1_000_000;

/// Depth margin between the fallback pass and the requested depth.
const FALLBACK_MARGIN: u32 = 2;

/// Cap on quiescence plies beyond the nominal horizon.
pub(crate) const MAX_QUIESCE_DEPTH: u32 = 6;

/// Diagnostics from one completed root search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchReport {
    /// Deepest fully-completed search depth.
    pub depth: u32,
    /// Score of the chosen sequence, from the searching player's view.
    pub score: i32,
    /// Nodes visited across all passes.
    pub nodes: u64,
    /// Transposition entries that produced a cutoff or tightening.
    pub tt_hits: u64,
}

pub(crate) struct SearchContext<'a> {
    hasher: &'a HashingContext,
    tt: TranspositionTable,
    root_player: Player,
    nodes: u64,
    tt_hits: u64,
}

impl<'a> SearchContext<'a> {
    fn new(hasher: &'a HashingContext, root_player: Player) -> Self {
        SearchContext {
            hasher,
            tt: TranspositionTable::new(DEFAULT_TT_MB),
            root_player,
            nodes: 0,
            tt_hits: 0,
        }
    }

    /// Full-width search of the root position at `depth`. Returns the best
    /// sequence with its score, or `None` when no legal turn exists.
    fn search_root(
        &mut self,
        board: &Board,
        phase: TurnPhase,
        depth: u32,
    ) -> Option<(MoveSequence, i32)> {
        let player = self.root_player;
        let mut sequences = board.legal_sequences(player, phase);
        if sequences.is_empty() {
            return None;
        }

        // The key covers pieces and side to move only, so entries written
        // mid-chain would alias the fresh-turn position.
        let use_tt = phase == TurnPhase::Fresh;
        let hash = self.hasher.hash(board, player);
        let remembered = if use_tt {
            self.tt.probe(hash).and_then(|e| e.best.clone())
        } else {
            None
        };
        order_sequences(&mut sequences, player, remembered.as_ref());

        let mut alpha = -INFINITY;
        let mut best: Option<(MoveSequence, i32)> = None;
        for seq in sequences {
            self.nodes += 1;
            let mut child = board.clone();
            child.apply_sequence(&seq, player);
            let score = self.alphabeta(&child, player.opponent(), depth.saturating_sub(1), alpha, INFINITY);
            if best.as_ref().map_or(true, |(_, s)| score > *s) {
                alpha = alpha.max(score);
                best = Some((seq, score));
            }
        }

        if use_tt {
            if let Some((seq, score)) = &best {
                self.tt
                    .store(hash, depth, *score, BoundType::Exact, Some(seq.clone()));
            }
        }
        best
    }
}

/// Best complete turn for `player`, searched to `depth` full turns.
///
/// Returns `None` only when `player` has no legal turn (the game-over
/// signal). When continuing a capture chain, pass the landed piece's
/// square as the phase.
#[must_use]
pub fn find_best_sequence(
    board: &Board,
    player: Player,
    phase: TurnPhase,
    depth: u32,
    hasher: &HashingContext,
) -> Option<MoveSequence> {
    find_best_sequence_with_report(board, player, phase, depth, hasher).0
}

/// As [`find_best_sequence`], also returning search diagnostics.
#[must_use]
pub fn find_best_sequence_with_report(
    board: &Board,
    player: Player,
    phase: TurnPhase,
    depth: u32,
    hasher: &HashingContext,
) -> (Option<MoveSequence>, SearchReport) {
    let depth = depth.max(1);
    let sequences = board.legal_sequences(player, phase);
    if sequences.is_empty() {
        return (None, SearchReport::default());
    }
    if sequences.len() == 1 {
        // Forced reply; deepening cannot change the choice.
        let report = SearchReport {
            depth: 0,
            score: 0,
            nodes: 1,
            tt_hits: 0,
        };
        return (sequences.into_iter().next(), report);
    }

    let mut ctx = SearchContext::new(hasher, player);

    let shallow_depth = depth.saturating_sub(FALLBACK_MARGIN).max(1);
    let mut best = ctx.search_root(board, phase, shallow_depth);
    let mut reached = shallow_depth;
    log::debug!(
        "shallow pass depth {} score {:?} nodes {}",
        shallow_depth,
        best.as_ref().map(|(_, s)| *s),
        ctx.nodes
    );

    if depth > shallow_depth {
        match ctx.search_root(board, phase, depth) {
            Some(deep) => {
                best = Some(deep);
                reached = depth;
            }
            None => {
                log::warn!(
                    "deep pass at depth {depth} produced no result, keeping depth {shallow_depth} fallback"
                );
            }
        }
    }
    log::debug!(
        "search done: depth {} nodes {} tt_hits {}",
        reached,
        ctx.nodes,
        ctx.tt_hits
    );

    let (seq, score) = match best {
        Some((seq, score)) => (Some(seq), score),
        None => (None, 0),
    };
    let report = SearchReport {
        depth: reached,
        score,
        nodes: ctx.nodes,
        tt_hits: ctx.tt_hits,
    };
    (seq, report)
}

#[cfg(test)]
mod tests;
