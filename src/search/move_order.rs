//! Cheap move ordering to maximize alpha-beta cutoffs.
//!
//! The remembered transposition sequence goes first; the rest rank by
//! captured value, promotion, forward progress and a center bias.

use crate::board::{centrality, MoveSequence, Player};

const REMEMBERED_SCORE: i32 = 1_000_000;
const CAPTURE_SCORE: i32 = 400;
const PROMOTION_SCORE: i32 = 150;
const ADVANCE_SCORE: i32 = 8;

fn heuristic_score(seq: &MoveSequence, player: Player) -> i32 {
    let mut score = CAPTURE_SCORE * seq.total_captures as i32;
    if seq.promotes() {
        score += PROMOTION_SCORE;
    }
    let progress = match player.forward() {
        -1 => (seq.from().row - seq.to().row) as i32,
        _ => (seq.to().row - seq.from().row) as i32,
    };
    score += ADVANCE_SCORE * progress;
    score + centrality(seq.to())
}

pub(crate) fn order_sequences(
    sequences: &mut [MoveSequence],
    player: Player,
    remembered: Option<&MoveSequence>,
) {
    sequences.sort_by_key(|seq| {
        let mut score = heuristic_score(seq, player);
        if remembered == Some(seq) {
            score += REMEMBERED_SCORE;
        }
        std::cmp::Reverse(score)
    });
}
