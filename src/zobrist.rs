//! Zobrist hashing for draughts positions.
//!
//! A position key XOR-combines one fixed pseudo-random value per
//! (square, piece variant) for every occupied square, plus one value for
//! the side to move. Keys live in an explicit [`HashingContext`] that is
//! passed into the search and transposition table; construct one from a
//! fixed seed when reproducible hashes matter.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Player};

/// Seed for [`HashingContext::new`]. Any seed works; a fixed one keeps
/// hashes stable across runs and tests.
pub const DEFAULT_SEED: u64 = 0x00d1_ce5e_ed00;

/// Piece variants: red man, red king, black man, black king.
const PIECE_VARIANTS: usize = 4;

const GRID: usize = crate::board::BOARD_SIZE;

/// Shared context built from [`DEFAULT_SEED`], for callers that do not
/// manage their own.
pub static DEFAULT_CONTEXT: Lazy<HashingContext> = Lazy::new(HashingContext::new);

pub struct HashingContext {
    piece_keys: [[[u64; GRID]; GRID]; PIECE_VARIANTS],
    black_to_move_key: u64,
}

impl HashingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut piece_keys = [[[0u64; GRID]; GRID]; PIECE_VARIANTS];
        for variant in &mut piece_keys {
            for row in variant.iter_mut() {
                for key in row.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        HashingContext {
            piece_keys,
            black_to_move_key: rng.gen(),
        }
    }

    /// Hash of `board` with `to_move` on turn.
    #[must_use]
    pub fn hash(&self, board: &Board, to_move: Player) -> u64 {
        let mut key = 0u64;
        for (pos, piece) in board.occupied() {
            key ^= self.piece_keys[piece.index()][pos.row as usize][pos.col as usize];
        }
        if to_move == Player::Black {
            key ^= self.black_to_move_key;
        }
        key
    }
}

impl Default for HashingContext {
    fn default() -> Self {
        Self::new()
    }
}
