//! Transposition table for caching search results.
//!
//! Maps Zobrist keys to previously-searched scores and best sequences. An
//! entry only tightens or short-circuits a node when it was searched at
//! least as deep as the node currently needs. The table lives for one root
//! search and is rebuilt for the next.

use std::mem;

use crate::board::MoveSequence;

/// Default table size in megabytes for one root search.
pub const DEFAULT_TT_MB: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    /// Score is the exact value.
    Exact,
    /// Score is at least this value (search failed high).
    LowerBound,
    /// Score is at most this value (search failed low).
    UpperBound,
}

#[derive(Clone, Debug)]
pub struct TTEntry {
    pub hash: u64,
    pub depth: u32,
    pub score: i32,
    pub bound: BoundType,
    pub best: Option<MoveSequence>,
}

pub struct TranspositionTable {
    table: Vec<Option<TTEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a table of roughly `size_mb` megabytes of slots (entry heap
    /// data not counted), rounded down to a power of two.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = mem::size_of::<Option<TTEntry>>();
        let mut num_entries = (size_mb * 1024 * 1024) / entry_size;
        num_entries = num_entries.next_power_of_two() / 2;
        if num_entries == 0 {
            num_entries = 1024;
        }
        TranspositionTable {
            table: vec![None; num_entries],
            mask: num_entries - 1,
        }
    }

    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    pub fn probe(&self, hash: u64) -> Option<&TTEntry> {
        match &self.table[self.index(hash)] {
            Some(entry) if entry.hash == hash => Some(entry),
            _ => None,
        }
    }

    /// Depth-preferred replacement: a slot is overwritten only by an entry
    /// searched at least as deep, or when it holds a different position's
    /// stale data from this search.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u32,
        score: i32,
        bound: BoundType,
        best: Option<MoveSequence>,
    ) {
        let index = self.index(hash);
        let should_replace = match &self.table[index] {
            Some(existing) if existing.hash == hash => depth >= existing.depth,
            Some(_) | None => true,
        };
        if should_replace {
            self.table[index] = Some(TTEntry {
                hash,
                depth,
                score,
                bound,
                best,
            });
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_MB)
    }
}
