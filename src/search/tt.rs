//! Transposition table for exact scores.
//!
//! Every stored score is exact, so the table never replaces or evicts an entry:
//! the first insert for a key wins and later inserts are ignored. Growth is
//! bounded only by the number of canonical positions the search reaches.

use std::collections::HashMap;

use crate::search::negamax::Score;
use crate::symmetry::Key;

#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<Key, Score>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TranspositionTable {
            entries: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn get(&self, key: Key) -> Option<Score> {
        self.entries.get(&key).copied()
    }

    /// Store `score` unless `key` is already present. Returns the score held
    /// for `key` afterwards.
    #[inline]
    pub fn insert(&mut self, key: Key, score: Score) -> Score {
        *self.entries.entry(key).or_insert(score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Rough heap footprint in bytes: one key/score slot plus one control byte
    /// per bucket of the underlying hash table.
    pub fn approx_bytes(&self) -> usize {
        let slot = std::mem::size_of::<(Key, Score)>() + 1;
        self.entries.capacity() * slot
    }
}
