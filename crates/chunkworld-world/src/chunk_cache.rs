//! Explicit chunk cache keyed by (map name, turn).
//!
//! The historical implementation memoized chunk lookups behind a
//! decorator with no way to drop stale entries. This cache is the
//! explicit replacement: the owner decides what goes in, reads are
//! plain lookups, and invalidation is a visible call.

use std::collections::BTreeMap;

use chunkworld_types::{Chunk, ChunkId, TurnPhase};

/// Cache of chunk lists, one entry per (map name, turn) pair.
#[derive(Debug, Clone, Default)]
pub struct ChunkCache {
    entries: BTreeMap<(String, TurnPhase), Vec<Chunk>>,
}

impl ChunkCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Store the chunk list for a (map, turn) pair, replacing any
    /// previous entry.
    pub fn insert(&mut self, map_name: &str, turn: TurnPhase, chunks: Vec<Chunk>) {
        tracing::debug!(map = map_name, turn = %turn, count = chunks.len(), "chunk cache insert");
        self.entries.insert((map_name.to_owned(), turn), chunks);
    }

    /// The cached chunk list for a (map, turn) pair, if present.
    pub fn get(&self, map_name: &str, turn: TurnPhase) -> Option<&[Chunk]> {
        self.entries
            .get(&(map_name.to_owned(), turn))
            .map(Vec::as_slice)
    }

    /// Look up a single chunk by number within a cached (map, turn) entry.
    pub fn get_chunk(&self, map_name: &str, turn: TurnPhase, id: ChunkId) -> Option<&Chunk> {
        self.get(map_name, turn)?.iter().find(|c| c.id == id)
    }

    /// Drop the entry for a (map, turn) pair. Returns whether an entry
    /// was actually removed.
    pub fn invalidate(&mut self, map_name: &str, turn: TurnPhase) -> bool {
        let removed = self.entries.remove(&(map_name.to_owned(), turn)).is_some();
        if removed {
            tracing::debug!(map = map_name, turn = %turn, "chunk cache invalidated");
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of (map, turn) entries currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
