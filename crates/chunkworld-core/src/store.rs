//! The persistence seam: store traits and the in-memory implementation.
//!
//! The session layer speaks only to these traits, so the game can run
//! against any backing store. [`MemoryStore`] is the stock
//! implementation: plain maps, suitable for tests and single-process
//! play. All reads return owned values; the session mutates a copy and
//! writes it back, which keeps the trait surface compatible with
//! backends that cannot hand out references.

use std::collections::BTreeMap;

use chunkworld_types::{Chunk, ChunkId, GameMap, Npc, NpcId, Player, PlayerId, TurnPhase, WorldState};

/// Read/write access to chunk records, partitioned by (map, turn).
pub trait ChunkStore {
    /// Fetch one chunk of a (map, turn) partition.
    fn chunk(&self, map_name: &str, turn: TurnPhase, id: ChunkId) -> Option<Chunk>;

    /// Fetch every chunk of a (map, turn) partition, in chunk order.
    fn chunks(&self, map_name: &str, turn: TurnPhase) -> Vec<Chunk>;

    /// Insert or replace a batch of chunks.
    fn put_chunks(&mut self, chunks: Vec<Chunk>);
}

/// Read/write access to map rows.
pub trait MapStore {
    /// Fetch the map row for a (name, turn) pair.
    fn map(&self, name: &str, turn: TurnPhase) -> Option<GameMap>;

    /// Insert or replace a map row.
    fn put_map(&mut self, map: GameMap);
}

/// Read/write access to the singleton world-state row.
pub trait WorldStore {
    /// Fetch the world state, if the world has been seeded.
    fn world_state(&self) -> Option<WorldState>;

    /// Insert or replace the world state.
    fn put_world_state(&mut self, state: WorldState);
}

/// Read/write access to player records.
pub trait PlayerStore {
    /// Fetch a player by ID.
    fn player(&self, id: PlayerId) -> Option<Player>;

    /// Insert or replace a player record.
    fn put_player(&mut self, player: Player);
}

/// Read/write access to NPC records.
pub trait NpcStore {
    /// Fetch an NPC by ID.
    fn npc(&self, id: NpcId) -> Option<Npc>;

    /// Insert or replace an NPC record.
    fn put_npc(&mut self, npc: Npc);

    /// Every active NPC haunting the given chunk.
    fn npcs_at(&self, chunk: ChunkId) -> Vec<Npc>;
}

/// Convenience alias: a store that covers every table the session uses.
pub trait GameStore: ChunkStore + MapStore + WorldStore + PlayerStore + NpcStore {}

impl<T> GameStore for T where T: ChunkStore + MapStore + WorldStore + PlayerStore + NpcStore {}

/// In-memory store backed by ordered maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    chunks: BTreeMap<(String, TurnPhase, ChunkId), Chunk>,
    maps: BTreeMap<(String, TurnPhase), GameMap>,
    world_state: Option<WorldState>,
    players: BTreeMap<PlayerId, Player>,
    npcs: BTreeMap<NpcId, Npc>,
}

impl MemoryStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            chunks: BTreeMap::new(),
            maps: BTreeMap::new(),
            world_state: None,
            players: BTreeMap::new(),
            npcs: BTreeMap::new(),
        }
    }
}

impl ChunkStore for MemoryStore {
    fn chunk(&self, map_name: &str, turn: TurnPhase, id: ChunkId) -> Option<Chunk> {
        self.chunks
            .get(&(map_name.to_owned(), turn, id))
            .cloned()
    }

    fn chunks(&self, map_name: &str, turn: TurnPhase) -> Vec<Chunk> {
        self.chunks
            .values()
            .filter(|c| c.belongs_to_map(map_name, turn))
            .cloned()
            .collect()
    }

    fn put_chunks(&mut self, chunks: Vec<Chunk>) {
        for chunk in chunks {
            self.chunks
                .insert((chunk.map_name.clone(), chunk.turn, chunk.id), chunk);
        }
    }
}

impl MapStore for MemoryStore {
    fn map(&self, name: &str, turn: TurnPhase) -> Option<GameMap> {
        self.maps.get(&(name.to_owned(), turn)).cloned()
    }

    fn put_map(&mut self, map: GameMap) {
        self.maps.insert((map.name.clone(), map.turn), map);
    }
}

impl WorldStore for MemoryStore {
    fn world_state(&self) -> Option<WorldState> {
        self.world_state
    }

    fn put_world_state(&mut self, state: WorldState) {
        self.world_state = Some(state);
    }
}

impl PlayerStore for MemoryStore {
    fn player(&self, id: PlayerId) -> Option<Player> {
        self.players.get(&id).cloned()
    }

    fn put_player(&mut self, player: Player) {
        self.players.insert(player.id, player);
    }
}

impl NpcStore for MemoryStore {
    fn npc(&self, id: NpcId) -> Option<Npc> {
        self.npcs.get(&id).cloned()
    }

    fn put_npc(&mut self, npc: Npc) {
        self.npcs.insert(npc.id, npc);
    }

    fn npcs_at(&self, chunk: ChunkId) -> Vec<Npc> {
        self.npcs
            .values()
            .filter(|n| n.active && n.chunk == chunk)
            .cloned()
            .collect()
    }
}
