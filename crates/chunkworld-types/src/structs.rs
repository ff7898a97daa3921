//! Core entity structs for the Chunkworld game core.
//!
//! These are the canonical records the store boundary reads and writes.
//! Mutable gameplay behavior over them (vitals, the NPC economy) lives in
//! `chunkworld-actors`; spatial queries live in `chunkworld-world`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Biome, ConstructionKind, Material, NpcRole, TurnPhase};
use crate::ids::{BridgeId, ChunkId, MapId, NpcId, PlayerId, TotemId};

// ---------------------------------------------------------------------------
// Chunk
// ---------------------------------------------------------------------------

/// The smallest addressable unit of the world grid.
///
/// A chunk belongs to exactly one (map, turn) pair and carries one biome.
/// Chunks are created during world seeding and are immutable afterwards
/// except for administrative biome edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Grid position, 1-based. Column and row derive from this number.
    pub id: ChunkId,
    /// The biome this chunk carries.
    pub biome: Biome,
    /// Name of the owning map.
    pub map_name: String,
    /// Turn phase of the owning map.
    pub turn: TurnPhase,
}

impl Chunk {
    /// Whether this chunk belongs to the given (map, turn) pair.
    pub fn belongs_to_map(&self, map_name: &str, turn: TurnPhase) -> bool {
        self.map_name == map_name && self.turn == turn
    }

    /// Formatted name for presentation, e.g. `Desert (Overworld - Day)`.
    pub fn display_name(&self) -> String {
        format!("{} ({} - {})", self.biome, self.map_name, self.turn)
    }
}

// ---------------------------------------------------------------------------
// GameMap
// ---------------------------------------------------------------------------

/// A map: one partition of chunks per (name, turn) combination.
///
/// Exactly one map exists per (name, turn); the Day and Night maps of the
/// same name share the grid shape but own disjoint chunk sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    /// Surrogate identifier.
    pub id: MapId,
    /// Map name (half of the natural composite key).
    pub name: String,
    /// Turn phase (the other half of the composite key).
    pub turn: TurnPhase,
}

// ---------------------------------------------------------------------------
// WorldState
// ---------------------------------------------------------------------------

/// The singleton world row: current turn and tick progress within it.
///
/// At rest `ticks_in_turn < max_ticks_per_turn`; crossing the threshold
/// is immediately normalized by the clock (reset to 0, turn toggled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    /// The current turn phase, shared across the whole world.
    pub turn: TurnPhase,
    /// Ticks consumed so far in the current turn.
    pub ticks_in_turn: u32,
    /// Ticks that make up one full turn.
    pub max_ticks_per_turn: u32,
}

// ---------------------------------------------------------------------------
// LocationRef
// ---------------------------------------------------------------------------

/// A structured reference to where a player stands: map plus chunk.
///
/// This replaces the string-encoded `"Map X - Chunk Y"` location of the
/// historical schema. Parsing from that legacy string happens once at the
/// store boundary; core logic only ever sees this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    /// Name of the map the chunk belongs to.
    pub map: String,
    /// The chunk the player occupies.
    pub chunk: ChunkId,
}

impl core::fmt::Display for LocationRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - Chunk {}", self.map, self.chunk)
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A player character.
///
/// Invariants: `health <= max_health`; once the player has entered the
/// world, `location` resolves to an existing chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Health ceiling. Grows on level-up.
    pub max_health: u32,
    /// Current health, 0..=`max_health`.
    pub health: u32,
    /// Attack strength. Grows on level-up.
    pub strength: u32,
    /// Current level, starting at 1.
    pub level: u32,
    /// Accumulated experience points.
    pub experience: u32,
    /// Where the player stands, once spawned into the world.
    pub location: Option<LocationRef>,
    /// When the character was created.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Npc
// ---------------------------------------------------------------------------

/// A ghost NPC: a non-player actor that performs exactly one mining or
/// construction action per activation cycle.
///
/// The role is fixed at creation. `action_spent` gates the single action
/// and is only cleared by an explicit external reset -- there is no
/// automatic per-turn reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    /// Unique identifier.
    pub id: NpcId,
    /// The chunk the NPC haunts.
    pub chunk: ChunkId,
    /// Miner or builder; determines which action the NPC accepts.
    pub role: NpcRole,
    /// Whether the NPC participates in the world at all.
    pub active: bool,
    /// Set after the NPC's one action; blocks further actions until reset.
    pub action_spent: bool,
    /// What the NPC built, set only after a successful construction.
    pub built: Option<ConstructionKind>,
}

impl Npc {
    /// Create a fresh, active NPC that has not yet acted.
    pub fn new(chunk: ChunkId, role: NpcRole) -> Self {
        Self {
            id: NpcId::new(),
            chunk,
            role,
            active: true,
            action_spent: false,
            built: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Bridge
// ---------------------------------------------------------------------------

/// A placed bridge linking two chunks.
///
/// Created by a successful bridge construction; deactivated rather than
/// deleted so history survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    /// Unique identifier.
    pub id: BridgeId,
    /// Chunk the bridge starts from (the builder's chunk).
    pub origin: ChunkId,
    /// Chunk the bridge reaches.
    pub destination: ChunkId,
    /// Dominant construction material.
    pub material: Material,
    /// Whether the bridge is usable. Never hard-deleted.
    pub active: bool,
    /// When the bridge was placed.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Totem
// ---------------------------------------------------------------------------

/// A placed totem marking a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totem {
    /// Unique identifier.
    pub id: TotemId,
    /// Display name.
    pub name: String,
    /// The chunk the totem stands on.
    pub chunk: ChunkId,
    /// Flavor kind (e.g. "ancestral", "warding").
    pub kind: String,
    /// Whether the totem is active. Never hard-deleted.
    pub active: bool,
    /// When the totem was placed.
    pub created_at: DateTime<Utc>,
}
