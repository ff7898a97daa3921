//! Shared type definitions for the Chunkworld game core.
//!
//! This crate is the single source of truth for the types used across the
//! Chunkworld workspace: the spatial and actor entities, their typed
//! identifiers, and the structured outcomes handed to the presentation
//! layer.
//!
//! # Modules
//!
//! - [`ids`] -- Typed identifier wrappers (UUID v7 surrogates plus the
//!   numeric [`ChunkId`])
//! - [`enums`] -- Enumeration types (biomes, turn phases, materials,
//!   NPC roles, construction kinds, directions)
//! - [`structs`] -- Core entity structs (chunks, maps, world state,
//!   players, NPCs, bridges, totems)
//! - [`outcomes`] -- Operation result types for the presentation layer

pub mod enums;
pub mod ids;
pub mod outcomes;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Biome, ConstructionKind, Direction, Material, NpcRole, TurnPhase};
pub use ids::{BridgeId, ChunkId, MapId, NpcId, PlayerId, TotemId};
pub use outcomes::{BuildOutcome, ClockAdvance, Exit, MineOutcome, MoveOutcome};
pub use structs::{Bridge, Chunk, GameMap, LocationRef, Npc, Player, Totem, WorldState};
