//! The spatial core of Chunkworld: grid topology, chunk caching,
//! structure placement, and world seeding.
//!
//! This crate models the physical world as a fixed-width grid of chunks.
//! Chunk numbers are positions: the column and row of a chunk derive
//! from its number, and adjacency is computed positionally (no wrapping
//! across row boundaries).
//!
//! # Modules
//!
//! - [`chunk_cache`] -- Explicit cache of chunk lists keyed by
//!   (map, turn), with visible invalidation.
//! - [`error`] -- Error types for spatial and registry operations.
//! - [`grid`] -- [`GridTopology`]: position math, adjacency, and
//!   direction labeling.
//! - [`registry`] -- [`StructureRegistry`]: bridges and totems, placed
//!   by NPC construction and deactivated rather than deleted.
//! - [`seed`] -- Bulk generation of the default Day/Night map pair.

pub mod chunk_cache;
pub mod error;
pub mod grid;
pub mod registry;
pub mod seed;

// Re-export primary types at crate root.
pub use chunk_cache::ChunkCache;
pub use error::WorldError;
pub use grid::GridTopology;
pub use registry::StructureRegistry;
pub use seed::{
    DEFAULT_CHUNK_COUNT, DEFAULT_GRID_WIDTH, DEFAULT_MAP_NAME, DEFAULT_TICKS_PER_TURN,
    SeededWorld, create_default_world, create_world,
};
