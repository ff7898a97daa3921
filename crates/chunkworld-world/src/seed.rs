//! Bulk world seeding: the default map pair and its chunks.
//!
//! Seeding produces one map per turn phase (Day and Night) sharing a
//! name, each owning a full grid of chunks. Biomes are assigned by a
//! deterministic row striping so that every biome appears on both maps
//! and row 0 is all Desert -- new players spawn on a Desert chunk.

use chunkworld_types::{Biome, Chunk, ChunkId, GameMap, MapId, TurnPhase, WorldState};

use crate::error::WorldError;
use crate::grid::GridTopology;

/// The default map name.
pub const DEFAULT_MAP_NAME: &str = "Overworld";

/// The default grid width in chunks.
pub const DEFAULT_GRID_WIDTH: u32 = 32;

/// The default total chunk count per map (a 32x32 grid).
pub const DEFAULT_CHUNK_COUNT: u32 = 1024;

/// The default number of ticks in one Day or Night turn.
pub const DEFAULT_TICKS_PER_TURN: u32 = 20;

/// Everything a fresh world consists of: the map rows, their chunks,
/// and the initial world-clock state.
#[derive(Debug, Clone)]
pub struct SeededWorld {
    /// One map row per turn phase.
    pub maps: Vec<GameMap>,
    /// Every chunk of every map, in chunk-number order per map.
    pub chunks: Vec<Chunk>,
    /// The initial singleton world state: Day, zero ticks elapsed.
    pub state: WorldState,
    /// The grid dimensions both maps share.
    pub topology: GridTopology,
}

impl SeededWorld {
    /// The first Desert chunk of the given turn's map -- the spawn point.
    pub fn spawn_chunk(&self, turn: TurnPhase) -> Option<ChunkId> {
        self.chunks
            .iter()
            .find(|c| c.turn == turn && c.biome == Biome::Desert)
            .map(|c| c.id)
    }
}

/// Biome for a chunk number, striped by row: Desert, Jungle, Forest,
/// Ocean, repeating. Deterministic so seeding is reproducible.
fn biome_for(chunk_number: u32, width: u32) -> Biome {
    // Callers guarantee chunk_number >= 1 and width >= 1.
    let row = chunk_number
        .saturating_sub(1)
        .checked_div(width)
        .unwrap_or(0);
    match row.checked_rem(4).unwrap_or(0) {
        0 => Biome::Desert,
        1 => Biome::Jungle,
        2 => Biome::Forest,
        _ => Biome::Ocean,
    }
}

/// Create the default world: a Day and a Night map named
/// [`DEFAULT_MAP_NAME`], each with a full 32x32 chunk grid.
///
/// # Errors
///
/// Returns [`WorldError::InvalidGrid`] if the dimensions are bad
/// (cannot happen for the defaults).
pub fn create_default_world() -> Result<SeededWorld, WorldError> {
    create_world(
        DEFAULT_MAP_NAME,
        DEFAULT_GRID_WIDTH,
        DEFAULT_CHUNK_COUNT,
        DEFAULT_TICKS_PER_TURN,
    )
}

/// Create a world with explicit dimensions.
///
/// # Errors
///
/// Returns [`WorldError::InvalidGrid`] unless the dimensions satisfy
/// [`GridTopology::new`].
pub fn create_world(
    map_name: &str,
    width: u32,
    chunk_count: u32,
    ticks_per_turn: u32,
) -> Result<SeededWorld, WorldError> {
    let topology = GridTopology::new(width, chunk_count)?;

    let mut maps = Vec::with_capacity(2);
    let mut chunks = Vec::new();

    for turn in [TurnPhase::Day, TurnPhase::Night] {
        maps.push(GameMap {
            id: MapId::new(),
            name: map_name.to_owned(),
            turn,
        });
        for n in 1..=chunk_count {
            chunks.push(Chunk {
                id: ChunkId::new(n),
                biome: biome_for(n, width),
                map_name: map_name.to_owned(),
                turn,
            });
        }
    }

    tracing::info!(
        map = map_name,
        width,
        chunk_count,
        "seeded world with {} chunks across {} maps",
        chunks.len(),
        maps.len()
    );

    Ok(SeededWorld {
        maps,
        chunks,
        state: WorldState {
            turn: TurnPhase::Day,
            ticks_in_turn: 0,
            max_ticks_per_turn: ticks_per_turn,
        },
        topology,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_world_has_two_full_maps() {
        let world = create_default_world().unwrap();
        assert_eq!(world.maps.len(), 2);
        assert_eq!(world.chunks.len(), 2048);

        let day_chunks = world
            .chunks
            .iter()
            .filter(|c| c.turn == TurnPhase::Day)
            .count();
        assert_eq!(day_chunks, 1024);
    }

    #[test]
    fn starts_at_day_with_zero_ticks() {
        let world = create_default_world().unwrap();
        assert_eq!(world.state.turn, TurnPhase::Day);
        assert_eq!(world.state.ticks_in_turn, 0);
        assert_eq!(world.state.max_ticks_per_turn, 20);
    }

    #[test]
    fn every_biome_appears_on_each_map() {
        let world = create_default_world().unwrap();
        for turn in [TurnPhase::Day, TurnPhase::Night] {
            for biome in [Biome::Desert, Biome::Jungle, Biome::Forest, Biome::Ocean] {
                assert!(
                    world
                        .chunks
                        .iter()
                        .any(|c| c.turn == turn && c.biome == biome),
                    "{biome} missing from {turn} map"
                );
            }
        }
    }

    #[test]
    fn spawn_chunk_is_desert_chunk_one() {
        let world = create_default_world().unwrap();
        let spawn = world.spawn_chunk(TurnPhase::Day).unwrap();
        assert_eq!(spawn, ChunkId::new(1));
        let chunk = world
            .chunks
            .iter()
            .find(|c| c.turn == TurnPhase::Day && c.id == spawn)
            .unwrap();
        assert_eq!(chunk.biome, Biome::Desert);
    }

    #[test]
    fn biome_striping_by_row() {
        assert_eq!(biome_for(1, 32), Biome::Desert); // row 0
        assert_eq!(biome_for(33, 32), Biome::Jungle); // row 1
        assert_eq!(biome_for(65, 32), Biome::Forest); // row 2
        assert_eq!(biome_for(97, 32), Biome::Ocean); // row 3
        assert_eq!(biome_for(129, 32), Biome::Desert); // row 4 wraps
    }

    #[test]
    fn bad_dimensions_rejected() {
        assert!(create_world("Overworld", 32, 1000, 20).is_err());
    }
}
