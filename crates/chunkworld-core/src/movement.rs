//! Movement resolution: target parsing and labeled exits.
//!
//! Players name their destination either as a bare chunk number
//! (`"42"`) or as a composite location string (`"Overworld - Chunk
//! 42"`). Parsing happens once, here, at the boundary; everything past
//! it works with [`ChunkId`]. Exits are the adjacency set of the
//! player's chunk dressed with biome and direction labels, sorted for
//! stable presentation.

use chunkworld_types::{Chunk, ChunkId, Exit};
use chunkworld_world::GridTopology;

use crate::error::CoreError;

/// Parse a movement target into a chunk number.
///
/// Accepts a bare integer, or a composite string whose last `Chunk N`
/// component names the chunk (separator style is not significant, so
/// hyphen and dash variants both work). The map portion of a composite
/// is ignored; the session resolves the map from the player's location.
///
/// # Errors
///
/// Returns [`CoreError::InvalidLocation`] if no chunk number can be
/// extracted, or the number is zero.
pub fn parse_target(input: &str) -> Result<ChunkId, CoreError> {
    let trimmed = input.trim();
    let invalid = || CoreError::InvalidLocation {
        input: input.to_owned(),
    };

    let digits = if trimmed.chars().all(|c| c.is_ascii_digit()) && !trimmed.is_empty() {
        trimmed
    } else {
        // Composite form: take what follows the last "Chunk" keyword.
        let (_, tail) = trimmed.rsplit_once("Chunk").ok_or_else(invalid)?;
        tail.trim()
    };

    let number: u32 = digits.parse().map_err(|_parse_err| invalid())?;
    if number == 0 {
        return Err(invalid());
    }
    Ok(ChunkId::new(number))
}

/// The labeled exits from a chunk.
///
/// `neighbors_of` resolves a [`ChunkId`] to its chunk record on the
/// player's current (map, turn) partition; neighbors missing from the
/// partition are skipped rather than reported. The result is sorted by
/// direction, then chunk number.
///
/// # Errors
///
/// Returns [`CoreError::World`] if `from` lies outside the grid.
pub fn labeled_exits<F>(
    topology: &GridTopology,
    from: ChunkId,
    neighbors_of: F,
) -> Result<Vec<Exit>, CoreError>
where
    F: Fn(ChunkId) -> Option<Chunk>,
{
    let mut exits: Vec<Exit> = topology
        .adjacent(from)?
        .into_iter()
        .filter_map(|id| {
            neighbors_of(id).map(|chunk| Exit {
                chunk: id,
                biome: chunk.biome,
                direction: topology.direction_between(from, id),
            })
        })
        .collect();
    exits.sort_by_key(|exit| (exit.direction, exit.chunk));
    Ok(exits)
}

/// Whether a move from `from` to `to` is allowed by the topology alone.
///
/// Bridged travel is layered on top of this by the session.
///
/// # Errors
///
/// Returns [`CoreError::World`] if `from` lies outside the grid.
pub fn is_adjacent(topology: &GridTopology, from: ChunkId, to: ChunkId) -> Result<bool, CoreError> {
    Ok(topology.adjacent(from)?.contains(&to))
}
