//! Grid topology: the mapping from chunk numbers to positions and
//! neighborhoods.
//!
//! Chunk numbers are 1-based and fill the grid row by row, so for a grid
//! of width `W` the column of chunk `n` is `(n - 1) % W` and the row is
//! `(n - 1) / W`. Adjacency is the 4-neighborhood computed from those
//! positions -- no diagonals, and no wrapping from the rightmost column
//! of one row to the leftmost column of the next. A historical variant
//! used the purely numeric test `|a - b| in {1, W}`, which wraps across
//! row boundaries; that definition is wrong and is not implemented here.

use std::collections::BTreeSet;

use chunkworld_types::{ChunkId, Direction};

use crate::error::WorldError;

/// The fixed-size grid a map's chunks occupy.
///
/// Holds only the dimensions; chunk records themselves live in the store
/// and the [`crate::chunk_cache::ChunkCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridTopology {
    width: u32,
    chunk_count: u32,
}

impl GridTopology {
    /// Create a topology for a grid of `width` columns and `chunk_count`
    /// total chunks.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidGrid`] unless `width >= 1` and
    /// `chunk_count` is a positive multiple of `width` (whole rows only).
    pub fn new(width: u32, chunk_count: u32) -> Result<Self, WorldError> {
        if width == 0 {
            return Err(WorldError::InvalidGrid {
                reason: String::from("width must be at least 1"),
            });
        }
        if chunk_count == 0 {
            return Err(WorldError::InvalidGrid {
                reason: String::from("chunk count must be at least 1"),
            });
        }
        if chunk_count.checked_rem(width) != Some(0) {
            return Err(WorldError::InvalidGrid {
                reason: format!("chunk count {chunk_count} is not a multiple of width {width}"),
            });
        }
        Ok(Self { width, chunk_count })
    }

    /// Number of columns in the grid.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Total number of chunks in the grid.
    pub const fn chunk_count(&self) -> u32 {
        self.chunk_count
    }

    /// Whether the chunk number falls inside the grid.
    pub const fn contains(&self, chunk: ChunkId) -> bool {
        let n = chunk.get();
        n >= 1 && n <= self.chunk_count
    }

    /// Zero-based column of the chunk.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ChunkOutOfBounds`] if the chunk is not in
    /// the grid.
    pub fn column(&self, chunk: ChunkId) -> Result<u32, WorldError> {
        if !self.contains(chunk) {
            return Err(WorldError::ChunkOutOfBounds(chunk));
        }
        chunk
            .get()
            .checked_sub(1)
            .and_then(|n| n.checked_rem(self.width))
            .ok_or(WorldError::ArithmeticOverflow)
    }

    /// Zero-based row of the chunk.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ChunkOutOfBounds`] if the chunk is not in
    /// the grid.
    pub fn row(&self, chunk: ChunkId) -> Result<u32, WorldError> {
        if !self.contains(chunk) {
            return Err(WorldError::ChunkOutOfBounds(chunk));
        }
        chunk
            .get()
            .checked_sub(1)
            .and_then(|n| n.checked_div(self.width))
            .ok_or(WorldError::ArithmeticOverflow)
    }

    /// The up-to-four position-based neighbors of a chunk.
    ///
    /// Left and right neighbors exist only within the chunk's own row;
    /// up and down neighbors exist only within the grid bounds. The
    /// result never contains the chunk itself, and membership is
    /// symmetric: `b in adjacent(a)` iff `a in adjacent(b)`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ChunkOutOfBounds`] if the chunk is not in
    /// the grid.
    pub fn adjacent(&self, chunk: ChunkId) -> Result<BTreeSet<ChunkId>, WorldError> {
        let n = chunk.get();
        let col = self.column(chunk)?;

        let mut neighbors = BTreeSet::new();

        // Left: stay in the same row.
        if col > 0
            && let Some(left) = n.checked_sub(1)
        {
            neighbors.insert(ChunkId::new(left));
        }

        // Right: stay in the same row and inside the grid.
        if let Some(right_col) = col.checked_add(1)
            && right_col < self.width
            && let Some(right) = n.checked_add(1)
            && right <= self.chunk_count
        {
            neighbors.insert(ChunkId::new(right));
        }

        // Up: one full row back, if it stays positive.
        if let Some(up) = n.checked_sub(self.width)
            && up >= 1
        {
            neighbors.insert(ChunkId::new(up));
        }

        // Down: one full row forward, if it stays inside the grid.
        if let Some(down) = n.checked_add(self.width)
            && down <= self.chunk_count
        {
            neighbors.insert(ChunkId::new(down));
        }

        Ok(neighbors)
    }

    /// The presentation direction from one chunk to another.
    ///
    /// A difference of exactly one column or one row maps to the four
    /// cardinal labels. Larger differences along a single axis map to
    /// the "distant" variants. Anything else -- including chunks outside
    /// the grid -- is [`Direction::Unresolved`].
    pub fn direction_between(&self, from: ChunkId, to: ChunkId) -> Direction {
        let (Ok(from_row), Ok(to_row)) = (self.row(from), self.row(to)) else {
            return Direction::Unresolved;
        };

        let diff = i64::from(to.get()).saturating_sub(i64::from(from.get()));
        let width = i64::from(self.width);

        match diff {
            1 => Direction::Right,
            -1 => Direction::Left,
            d if d == width => Direction::Down,
            d if d == width.saturating_neg() => Direction::Up,
            d if from_row == to_row && d > 0 => Direction::DistantRight,
            d if from_row == to_row && d < 0 => Direction::DistantLeft,
            d if d.checked_rem(width) == Some(0) && d > 0 => Direction::DistantDown,
            d if d.checked_rem(width) == Some(0) && d < 0 => Direction::DistantUp,
            _ => Direction::Unresolved,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// The standard 32-wide, 32-row grid used by the main map.
    fn standard_grid() -> GridTopology {
        GridTopology::new(32, 1024).unwrap()
    }

    fn adjacent_numbers(grid: &GridTopology, n: u32) -> BTreeSet<u32> {
        grid.adjacent(ChunkId::new(n))
            .unwrap()
            .into_iter()
            .map(ChunkId::get)
            .collect()
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(GridTopology::new(0, 32).is_err());
        assert!(GridTopology::new(32, 0).is_err());
        // 1000 is not a multiple of 32 -- partial rows are not allowed.
        assert!(GridTopology::new(32, 1000).is_err());
        assert!(GridTopology::new(32, 1024).is_ok());
    }

    #[test]
    fn positions_derive_from_chunk_number() {
        let grid = standard_grid();
        assert_eq!(grid.column(ChunkId::new(1)).unwrap(), 0);
        assert_eq!(grid.row(ChunkId::new(1)).unwrap(), 0);
        assert_eq!(grid.column(ChunkId::new(32)).unwrap(), 31);
        assert_eq!(grid.row(ChunkId::new(32)).unwrap(), 0);
        assert_eq!(grid.column(ChunkId::new(33)).unwrap(), 0);
        assert_eq!(grid.row(ChunkId::new(33)).unwrap(), 1);
    }

    #[test]
    fn top_left_corner_has_two_neighbors() {
        let grid = standard_grid();
        assert_eq!(adjacent_numbers(&grid, 1), BTreeSet::from([2, 33]));
    }

    #[test]
    fn bottom_right_corner_has_two_neighbors() {
        let grid = standard_grid();
        assert_eq!(adjacent_numbers(&grid, 1024), BTreeSet::from([1023, 992]));
    }

    #[test]
    fn interior_chunk_has_four_neighbors() {
        let grid = standard_grid();
        assert_eq!(
            adjacent_numbers(&grid, 500),
            BTreeSet::from([499, 501, 468, 532])
        );
    }

    #[test]
    fn no_wrap_across_row_boundary() {
        let grid = standard_grid();
        // Chunk 32 ends row 0; chunk 33 starts row 1. The numeric-distance
        // definition would call them adjacent; the positional one must not.
        assert!(!adjacent_numbers(&grid, 32).contains(&33));
        assert!(!adjacent_numbers(&grid, 33).contains(&32));
    }

    #[test]
    fn adjacency_never_includes_self_and_is_symmetric() {
        let grid = standard_grid();
        for n in 1..=1024_u32 {
            let neighbors = grid.adjacent(ChunkId::new(n)).unwrap();
            assert!(!neighbors.contains(&ChunkId::new(n)));
            for neighbor in neighbors {
                let back = grid.adjacent(neighbor).unwrap();
                assert!(back.contains(&ChunkId::new(n)));
            }
        }
    }

    #[test]
    fn out_of_bounds_chunk_rejected() {
        let grid = standard_grid();
        assert!(grid.adjacent(ChunkId::new(0)).is_err());
        assert!(grid.adjacent(ChunkId::new(1025)).is_err());
    }

    #[test]
    fn cardinal_directions() {
        let grid = standard_grid();
        let here = ChunkId::new(100);
        assert_eq!(grid.direction_between(here, ChunkId::new(101)), Direction::Right);
        assert_eq!(grid.direction_between(here, ChunkId::new(99)), Direction::Left);
        assert_eq!(grid.direction_between(here, ChunkId::new(132)), Direction::Down);
        assert_eq!(grid.direction_between(here, ChunkId::new(68)), Direction::Up);
    }

    #[test]
    fn distant_directions() {
        let grid = standard_grid();
        let here = ChunkId::new(100);
        // 100 and 103 share row 3; three columns apart.
        assert_eq!(
            grid.direction_between(here, ChunkId::new(103)),
            Direction::DistantRight
        );
        assert_eq!(
            grid.direction_between(here, ChunkId::new(97)),
            Direction::DistantLeft
        );
        // Two full rows in either direction.
        assert_eq!(
            grid.direction_between(here, ChunkId::new(164)),
            Direction::DistantDown
        );
        assert_eq!(
            grid.direction_between(here, ChunkId::new(36)),
            Direction::DistantUp
        );
    }

    #[test]
    fn unrelated_chunks_are_unresolved() {
        let grid = standard_grid();
        // Different row, not a multiple of the width apart.
        assert_eq!(
            grid.direction_between(ChunkId::new(100), ChunkId::new(135)),
            Direction::Unresolved
        );
        // Out of bounds.
        assert_eq!(
            grid.direction_between(ChunkId::new(100), ChunkId::new(5000)),
            Direction::Unresolved
        );
    }
}
