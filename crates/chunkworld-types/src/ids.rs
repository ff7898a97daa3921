//! Type-safe identifier wrappers.
//!
//! Entities with surrogate identity (players, NPCs, maps, bridges, totems)
//! wrap a [`Uuid`] so identifiers cannot be mixed at compile time. All
//! surrogate IDs use UUID v7 (time-ordered) for efficient indexing by
//! whatever store the embedding application wires in.
//!
//! [`ChunkId`] is deliberately different: the chunk number *is* the grid
//! position (column and row derive from it), so it wraps a plain `u32`
//! and supports the arithmetic the topology needs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a player character.
    PlayerId
}

define_id! {
    /// Unique identifier for an NPC (ghost).
    NpcId
}

define_id! {
    /// Unique identifier for a map (one per name/turn combination).
    MapId
}

define_id! {
    /// Unique identifier for a bridge placed between two chunks.
    BridgeId
}

define_id! {
    /// Unique identifier for a totem placed at a chunk.
    TotemId
}

/// Identifier of a chunk on the world grid.
///
/// Chunk numbers start at 1 and run to the configured chunk count. The
/// number alone determines the grid position: column `(n - 1) % width`,
/// row `(n - 1) / width`. Because of that, this ID is numeric rather
/// than a UUID -- the topology does arithmetic on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ChunkId(pub u32);

impl ChunkId {
    /// Wrap a raw chunk number.
    pub const fn new(n: u32) -> Self {
        Self(n)
    }

    /// Return the raw chunk number.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ChunkId {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl From<ChunkId> for u32 {
    fn from(id: ChunkId) -> Self {
        id.0
    }
}
