//! Error types for game-session orchestration.

use chunkworld_actors::ActorError;
use chunkworld_types::{ChunkId, NpcId, PlayerId, TurnPhase};
use chunkworld_world::WorldError;

use crate::clock::ClockError;
use crate::config::ConfigError;

/// Errors surfaced by session operations.
///
/// Most variants are recoverable: the caller reports them and the game
/// continues. A missing world-state row means the world was never
/// seeded (or the store lost it), which nothing at this layer can
/// repair.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No player with the given ID exists in the store.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    /// No NPC with the given ID exists in the store.
    #[error("NPC {0} not found")]
    NpcNotFound(NpcId),

    /// No map row exists for the (name, turn) pair.
    #[error("map '{name}' has no {turn} variant")]
    MapNotFound {
        /// The map name that was looked up.
        name: String,
        /// The turn phase that was looked up.
        turn: TurnPhase,
    },

    /// The chunk does not exist on the named map.
    #[error("chunk {chunk} does not exist on map '{map}'")]
    ChunkNotFound {
        /// The map the lookup ran against.
        map: String,
        /// The chunk number that was looked up.
        chunk: ChunkId,
    },

    /// The map holds no Desert chunk, so there is nowhere to spawn.
    #[error("map '{map}' has no desert chunk to spawn on")]
    NoSpawnChunk {
        /// The map that was searched.
        map: String,
    },

    /// The player has no location yet (never spawned into the world).
    #[error("player {0} has no location")]
    PlayerNotPlaced(PlayerId),

    /// The singleton world-state row is missing. Fatal: the world was
    /// never seeded.
    #[error("world state missing; the world has not been seeded")]
    WorldStateMissing,

    /// A movement target could not be parsed into a chunk reference.
    #[error("'{input}' is not a chunk reference")]
    InvalidLocation {
        /// The raw input that failed to parse.
        input: String,
    },

    /// The target chunk is neither adjacent nor bridged.
    #[error("chunk {to} cannot be reached from chunk {from}")]
    NotAdjacent {
        /// Where the player stands.
        from: ChunkId,
        /// Where they tried to go.
        to: ChunkId,
    },

    /// A spatial or registry operation failed.
    #[error(transparent)]
    World(#[from] WorldError),

    /// An actor operation failed.
    #[error(transparent)]
    Actor(#[from] ActorError),

    /// The world clock rejected its configuration or restored state.
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CoreError {
    /// Whether the caller can report this error and keep playing.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::WorldStateMissing)
    }
}
