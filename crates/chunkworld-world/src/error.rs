//! Error types for the `chunkworld-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`] through the
//! standard [`Result`] type alias.

use chunkworld_types::{BridgeId, ChunkId, TotemId};

/// Errors that can occur during spatial and registry operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The grid dimensions are unusable.
    #[error("invalid grid: {reason}")]
    InvalidGrid {
        /// Explanation of what is wrong with the dimensions.
        reason: String,
    },

    /// The chunk number falls outside the grid.
    #[error("chunk {0} is outside the grid")]
    ChunkOutOfBounds(ChunkId),

    /// A bridge was not found in the registry.
    #[error("bridge not found: {0}")]
    BridgeNotFound(BridgeId),

    /// A totem was not found in the registry.
    #[error("totem not found: {0}")]
    TotemNotFound(TotemId),

    /// A bridge must link two distinct chunks.
    #[error("a bridge cannot link chunk {0} to itself")]
    SelfBridge(ChunkId),

    /// An active bridge already links the two chunks.
    #[error("an active bridge already links chunk {origin} and chunk {destination}")]
    DuplicateBridge {
        /// One end of the existing link.
        origin: ChunkId,
        /// The other end of the existing link.
        destination: ChunkId,
    },

    /// Arithmetic overflow during a checked operation.
    #[error("arithmetic overflow in world calculation")]
    ArithmeticOverflow,
}
