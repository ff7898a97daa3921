//! Error types for the `chunkworld-actors` crate.
//!
//! Soft refusals (an NPC declining to act) are NOT errors -- they are
//! `NotPerformed` outcome variants, because the game treats them as a
//! message to redisplay, not a failure. Errors here are the hard cases:
//! unknown names from the boundary, resource shortfalls, and arithmetic
//! failures.

use chunkworld_types::Material;

/// Errors that can occur during player and NPC operations.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// A material name from the boundary matched no known material.
    #[error("unknown material: {name}")]
    InvalidMaterial {
        /// The unrecognized name as received.
        name: String,
    },

    /// A construction name from the boundary matched no known kind.
    #[error("unknown construction type: {name}")]
    InvalidConstruction {
        /// The unrecognized name as received.
        name: String,
    },

    /// A construction cost could not be covered. Reports exactly which
    /// material is short and by how much; nothing was deducted.
    #[error("missing {missing} {material} (have {available}, need {required})")]
    InsufficientResources {
        /// The material that fell short.
        material: Material,
        /// Units the cost table demands.
        required: u32,
        /// Units the inventory actually holds.
        available: u32,
        /// The deficit (`required - available`).
        missing: u32,
    },

    /// An arithmetic overflow occurred during a checked computation.
    #[error("arithmetic overflow in actor computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
