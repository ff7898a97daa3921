//! Structured outcome types handed back to the presentation layer.
//!
//! Every core operation returns one of these instead of printing. Each
//! carries the structured fields the caller needs to render plus a
//! pre-composed human-readable message, mirroring the contract in the
//! external-interface section of the design docs.

use serde::{Deserialize, Serialize};

use crate::enums::{Biome, Direction, Material, TurnPhase};
use crate::ids::ChunkId;
use crate::structs::LocationRef;

// ---------------------------------------------------------------------------
// ClockAdvance
// ---------------------------------------------------------------------------

/// The result of advancing the world clock by one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockAdvance {
    /// The turn phase after the advance.
    pub turn: TurnPhase,
    /// Ticks consumed in the (possibly new) turn after the advance.
    pub ticks: u32,
    /// Ticks that make up one full turn.
    pub max_ticks: u32,
    /// Whether this tick crossed the threshold and flipped the turn.
    pub turn_changed: bool,
    /// Transition narrative or progress report for the caller to render.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Exit
// ---------------------------------------------------------------------------

/// One adjacent chunk a player could move to, with its presentation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// The neighboring chunk.
    pub chunk: ChunkId,
    /// The neighbor's biome.
    pub biome: Biome,
    /// Which way the neighbor lies from the player's chunk.
    pub direction: Direction,
}

// ---------------------------------------------------------------------------
// MoveOutcome
// ---------------------------------------------------------------------------

/// The result of a successful player move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The player's new location.
    pub location: LocationRef,
    /// Biome of the destination chunk.
    pub biome: Biome,
    /// True when the destination biome differs from the previous one.
    /// Display policy only: it selects "you arrived in X" over "moved".
    pub entered_new_biome: bool,
    /// Which way the player moved.
    pub direction: Direction,
    /// The clock tick this move consumed.
    pub clock: ClockAdvance,
    /// Arrival message for the caller to render.
    pub message: String,
}

// ---------------------------------------------------------------------------
// MineOutcome
// ---------------------------------------------------------------------------

/// The result of asking an NPC to mine.
///
/// A refusal (wrong role or action already spent) is a soft outcome, not
/// an error: the original game reports "cannot perform" and redisplays
/// the menu. Unknown materials, by contrast, are hard errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MineOutcome {
    /// The NPC mined successfully.
    Mined {
        /// The material that was mined.
        material: Material,
        /// Units drawn from the yield table.
        amount: u32,
    },
    /// The NPC declined to act; state was not mutated.
    NotPerformed {
        /// Why the NPC declined, for the caller to render.
        reason: String,
    },
}

impl MineOutcome {
    /// Whether the mining action actually happened.
    pub const fn performed(&self) -> bool {
        matches!(self, Self::Mined { .. })
    }
}

// ---------------------------------------------------------------------------
// BuildOutcome
// ---------------------------------------------------------------------------

/// The result of asking an NPC to build.
///
/// On success this describes the placement; the caller (not the NPC)
/// creates the corresponding registry row from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildOutcome {
    /// A totem was built at the builder's chunk.
    Totem {
        /// Where the totem stands.
        chunk: ChunkId,
        /// Placement message for the caller to render.
        message: String,
    },
    /// A bridge was built from the builder's chunk.
    Bridge {
        /// The builder's chunk.
        origin: ChunkId,
        /// The far end, when the caller supplied one.
        destination: Option<ChunkId>,
        /// Placement message for the caller to render.
        message: String,
    },
    /// The NPC declined to act; no resources were spent.
    NotPerformed {
        /// Why the NPC declined, for the caller to render.
        reason: String,
    },
}

impl BuildOutcome {
    /// Whether the construction actually happened.
    pub const fn performed(&self) -> bool {
        !matches!(self, Self::NotPerformed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mine_outcome_performed() {
        let mined = MineOutcome::Mined {
            material: Material::Coal,
            amount: 4,
        };
        assert!(mined.performed());

        let skipped = MineOutcome::NotPerformed {
            reason: String::from("cannot perform"),
        };
        assert!(!skipped.performed());
    }

    #[test]
    fn build_outcome_performed() {
        let totem = BuildOutcome::Totem {
            chunk: ChunkId::new(9),
            message: String::from("Totem built at chunk 9"),
        };
        assert!(totem.performed());

        let skipped = BuildOutcome::NotPerformed {
            reason: String::from("cannot build"),
        };
        assert!(!skipped.performed());
    }
}
