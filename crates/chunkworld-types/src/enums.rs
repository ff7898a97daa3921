//! Enumeration types for the Chunkworld game core.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Biomes
// ---------------------------------------------------------------------------

/// The biome a chunk carries. Every chunk has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Biome {
    /// Arid terrain with little vegetation. New players spawn here.
    Desert,
    /// Dense, humid tropical terrain.
    Jungle,
    /// Wooded terrain with abundant wildlife.
    Forest,
    /// Open salt water.
    Ocean,
}

impl Biome {
    /// Human-readable biome name for presentation-layer messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Desert => "Desert",
            Self::Jungle => "Jungle",
            Self::Forest => "Forest",
            Self::Ocean => "Ocean",
        }
    }
}

impl core::fmt::Display for Biome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Turn phases
// ---------------------------------------------------------------------------

/// The world clock's two states. Shared by the whole world; every map
/// exists in exactly one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Daytime.
    Day,
    /// Nighttime.
    Night,
}

impl TurnPhase {
    /// The opposite phase (Day <-> Night).
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    /// Human-readable phase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }
}

impl core::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

/// A mineable material. Mining yields and construction costs are keyed
/// on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Lumber. The bulk material for bridges.
    Wood,
    /// Raw stone. Used by both construction types.
    Stone,
    /// Iron ore.
    Iron,
    /// Coal. Fuel component of totems.
    Coal,
    /// Redstone dust. The rare activating component of totems.
    Redstone,
    /// Diamond. Rarest yield; a mining run may produce none.
    Diamond,
}

impl Material {
    /// Human-readable material name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Stone => "stone",
            Self::Iron => "iron",
            Self::Coal => "coal",
            Self::Redstone => "redstone",
            Self::Diamond => "diamond",
        }
    }
}

impl core::fmt::Display for Material {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// NPC roles
// ---------------------------------------------------------------------------

/// What an NPC does. Fixed at creation; behavior is keyed on the variant
/// rather than on subclassing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NpcRole {
    /// Extracts materials via the mining yield table.
    Miner,
    /// Spends materials via the construction cost table.
    Builder,
}

impl NpcRole {
    /// Human-readable role name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Miner => "miner",
            Self::Builder => "builder",
        }
    }
}

impl core::fmt::Display for NpcRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Construction kinds
// ---------------------------------------------------------------------------

/// What a builder NPC can construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConstructionKind {
    /// A marker placed at the builder's own chunk.
    Totem,
    /// A link from the builder's chunk to a destination chunk.
    Bridge,
}

impl ConstructionKind {
    /// Human-readable construction name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Totem => "totem",
            Self::Bridge => "bridge",
        }
    }
}

impl core::fmt::Display for ConstructionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// The direction from one chunk to another, as presented to the player.
///
/// The derived ordering is the presentation sort order: cardinal
/// directions first (Up, Down, Left, Right), then the distant variants
/// of each axis, with [`Direction::Unresolved`] always last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// One row up (`diff == -width`).
    Up,
    /// One row down (`diff == width`).
    Down,
    /// One column left (`diff == -1`).
    Left,
    /// One column right (`diff == 1`).
    Right,
    /// More than one row up.
    DistantUp,
    /// More than one row down.
    DistantDown,
    /// More than one column left, same row.
    DistantLeft,
    /// More than one column right, same row.
    DistantRight,
    /// No axis relationship could be determined.
    Unresolved,
}

impl Direction {
    /// The label shown to the player.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::DistantUp => "Up (distant)",
            Self::DistantDown => "Down (distant)",
            Self::DistantLeft => "Left (distant)",
            Self::DistantRight => "Right (distant)",
            Self::Unresolved => "Direction",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_phase_toggles() {
        assert_eq!(TurnPhase::Day.toggled(), TurnPhase::Night);
        assert_eq!(TurnPhase::Night.toggled(), TurnPhase::Day);
    }

    #[test]
    fn direction_sort_order() {
        let mut dirs = vec![
            Direction::Unresolved,
            Direction::Right,
            Direction::Up,
            Direction::DistantDown,
            Direction::Down,
            Direction::Left,
        ];
        dirs.sort();
        assert_eq!(
            dirs,
            vec![
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
                Direction::DistantDown,
                Direction::Unresolved,
            ]
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(Biome::Desert.to_string(), "Desert");
        assert_eq!(Material::Redstone.to_string(), "redstone");
        assert_eq!(NpcRole::Builder.to_string(), "builder");
        assert_eq!(Direction::DistantLeft.to_string(), "Left (distant)");
    }
}
