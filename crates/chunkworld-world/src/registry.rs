//! Registry of placed structures: bridges and totems.
//!
//! Structures enter the registry as a side effect of successful NPC
//! construction (the caller turns a `BuildOutcome` into a row here).
//! Rows are deactivated, never deleted, so the placement history stays
//! queryable.

use std::collections::BTreeMap;

use chrono::Utc;
use chunkworld_types::{Bridge, BridgeId, ChunkId, Material, Totem, TotemId};

use crate::error::WorldError;

/// All placed bridges and totems, indexed by their identifiers.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct StructureRegistry {
    bridges: BTreeMap<BridgeId, Bridge>,
    totems: BTreeMap<TotemId, Totem>,
}

impl StructureRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            bridges: BTreeMap::new(),
            totems: BTreeMap::new(),
        }
    }

    // -------------------------------------------------------------------
    // Bridges
    // -------------------------------------------------------------------

    /// Whether an active bridge links the two chunks, in either
    /// orientation. Deactivated rows do not count.
    pub fn bridge_exists_between(&self, a: ChunkId, b: ChunkId) -> bool {
        self.bridges.values().any(|bridge| {
            bridge.active
                && ((bridge.origin == a && bridge.destination == b)
                    || (bridge.origin == b && bridge.destination == a))
        })
    }

    /// Place a new bridge between two distinct chunks.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::SelfBridge`] if both ends are the same
    /// chunk, or [`WorldError::DuplicateBridge`] if an active bridge
    /// already links the pair -- placement is idempotent per pair.
    pub fn place_bridge(
        &mut self,
        origin: ChunkId,
        destination: ChunkId,
        material: Material,
    ) -> Result<BridgeId, WorldError> {
        if origin == destination {
            return Err(WorldError::SelfBridge(origin));
        }
        if self.bridge_exists_between(origin, destination) {
            return Err(WorldError::DuplicateBridge {
                origin,
                destination,
            });
        }

        let bridge = Bridge {
            id: BridgeId::new(),
            origin,
            destination,
            material,
            active: true,
            created_at: Utc::now(),
        };
        let id = bridge.id;
        tracing::info!(%id, %origin, %destination, material = %material, "bridge placed");
        self.bridges.insert(id, bridge);
        Ok(id)
    }

    /// Mark a bridge inactive. The row survives.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BridgeNotFound`] if the ID is unknown.
    pub fn deactivate_bridge(&mut self, id: BridgeId) -> Result<(), WorldError> {
        let bridge = self
            .bridges
            .get_mut(&id)
            .ok_or(WorldError::BridgeNotFound(id))?;
        bridge.active = false;
        tracing::info!(%id, "bridge deactivated");
        Ok(())
    }

    /// Look up a bridge by ID.
    pub fn get_bridge(&self, id: BridgeId) -> Option<&Bridge> {
        self.bridges.get(&id)
    }

    /// Iterate over every bridge row, active or not.
    pub fn bridges(&self) -> impl Iterator<Item = &Bridge> {
        self.bridges.values()
    }

    /// Iterate over active bridges only.
    pub fn active_bridges(&self) -> impl Iterator<Item = &Bridge> {
        self.bridges.values().filter(|b| b.active)
    }

    // -------------------------------------------------------------------
    // Totems
    // -------------------------------------------------------------------

    /// Place a new totem at a chunk.
    pub fn place_totem(&mut self, name: &str, chunk: ChunkId, kind: &str) -> TotemId {
        let totem = Totem {
            id: TotemId::new(),
            name: name.to_owned(),
            chunk,
            kind: kind.to_owned(),
            active: true,
            created_at: Utc::now(),
        };
        let id = totem.id;
        tracing::info!(%id, %chunk, kind, "totem placed");
        self.totems.insert(id, totem);
        id
    }

    /// Mark a totem inactive. The row survives.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::TotemNotFound`] if the ID is unknown.
    pub fn deactivate_totem(&mut self, id: TotemId) -> Result<(), WorldError> {
        let totem = self
            .totems
            .get_mut(&id)
            .ok_or(WorldError::TotemNotFound(id))?;
        totem.active = false;
        tracing::info!(%id, "totem deactivated");
        Ok(())
    }

    /// Look up a totem by ID.
    pub fn get_totem(&self, id: TotemId) -> Option<&Totem> {
        self.totems.get(&id)
    }

    /// Iterate over every totem row, active or not.
    pub fn totems(&self) -> impl Iterator<Item = &Totem> {
        self.totems.values()
    }

    /// Iterate over active totems only.
    pub fn active_totems(&self) -> impl Iterator<Item = &Totem> {
        self.totems.values().filter(|t| t.active)
    }

    /// Active totems standing at a particular chunk.
    pub fn totems_at(&self, chunk: ChunkId) -> impl Iterator<Item = &Totem> {
        self.totems
            .values()
            .filter(move |t| t.active && t.chunk == chunk)
    }
}
