//! Construction: builder-role structure assembly.
//!
//! A builder spends its single per-round action to raise either a totem
//! or a bridge, paying a fixed material cost out of a shared resource
//! pool. Costs are settled atomically through
//! [`inventory::deduct_all`]: a shortfall on any line leaves the pool
//! untouched and surfaces as a hard error, while role and spent-action
//! refusals stay soft ([`BuildOutcome::NotPerformed`]).

use std::collections::BTreeMap;

use tracing::{debug, info};

use chunkworld_types::{BuildOutcome, ChunkId, ConstructionKind, Material, Npc, NpcRole};

use crate::error::ActorError;
use crate::inventory;

/// Fixed material cost of building the given structure.
#[must_use]
pub const fn cost_of(kind: ConstructionKind) -> &'static [(Material, u32)] {
    match kind {
        ConstructionKind::Totem => &[
            (Material::Stone, 10),
            (Material::Coal, 3),
            (Material::Redstone, 1),
        ],
        ConstructionKind::Bridge => &[(Material::Wood, 15), (Material::Stone, 10)],
    }
}

/// Parse a user-supplied construction name (case-insensitive).
///
/// # Errors
///
/// Returns [`ActorError::InvalidConstruction`] when the name matches no
/// known structure kind.
pub fn construction_from_name(name: &str) -> Result<ConstructionKind, ActorError> {
    match name.trim().to_lowercase().as_str() {
        "totem" => Ok(ConstructionKind::Totem),
        "bridge" => Ok(ConstructionKind::Bridge),
        _ => Err(ActorError::InvalidConstruction {
            name: name.to_owned(),
        }),
    }
}

/// Attempt one build action for `npc`.
///
/// For bridges, `destination` names the chunk the bridge should reach;
/// it is carried through to the outcome so the caller can register the
/// span. Totems ignore it. On success the cost is deducted from
/// `resources`, the NPC's action is marked spent and its last build is
/// recorded.
///
/// # Errors
///
/// Returns [`ActorError::InsufficientResources`] when the pool cannot
/// cover the full cost. Role and spent-action refusals are reported as
/// [`BuildOutcome::NotPerformed`], not errors.
pub fn build(
    npc: &mut Npc,
    kind: ConstructionKind,
    resources: &mut BTreeMap<Material, u32>,
    destination: Option<ChunkId>,
) -> Result<BuildOutcome, ActorError> {
    if npc.role != NpcRole::Builder {
        debug!(npc_id = %npc.id, role = %npc.role, "non-builder cannot build");
        return Ok(BuildOutcome::NotPerformed {
            reason: format!("{} cannot perform construction", npc.role),
        });
    }
    if npc.action_spent {
        debug!(npc_id = %npc.id, "builder already acted this turn");
        return Ok(BuildOutcome::NotPerformed {
            reason: "this builder has already spent its action".to_owned(),
        });
    }

    inventory::deduct_all(resources, cost_of(kind))?;

    npc.action_spent = true;
    npc.built = Some(kind);
    info!(npc_id = %npc.id, %kind, chunk = %npc.chunk, "construction completed");

    let outcome = match kind {
        ConstructionKind::Totem => BuildOutcome::Totem {
            chunk: npc.chunk,
            message: format!("a totem now stands in Chunk {}", npc.chunk),
        },
        ConstructionKind::Bridge => {
            let message = match destination {
                Some(to) => format!("a bridge now spans Chunk {} to Chunk {to}", npc.chunk),
                None => format!("a bridge juts out from Chunk {}, reaching nowhere yet", npc.chunk),
            };
            BuildOutcome::Bridge {
                origin: npc.chunk,
                destination,
                message,
            }
        }
    };
    Ok(outcome)
}
