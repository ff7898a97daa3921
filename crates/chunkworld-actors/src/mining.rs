//! Mining: miner-role resource extraction.
//!
//! Each turn a miner may spend its single action to extract one
//! requested material. The quantity is drawn uniformly from a
//! per-material yield range, so common materials (wood, stone) come in
//! bulk while a diamond attempt is a coin flip between zero and one.

use rand::Rng;
use tracing::{debug, info};

use chunkworld_types::{Material, MineOutcome, Npc, NpcRole};

use crate::error::ActorError;

/// All mineable materials, in yield-table order.
pub const MINEABLE_MATERIALS: [Material; 6] = [
    Material::Wood,
    Material::Stone,
    Material::Iron,
    Material::Coal,
    Material::Redstone,
    Material::Diamond,
];

/// Inclusive yield range for one mining action of the given material.
#[must_use]
pub const fn yield_range(material: Material) -> (u32, u32) {
    match material {
        Material::Wood => (20, 30),
        Material::Stone => (10, 20),
        Material::Iron => (5, 10),
        Material::Coal => (3, 6),
        Material::Redstone => (1, 3),
        Material::Diamond => (0, 1),
    }
}

/// Parse a user-supplied material name (case-insensitive).
///
/// # Errors
///
/// Returns [`ActorError::InvalidMaterial`] when the name matches no
/// known material.
pub fn material_from_name(name: &str) -> Result<Material, ActorError> {
    match name.trim().to_lowercase().as_str() {
        "wood" => Ok(Material::Wood),
        "stone" => Ok(Material::Stone),
        "iron" => Ok(Material::Iron),
        "coal" => Ok(Material::Coal),
        "redstone" => Ok(Material::Redstone),
        "diamond" => Ok(Material::Diamond),
        _ => Err(ActorError::InvalidMaterial {
            name: name.to_owned(),
        }),
    }
}

/// Attempt to mine `material` with `npc`.
///
/// A non-miner, or a miner whose action is already spent, cannot mine;
/// those cases are soft refusals reported through
/// [`MineOutcome::NotPerformed`] rather than errors. On success the
/// NPC's action is marked spent and the drawn amount is returned;
/// crediting it to an inventory is the caller's job.
pub fn mine(npc: &mut Npc, material: Material, rng: &mut impl Rng) -> MineOutcome {
    if npc.role != NpcRole::Miner {
        debug!(npc_id = %npc.id, role = %npc.role, "non-miner cannot mine");
        return MineOutcome::NotPerformed {
            reason: format!("{} cannot perform mining", npc.role),
        };
    }
    if npc.action_spent {
        debug!(npc_id = %npc.id, "miner already acted this turn");
        return MineOutcome::NotPerformed {
            reason: "this miner has already spent its action".to_owned(),
        };
    }

    let (lo, hi) = yield_range(material);
    let amount = rng.random_range(lo..=hi);

    npc.action_spent = true;
    info!(npc_id = %npc.id, %material, amount, "mining action performed");

    MineOutcome::Mined { material, amount }
}

/// Clear an NPC's spent-action flag so it may act again.
///
/// Actions never reset implicitly; the surrounding game decides when a
/// new round of actions begins and calls this explicitly.
pub const fn reset_action(npc: &mut Npc) {
    npc.action_spent = false;
}
