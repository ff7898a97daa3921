//! Actor behaviour for the chunk world: the NPC economy and player
//! vitals.
//!
//! NPCs come in two roles. Miners extract materials from the world's
//! yield tables; builders spend those materials on structures (totems
//! and bridges). Both roles share a one-action-per-round budget that is
//! only ever reset explicitly. Players carry health, strength and an
//! experience-driven level curve.
//!
//! Everything here is pure world-model logic: randomness is injected
//! through [`rand::Rng`] and resource pools are caller-owned maps, so
//! the crate stays deterministic under test and agnostic about storage.

pub mod construction;
pub mod error;
pub mod inventory;
pub mod mining;
pub mod player;

pub use construction::{build, construction_from_name, cost_of};
pub use error::ActorError;
pub use mining::{MINEABLE_MATERIALS, material_from_name, mine, reset_action, yield_range};
pub use player::{
    STARTING_MAX_HEALTH, STARTING_STRENGTH, experience_to_level, gain_experience, heal,
    health_fraction, is_alive, new_player, take_damage,
};
