//! Player vitals and progression.
//!
//! Health is clamped to `0..=max_health`, experience drives a simple
//! level curve (level `n` is held until the running total reaches
//! `n * 100` XP) and levelling raises the health ceiling, restores the
//! player and strengthens them.

use tracing::info;

use chunkworld_types::Player;

use crate::error::ActorError;

/// Starting vitals for a freshly created player.
pub const STARTING_MAX_HEALTH: u32 = 100;
/// Starting strength for a freshly created player.
pub const STARTING_STRENGTH: u32 = 10;

/// Experience required to advance past the given level.
#[must_use]
pub const fn experience_to_level(level: u32) -> u32 {
    level.saturating_mul(100)
}

/// Create a new player with default vitals and no location.
#[must_use]
pub fn new_player(name: impl Into<String>) -> Player {
    Player {
        id: chunkworld_types::PlayerId::new(),
        name: name.into(),
        max_health: STARTING_MAX_HEALTH,
        health: STARTING_MAX_HEALTH,
        strength: STARTING_STRENGTH,
        level: 1,
        experience: 0,
        location: None,
        created_at: chrono::Utc::now(),
    }
}

/// Whether the player still has health remaining.
#[must_use]
pub const fn is_alive(player: &Player) -> bool {
    player.health > 0
}

/// Current health as a fraction of the maximum, in `0.0..=1.0`.
#[must_use]
pub fn health_fraction(player: &Player) -> f64 {
    if player.max_health == 0 {
        return 0.0;
    }
    // Float division; the divisor is nonzero here.
    #[allow(clippy::arithmetic_side_effects)]
    let fraction = f64::from(player.health) / f64::from(player.max_health);
    fraction
}

/// Apply damage, saturating at zero health.
pub fn take_damage(player: &mut Player, amount: u32) {
    player.health = player.health.saturating_sub(amount);
    info!(player_id = %player.id, amount, health = player.health, "player took damage");
}

/// Restore health, capped at the player's maximum.
pub fn heal(player: &mut Player, amount: u32) {
    player.health = player.health.saturating_add(amount).min(player.max_health);
    info!(player_id = %player.id, amount, health = player.health, "player healed");
}

/// Grant experience and apply any level-ups it unlocks.
///
/// Experience is a running total that is never spent: the player
/// advances while the total meets the current level's threshold.
/// Each level raises `max_health` by 10, fully restores health and
/// adds 2 strength. Multiple thresholds can be crossed by a single
/// grant.
///
/// # Errors
///
/// Returns [`ActorError::ArithmeticOverflow`] if the experience total
/// would exceed `u32::MAX`.
pub fn gain_experience(player: &mut Player, amount: u32) -> Result<(), ActorError> {
    player.experience = player.experience.checked_add(amount).ok_or_else(|| {
        ActorError::ArithmeticOverflow {
            context: format!("granting {amount} experience overflows the total"),
        }
    })?;

    while player.experience >= experience_to_level(player.level) {
        player.level = player.level.saturating_add(1);
        player.max_health = player.max_health.saturating_add(10);
        player.health = player.max_health;
        player.strength = player.strength.saturating_add(2);
        info!(
            player_id = %player.id,
            level = player.level,
            max_health = player.max_health,
            strength = player.strength,
            "player levelled up"
        );
    }
    Ok(())
}
