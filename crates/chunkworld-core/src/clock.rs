//! World clock: the Day/Night turn cycle.
//!
//! The clock is the single source of truth for temporal state. Every
//! tick-consuming action (movement, for now) advances it by exactly one
//! tick; when the tick count reaches the configured threshold the turn
//! phase flips, the counter resets to zero in the same operation, and
//! the advance reports the transition. Ticks never carry across a
//! boundary and the stored count is always below the threshold.

use chunkworld_types::{ClockAdvance, TurnPhase, WorldState};
use tracing::info;

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Invalid clock configuration or restored state.
    #[error("invalid clock state: {reason}")]
    InvalidState {
        /// Explanation of what is wrong.
        reason: String,
    },
}

/// The Day/Night world clock.
///
/// Holds the current phase, the ticks consumed within it, and the
/// per-turn threshold. Invariant: `ticks < max_ticks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldClock {
    turn: TurnPhase,
    ticks: u32,
    max_ticks: u32,
}

impl WorldClock {
    /// Create a fresh clock at the start of Day with the given turn
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidState`] if `max_ticks` is zero.
    pub fn new(max_ticks: u32) -> Result<Self, ClockError> {
        if max_ticks == 0 {
            return Err(ClockError::InvalidState {
                reason: "max_ticks must be at least 1".to_owned(),
            });
        }
        Ok(Self {
            turn: TurnPhase::Day,
            ticks: 0,
            max_ticks,
        })
    }

    /// Restore a clock from a persisted world state.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidState`] if the threshold is zero or
    /// the stored tick count has already reached it (a normalized state
    /// always keeps `ticks < max_ticks`).
    pub fn from_state(state: WorldState) -> Result<Self, ClockError> {
        if state.max_ticks_per_turn == 0 {
            return Err(ClockError::InvalidState {
                reason: "max_ticks_per_turn must be at least 1".to_owned(),
            });
        }
        if state.ticks_in_turn >= state.max_ticks_per_turn {
            return Err(ClockError::InvalidState {
                reason: format!(
                    "ticks_in_turn {} has reached the threshold {}",
                    state.ticks_in_turn, state.max_ticks_per_turn
                ),
            });
        }
        Ok(Self {
            turn: state.turn,
            ticks: state.ticks_in_turn,
            max_ticks: state.max_ticks_per_turn,
        })
    }

    /// Snapshot the clock as a persistable world state.
    pub const fn to_state(self) -> WorldState {
        WorldState {
            turn: self.turn,
            ticks_in_turn: self.ticks,
            max_ticks_per_turn: self.max_ticks,
        }
    }

    /// The current turn phase.
    pub const fn turn(&self) -> TurnPhase {
        self.turn
    }

    /// Ticks consumed in the current turn.
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Ticks that make up one full turn.
    pub const fn max_ticks(&self) -> u32 {
        self.max_ticks
    }

    /// Ticks remaining before the next phase transition.
    pub const fn ticks_until_turn_change(&self) -> u32 {
        self.max_ticks.saturating_sub(self.ticks)
    }

    /// Advance the clock by one tick.
    ///
    /// Crossing the threshold flips the phase and resets the counter in
    /// the same call, so the clock is never observable in a saturated
    /// state. The returned [`ClockAdvance`] carries a transition
    /// narrative when the turn flipped and a progress report otherwise.
    pub fn advance(&mut self) -> ClockAdvance {
        let next = self.ticks.saturating_add(1);
        if next >= self.max_ticks {
            let old_turn = self.turn;
            self.turn = self.turn.toggled();
            self.ticks = 0;
            info!(from = %old_turn, to = %self.turn, "turn changed");
            let message = match self.turn {
                TurnPhase::Night => "Dusk falls; night settles over the world.".to_owned(),
                TurnPhase::Day => "A new day dawns over the world.".to_owned(),
            };
            return ClockAdvance {
                turn: self.turn,
                ticks: self.ticks,
                max_ticks: self.max_ticks,
                turn_changed: true,
                message,
            };
        }

        self.ticks = next;
        ClockAdvance {
            turn: self.turn,
            ticks: self.ticks,
            max_ticks: self.max_ticks,
            turn_changed: false,
            message: format!(
                "The {} wears on ({} of {} ticks).",
                self.turn, self.ticks, self.max_ticks
            ),
        }
    }
}
