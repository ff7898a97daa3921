//! Orchestration for Chunkworld: the world clock, movement resolution,
//! the persistence seam, and the game session that ties them to the
//! spatial and actor crates.
//!
//! # Modules
//!
//! - [`clock`] -- [`WorldClock`]: the Day/Night turn cycle.
//! - [`config`] -- [`GameConfig`]: YAML configuration with stock
//!   defaults.
//! - [`error`] -- [`CoreError`]: the session-level error taxonomy.
//! - [`movement`] -- Target parsing, labeled exits, and the adjacency
//!   gate.
//! - [`session`] -- [`GameSession`]: load, mutate, write back.
//! - [`store`] -- Store traits and the in-memory implementation.

pub mod clock;
pub mod config;
pub mod error;
pub mod movement;
pub mod session;
pub mod store;

pub use clock::{ClockError, WorldClock};
pub use config::{ConfigError, GameConfig};
pub use error::CoreError;
pub use session::GameSession;
pub use store::{ChunkStore, GameStore, MapStore, MemoryStore, NpcStore, PlayerStore, WorldStore};
