//! Game session: the orchestration layer tying stores, the clock, the
//! grid, and the actors together.
//!
//! A [`GameSession`] owns a store (any [`GameStore`] implementation),
//! the grid topology, the structure registry, a chunk cache, and the
//! shared material stockpile NPCs mine into and build from. Every
//! operation follows the same shape: load the records it needs, run the
//! pure domain logic, write the mutated records back. Nothing below
//! this layer touches the store.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::{debug, info};

use chunkworld_actors as actors;
use chunkworld_actors::inventory;
use chunkworld_types::{
    Biome, BuildOutcome, Chunk, ChunkId, ClockAdvance, ConstructionKind, Exit, LocationRef,
    Material, MineOutcome, MoveOutcome, Npc, NpcId, NpcRole, Player, PlayerId, TurnPhase,
    WorldState,
};
use chunkworld_world::{ChunkCache, GridTopology, StructureRegistry, create_world};

use crate::clock::WorldClock;
use crate::config::GameConfig;
use crate::error::CoreError;
use crate::movement;
use crate::store::GameStore;

/// A running game over a backing store.
#[derive(Debug)]
pub struct GameSession<S: GameStore> {
    store: S,
    config: GameConfig,
    topology: GridTopology,
    registry: StructureRegistry,
    cache: ChunkCache,
    stockpile: BTreeMap<Material, u32>,
}

impl<S: GameStore> GameSession<S> {
    /// Seed a fresh world into an empty store and open a session on it.
    ///
    /// Creates the Day and Night map pair, their chunk grids, and the
    /// initial world state, all per the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::World`] if the configured grid dimensions
    /// are invalid.
    pub fn bootstrap(mut store: S, config: GameConfig) -> Result<Self, CoreError> {
        let seeded = create_world(
            &config.world.map_name,
            config.world.grid_width,
            config.world.chunk_count,
            config.time.ticks_per_turn,
        )?;

        for map in seeded.maps {
            store.put_map(map);
        }
        store.put_chunks(seeded.chunks);
        store.put_world_state(seeded.state);

        info!(map = %config.world.map_name, "session bootstrapped on a fresh world");
        Ok(Self {
            store,
            config,
            topology: seeded.topology,
            registry: StructureRegistry::new(),
            cache: ChunkCache::new(),
            stockpile: BTreeMap::new(),
        })
    }

    /// Open a session over an already-seeded store.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WorldStateMissing`] if the store holds no
    /// world state, or [`CoreError::World`] if the configured grid
    /// dimensions are invalid.
    pub fn resume(store: S, config: GameConfig) -> Result<Self, CoreError> {
        if store.world_state().is_none() {
            return Err(CoreError::WorldStateMissing);
        }
        let topology = GridTopology::new(config.world.grid_width, config.world.chunk_count)?;
        Ok(Self {
            store,
            config,
            topology,
            registry: StructureRegistry::new(),
            cache: ChunkCache::new(),
            stockpile: BTreeMap::new(),
        })
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// The grid shared by both maps.
    pub const fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// The placed bridges and totems.
    pub const fn registry(&self) -> &StructureRegistry {
        &self.registry
    }

    /// The shared material stockpile.
    pub const fn stockpile(&self) -> &BTreeMap<Material, u32> {
        &self.stockpile
    }

    /// The current world state.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WorldStateMissing`] if the world was never
    /// seeded.
    pub fn world_state(&self) -> Result<WorldState, CoreError> {
        self.store.world_state().ok_or(CoreError::WorldStateMissing)
    }

    /// Look up a player.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PlayerNotFound`] for an unknown ID.
    pub fn player(&self, id: PlayerId) -> Result<Player, CoreError> {
        self.store.player(id).ok_or(CoreError::PlayerNotFound(id))
    }

    /// Look up an NPC.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NpcNotFound`] for an unknown ID.
    pub fn npc(&self, id: NpcId) -> Result<Npc, CoreError> {
        self.store.npc(id).ok_or(CoreError::NpcNotFound(id))
    }

    // -------------------------------------------------------------------
    // Clock
    // -------------------------------------------------------------------

    /// Advance the world clock by one tick and persist the result.
    ///
    /// On a turn change the finished turn's chunk partition is dropped
    /// from the cache.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WorldStateMissing`] if the world was never
    /// seeded, or [`CoreError::Clock`] if the stored state is corrupt.
    pub fn advance_clock(&mut self) -> Result<ClockAdvance, CoreError> {
        let state = self.world_state()?;
        let old_turn = state.turn;
        let mut clock = WorldClock::from_state(state)?;
        let advance = clock.advance();
        self.store.put_world_state(clock.to_state());

        if advance.turn_changed {
            let map_name = self.config.world.map_name.clone();
            self.cache.invalidate(&map_name, old_turn);
        }
        Ok(advance)
    }

    // -------------------------------------------------------------------
    // Players
    // -------------------------------------------------------------------

    /// Create a player and place them on the first Desert chunk of the
    /// current turn's map.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WorldStateMissing`] if the world was never
    /// seeded, [`CoreError::MapNotFound`] if the current turn's map row
    /// is absent, or [`CoreError::NoSpawnChunk`] if the map holds no
    /// Desert chunk.
    pub fn create_player(&mut self, name: &str) -> Result<Player, CoreError> {
        let state = self.world_state()?;
        let map_name = self.config.world.map_name.clone();

        if self.store.map(&map_name, state.turn).is_none() {
            return Err(CoreError::MapNotFound {
                name: map_name,
                turn: state.turn,
            });
        }

        self.ensure_cached(&map_name, state.turn);
        let spawn = self
            .cache
            .get(&map_name, state.turn)
            .and_then(|chunks| chunks.iter().find(|c| c.biome == Biome::Desert))
            .map(|c| c.id)
            .ok_or_else(|| CoreError::NoSpawnChunk {
                map: map_name.clone(),
            })?;

        let mut player = actors::new_player(name);
        player.max_health = self.config.player.starting_health;
        player.health = self.config.player.starting_health;
        player.strength = self.config.player.starting_strength;
        player.location = Some(LocationRef {
            map: map_name,
            chunk: spawn,
        });

        info!(player_id = %player.id, name, "player created at spawn");
        self.store.put_player(player.clone());
        Ok(player)
    }

    /// Apply damage to a player and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PlayerNotFound`] for an unknown ID.
    pub fn damage_player(&mut self, id: PlayerId, amount: u32) -> Result<Player, CoreError> {
        let mut player = self.player(id)?;
        actors::take_damage(&mut player, amount);
        self.store.put_player(player.clone());
        Ok(player)
    }

    /// Heal a player and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PlayerNotFound`] for an unknown ID.
    pub fn heal_player(&mut self, id: PlayerId, amount: u32) -> Result<Player, CoreError> {
        let mut player = self.player(id)?;
        actors::heal(&mut player, amount);
        self.store.put_player(player.clone());
        Ok(player)
    }

    /// Grant experience to a player, applying level-ups, and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PlayerNotFound`] for an unknown ID, or
    /// [`CoreError::Actor`] if the experience total would overflow.
    pub fn award_experience(&mut self, id: PlayerId, amount: u32) -> Result<Player, CoreError> {
        let mut player = self.player(id)?;
        actors::gain_experience(&mut player, amount)?;
        self.store.put_player(player.clone());
        Ok(player)
    }

    // -------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------

    /// The labeled exits from the player's chunk, sorted by direction.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PlayerNotFound`] or
    /// [`CoreError::PlayerNotPlaced`] for a missing or unplaced player,
    /// and [`CoreError::WorldStateMissing`] for an unseeded world.
    pub fn look_around(&mut self, id: PlayerId) -> Result<Vec<Exit>, CoreError> {
        let state = self.world_state()?;
        let player = self.player(id)?;
        let location = player.location.ok_or(CoreError::PlayerNotPlaced(id))?;

        self.ensure_cached(&location.map, state.turn);
        let cache = &self.cache;
        movement::labeled_exits(&self.topology, location.chunk, |chunk| {
            cache.get_chunk(&location.map, state.turn, chunk).cloned()
        })
    }

    /// Move a player to a named target chunk, consuming one clock tick.
    ///
    /// The target may be a bare chunk number or a composite location
    /// string. The move is allowed when the target is grid-adjacent to
    /// the player's chunk or an active bridge links the pair.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLocation`] for an unparseable
    /// target, [`CoreError::ChunkNotFound`] if the target chunk does
    /// not exist on the player's map, [`CoreError::NotAdjacent`] if it
    /// is neither adjacent nor bridged, plus the player and world-state
    /// errors of [`Self::look_around`].
    pub fn move_player(&mut self, id: PlayerId, target: &str) -> Result<MoveOutcome, CoreError> {
        let state = self.world_state()?;
        let player = self.player(id)?;
        let location = player.location.clone().ok_or(CoreError::PlayerNotPlaced(id))?;

        let to = movement::parse_target(target)?;
        let from = location.chunk;

        let Some(destination) = self.cached_chunk(&location.map, state.turn, to) else {
            return Err(CoreError::ChunkNotFound {
                map: location.map,
                chunk: to,
            });
        };

        let reachable = movement::is_adjacent(&self.topology, from, to)?
            || self.registry.bridge_exists_between(from, to);
        if !reachable {
            return Err(CoreError::NotAdjacent { from, to });
        }

        let direction = self.topology.direction_between(from, to);
        let entered_new_biome = self
            .cached_chunk(&location.map, state.turn, from)
            .is_none_or(|origin| origin.biome != destination.biome);

        // The clock advances first: if the stored state is corrupt the
        // move fails before anything about the player is persisted.
        let clock = self.advance_clock()?;

        let new_location = LocationRef {
            map: location.map,
            chunk: to,
        };
        let mut moved = player;
        moved.location = Some(new_location.clone());
        self.store.put_player(moved);

        let message = if entered_new_biome {
            format!(
                "You cross into the {} at Chunk {to}. {}",
                destination.biome, clock.message
            )
        } else {
            format!(
                "You move {} to Chunk {to}. {}",
                direction.label(),
                clock.message
            )
        };
        info!(player_id = %id, %from, %to, %direction, "player moved");

        Ok(MoveOutcome {
            location: new_location,
            biome: destination.biome,
            entered_new_biome,
            direction,
            clock,
            message,
        })
    }

    // -------------------------------------------------------------------
    // NPCs
    // -------------------------------------------------------------------

    /// Create an NPC at a chunk.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ChunkNotFound`] if the chunk lies outside
    /// the grid.
    pub fn spawn_npc(&mut self, chunk: ChunkId, role: NpcRole) -> Result<Npc, CoreError> {
        if !self.topology.contains(chunk) {
            return Err(CoreError::ChunkNotFound {
                map: self.config.world.map_name.clone(),
                chunk,
            });
        }
        let npc = Npc::new(chunk, role);
        info!(npc_id = %npc.id, %chunk, role = %role, "NPC spawned");
        self.store.put_npc(npc.clone());
        Ok(npc)
    }

    /// Ask an NPC to mine a material. A successful yield is credited to
    /// the shared stockpile; refusals leave all state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NpcNotFound`] for an unknown ID, or
    /// [`CoreError::Actor`] if crediting the yield overflows the
    /// stockpile.
    pub fn npc_mine(
        &mut self,
        id: NpcId,
        material: Material,
        rng: &mut impl Rng,
    ) -> Result<MineOutcome, CoreError> {
        let mut npc = self.npc(id)?;
        let outcome = actors::mine(&mut npc, material, rng);
        if let MineOutcome::Mined { material, amount } = outcome {
            inventory::add(&mut self.stockpile, material, amount)?;
            self.store.put_npc(npc);
        }
        Ok(outcome)
    }

    /// Ask an NPC to build, paying from the shared stockpile and
    /// registering the structure on success.
    ///
    /// Bridges need a destination to become registered spans; without
    /// one the construction still happens but nothing enters the
    /// registry.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NpcNotFound`] for an unknown ID,
    /// [`CoreError::ChunkNotFound`] for a destination outside the grid,
    /// [`CoreError::World`] if the destination is the builder's own
    /// chunk or an active bridge already links the pair, or
    /// [`CoreError::Actor`] if the stockpile cannot cover the cost.
    pub fn npc_build(
        &mut self,
        id: NpcId,
        kind: ConstructionKind,
        destination: Option<ChunkId>,
    ) -> Result<BuildOutcome, CoreError> {
        let mut npc = self.npc(id)?;

        if kind == ConstructionKind::Bridge
            && let Some(to) = destination
        {
            if !self.topology.contains(to) {
                return Err(CoreError::ChunkNotFound {
                    map: self.config.world.map_name.clone(),
                    chunk: to,
                });
            }
            // Reject self-spans and duplicates before any resources
            // are spent.
            if to == npc.chunk {
                return Err(chunkworld_world::WorldError::SelfBridge(to).into());
            }
            if self.registry.bridge_exists_between(npc.chunk, to) {
                return Err(chunkworld_world::WorldError::DuplicateBridge {
                    origin: npc.chunk,
                    destination: to,
                }
                .into());
            }
        }

        let outcome = actors::build(&mut npc, kind, &mut self.stockpile, destination)?;
        match &outcome {
            BuildOutcome::Totem { chunk, .. } => {
                let name = format!("Totem of Chunk {chunk}");
                let _ = self.registry.place_totem(&name, *chunk, "warding");
                self.store.put_npc(npc);
            }
            BuildOutcome::Bridge {
                origin,
                destination: Some(to),
                ..
            } => {
                self.registry.place_bridge(*origin, *to, Material::Wood)?;
                self.store.put_npc(npc);
            }
            BuildOutcome::Bridge { .. } => {
                debug!(npc_id = %id, "bridge built without a destination; not registered");
                self.store.put_npc(npc);
            }
            BuildOutcome::NotPerformed { .. } => {}
        }
        Ok(outcome)
    }

    /// Clear an NPC's spent-action flag so it may act again.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NpcNotFound`] for an unknown ID.
    pub fn reset_npc_action(&mut self, id: NpcId) -> Result<(), CoreError> {
        let mut npc = self.npc(id)?;
        actors::reset_action(&mut npc);
        self.store.put_npc(npc);
        Ok(())
    }

    /// Credit materials to the shared stockpile directly, outside the
    /// mining path (admin tooling, scripted events).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Actor`] if the stockpile would overflow.
    pub fn deposit(&mut self, material: Material, amount: u32) -> Result<(), CoreError> {
        inventory::add(&mut self.stockpile, material, amount)?;
        Ok(())
    }

    // -------------------------------------------------------------------
    // Cache plumbing
    // -------------------------------------------------------------------

    fn ensure_cached(&mut self, map_name: &str, turn: TurnPhase) {
        if self.cache.get(map_name, turn).is_none() {
            let chunks = self.store.chunks(map_name, turn);
            self.cache.insert(map_name, turn, chunks);
        }
    }

    fn cached_chunk(&mut self, map_name: &str, turn: TurnPhase, id: ChunkId) -> Option<Chunk> {
        self.ensure_cached(map_name, turn);
        self.cache.get_chunk(map_name, turn, id).cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use chunkworld_types::{Direction, GameMap, MapId};

    use crate::config::{TimeConfig, WorldConfig};
    use crate::store::{ChunkStore, MapStore, MemoryStore, WorldStore};

    use super::*;

    /// A small 4x4 grid with 3-tick turns keeps the tests readable.
    fn small_config() -> GameConfig {
        GameConfig {
            world: WorldConfig {
                map_name: "Overworld".to_owned(),
                grid_width: 4,
                chunk_count: 16,
            },
            time: TimeConfig { ticks_per_turn: 3 },
            ..GameConfig::default()
        }
    }

    fn session() -> GameSession<MemoryStore> {
        GameSession::bootstrap(MemoryStore::new(), small_config()).unwrap()
    }

    fn stock(session: &mut GameSession<MemoryStore>) {
        session.deposit(Material::Wood, 100).unwrap();
        session.deposit(Material::Stone, 100).unwrap();
        session.deposit(Material::Coal, 20).unwrap();
        session.deposit(Material::Redstone, 5).unwrap();
    }

    #[test]
    fn bootstrap_seeds_both_maps() {
        let session = session();
        let state = session.world_state().unwrap();
        assert_eq!(state.turn, TurnPhase::Day);
        assert_eq!(state.ticks_in_turn, 0);
        assert_eq!(state.max_ticks_per_turn, 3);
        assert_eq!(session.topology().chunk_count(), 16);
    }

    #[test]
    fn resume_requires_a_seeded_store() {
        let result = GameSession::resume(MemoryStore::new(), small_config());
        assert!(matches!(result, Err(CoreError::WorldStateMissing)));
    }

    #[test]
    fn new_player_spawns_on_the_first_desert_chunk() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        let location = player.location.unwrap();
        assert_eq!(location.chunk, ChunkId::new(1));
        assert_eq!(location.to_string(), "Overworld - Chunk 1");
        assert_eq!(player.health, 100);
    }

    #[test]
    fn spawn_skips_non_desert_chunks() {
        let mut store = MemoryStore::new();
        store.put_map(GameMap {
            id: MapId::new(),
            name: "Overworld".to_owned(),
            turn: TurnPhase::Day,
        });
        store.put_chunks(vec![
            Chunk {
                id: ChunkId::new(1),
                biome: Biome::Ocean,
                map_name: "Overworld".to_owned(),
                turn: TurnPhase::Day,
            },
            Chunk {
                id: ChunkId::new(2),
                biome: Biome::Desert,
                map_name: "Overworld".to_owned(),
                turn: TurnPhase::Day,
            },
        ]);
        store.put_world_state(WorldState {
            turn: TurnPhase::Day,
            ticks_in_turn: 0,
            max_ticks_per_turn: 3,
        });

        let mut session = GameSession::resume(store, small_config()).unwrap();
        let player = session.create_player("Rook").unwrap();
        assert_eq!(player.location.unwrap().chunk, ChunkId::new(2));
    }

    #[test]
    fn spawn_requires_a_desert_chunk() {
        let mut store = MemoryStore::new();
        store.put_map(GameMap {
            id: MapId::new(),
            name: "Overworld".to_owned(),
            turn: TurnPhase::Day,
        });
        store.put_chunks(vec![Chunk {
            id: ChunkId::new(1),
            biome: Biome::Ocean,
            map_name: "Overworld".to_owned(),
            turn: TurnPhase::Day,
        }]);
        store.put_world_state(WorldState {
            turn: TurnPhase::Day,
            ticks_in_turn: 0,
            max_ticks_per_turn: 3,
        });

        let mut session = GameSession::resume(store, small_config()).unwrap();
        let result = session.create_player("Rook");
        assert!(matches!(result, Err(CoreError::NoSpawnChunk { .. })));
    }

    #[test]
    fn look_around_labels_exits() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        // Chunk 1 of a 4-wide grid: right (2) and down (5).
        let exits = session.look_around(player.id).unwrap();
        assert_eq!(exits.len(), 2);
        assert!(
            exits
                .iter()
                .any(|e| e.chunk == ChunkId::new(2) && e.direction == Direction::Right)
        );
        assert!(
            exits
                .iter()
                .any(|e| e.chunk == ChunkId::new(5) && e.direction == Direction::Down)
        );
    }

    #[test]
    fn move_consumes_one_tick_and_updates_location() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        let outcome = session.move_player(player.id, "2").unwrap();
        assert_eq!(outcome.location.chunk, ChunkId::new(2));
        assert_eq!(outcome.direction, Direction::Right);
        assert_eq!(outcome.clock.ticks, 1);
        assert!(!outcome.clock.turn_changed);
        // Same row of a 4-wide striped grid, so the biome is unchanged.
        assert!(!outcome.entered_new_biome);
        assert_eq!(outcome.biome, Biome::Desert);

        let stored = session.player(player.id).unwrap();
        assert_eq!(stored.location.unwrap().chunk, ChunkId::new(2));
    }

    #[test]
    fn moving_down_enters_a_new_biome() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        // Row 0 is Desert, row 1 is Jungle.
        let outcome = session.move_player(player.id, "5").unwrap();
        assert!(outcome.entered_new_biome);
        assert_eq!(outcome.biome, Biome::Jungle);
        assert!(outcome.message.contains("Jungle"));
    }

    #[test]
    fn composite_targets_parse() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        let outcome = session.move_player(player.id, "Overworld - Chunk 2").unwrap();
        assert_eq!(outcome.location.chunk, ChunkId::new(2));
    }

    #[test]
    fn non_adjacent_move_is_rejected_without_a_tick() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        let result = session.move_player(player.id, "11");
        assert!(matches!(result, Err(CoreError::NotAdjacent { .. })));
        // The failed move consumed no tick.
        assert_eq!(session.world_state().unwrap().ticks_in_turn, 0);
        // And the player stayed put.
        let stored = session.player(player.id).unwrap();
        assert_eq!(stored.location.unwrap().chunk, ChunkId::new(1));
    }

    #[test]
    fn row_boundary_does_not_wrap() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        // Walk to chunk 4 (end of row 0).
        let _ = session.move_player(player.id, "2").unwrap();
        let _ = session.move_player(player.id, "3").unwrap();
        let _ = session.move_player(player.id, "4").unwrap();

        // Chunk 5 is numerically next but starts row 1.
        let result = session.move_player(player.id, "5");
        assert!(matches!(result, Err(CoreError::NotAdjacent { .. })));
    }

    #[test]
    fn third_move_flips_the_turn() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        let _ = session.move_player(player.id, "2").unwrap();
        let _ = session.move_player(player.id, "3").unwrap();
        let outcome = session.move_player(player.id, "4").unwrap();

        assert!(outcome.clock.turn_changed);
        assert_eq!(outcome.clock.turn, TurnPhase::Night);
        assert_eq!(session.world_state().unwrap().ticks_in_turn, 0);
    }

    #[test]
    fn corrupt_clock_leaves_the_player_in_place() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        // Ticks at or past the maximum should never be at rest in the
        // store; a move against such a row must not go through.
        session.store.put_world_state(WorldState {
            turn: TurnPhase::Day,
            ticks_in_turn: 3,
            max_ticks_per_turn: 3,
        });

        let result = session.move_player(player.id, "2");
        assert!(matches!(result, Err(CoreError::Clock(_))));
        let stored = session.player(player.id).unwrap();
        assert_eq!(stored.location.unwrap().chunk, ChunkId::new(1));
    }

    #[test]
    fn unknown_chunk_is_reported() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        let result = session.move_player(player.id, "99");
        assert!(matches!(result, Err(CoreError::ChunkNotFound { .. })));
    }

    #[test]
    fn mining_credits_the_stockpile() {
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(11);
        let npc = session.spawn_npc(ChunkId::new(1), NpcRole::Miner).unwrap();

        let outcome = session.npc_mine(npc.id, Material::Iron, &mut rng).unwrap();
        match outcome {
            MineOutcome::Mined { material, amount } => {
                assert_eq!(material, Material::Iron);
                assert_eq!(
                    session.stockpile().get(&material).copied(),
                    Some(amount)
                );
            }
            MineOutcome::NotPerformed { reason } => panic!("unexpected refusal: {reason}"),
        }

        // The spent flag persisted: a second attempt is refused.
        let second = session.npc_mine(npc.id, Material::Iron, &mut rng).unwrap();
        assert!(!second.performed());
    }

    #[test]
    fn reset_reopens_the_action_budget() {
        let mut session = session();
        let mut rng = SmallRng::seed_from_u64(12);
        let npc = session.spawn_npc(ChunkId::new(1), NpcRole::Miner).unwrap();

        let _ = session.npc_mine(npc.id, Material::Coal, &mut rng).unwrap();
        session.reset_npc_action(npc.id).unwrap();
        assert!(
            session
                .npc_mine(npc.id, Material::Coal, &mut rng)
                .unwrap()
                .performed()
        );
    }

    #[test]
    fn building_a_bridge_registers_the_span() {
        let mut session = session();
        stock(&mut session);
        let npc = session.spawn_npc(ChunkId::new(3), NpcRole::Builder).unwrap();

        let outcome = session
            .npc_build(npc.id, ConstructionKind::Bridge, Some(ChunkId::new(10)))
            .unwrap();
        assert!(outcome.performed());
        assert!(
            session
                .registry()
                .bridge_exists_between(ChunkId::new(3), ChunkId::new(10))
        );
        // Cost deducted: 15 wood, 10 stone.
        assert_eq!(session.stockpile().get(&Material::Wood).copied(), Some(85));
        assert_eq!(session.stockpile().get(&Material::Stone).copied(), Some(90));
    }

    #[test]
    fn bridges_open_non_adjacent_travel() {
        let mut session = session();
        stock(&mut session);
        let player = session.create_player("Rook").unwrap();
        let npc = session.spawn_npc(ChunkId::new(1), NpcRole::Builder).unwrap();

        let _ = session
            .npc_build(npc.id, ConstructionKind::Bridge, Some(ChunkId::new(11)))
            .unwrap();

        let outcome = session.move_player(player.id, "11").unwrap();
        assert_eq!(outcome.location.chunk, ChunkId::new(11));
        // Not a cardinal step; the label degrades gracefully.
        assert_eq!(outcome.direction, Direction::Unresolved);
    }

    #[test]
    fn bridge_to_own_chunk_is_rejected() {
        let mut session = session();
        stock(&mut session);
        let npc = session.spawn_npc(ChunkId::new(3), NpcRole::Builder).unwrap();

        let result = session.npc_build(npc.id, ConstructionKind::Bridge, Some(ChunkId::new(3)));
        assert!(matches!(result, Err(CoreError::World(_))));
        // No span registered, nothing spent, and the builder keeps its
        // action.
        assert!(!session.registry().bridge_exists_between(ChunkId::new(3), ChunkId::new(3)));
        assert_eq!(session.stockpile().get(&Material::Wood).copied(), Some(100));
        assert!(!session.npc(npc.id).unwrap().action_spent);
    }

    #[test]
    fn duplicate_bridges_cost_nothing() {
        let mut session = session();
        stock(&mut session);
        let first = session.spawn_npc(ChunkId::new(3), NpcRole::Builder).unwrap();
        let second = session.spawn_npc(ChunkId::new(3), NpcRole::Builder).unwrap();

        let _ = session
            .npc_build(first.id, ConstructionKind::Bridge, Some(ChunkId::new(10)))
            .unwrap();
        let wood_before = session.stockpile().get(&Material::Wood).copied();

        let result = session.npc_build(second.id, ConstructionKind::Bridge, Some(ChunkId::new(10)));
        assert!(matches!(result, Err(CoreError::World(_))));
        assert_eq!(session.stockpile().get(&Material::Wood).copied(), wood_before);
        // The rejected builder keeps its action.
        assert!(!session.npc(second.id).unwrap().action_spent);
    }

    #[test]
    fn totem_build_enters_the_registry() {
        let mut session = session();
        stock(&mut session);
        let npc = session.spawn_npc(ChunkId::new(7), NpcRole::Builder).unwrap();

        let outcome = session.npc_build(npc.id, ConstructionKind::Totem, None).unwrap();
        assert!(outcome.performed());
        assert_eq!(session.registry().totems_at(ChunkId::new(7)).count(), 1);
        assert_eq!(session.npc(npc.id).unwrap().built, Some(ConstructionKind::Totem));
    }

    #[test]
    fn underfunded_build_fails_cleanly() {
        let mut session = session();
        let npc = session.spawn_npc(ChunkId::new(7), NpcRole::Builder).unwrap();

        let result = session.npc_build(npc.id, ConstructionKind::Totem, None);
        assert!(matches!(result, Err(CoreError::Actor(_))));
        assert!(result.unwrap_err().is_recoverable());
        assert_eq!(session.registry().totems().count(), 0);
        assert!(!session.npc(npc.id).unwrap().action_spent);
    }

    #[test]
    fn vitals_flow_through_the_session() {
        let mut session = session();
        let player = session.create_player("Rook").unwrap();

        let hurt = session.damage_player(player.id, 30).unwrap();
        assert_eq!(hurt.health, 70);

        let levelled = session.award_experience(player.id, 120).unwrap();
        assert_eq!(levelled.level, 2);
        assert_eq!(levelled.health, 110);

        let healed = session.heal_player(player.id, 50).unwrap();
        assert_eq!(healed.health, 110);
    }
}
