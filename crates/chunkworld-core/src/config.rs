//! Configuration loading and typed config structures for Chunkworld.
//!
//! The canonical configuration lives in `chunkworld.yaml` at the
//! project root. This module defines strongly-typed structs mirroring
//! the YAML structure and a loader that reads the file. Every field has
//! a default matching the stock world, so an empty file (or no file at
//! all) yields a playable configuration.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// World grid settings (map name, grid shape).
    #[serde(default)]
    pub world: WorldConfig,

    /// Turn-cycle settings.
    #[serde(default)]
    pub time: TimeConfig,

    /// Starting player vitals.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// World grid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Name of the default map pair.
    #[serde(default = "default_map_name")]
    pub map_name: String,

    /// Grid width in chunks.
    #[serde(default = "default_grid_width")]
    pub grid_width: u32,

    /// Total chunks per map. Must be a positive multiple of the width.
    #[serde(default = "default_chunk_count")]
    pub chunk_count: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            map_name: default_map_name(),
            grid_width: default_grid_width(),
            chunk_count: default_chunk_count(),
        }
    }
}

/// Turn-cycle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeConfig {
    /// Ticks that make up one Day or Night turn.
    #[serde(default = "default_ticks_per_turn")]
    pub ticks_per_turn: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            ticks_per_turn: default_ticks_per_turn(),
        }
    }
}

/// Starting player vitals.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerConfig {
    /// Health and health ceiling at character creation.
    #[serde(default = "default_starting_health")]
    pub starting_health: u32,

    /// Strength at character creation.
    #[serde(default = "default_starting_strength")]
    pub starting_strength: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            starting_health: default_starting_health(),
            starting_strength: default_starting_strength(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_map_name() -> String {
    chunkworld_world::DEFAULT_MAP_NAME.to_owned()
}

const fn default_grid_width() -> u32 {
    chunkworld_world::DEFAULT_GRID_WIDTH
}

const fn default_chunk_count() -> u32 {
    chunkworld_world::DEFAULT_CHUNK_COUNT
}

const fn default_ticks_per_turn() -> u32 {
    chunkworld_world::DEFAULT_TICKS_PER_TURN
}

const fn default_starting_health() -> u32 {
    chunkworld_actors::STARTING_MAX_HEALTH
}

const fn default_starting_strength() -> u32 {
    chunkworld_actors::STARTING_STRENGTH
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_stock_world() {
        let config = GameConfig::default();
        assert_eq!(config.world.map_name, "Overworld");
        assert_eq!(config.world.grid_width, 32);
        assert_eq!(config.world.chunk_count, 1024);
        assert_eq!(config.time.ticks_per_turn, 20);
        assert_eq!(config.player.starting_health, 100);
        assert_eq!(config.player.starting_strength, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
world:
  map_name: "Ashlands"
  grid_width: 8
  chunk_count: 64

time:
  ticks_per_turn: 10

player:
  starting_health: 50
  starting_strength: 5

logging:
  level: "debug"
"#;
        let config = GameConfig::parse(yaml).unwrap();
        assert_eq!(config.world.map_name, "Ashlands");
        assert_eq!(config.world.grid_width, 8);
        assert_eq!(config.world.chunk_count, 64);
        assert_eq!(config.time.ticks_per_turn, 10);
        assert_eq!(config.player.starting_health, 50);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "time:\n  ticks_per_turn: 5\n";
        let config = GameConfig::parse(yaml).unwrap();
        assert_eq!(config.time.ticks_per_turn, 5);
        // Everything else stays at defaults.
        assert_eq!(config.world.grid_width, 32);
        assert_eq!(config.player.starting_health, 100);
    }

    #[test]
    fn parse_empty_yaml() {
        assert!(GameConfig::parse("").is_ok());
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("chunkworld.yaml");
        if path.exists() {
            let config = GameConfig::from_file(&path);
            assert!(config.is_ok(), "failed to load project config: {config:?}");
        }
    }
}
