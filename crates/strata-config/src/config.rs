//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strata_terrain::{
    ChunkGenerator, GenerationError, ResourceConfig, WorldParams, default_resources,
};
use strata_voxel::WorldSize;

use crate::error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "worldgen.ron";

const DEFAULT_SEED: u64 = 20_240_917;

/// Top-level generation configuration.
///
/// Whole sections may be left out of the file and take their defaults.
/// `generation` is all or nothing: every field of [`WorldParams`] must be
/// present once the section is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Chunk dimensions.
    pub world: WorldSizeConfig,
    /// Seed, terrain, strata, and tree parameters.
    pub generation: WorldParams,
    /// Ore table; order is overwrite precedence.
    pub resources: Vec<ResourceConfig>,
    /// Background generation settings.
    pub workers: WorkerConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Chunk dimensions in blocks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorldSizeConfig {
    /// X and Z extent of a chunk.
    pub width: usize,
    /// Y extent of a chunk.
    pub height: usize,
}

/// Background generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkerConfig {
    /// Worker thread count (0 = size to the machine).
    pub threads: usize,
    /// Chunks generated in each direction around the origin chunk.
    pub radius: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log a per-block census for every generated chunk.
    pub chunk_census: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: WorldSizeConfig::default(),
            generation: WorldParams::default_world(DEFAULT_SEED),
            resources: default_resources(),
            workers: WorkerConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for WorldSizeConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 128,
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            radius: 2,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            chunk_census: false,
        }
    }
}

/// Per-user config directory, `<config dir>/strata`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("strata"))
}

// --- Validation ---

impl Config {
    /// The configured chunk size.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if either extent is zero or too large.
    pub fn world_size(&self) -> Result<WorldSize, ConfigError> {
        WorldSize::new(self.world.width, self.world.height)
            .map_err(|e| ConfigError::Invalid(GenerationError::from(e)))
    }

    /// Validate every generation setting and build the shared generator.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first bad setting.
    pub fn chunk_generator(&self) -> Result<ChunkGenerator, ConfigError> {
        let size = self.world_size()?;
        Ok(ChunkGenerator::new(
            size,
            self.generation.clone(),
            self.resources.clone(),
        )?)
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as [`CONFIG_FILE_NAME`].
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Re-read the file: `Some(new_config)` if it changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_voxel::BlockId;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(4))
                .unwrap();
        assert!(ron_str.contains("height: 128"));
        assert!(ron_str.contains("diamond_ore"));
        assert!(ron_str.contains("trunk_height"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(world: (width: 8), debug: (log_level: \"warn\"))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.world.width, 8);
        assert_eq!(config.world.height, 128);
        assert_eq!(config.generation, Config::default().generation);
        assert_eq!(config.resources, default_resources());
        assert_eq!(config.workers, WorkerConfig::default());
    }

    #[test]
    fn test_partial_generation_section_rejected() {
        let ron_str = "(generation: (seed: 7))";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_err(), "generation fields have no defaults");
    }

    #[test]
    fn test_resource_table_order_preserved() {
        let ron_str = r#"(resources: [
            (name: "gold", block: gold_ore, scale: (4.0, 4.0, 4.0), scarcity: 0.8),
            (name: "coal", block: coal_ore, scale: (8.0, 8.0, 8.0), scarcity: 0.5),
        ])"#;
        let config: Config = ron::from_str(ron_str).unwrap();
        let names: Vec<_> = config.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["gold", "coal"]);
        assert_eq!(config.resources[1].block, BlockId::CoalOre);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.width = 32;
        config.generation.seed = 99;
        config.resources.truncate(2);

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.generation.trees.frequency = 0.5;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.generation.trees.frequency), Some(0.5));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_default_config_builds_generator() {
        let generator = Config::default().chunk_generator().unwrap();
        assert_eq!(generator.size(), WorldSize::new(16, 128).unwrap());
        assert_eq!(generator.resources().len(), 4);
        assert_eq!(generator.params(), &Config::default().generation);
    }

    #[test]
    fn test_zero_width_rejected() {
        let mut config = Config::default();
        config.world.width = 0;
        assert!(matches!(
            config.world_size(),
            Err(ConfigError::Invalid(GenerationError::InvalidWorldSize(_)))
        ));
    }

    #[test]
    fn test_bad_resource_rejected() {
        let mut config = Config::default();
        config.resources[0].block = BlockId::Dirt;
        let err = config.chunk_generator().unwrap_err();
        assert!(
            err.to_string().contains("coal"),
            "error should name the resource: {err}"
        );
    }
}
