use std::path::Path;

use crate::ai::evaluator::MAX_DEPTH;
use crate::ai::{Difficulty, DEFAULT_DEPTH};
use crate::error::ConfigError;

/// Search settings for the computer players.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched by the hard opponent
    pub depth: u32,
    /// Seed for the randomized opponents; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

/// Who plays, who starts, and how pieces are drawn.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub human_first: bool,
    pub human_symbol: char,
    pub computer_symbol: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            difficulty: Difficulty::Hard,
            human_first: true,
            human_symbol: 'r',
            computer_symbol: 'y',
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.depth == 0 {
            return Err(ConfigError::Validation("engine.depth must be >= 1".into()));
        }
        if self.engine.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "engine.depth must be <= {MAX_DEPTH}"
            )));
        }
        if self.game.human_symbol.is_whitespace() || self.game.computer_symbol.is_whitespace() {
            return Err(ConfigError::Validation(
                "game symbols must not be whitespace".into(),
            ));
        }
        if self.game.human_symbol == self.game.computer_symbol {
            return Err(ConfigError::Validation(
                "game.human_symbol and game.computer_symbol must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
