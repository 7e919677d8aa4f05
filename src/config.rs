use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::board::{Stone, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
use crate::error::ConfigError;
use crate::eval::{WeightPreset, DEFAULT_OPPONENT_PENALTY, MAX_OPPONENT_PENALTY};
use crate::game::PlayMode;
use crate::search::{BlockPolicy, DepthConfig};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub engine: EngineConfig,
}

/// Board and seating configuration for the game loop.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Symbol played by the engine; the human gets the other one
    pub bot_symbol: Stone,
    /// Whether the human moves first
    pub human_first: bool,
    /// Seating: two humans, human against engine, or engine against engine
    pub mode: PlayMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 10,
            cols: 10,
            bot_symbol: Stone::X,
            human_first: true,
            mode: PlayMode::default(),
        }
    }
}

/// Move-selection engine configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub block_policy: BlockPolicy,
    pub weights: WeightPreset,
    /// Multiplier applied to opponent cells in the board score
    pub opponent_penalty: i32,
    /// Optional wall-clock limit for the root search
    pub time_budget_ms: Option<u64>,
    /// Kept last: serialized as a TOML sub-table
    pub depth: DepthConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            block_policy: BlockPolicy::default(),
            weights: WeightPreset::default(),
            opponent_penalty: DEFAULT_OPPONENT_PENALTY,
            time_budget_ms: None,
            depth: DepthConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    /// Validate engine values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.depth {
            DepthConfig::Fixed { plies } => {
                if plies == 0 {
                    return Err(ConfigError::Validation(
                        "engine.depth.plies must be >= 1".into(),
                    ));
                }
            }
            DepthConfig::Dynamic {
                early_threshold,
                mid_threshold,
                early,
                mid,
                late,
            } => {
                if early == 0 || mid == 0 || late == 0 {
                    return Err(ConfigError::Validation(
                        "engine.depth plies must all be >= 1".into(),
                    ));
                }
                if mid_threshold > early_threshold {
                    return Err(ConfigError::Validation(
                        "engine.depth.mid_threshold must be <= engine.depth.early_threshold".into(),
                    ));
                }
            }
        }
        if !(1..=MAX_OPPONENT_PENALTY).contains(&self.opponent_penalty) {
            return Err(ConfigError::Validation(format!(
                "engine.opponent_penalty must be in [1, {}]",
                MAX_OPPONENT_PENALTY
            )));
        }
        Ok(())
    }
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.game.rows) {
            return Err(ConfigError::Validation(format!(
                "game.rows must be in [{}, {}]",
                MIN_ROWS, MAX_ROWS
            )));
        }
        if !(MIN_COLS..=MAX_COLS).contains(&self.game.cols) {
            return Err(ConfigError::Validation(format!(
                "game.cols must be in [{}, {}]",
                MIN_COLS, MAX_COLS
            )));
        }
        if self.game.bot_symbol == Stone::Empty {
            return Err(ConfigError::Validation(
                "game.bot_symbol must be X or O".into(),
            ));
        }
        self.engine.validate()
    }
}
