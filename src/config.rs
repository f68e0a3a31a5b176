use std::path::Path;

use crate::ai::SEARCH_DEPTH;
use crate::error::ConfigError;
use crate::game::{Board, COLS, ROWS};

/// Which front end drives the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    /// Line-based prompt on stdin/stdout
    Console,
    /// Full-screen terminal board
    Tui,
}

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            columns: COLS,
        }
    }
}

/// Opponent and front-end selection.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Minimax opponent when true, greedy win/block opponent when false
    pub advanced_ai: bool,
    pub ui: UiMode,
    pub search_depth: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            advanced_ai: true,
            ui: UiMode::Console,
            search_depth: SEARCH_DEPTH,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
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
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.columns == 0 {
            return Err(ConfigError::Validation(
                "board.columns must be > 0".into(),
            ));
        }
        if self.game.search_depth == 0 {
            return Err(ConfigError::Validation(
                "game.search_depth must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Build an empty board with the configured dimensions.
    pub fn new_board(&self) -> Result<Board, ConfigError> {
        Board::new(self.board.rows, self.board.columns)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
