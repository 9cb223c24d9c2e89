use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{GameState, PlayerColor};

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 100;

/// Game setup, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    /// Color of the player who moves first
    pub player1: String,
    pub player2: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: 6,
            width: 7,
            player1: "red".to_string(),
            player2: "yellow".to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse both player colors.
    pub fn players(&self) -> Result<(PlayerColor, PlayerColor), ConfigError> {
        Ok((
            self.player1.parse::<PlayerColor>()?,
            self.player2.parse::<PlayerColor>()?,
        ))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::Validation("height must be > 0".into()));
        }
        if self.width == 0 {
            return Err(ConfigError::Validation("width must be > 0".into()));
        }
        if self.height > MAX_DIMENSION || self.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "height and width must be <= {MAX_DIMENSION}"
            )));
        }
        let (player1, player2) = self.players()?;
        if player1 == player2 {
            return Err(ConfigError::Validation(
                "both players cannot be the same color".into(),
            ));
        }
        Ok(())
    }

    /// Build a fresh game from this configuration.
    pub fn new_game(&self) -> Result<GameState<PlayerColor>, ConfigError> {
        self.validate()?;
        let (player1, player2) = self.players()?;
        Ok(GameState::new(self.height, self.width, player1, player2)?)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameConfig::default())
    }
}
