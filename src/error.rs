use std::path::PathBuf;

/// Errors returned by game creation and `drop_piece`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid game configuration: {0}")]
    InvalidConfiguration(String),

    #[error("column {column} is out of range (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when parsing a player color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("player color must not be empty")]
    Empty,

    #[error("'{0}' is not a valid color")]
    Unknown(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid player color: {0}")]
    Color(#[from] ColorError),

    #[error(transparent)]
    Game(#[from] GameError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidColumn { column: 9, width: 7 };
        assert_eq!(err.to_string(), "column 9 is out of range (width 7)");
        assert_eq!(
            GameError::ColumnFull { column: 2 }.to_string(),
            "column 2 is full"
        );
    }

    #[test]
    fn test_color_error_display() {
        let err = ColorError::Unknown("chartreuse".to_string());
        assert_eq!(err.to_string(), "'chartreuse' is not a valid color");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("height must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: height must be > 0");

        let err = ConfigError::from(ColorError::Empty);
        assert_eq!(
            err.to_string(),
            "invalid player color: player color must not be empty"
        );
    }
}
