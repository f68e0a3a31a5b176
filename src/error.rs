use std::path::PathBuf;

/// Errors that can occur when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{columns}: both must be positive")]
    InvalidDimensions { rows: usize, columns: usize },
}

/// Errors raised while reading a move from the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid move! Must be an integer between 0 and {max}!")]
    InvalidMove { max: usize },
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimensions { rows: 0, columns: 7 };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 0x7: both must be positive"
        );
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::InvalidMove { max: 6 };
        assert_eq!(
            err.to_string(),
            "Invalid move! Must be an integer between 0 and 6!"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be > 0"
        );
    }
}
