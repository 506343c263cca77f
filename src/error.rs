use std::path::PathBuf;

use crate::game::PlayerId;

/// Rejected placements. None of these leave the engine mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 0..=6)")]
    InvalidColumn(isize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is over; reset to play again")]
    GameOver,
}

/// Errors that can occur when constructing a game engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("both seats were given the same player ({0})")]
    InvalidPlayers(PlayerId),
}

/// Errors raised by a move source while choosing a column.
#[derive(Debug, thiserror::Error)]
pub enum MoveSourceError {
    #[error("no column has room for another token")]
    NoLegalMoves,

    #[error("input closed before a column was chosen")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while driving a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("move source failed: {0}")]
    Source(#[from] MoveSourceError),

    #[error("player {player} had {attempts} moves rejected in a row")]
    TooManyRejections { player: PlayerId, attempts: usize },

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
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
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn(-1).to_string(),
            "column -1 is out of range (expected 0..=6)"
        );
        assert_eq!(MoveError::ColumnFull(4).to_string(), "column 4 is full");
    }

    #[test]
    fn test_setup_error_display() {
        let err = SetupError::InvalidPlayers(PlayerId::A);
        assert_eq!(err.to_string(), "both seats were given the same player (A)");
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::TooManyRejections {
            player: PlayerId::B,
            attempts: 3,
        };
        assert_eq!(err.to_string(), "player B had 3 moves rejected in a row");

        let err: SessionError = MoveSourceError::NoLegalMoves.into();
        assert_eq!(
            err.to_string(),
            "move source failed: no column has room for another token"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("session.games must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: session.games must be > 0"
        );
    }
}
