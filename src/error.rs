use std::path::PathBuf;

use crate::game::MoveError;

/// Errors that can occur when asking an agent for a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no playable columns left on the board")]
    NoPlayableColumns,
}

/// Errors from reading a human's column choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("column {0} is outside 1-7")]
    OutOfRange(i64),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors that end an interactive console game.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("computer player failed: {0}")]
    Search(#[from] SearchError),

    #[error("illegal move: {0}")]
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
