use std::path::PathBuf;

use crate::board::Stone;

/// Errors raised when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be 10-19 rows by 10-30 columns, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Errors returned by the move-selection engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no move available: board has no candidate cells")]
    NoMoveAvailable,

    #[error("cell ({row}, {col}) is already occupied")]
    InvalidCellRequest { row: usize, col: usize },

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("engine symbol must be X or O")]
    InvalidSymbol,
}

/// Errors raised by the game loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error("it is {expected}'s turn")]
    WrongTurn { expected: Stone },

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
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
