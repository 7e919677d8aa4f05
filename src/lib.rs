//! Gomoku move-selection engine
//!
//! A five-in-a-row engine for rectangular boards of 10-19 rows by 10-30
//! columns:
//! - Two symbols, X and O; O moves first by default
//! - 5-in-a-row (horizontal, vertical or diagonal) wins, overlines included
//! - A full board without a winner is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection
//! - [`eval`]: Line scanning and pattern-weighted evaluation
//! - [`search`]: Candidate moves, threat detection, alpha-beta search
//! - [`engine`]: Decision policy integrating all components
//! - [`game`]: Turn order and game status for a full game
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Pos};
//!
//! let mut board = Board::new(10, 10).unwrap();
//! let mut engine = AIEngine::new(Stone::X).unwrap();
//!
//! // The engine needs at least one stone to respond to
//! board.place_stone(Pos::new(5, 5), Stone::O);
//!
//! if let Ok(pos) = engine.get_move(&board) {
//!     board.place_stone(pos, Stone::X);
//!     println!("AI plays at {}", pos);
//! }
//! ```
//!
//! # Search Priority
//!
//! The AI engine follows this search priority:
//! 1. Immediate winning move
//! 2. Block an opponent four, otherwise an open three
//! 3. Minimax with alpha-beta pruning over neighbouring cells

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone};
pub use config::{AppConfig, EngineConfig, GameConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{BoardError, ConfigError, EngineError, GameError};
pub use game::{Game, GameStatus, PlayMode};
