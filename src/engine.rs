//! Main AI Engine integrating all search components
//!
//! This module provides the decision policy that picks the engine's move.
//! The checks run in priority order and stop at the first success:
//!
//! 1. **Immediate win**: any cell completing five for the engine
//! 2. **Defense**: block an opponent four, or else an open three
//! 3. **Minimax**: alpha-beta search over candidate moves
//! 4. **No move**: empty or full board, reported as an error
//!
//! The caller's board is never modified; all simulation happens on a private
//! working copy.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Pos};
//!
//! let mut engine = AIEngine::new(Stone::X).unwrap();
//! let mut board = Board::new(10, 10).unwrap();
//! board.place_stone(Pos::new(5, 5), Stone::O);
//!
//! let result = engine.get_move_with_stats(&board).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::eval::Evaluator;
use crate::search::{Searcher, ThreatDetector, ThreatKind};

/// Score reported for an immediate win
pub const WIN_SCORE: i32 = 1_000_000;

/// Which step of the decision policy produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five in a row
    ImmediateWin,
    /// Blocks an opponent threat
    Defense(ThreatKind),
    /// Best move of the minimax search
    AlphaBeta,
}

/// Chosen move with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Search score, or board evaluation after the move for threat answers
    pub score: i32,
    pub search_type: SearchType,
    /// Plies searched (0 when no search ran)
    pub depth: u8,
    pub nodes: u64,
    pub time_ms: u64,
}

/// Move-selection engine for one symbol.
pub struct AIEngine {
    me: Stone,
    threats: ThreatDetector,
    searcher: Searcher,
}

impl AIEngine {
    /// Engine with the default configuration (fixed depth 3, defensive
    /// weights, four-first blocking).
    pub fn new(me: Stone) -> Result<Self, EngineError> {
        Self::with_config(me, &EngineConfig::default())
    }

    /// Engine built from a validated [`EngineConfig`].
    ///
    /// Fails with [`EngineError::InvalidSymbol`] when `me` is [`Stone::Empty`].
    pub fn with_config(me: Stone, config: &EngineConfig) -> Result<Self, EngineError> {
        if me == Stone::Empty {
            return Err(EngineError::InvalidSymbol);
        }
        let evaluator = Evaluator::new(me, config.weights.weights(), config.opponent_penalty);
        let searcher = Searcher::new(evaluator, config.depth.build())
            .with_time_budget(config.time_budget());
        Ok(Self {
            me,
            threats: ThreatDetector::new(config.block_policy),
            searcher,
        })
    }

    /// The engine's own symbol
    pub fn symbol(&self) -> Stone {
        self.me
    }

    /// Best move for the engine, see [`AIEngine::get_move_with_stats`].
    pub fn get_move(&mut self, board: &Board) -> Result<Pos, EngineError> {
        self.get_move_with_stats(board).map(|r| r.best_move)
    }

    /// Run the decision policy on `board`.
    ///
    /// Fails with [`EngineError::NoMoveAvailable`] when the board is empty
    /// (no stone to play next to) or full.
    pub fn get_move_with_stats(&mut self, board: &Board) -> Result<MoveResult, EngineError> {
        let start = Instant::now();
        let mut work = board.clone();
        let opponent = self.me.opponent();

        // 1. Own immediate win always comes first
        if let Some(pos) = self.threats.find_immediate_win(&mut work, self.me) {
            debug!(%pos, symbol = %self.me, "immediate win");
            return Ok(MoveResult {
                best_move: pos,
                score: WIN_SCORE,
                search_type: SearchType::ImmediateWin,
                depth: 0,
                nodes: 0,
                time_ms: start.elapsed().as_millis() as u64,
            });
        }

        // 2. Block the opponent's strongest threat
        if let Some(block) = self.threats.find_blocking_move(&mut work, opponent) {
            work.place_stone(block.pos, self.me);
            let score = self.searcher.evaluator().evaluate_board(&work);
            work.remove_stone(block.pos);

            debug!(pos = %block.pos, kind = ?block.kind, symbol = %self.me, "blocking threat");
            return Ok(MoveResult {
                best_move: block.pos,
                score,
                search_type: SearchType::Defense(block.kind),
                depth: 0,
                nodes: 0,
                time_ms: start.elapsed().as_millis() as u64,
            });
        }

        // 3. Minimax over candidate moves
        let result = self.searcher.search(&mut work);
        let Some(pos) = result.best_move else {
            debug!(symbol = %self.me, "no candidate moves");
            return Err(EngineError::NoMoveAvailable);
        };

        debug!(%pos, score = result.score, depth = result.depth, symbol = %self.me, "strategic move");
        Ok(MoveResult {
            best_move: pos,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            nodes: result.nodes,
            time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Search score of playing `pos` now, at the policy's depth.
    ///
    /// Fails fast on a cell outside the board or already occupied.
    pub fn score_move(&mut self, board: &Board, pos: Pos) -> Result<i32, EngineError> {
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= board.rows() || col >= board.cols() {
            return Err(EngineError::OutOfBounds { row, col });
        }
        if !board.is_empty(pos) {
            return Err(EngineError::InvalidCellRequest { row, col });
        }

        let mut work = board.clone();
        let depth = self.searcher.depth_for(&work);
        Ok(self.searcher.score_root_move(&mut work, pos, depth))
    }
}
