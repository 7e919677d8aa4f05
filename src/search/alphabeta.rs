//! Minimax search with alpha-beta pruning
//!
//! This module implements the search fallback of the engine. The tree is
//! explored depth-first on a single mutable working board: each candidate is
//! placed, searched and removed again before the next one is tried, and the
//! removal happens before any cutoff so pruned branches leave no trace.
//!
//! # Features
//!
//! - Plain minimax (explicit maximizing/minimizing plies) with alpha-beta
//! - Candidate moves restricted to the neighbourhood of existing stones
//! - Pluggable depth selection via [`DepthPolicy`]
//! - Optional wall-clock budget checked between root moves
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone, Pos};
//! use gomoku::eval::{Evaluator, PatternWeights};
//! use gomoku::search::{FixedDepth, Searcher};
//!
//! let evaluator = Evaluator::new(Stone::X, PatternWeights::DEFENSIVE, 2);
//! let mut searcher = Searcher::new(evaluator, Box::new(FixedDepth(2)));
//! let mut board = Board::new(10, 10).unwrap();
//! board.place_stone(Pos::new(5, 5), Stone::O);
//!
//! let result = searcher.search(&mut board);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::board::{Board, Pos};
use crate::eval::Evaluator;

use super::depth::DepthPolicy;
use super::moves::candidate_moves;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move
    pub score: i32,
    /// Plies searched from the root
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Depth-limited minimax searcher for one side.
///
/// The maximizing side is the evaluator's symbol; its opponent minimizes.
pub struct Searcher {
    evaluator: Evaluator,
    depth_policy: Box<dyn DepthPolicy>,
    time_budget: Option<Duration>,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(evaluator: Evaluator, depth_policy: Box<dyn DepthPolicy>) -> Self {
        Self {
            evaluator,
            depth_policy,
            time_budget: None,
            nodes: 0,
        }
    }

    /// Limit the wall-clock time spent at the root.
    ///
    /// Once exceeded, remaining root moves are skipped; at least one root
    /// move is always scored.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Depth the policy selects for this board
    #[inline]
    pub fn depth_for(&self, board: &Board) -> u8 {
        self.depth_policy.depth_for(board.empty_count()).max(1)
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search the board at the depth chosen by the depth policy.
    #[must_use]
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        let depth = self.depth_for(board);
        self.search_depth(board, depth)
    }

    /// Root search: score every candidate and keep the strictly best one.
    ///
    /// Ties go to the candidate seen first (row-major order).
    #[must_use]
    pub fn search_depth(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let start = Instant::now();

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for mov in candidate_moves(board) {
            if let (Some(budget), Some(_)) = (self.time_budget, best_move) {
                if start.elapsed() >= budget {
                    warn!(?budget, "search time budget exhausted, skipping remaining root moves");
                    break;
                }
            }

            let score = self.score_root_move(board, mov, depth);
            trace!(%mov, score, "root move scored");

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        debug!(
            best_move = ?best_move,
            score = best_score,
            depth,
            nodes = self.nodes,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Score a single root move: place own stone, search the reply tree,
    /// remove the stone.
    ///
    /// The caller guarantees `mov` is empty.
    pub fn score_root_move(&mut self, board: &mut Board, mov: Pos, depth: u8) -> i32 {
        let me = self.evaluator.me();
        board.place_stone(mov, me);
        let score = self.minimax(board, depth.saturating_sub(1), false, i32::MIN, i32::MAX);
        board.remove_stone(mov);
        score
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// Returns the leaf evaluation at `depth == 0`, on a full board, or when
    /// no candidate exists. There is no win check inside the horizon; the
    /// evaluator's four tier stands in for it.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.is_full() {
            return self.evaluator.evaluate_board(board);
        }

        let moves = candidate_moves(board);
        if moves.is_empty() {
            return self.evaluator.evaluate_board(board);
        }

        let me = self.evaluator.me();
        if maximizing {
            let mut best = i32::MIN;
            for mov in moves {
                board.place_stone(mov, me);
                let score = self.minimax(board, depth - 1, false, alpha, beta);
                board.remove_stone(mov);

                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let opponent = me.opponent();
            let mut best = i32::MAX;
            for mov in moves {
                board.place_stone(mov, opponent);
                let score = self.minimax(board, depth - 1, true, alpha, beta);
                board.remove_stone(mov);

                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
