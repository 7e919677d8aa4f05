//! Heuristic evaluation used at search leaves
//!
//! Every occupied cell is scored on its own (centrality plus the runs it sits
//! in) and the board score is the sum of those per-cell scores, with the
//! opponent's cells multiplied by a penalty factor.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::patterns::PatternWeights;
use super::scan::scan_run;

/// Base of the centrality term
const CENTER_BONUS: i32 = 50;

/// Default multiplier applied to opponent cells
pub const DEFAULT_OPPONENT_PENALTY: i32 = 2;

/// Largest accepted opponent penalty; keeps board scores far from `i32` limits
pub const MAX_OPPONENT_PENALTY: i32 = 500;

/// Board evaluator from the point of view of one symbol.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    me: Stone,
    weights: PatternWeights,
    opponent_penalty: i32,
}

impl Evaluator {
    pub fn new(me: Stone, weights: PatternWeights, opponent_penalty: i32) -> Self {
        debug_assert!(me != Stone::Empty);
        Self {
            me,
            weights,
            opponent_penalty,
        }
    }

    /// The symbol whose advantage is measured
    #[inline]
    pub fn me(&self) -> Stone {
        self.me
    }

    /// Score one cell as if it holds `symbol`.
    ///
    /// `50 - |row - rows/2| - |col - cols/2|` plus one tier per line
    /// direction. Tiers are positive for the engine's own symbol and negative
    /// for the opponent's.
    #[must_use]
    pub fn evaluate_position(&self, board: &Board, pos: Pos, symbol: Stone) -> i32 {
        let center_row = (board.rows() / 2) as i32;
        let center_col = (board.cols() / 2) as i32;
        let mut score = CENTER_BONUS
            - (i32::from(pos.row) - center_row).abs()
            - (i32::from(pos.col) - center_col).abs();

        let own = symbol == self.me;
        for &(dr, dc) in &DIRECTIONS {
            let run = scan_run(board, pos, dr, dc, symbol);
            score += self.weights.score(run, own);
        }
        score
    }

    /// Aggregate score of the whole board.
    ///
    /// Own cells add their position score, opponent cells subtract it times
    /// the penalty factor.
    #[must_use]
    pub fn evaluate_board(&self, board: &Board) -> i32 {
        let opponent = self.me.opponent();
        let own: i32 = board
            .stones(self.me)
            .map(|pos| self.evaluate_position(board, pos, self.me))
            .sum();
        let theirs: i32 = board
            .stones(opponent)
            .map(|pos| self.evaluate_position(board, pos, opponent))
            .sum();
        own.saturating_sub(self.opponent_penalty.saturating_mul(theirs))
    }
}
