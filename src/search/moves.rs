//! Candidate move generation
//!
//! Only empty cells touching an existing stone (8-neighbourhood) are
//! searched. This keeps the branching factor proportional to the number of
//! stones instead of the board area.

use crate::board::{Board, Pos, MAX_CELLS};

/// Empty cells adjacent to any occupied cell, deduplicated, in row-major order.
///
/// Returns an empty vector for an empty or full board.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(32);
    let mut seen = [false; MAX_CELLS];
    let cols = board.cols();

    for pos in board.occupied() {
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                let (r, c) = pos.step(dr, dc, 1);
                let Some(next) = board.pos_at(r, c) else {
                    continue;
                };
                let idx = next.row as usize * cols + next.col as usize;
                if seen[idx] {
                    continue;
                }
                seen[idx] = true;

                if board.is_empty(next) {
                    moves.push(next);
                }
            }
        }
    }

    moves.sort_unstable();
    moves
}
