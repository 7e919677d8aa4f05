//! Line scanning around a single cell
//!
//! Both functions treat the anchor cell as already holding `symbol` (or about
//! to), and never count it. Each direction walks at most 4 cells, so the work
//! is bounded regardless of board size.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Consecutive run around an anchor in one line direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRun {
    /// Same-symbol cells found on both sides (anchor excluded)
    pub count: u8,
    /// Number of sides that end on an empty cell (0, 1 or 2)
    pub open_ends: u8,
}

/// Walk one side of the line. Returns (run length, ended on empty cell).
#[inline]
fn walk(board: &Board, pos: Pos, dr: i32, dc: i32, symbol: Stone) -> (u8, bool) {
    let mut count = 0;
    for i in 1..5 {
        let (r, c) = pos.step(dr, dc, i);
        let Some(next) = board.pos_at(r, c) else {
            break;
        };
        match board.get(next) {
            s if s == symbol => count += 1,
            Stone::Empty => return (count, true),
            _ => break,
        }
    }
    (count, false)
}

/// Count `symbol` cells on both sides of `pos` along `(dr, dc)` and how many
/// of the two ends are open.
pub fn scan_run(board: &Board, pos: Pos, dr: i32, dc: i32, symbol: Stone) -> LineRun {
    let (fwd, fwd_open) = walk(board, pos, dr, dc, symbol);
    let (back, back_open) = walk(board, pos, -dr, -dc, symbol);
    LineRun {
        count: fwd + back,
        open_ends: u8::from(fwd_open) + u8::from(back_open),
    }
}

/// Longest run through `pos` over the four directions, counting only runs
/// with at least one open end.
pub fn count_open_consecutive(board: &Board, pos: Pos, symbol: Stone) -> u8 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| scan_run(board, pos, dr, dc, symbol))
        .filter(|run| run.open_ends > 0)
        .map(|run| run.count)
        .max()
        .unwrap_or(0)
}

/// Longest run through `pos` over the four directions, open or not.
pub fn max_run(board: &Board, pos: Pos, symbol: Stone) -> u8 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| scan_run(board, pos, dr, dc, symbol).count)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_board(setup: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new(10, 10).unwrap();
        for &(r, c, s) in setup {
            board.place_stone(Pos::new(r, c), s);
        }
        board
    }

    #[test]
    fn test_open_run_both_sides() {
        // . X X [a] X .
        let board = setup_board(&[(4, 2, Stone::X), (4, 3, Stone::X), (4, 5, Stone::X)]);
        let run = scan_run(&board, Pos::new(4, 4), 0, 1, Stone::X);
        assert_eq!(run, LineRun { count: 3, open_ends: 2 });
    }

    #[test]
    fn test_blocked_by_opponent() {
        // O X X [a] .
        let board = setup_board(&[(4, 1, Stone::O), (4, 2, Stone::X), (4, 3, Stone::X)]);
        let run = scan_run(&board, Pos::new(4, 4), 0, 1, Stone::X);
        assert_eq!(run, LineRun { count: 2, open_ends: 1 });
    }

    #[test]
    fn test_walk_stops_after_four_cells() {
        // Anchor at col 0, X on cols 1..=6: only 4 are counted
        let setup: Vec<_> = (1..=6).map(|c| (0, c, Stone::X)).collect();
        let board = setup_board(&setup);
        let run = scan_run(&board, Pos::new(0, 0), 0, 1, Stone::X);
        assert_eq!(run.count, 4);
        assert_eq!(run.open_ends, 0);
    }

    #[test]
    fn test_corner_bounds_safety() {
        let board = setup_board(&[(1, 1, Stone::O), (2, 2, Stone::O)]);
        let run = scan_run(&board, Pos::new(0, 0), 1, 1, Stone::O);
        assert_eq!(run, LineRun { count: 2, open_ends: 1 });

        let corner = Pos::new(9, 9);
        let run = scan_run(&board, corner, 1, 1, Stone::O);
        assert_eq!(run, LineRun { count: 0, open_ends: 1 });
        assert_eq!(count_open_consecutive(&board, Pos::new(0, 0), Stone::O), 2);
    }

    #[test]
    fn test_count_open_ignores_closed_runs() {
        // Vertical run fully closed: O X X X [a] O at col 0 rows 0..=5 with edge
        let board = setup_board(&[
            (1, 0, Stone::O),
            (2, 0, Stone::X),
            (3, 0, Stone::X),
            (4, 0, Stone::X),
            (6, 0, Stone::O),
        ]);
        let anchor = Pos::new(5, 0);
        assert_eq!(scan_run(&board, anchor, 1, 0, Stone::X).count, 3);
        assert_eq!(scan_run(&board, anchor, 1, 0, Stone::X).open_ends, 0);
        assert_eq!(max_run(&board, anchor, Stone::X), 3);
        assert_eq!(count_open_consecutive(&board, anchor, Stone::X), 0);
    }

    #[test]
    fn test_anti_diagonal_direction() {
        let board = setup_board(&[(6, 2, Stone::X), (4, 4, Stone::X)]);
        let run = scan_run(&board, Pos::new(5, 3), -1, 1, Stone::X);
        assert_eq!(run, LineRun { count: 2, open_ends: 2 });
    }
}
