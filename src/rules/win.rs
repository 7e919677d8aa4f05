//! Win condition checking
//!
//! A player wins by owning five or more consecutive cells horizontally,
//! vertically or diagonally. There are no captures or forbidden moves.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// A winning run through a just-placed stone.
///
/// `start` and `end` are the two extreme cells of the run; both are `None`
/// when no win was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinSequence {
    pub found: bool,
    pub start: Option<Pos>,
    pub end: Option<Pos>,
}

impl WinSequence {
    #[inline]
    fn none() -> Self {
        Self {
            found: false,
            start: None,
            end: None,
        }
    }
}

/// Find the five-in-a-row through `pos` for the stone standing there.
///
/// Walks at most 4 cells each way in each direction, so the reported
/// `start`/`end` span at most 9 cells even on a longer overline.
pub fn find_win_sequence(board: &Board, pos: Pos) -> WinSequence {
    let color = board.get(pos);
    if color == Stone::Empty {
        return WinSequence::none();
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;
        let mut start = pos;
        let mut end = pos;

        // Forward
        for i in 1..5 {
            let (r, c) = pos.step(dr, dc, i);
            match board.pos_at(r, c) {
                Some(next) if board.get(next) == color => {
                    count += 1;
                    end = next;
                }
                _ => break,
            }
        }

        // Backward
        for i in 1..5 {
            let (r, c) = pos.step(-dr, -dc, i);
            match board.pos_at(r, c) {
                Some(prev) if board.get(prev) == color => {
                    count += 1;
                    start = prev;
                }
                _ => break,
            }
        }

        if count >= 5 {
            return WinSequence {
                found: true,
                start: Some(start),
                end: Some(end),
            };
        }
    }

    WinSequence::none()
}

/// Fast five-in-a-row check at a specific position.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    find_win_sequence(board, pos).found
}

/// Scan the whole board for a winner.
///
/// Returns the first winning stone found in row-major order together with
/// its run.
pub fn check_winner(board: &Board) -> Option<(Stone, WinSequence)> {
    for pos in board.occupied() {
        let seq = find_win_sequence(board, pos);
        if seq.found {
            return Some((board.get(pos), seq));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(15, 15).unwrap()
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = board();
        for i in 0..5 {
            board.place_stone(Pos::new(9, i), Stone::X);
        }
        let seq = find_win_sequence(&board, Pos::new(9, 2));
        assert!(seq.found);
        assert_eq!(seq.start, Some(Pos::new(9, 0)));
        assert_eq!(seq.end, Some(Pos::new(9, 4)));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = board();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 9), Stone::O);
        }
        assert!(has_five_at_pos(&board, Pos::new(4, 9)));
        assert!(!has_five_at_pos(&board, Pos::new(5, 9)));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = board();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::O);
        }
        let seq = find_win_sequence(&board, Pos::new(0, 0));
        assert!(seq.found);
        assert_eq!(seq.end, Some(Pos::new(4, 4)));
    }

    #[test]
    fn test_anti_diagonal_five() {
        let mut board = board();
        // Diagonal from (8, 4) up to (4, 8)
        for i in 0..5 {
            board.place_stone(Pos::new(8 - i, 4 + i), Stone::X);
        }
        let seq = find_win_sequence(&board, Pos::new(6, 6));
        assert!(seq.found);
        assert_eq!(seq.start, Some(Pos::new(8, 4)));
        assert_eq!(seq.end, Some(Pos::new(4, 8)));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = board();
        for i in 0..6 {
            board.place_stone(Pos::new(9, i), Stone::X);
        }
        assert!(has_five_at_pos(&board, Pos::new(9, 5)));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = board();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::X);
        }
        assert!(!has_five_at_pos(&board, Pos::new(9, 3)));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_interrupted_line_not_win() {
        let mut board = board();
        for i in [0, 1, 3, 4, 5] {
            board.place_stone(Pos::new(2, i), Stone::X);
        }
        board.place_stone(Pos::new(2, 2), Stone::O);
        assert!(!has_five_at_pos(&board, Pos::new(2, 1)));
    }

    #[test]
    fn test_empty_cell_has_no_sequence() {
        let board = board();
        assert_eq!(find_win_sequence(&board, Pos::new(3, 3)), WinSequence::none());
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new(10, 30).unwrap();
        for i in 0..5 {
            board.place_stone(Pos::new(5 + i, 25 + i), Stone::O);
        }
        let (winner, seq) = check_winner(&board).unwrap();
        assert_eq!(winner, Stone::O);
        assert_eq!(seq.start, Some(Pos::new(5, 25)));
        assert_eq!(seq.end, Some(Pos::new(9, 29)));
    }
}
