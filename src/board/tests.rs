use super::*;
use crate::error::BoardError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::X.opponent(), Stone::O);
    assert_eq!(Stone::O.opponent(), Stone::X);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(9, 9);
    assert_eq!(pos.row, 9);
    assert_eq!(pos.col, 9);
}

#[test]
fn test_pos_ordering_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 29);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_step() {
    let pos = Pos::new(0, 0);
    assert_eq!(pos.step(1, 1, 3), (3, 3));
    assert_eq!(pos.step(-1, 1, 2), (-2, 2));
}

#[test]
fn test_board_dimensions() {
    let board = Board::new(10, 30).unwrap();
    assert_eq!(board.rows(), 10);
    assert_eq!(board.cols(), 30);
    assert_eq!(board.empty_count(), 300);
    assert!(board.is_board_empty());
    assert!(!board.is_full());
}

#[test]
fn test_board_rejects_bad_dimensions() {
    assert_eq!(
        Board::new(9, 10),
        Err(BoardError::InvalidDimensions { rows: 9, cols: 10 })
    );
    assert!(Board::new(20, 10).is_err());
    assert!(Board::new(10, 31).is_err());
    assert!(Board::new(19, 30).is_ok());
}

#[test]
fn test_board_center() {
    assert_eq!(Board::new(10, 10).unwrap().center(), Pos::new(5, 5));
    assert_eq!(Board::new(15, 29).unwrap().center(), Pos::new(7, 14));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new(12, 17).unwrap();
    let pos = Pos::new(11, 16);

    board.place_stone(pos, Stone::O);
    assert_eq!(board.get(pos), Stone::O);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert_eq!(board.get(pos), Stone::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_place_overwrites_other_color() {
    let mut board = Board::new(10, 10).unwrap();
    let pos = Pos::new(4, 4);

    board.place_stone(pos, Stone::O);
    board.place_stone(pos, Stone::X);
    assert_eq!(board.get(pos), Stone::X);
    assert_eq!(board.stone_count(), 1);
    assert_eq!(board.empty_count(), 99);
    assert_eq!(board.stones(Stone::O).count(), 0);

    board.place_stone(pos, Stone::O);
    assert_eq!(board.get(pos), Stone::O);
    assert_eq!(board.stones(Stone::X).count(), 0);
}

#[test]
fn test_contains_and_pos_at() {
    let board = Board::new(10, 12).unwrap();
    assert!(board.contains(0, 0));
    assert!(board.contains(9, 11));
    assert!(!board.contains(10, 0));
    assert!(!board.contains(0, 12));
    assert!(!board.contains(-1, 3));
    assert_eq!(board.pos_at(9, 11), Some(Pos::new(9, 11)));
    assert_eq!(board.pos_at(-1, 0), None);
}

#[test]
fn test_board_full() {
    let mut board = Board::new(10, 10).unwrap();
    for r in 0..10u8 {
        for c in 0..10u8 {
            let stone = if (r + c) % 2 == 0 { Stone::X } else { Stone::O };
            board.place_stone(Pos::new(r, c), stone);
        }
    }
    assert!(board.is_full());
    assert_eq!(board.empty_count(), 0);
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_occupied_row_major() {
    let mut board = Board::new(10, 10).unwrap();
    board.place_stone(Pos::new(7, 2), Stone::X);
    board.place_stone(Pos::new(1, 8), Stone::O);
    board.place_stone(Pos::new(1, 3), Stone::X);

    let occupied: Vec<Pos> = board.occupied().collect();
    assert_eq!(occupied, vec![Pos::new(1, 3), Pos::new(1, 8), Pos::new(7, 2)]);

    let xs: Vec<Pos> = board.stones(Stone::X).collect();
    assert_eq!(xs, vec![Pos::new(1, 3), Pos::new(7, 2)]);
}

#[test]
fn test_board_display() {
    let mut board = Board::new(10, 10).unwrap();
    board.place_stone(Pos::new(0, 0), Stone::X);
    let text = board.to_string();
    assert_eq!(text.lines().count(), 11);
    assert!(text.lines().nth(1).unwrap().contains('X'));
}
