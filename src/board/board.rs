//! Grid with per-symbol bitboards

use super::bitboard::Bitboard;
use super::{Pos, Stone, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
use crate::error::BoardError;

/// Game board of `rows x cols` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// X stones bitboard
    x: Bitboard,
    /// O stones bitboard
    o: Bitboard,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails when the dimensions fall outside 10..=19 rows or 10..=30 columns.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) || !(MIN_COLS..=MAX_COLS).contains(&cols) {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            x: Bitboard::new(),
            o: Bitboard::new(),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Center cell `(rows / 2, cols / 2)`
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new((self.rows / 2) as u8, (self.cols / 2) as u8)
    }

    /// Check signed coordinates against the grid bounds
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Convert signed coordinates to a position if they are on the board
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        if self.contains(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!((pos.row as usize) < self.rows && (pos.col as usize) < self.cols);
        pos.row as usize * self.cols + pos.col as usize
    }

    #[inline]
    fn pos_of(&self, idx: usize) -> Pos {
        Pos::new((idx / self.cols) as u8, (idx % self.cols) as u8)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.x.get(idx) {
            Stone::X
        } else if self.o.get(idx) {
            Stone::O
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        !self.x.get(idx) && !self.o.get(idx)
    }

    /// Place a stone without any validation, replacing whatever the cell held.
    ///
    /// Used for simulate/undo during search; game moves go through
    /// [`crate::game::Game::play`].
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        match stone {
            Stone::X => {
                self.o.clear(idx);
                self.x.set(idx);
            }
            Stone::O => {
                self.x.clear(idx);
                self.o.set(idx);
            }
            Stone::Empty => {
                self.x.clear(idx);
                self.o.clear(idx);
            }
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.x.clear(idx);
        self.o.clear(idx);
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        (self.x.count() + self.o.count()) as usize
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.rows * self.cols - self.stone_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Check if board has no stones at all
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// Occupied cells of one symbol in row-major order
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let bb = match stone {
            Stone::X => self.x,
            Stone::O => self.o,
            Stone::Empty => Bitboard::new(),
        };
        bb.iter_ones().map(move |idx| self.pos_of(idx))
    }

    /// All occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = Pos> + '_ {
        self.x.union(&self.o).iter_ones().map(move |idx| self.pos_of(idx))
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .map(move |c| Pos::new(r as u8, c as u8))
                .filter(move |&pos| self.is_empty(pos))
        })
    }
}

impl std::fmt::Display for Board {
    /// Plain text grid with row/column indices
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.cols {
            write!(f, "{:3}", c)?;
        }
        writeln!(f)?;
        for r in 0..self.rows {
            write!(f, "{:2} ", r)?;
            for c in 0..self.cols {
                write!(f, "{:>3}", self.get(Pos::new(r as u8, c as u8)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
