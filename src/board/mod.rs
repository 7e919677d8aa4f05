//! Board representation for five-in-a-row on a rectangular grid

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Grid dimension limits
pub const MIN_ROWS: usize = 10;
pub const MAX_ROWS: usize = 19;
pub const MIN_COLS: usize = 10;
pub const MAX_COLS: usize = 30;
pub const MAX_CELLS: usize = MAX_ROWS * MAX_COLS; // 570

/// Line directions scanned for runs (each checked both ways)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (-1, 1), // Diagonal up-right
];

/// Cell contents / player symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Stone {
    Empty,
    X,
    O,
}

impl Stone {
    /// Get opponent symbol
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::X => Stone::O,
            Stone::O => Stone::X,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Character used for text display
    pub fn symbol(self) -> char {
        match self {
            Stone::X => 'X',
            Stone::O => 'O',
            Stone::Empty => '.',
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position on the board
///
/// Ordering is row-major: `(0, 5) < (1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_ROWS && (col as usize) < MAX_COLS);
        Self { row, col }
    }

    /// Cell `steps` away along `(dr, dc)` as signed coordinates.
    /// The result may lie outside the board.
    #[inline]
    pub fn step(self, dr: i32, dc: i32, steps: i32) -> (i32, i32) {
        (
            i32::from(self.row) + dr * steps,
            i32::from(self.col) + dc * steps,
        )
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
