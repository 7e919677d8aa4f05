//! Game rules for five-in-a-row
//!
//! Only the win condition lives here: five or more in a row in any of the
//! four line directions. Draws (full board) are decided by the game loop.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_win_sequence, has_five_at_pos, WinSequence};
