//! Threat detection: immediate wins and forced blocks
//!
//! Both scans walk the empty cells in row-major order and use the
//! make/unmake pattern on a mutable working board: the stone is placed,
//! inspected, and removed before moving on or returning.

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::eval::{count_open_consecutive, scan_run};
use crate::rules::has_five_at_pos;

/// How `find_blocking_move` resolves multiple threats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockPolicy {
    /// Remember the first open-three block but keep scanning; any four found
    /// later takes precedence.
    #[default]
    PreferFour,
    /// Return the first cell that blocks either a four or an open three.
    FirstThreat,
}

/// Kind of threat a blocking move answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatKind {
    /// Opponent would complete five here
    Four,
    /// Opponent would extend an open three to four here
    OpenThree,
}

/// A cell the engine should occupy to stop the opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub pos: Pos,
    pub kind: ThreatKind,
}

/// Threat scanner for wins and blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatDetector {
    policy: BlockPolicy,
}

impl ThreatDetector {
    pub fn new(policy: BlockPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> BlockPolicy {
        self.policy
    }

    /// First empty cell (row-major) where `color` completes five in a row.
    pub fn find_immediate_win(&self, board: &mut Board, color: Stone) -> Option<Pos> {
        let cells: Vec<Pos> = board.empty_cells().collect();
        for pos in cells {
            board.place_stone(pos, color);
            let wins = has_five_at_pos(board, pos);
            board.remove_stone(pos);
            if wins {
                return Some(pos);
            }
        }
        None
    }

    /// Find the cell that blocks the strongest threat of `opponent`.
    ///
    /// For each empty cell the opponent's stone is simulated there:
    /// - 4 or more of its stones in line with the cell: blocked immediately.
    /// - an open-ended run of 3: remembered as a tentative block (the first
    ///   one wins) and scanning continues under [`BlockPolicy::PreferFour`].
    ///
    /// Only one four is ever blocked even if several exist.
    pub fn find_blocking_move(&self, board: &mut Board, opponent: Stone) -> Option<Block> {
        let mut tentative: Option<Block> = None;

        let cells: Vec<Pos> = board.empty_cells().collect();
        for pos in cells {
            board.place_stone(pos, opponent);

            let is_four = DIRECTIONS
                .iter()
                .any(|&(dr, dc)| scan_run(board, pos, dr, dc, opponent).count >= 4);
            let is_open_three =
                !is_four && tentative.is_none() && count_open_consecutive(board, pos, opponent) >= 3;

            board.remove_stone(pos);

            if is_four {
                return Some(Block {
                    pos,
                    kind: ThreatKind::Four,
                });
            }
            if is_open_three {
                let block = Block {
                    pos,
                    kind: ThreatKind::OpenThree,
                };
                if self.policy == BlockPolicy::FirstThreat {
                    return Some(block);
                }
                tentative = Some(block);
            }
        }

        tentative
    }
}
