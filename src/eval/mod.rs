//! Evaluation module for five-in-a-row positions
//!
//! - [`scan`]: bounded line scanning around a cell
//! - [`patterns`]: tier weights for runs
//! - [`heuristic`]: per-cell and whole-board scores

pub mod heuristic;
pub mod patterns;
pub mod scan;

pub use heuristic::{Evaluator, DEFAULT_OPPONENT_PENALTY, MAX_OPPONENT_PENALTY};
pub use patterns::{LineWeights, PatternWeights, WeightPreset};
pub use scan::{count_open_consecutive, max_run, scan_run, LineRun};
