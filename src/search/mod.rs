//! Search module for the move-selection engine
//!
//! Contains:
//! - Candidate move generation (neighbourhood of existing stones)
//! - Threat detection for immediate wins and forced blocks
//! - Depth policies mapping game progress to search depth
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod depth;
pub mod moves;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher};
pub use depth::{DepthConfig, DepthPolicy, DynamicDepth, FixedDepth};
pub use moves::candidate_moves;
pub use threat::{Block, BlockPolicy, ThreatDetector, ThreatKind};
