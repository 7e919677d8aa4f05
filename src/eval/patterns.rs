//! Pattern tiers for position evaluation
//!
//! A run through an occupied cell is scored by its length (anchor excluded)
//! and how many of its ends are open. Own runs score positive, opponent runs
//! negative, with separate magnitudes so the engine can be tuned defensively.

use crate::eval::scan::LineRun;

/// Tier magnitudes for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWeights {
    /// count >= 4
    pub four: i32,
    /// count == 3, both ends open
    pub open_three: i32,
    /// count == 3, one end open
    pub closed_three: i32,
    /// count == 2, both ends open
    pub open_two: i32,
    /// count == 2, one end open
    pub closed_two: i32,
}

impl LineWeights {
    /// Magnitude for a run, 0 when the run matches no tier
    #[inline]
    pub fn tier(&self, run: LineRun) -> i32 {
        match (run.count, run.open_ends) {
            (c, _) if c >= 4 => self.four,
            (3, 2) => self.open_three,
            (3, 1) => self.closed_three,
            (2, 2) => self.open_two,
            (2, 1) => self.closed_two,
            _ => 0,
        }
    }
}

/// Weights for the engine's own runs and for the opponent's runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternWeights {
    pub own: LineWeights,
    pub opponent: LineWeights,
}

impl PatternWeights {
    /// Tuning used with fixed-depth search: opponent fours weigh more than own.
    pub const DEFENSIVE: PatternWeights = PatternWeights {
        own: LineWeights {
            four: 1000,
            open_three: 700,
            closed_three: 500,
            open_two: 200,
            closed_two: 100,
        },
        opponent: LineWeights {
            four: 1500,
            open_three: 900,
            closed_three: 600,
            open_two: 200,
            closed_two: 100,
        },
    };

    /// Tuning used with dynamic-depth search: own fours weigh more than
    /// the opponent's.
    pub const ADAPTIVE: PatternWeights = PatternWeights {
        own: LineWeights {
            four: 1100,
            open_three: 700,
            closed_three: 500,
            open_two: 200,
            closed_two: 100,
        },
        opponent: LineWeights {
            four: 1000,
            open_three: 900,
            closed_three: 600,
            open_two: 200,
            closed_two: 100,
        },
    };

    /// Signed score for one run: positive for own, negative for opponent
    #[inline]
    pub fn score(&self, run: LineRun, own: bool) -> i32 {
        if own {
            self.own.tier(run)
        } else {
            -self.opponent.tier(run)
        }
    }
}

impl Default for PatternWeights {
    fn default() -> Self {
        Self::DEFENSIVE
    }
}

/// Named weight presets, as selected in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightPreset {
    #[default]
    Defensive,
    Adaptive,
}

impl WeightPreset {
    pub fn weights(self) -> PatternWeights {
        match self {
            WeightPreset::Defensive => PatternWeights::DEFENSIVE,
            WeightPreset::Adaptive => PatternWeights::ADAPTIVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(count: u8, open_ends: u8) -> LineRun {
        LineRun { count, open_ends }
    }

    #[test]
    fn test_tier_hierarchy() {
        for w in [PatternWeights::DEFENSIVE.own, PatternWeights::ADAPTIVE.opponent] {
            assert!(w.four > w.open_three);
            assert!(w.open_three > w.closed_three);
            assert!(w.closed_three > w.open_two);
            assert!(w.open_two > w.closed_two);
        }
    }

    #[test]
    fn test_tier_lookup() {
        let w = PatternWeights::DEFENSIVE.own;
        assert_eq!(w.tier(run(4, 0)), 1000);
        assert_eq!(w.tier(run(6, 2)), 1000);
        assert_eq!(w.tier(run(3, 2)), 700);
        assert_eq!(w.tier(run(3, 1)), 500);
        assert_eq!(w.tier(run(2, 2)), 200);
        assert_eq!(w.tier(run(2, 1)), 100);
        // Fully closed shorter runs and singles score nothing
        assert_eq!(w.tier(run(3, 0)), 0);
        assert_eq!(w.tier(run(1, 2)), 0);
    }

    #[test]
    fn test_signed_score() {
        let w = PatternWeights::ADAPTIVE;
        assert_eq!(w.score(run(4, 1), true), 1100);
        assert_eq!(w.score(run(4, 1), false), -1000);
        assert_eq!(w.score(run(3, 2), false), -900);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(WeightPreset::default().weights(), PatternWeights::DEFENSIVE);
        assert_eq!(WeightPreset::Adaptive.weights(), PatternWeights::ADAPTIVE);
    }
}
