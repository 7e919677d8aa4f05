//! Search depth selection
//!
//! The number of plies searched from the root is chosen per move from the
//! number of empty cells left, so late positions (fewer candidates) can be
//! searched deeper.

use std::fmt::Debug;

/// Maps game progress to a search depth in plies (root move included).
pub trait DepthPolicy: Debug + Send + Sync {
    fn depth_for(&self, empty_cells: usize) -> u8;
}

/// Always search the same number of plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDepth(pub u8);

impl Default for FixedDepth {
    fn default() -> Self {
        FixedDepth(3)
    }
}

impl DepthPolicy for FixedDepth {
    #[inline]
    fn depth_for(&self, _empty_cells: usize) -> u8 {
        self.0
    }
}

/// Deepen the search as the board fills up.
///
/// More than `early_threshold` empty cells: `early` plies; more than
/// `mid_threshold`: `mid` plies; otherwise `late` plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicDepth {
    pub early_threshold: usize,
    pub mid_threshold: usize,
    pub early: u8,
    pub mid: u8,
    pub late: u8,
}

impl Default for DynamicDepth {
    fn default() -> Self {
        Self {
            early_threshold: 70,
            mid_threshold: 50,
            early: 2,
            mid: 3,
            late: 4,
        }
    }
}

impl DepthPolicy for DynamicDepth {
    fn depth_for(&self, empty_cells: usize) -> u8 {
        if empty_cells > self.early_threshold {
            self.early
        } else if empty_cells > self.mid_threshold {
            self.mid
        } else {
            self.late
        }
    }
}

/// Serializable depth policy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DepthConfig {
    Fixed {
        plies: u8,
    },
    Dynamic {
        early_threshold: usize,
        mid_threshold: usize,
        early: u8,
        mid: u8,
        late: u8,
    },
}

impl Default for DepthConfig {
    fn default() -> Self {
        DepthConfig::Fixed {
            plies: FixedDepth::default().0,
        }
    }
}

impl DepthConfig {
    /// Default dynamic schedule (2 / 3 / 4 plies at 70 / 50 empty cells)
    pub fn dynamic() -> Self {
        let d = DynamicDepth::default();
        DepthConfig::Dynamic {
            early_threshold: d.early_threshold,
            mid_threshold: d.mid_threshold,
            early: d.early,
            mid: d.mid,
            late: d.late,
        }
    }

    pub fn build(&self) -> Box<dyn DepthPolicy> {
        match *self {
            DepthConfig::Fixed { plies } => Box::new(FixedDepth(plies)),
            DepthConfig::Dynamic {
                early_threshold,
                mid_threshold,
                early,
                mid,
                late,
            } => Box::new(DynamicDepth {
                early_threshold,
                mid_threshold,
                early,
                mid,
                late,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_depth() {
        let policy = FixedDepth::default();
        assert_eq!(policy.depth_for(100), 3);
        assert_eq!(policy.depth_for(1), 3);
    }

    #[test]
    fn test_dynamic_depth_schedule() {
        let policy = DynamicDepth::default();
        assert_eq!(policy.depth_for(100), 2);
        assert_eq!(policy.depth_for(71), 2);
        assert_eq!(policy.depth_for(70), 3);
        assert_eq!(policy.depth_for(51), 3);
        assert_eq!(policy.depth_for(50), 4);
        assert_eq!(policy.depth_for(0), 4);
    }

    #[test]
    fn test_depth_config_build() {
        assert_eq!(DepthConfig::default().build().depth_for(10), 3);
        let dynamic = DepthConfig::dynamic().build();
        assert_eq!(dynamic.depth_for(90), 2);
        assert_eq!(dynamic.depth_for(40), 4);
    }
}
