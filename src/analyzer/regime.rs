//! Dominant-regime labelling
//!
//! Heuristic only: compares the leaf and root levels to half of the total.
//! This produces a readable label for a chart or table. It is not a proof of
//! Master-Theorem case membership and does not agree with the formal case
//! boundaries in general (see `crate::master` for the numeric estimator).

use std::fmt;

use crate::master::MasterCase;

/// Share of total work a single level must strictly exceed to dominate.
pub const DOMINANCE_THRESHOLD: f64 = 0.5;

/// Which part of the recursion tree carries most of the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum DominantRegime {
    /// Deepest level holds more than half of the total (bottom-heavy).
    LeafHeavy,

    /// Neither end dominates; also the outcome of exact ties.
    Balanced,

    /// Root level holds more than half of the total (top-heavy).
    RootHeavy,
}

impl DominantRegime {
    /// Classify from root, leaf and total work.
    ///
    /// Leaf is checked first, so a single-level tree with positive work is
    /// `LeafHeavy`. Exactly 50% is not "more than half".
    pub fn classify(root_work: f64, leaf_work: f64, total_work: f64) -> Self {
        let threshold = DOMINANCE_THRESHOLD * total_work;
        if leaf_work > threshold {
            DominantRegime::LeafHeavy
        } else if root_work > threshold {
            DominantRegime::RootHeavy
        } else {
            DominantRegime::Balanced
        }
    }

    /// The Master-Method case this label is meant to illustrate.
    pub fn master_case(&self) -> MasterCase {
        match self {
            DominantRegime::LeafHeavy => MasterCase::SubproblemsDominate,
            DominantRegime::Balanced => MasterCase::Balanced,
            DominantRegime::RootHeavy => MasterCase::OutsideWorkDominates,
        }
    }

    /// One-line description for reports.
    pub fn description(&self) -> &'static str {
        match self {
            DominantRegime::LeafHeavy => "leaves dominate (bottom-heavy tree)",
            DominantRegime::Balanced => "work spread across levels",
            DominantRegime::RootHeavy => "root dominates (top-heavy tree)",
        }
    }
}

impl fmt::Display for DominantRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DominantRegime::LeafHeavy => "leaf-heavy",
            DominantRegime::Balanced => "balanced",
            DominantRegime::RootHeavy => "root-heavy",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_half_is_balanced() {
        assert_eq!(DominantRegime::classify(5.0, 5.0, 10.0), DominantRegime::Balanced);
    }

    #[test]
    fn test_leaf_checked_before_root() {
        // Single level: root and leaf are the same level
        assert_eq!(DominantRegime::classify(3.0, 3.0, 3.0), DominantRegime::LeafHeavy);
    }

    #[test]
    fn test_zero_work_is_balanced() {
        assert_eq!(DominantRegime::classify(0.0, 0.0, 0.0), DominantRegime::Balanced);
    }

    #[test]
    fn test_root_heavy() {
        assert_eq!(DominantRegime::classify(60.0, 1.0, 100.0), DominantRegime::RootHeavy);
    }
}
