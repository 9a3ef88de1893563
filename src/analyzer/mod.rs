//! Recursion-tree work analyzer
//!
//! Models `T(n) = a·T(n/b) + f(n)` as an idealized tree: a^i calls of
//! continuous size n / b^i at level i. Per-level work is summed into a
//! total and the dominant regime is labelled.
//!
//! Exact integer recursion (uneven `n/2` splits) lives in `crate::trace`;
//! the two are not expected to agree for sizes that are not powers of b.

mod level;
mod regime;
mod spec;

pub use level::{LevelReport, LevelWalk};
pub use regime::{DominantRegime, DOMINANCE_THRESHOLD};
pub use spec::RecurrenceSpec;

use thiserror::Error;
use tracing::debug;

/// Errors raised by [`analyze`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// `a`, `b` or `n` outside its domain.
    #[error("invalid recurrence: {reason}")]
    InvalidSpec {
        /// Which constraint was violated
        reason: String,
    },

    /// Work function returned a negative, NaN or infinite value.
    #[error("work function returned {value} at level {level} (size {size})")]
    NonFinite {
        /// Level being evaluated
        level: u32,
        /// Subproblem size passed to the work function
        size: f64,
        /// Offending value
        value: f64,
    },
}

impl AnalysisError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidSpec {
            reason: reason.into(),
        }
    }
}

/// Per-level breakdown and totals for one recurrence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct AnalysisResult {
    /// Levels ordered root first
    pub levels: Vec<LevelReport>,

    /// Sum of every `level_work`
    pub total_work: f64,

    /// Heuristic label, see [`DominantRegime::classify`]
    pub dominant_regime: DominantRegime,
}

impl AnalysisResult {
    /// Work at level 0.
    pub fn root_work(&self) -> f64 {
        self.levels.first().map_or(0.0, |l| l.level_work)
    }

    /// Work at the deepest level.
    pub fn leaf_work(&self) -> f64 {
        self.levels.last().map_or(0.0, |l| l.level_work)
    }

    /// Index of the deepest level.
    pub fn depth(&self) -> u32 {
        self.levels.last().map_or(0, |l| l.level)
    }

    /// Fraction of the total carried by each level (all zero if the total is zero).
    pub fn level_shares(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        let total = self.total_work;
        self.levels.iter().map(move |l| {
            let share = if total > 0.0 { l.level_work / total } else { 0.0 };
            (l.level, share)
        })
    }

    /// BLAKE3 digest over the exact bit patterns of every value.
    ///
    /// Two results share a fingerprint only if they are bit-identical.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        for level in &self.levels {
            hasher.update(&level.level.to_le_bytes());
            let count = level.node_count.to_bytes_le();
            hasher.update(&(count.len() as u64).to_le_bytes());
            hasher.update(&count);
            hasher.update(&level.size_per_node.to_bits().to_le_bytes());
            hasher.update(&level.work_per_node.to_bits().to_le_bytes());
            hasher.update(&level.level_work.to_bits().to_le_bytes());
        }
        hasher.update(&self.total_work.to_bits().to_le_bytes());
        hasher.update(&[self.dominant_regime as u8]);
        hasher.finalize()
    }
}

/// Analyze `T(n) = a·T(n/b) + f(n)` level by level.
///
/// Emits one [`LevelReport`] per level with size `n / b^i >= 1`, i.e.
/// `floor(log_b n) + 1` levels. Every work value is validated before it is
/// accumulated.
///
/// # Errors
///
/// * [`AnalysisError::InvalidSpec`] if `a < 1`, `b <= 1` or `n < 1`
/// * [`AnalysisError::NonFinite`] if `f` yields a negative, NaN or infinite value,
///   or a level's work is too large for `f64`
pub fn analyze<F>(spec: &RecurrenceSpec<F>) -> Result<AnalysisResult, AnalysisError>
where
    F: Fn(f64) -> f64,
{
    spec.validate()?;

    let mut levels = Vec::new();
    let mut total_work = 0.0_f64;

    for report in LevelWalk::new(spec) {
        let report = report?;
        total_work += report.level_work;
        if !total_work.is_finite() {
            return Err(AnalysisError::NonFinite {
                level: report.level,
                size: report.size_per_node,
                value: total_work,
            });
        }
        levels.push(report);
    }

    let root_work = levels.first().map_or(0.0, |l| l.level_work);
    let leaf_work = levels.last().map_or(0.0, |l| l.level_work);
    let dominant_regime = DominantRegime::classify(root_work, leaf_work, total_work);

    debug!(
        a = spec.a,
        b = spec.b,
        n = spec.n,
        levels = levels.len(),
        total_work,
        regime = %dominant_regime,
        "recursion tree analyzed"
    );

    Ok(AnalysisResult {
        levels,
        total_work,
        dominant_regime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level_for_unit_size() {
        let result = analyze(&RecurrenceSpec::new(5, 3.0, 1, |_| 2.5)).unwrap();
        assert_eq!(result.levels.len(), 1);
        assert_eq!(result.levels[0].node_count, num_bigint::BigUint::from(1u8));
        assert_eq!(result.levels[0].size_per_node, 1.0);
        assert_eq!(result.total_work, 2.5);
        assert_eq!(result.depth(), 0);
    }

    #[test]
    fn test_merge_sort_levels_are_flat() {
        let result = analyze(&RecurrenceSpec::new(2, 2.0, 64, |s| s)).unwrap();
        assert_eq!(result.levels.len(), 7);
        assert!(result.levels.iter().all(|l| l.level_work == 64.0));
        assert_eq!(result.total_work, 448.0);
        assert_eq!(result.dominant_regime, DominantRegime::Balanced);
    }

    #[test]
    fn test_negative_work_is_rejected() {
        let err = analyze(&RecurrenceSpec::new(1, 2.0, 8, |_| -1.0)).unwrap_err();
        assert!(matches!(err, AnalysisError::NonFinite { level: 0, .. }));
    }

    #[test]
    fn test_level_shares_sum_to_one() {
        let result = analyze(&RecurrenceSpec::new(3, 2.0, 100, |s| s * s)).unwrap();
        let sum: f64 = result.level_shares().map(|(_, s)| s).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_has_zero_shares() {
        let result = analyze(&RecurrenceSpec::new(2, 2.0, 8, |_| 0.0)).unwrap();
        assert!(result.level_shares().all(|(_, s)| s == 0.0));
        assert_eq!(result.dominant_regime, DominantRegime::Balanced);
    }
}
