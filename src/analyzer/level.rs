//! Level-by-level walk of the idealized recursion tree
//!
//! Level i holds a^i nodes of size n / b^i.
//! No tree is materialized: every level is computed from (a, b, n, i).
//!
//! Node counts are exact big integers. When b is a whole number the walk
//! stops on the exact comparison b^i > n, so sizes above 2^53 do not pick
//! up an extra level from rounding n to f64. Other factors stop on the
//! floating-point size.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use tracing::trace;

use super::{AnalysisError, RecurrenceSpec};

/// Work summary for one recursion level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct LevelReport {
    /// Depth in the recursion tree (0 = root call)
    pub level: u32,

    /// Number of calls at this level: a^level, exact
    pub node_count: BigUint,

    /// Subproblem size of each call: n / b^level
    pub size_per_node: f64,

    /// Outside work of one call: f(size_per_node)
    pub work_per_node: f64,

    /// node_count * work_per_node
    pub level_work: f64,
}

/// Iterator over the levels of `spec` whose size is still >= 1.
///
/// Yields `floor(log_b n) + 1` levels for a valid spec and fuses after
/// the first error.
#[derive(Debug)]
pub struct LevelWalk<'a, F> {
    spec: &'a RecurrenceSpec<F>,
    level: u32,
    branching: BigUint,
    node_count: BigUint,
    /// b^level while b is integral; `None` once it exceeds every u64 size
    divisor: Option<u128>,
    done: bool,
}

impl<'a, F> LevelWalk<'a, F>
where
    F: Fn(f64) -> f64,
{
    /// Start at the root. `spec` must already be validated.
    pub fn new(spec: &'a RecurrenceSpec<F>) -> Self {
        Self {
            spec,
            level: 0,
            branching: BigUint::from(spec.a),
            node_count: BigUint::one(),
            divisor: Some(1),
            done: false,
        }
    }

    /// Size at the current level, or `None` once it drops below 1.
    fn current_size(&self) -> Option<f64> {
        match self.spec.integral_b() {
            Some(_) => {
                let divisor = self.divisor.filter(|&d| d <= u128::from(self.spec.n))?;
                Some(self.spec.n as f64 / divisor as f64)
            }
            None => {
                let size = self.spec.size_at(self.level);
                (size >= 1.0).then_some(size)
            }
        }
    }

    fn report(&self, size: f64) -> Result<LevelReport, AnalysisError> {
        let work_per_node = self.spec.work_at(size);
        if !work_per_node.is_finite() || work_per_node < 0.0 {
            return Err(AnalysisError::NonFinite {
                level: self.level,
                size,
                value: work_per_node,
            });
        }

        // Zero work contributes nothing however many nodes there are.
        let level_work = if work_per_node == 0.0 || self.node_count.is_zero() {
            0.0
        } else {
            self.node_count.to_f64().unwrap_or(f64::INFINITY) * work_per_node
        };
        if !level_work.is_finite() {
            return Err(AnalysisError::NonFinite {
                level: self.level,
                size,
                value: level_work,
            });
        }

        Ok(LevelReport {
            level: self.level,
            node_count: self.node_count.clone(),
            size_per_node: size,
            work_per_node,
            level_work,
        })
    }

    fn advance(&mut self) {
        self.node_count *= &self.branching;
        if let Some(b) = self.spec.integral_b() {
            // b^level <= n <= u64::MAX here, so overflow means b^(level+1) > n
            self.divisor = self.divisor.and_then(|d| d.checked_mul(u128::from(b)));
        }
        self.level += 1;
    }
}

impl<F> Iterator for LevelWalk<'_, F>
where
    F: Fn(f64) -> f64,
{
    type Item = Result<LevelReport, AnalysisError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(size) = self.current_size() else {
            self.done = true;
            return None;
        };

        match self.report(size) {
            Ok(report) => {
                trace!(
                    level = report.level,
                    size = report.size_per_node,
                    work = report.level_work,
                    "recursion level"
                );
                self.advance();
                Some(Ok(report))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_stops_below_unit_size() {
        let spec = RecurrenceSpec::new(3, 3.0, 27, |_| 1.0);
        let levels: Vec<_> = LevelWalk::new(&spec)
            .collect::<Result<_, _>>()
            .expect("valid spec walks cleanly");

        let sizes: Vec<f64> = levels.iter().map(|l| l.size_per_node).collect();
        assert_eq!(sizes, vec![27.0, 9.0, 3.0, 1.0]);
        let counts: Vec<u64> = levels.iter().filter_map(|l| l.node_count.to_u64()).collect();
        assert_eq!(counts, vec![1, 3, 9, 27]);
    }

    #[test]
    fn test_walk_fuses_after_error() {
        let spec = RecurrenceSpec::new(2, 2.0, 16, |s| if s < 5.0 { f64::NAN } else { s });
        let mut walk = LevelWalk::new(&spec);

        assert!(walk.next().unwrap().is_ok()); // 16
        assert!(walk.next().unwrap().is_ok()); // 8
        assert!(matches!(
            walk.next(),
            Some(Err(AnalysisError::NonFinite { level: 2, .. }))
        ));
        assert!(walk.next().is_none());
    }

    #[test]
    fn test_node_counts_past_u128() {
        // n = 2^63 with b = 1.25 has 196 levels; a^128 = 2^128 is past u128.
        let spec = RecurrenceSpec::new(2, 1.25, 1 << 63, |_| 0.0);
        let levels: Vec<_> = LevelWalk::new(&spec)
            .collect::<Result<_, _>>()
            .expect("zero work never overflows");
        assert_eq!(levels.len(), 196);
        assert_eq!(levels[128].node_count, BigUint::one() << 128usize);
        assert!(levels.iter().all(|l| l.level_work == 0.0));
    }

    #[test]
    fn test_integral_b_stops_on_exact_power() {
        let spec = RecurrenceSpec::new(1, 2.0, (1 << 60) - 1, |_| 1.0);
        assert_eq!(LevelWalk::new(&spec).count(), 60);
        let spec = spec.with_n(1 << 60);
        assert_eq!(LevelWalk::new(&spec).count(), 61);
        let spec = spec.with_n(u64::MAX);
        assert_eq!(LevelWalk::new(&spec).count(), 64);
    }
}
