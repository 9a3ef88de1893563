//! Telescoping for `T(n) = T(n-1) + n`, `T(1) = 1`
//!
//! Unrolling k times gives T(n) = T(n-k) + (n-k+1) + … + n. At k = n-1 the
//! chain bottoms out at T(1), leaving 1 + 2 + … + n = n(n+1)/2.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::trace::{EventKind, ExecutionTrace};

/// Deepest recursion the genuine recursive sum is allowed to make.
pub const MAX_RECURSION_DEPTH: u64 = 5_000;

/// Errors raised by the telescoping helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelescopingError {
    /// Genuine recursion would exceed [`MAX_RECURSION_DEPTH`].
    #[error("n = {n} needs recursion depth {n}, limit is {limit}")]
    TooDeep {
        /// Requested size
        n: u64,
        /// Configured limit
        limit: u64,
    },
}

/// Closed form n(n+1)/2.
pub fn closed_form(n: u64) -> u128 {
    let n = u128::from(n);
    n * (n + 1) / 2
}

/// T(n) computed by genuine recursion, with one trace event per call.
///
/// Each call is charged the term it adds, so the trace total equals T(n).
pub fn recursive_sum(n: u64) -> Result<(u128, ExecutionTrace), TelescopingError> {
    if n > MAX_RECURSION_DEPTH {
        return Err(TelescopingError::TooDeep {
            n,
            limit: MAX_RECURSION_DEPTH,
        });
    }
    let mut trace = ExecutionTrace::new();
    let value = sum_rec(n, 0, &mut trace);
    debug!(n, value = %value, calls = trace.calls(), "recursive sum traced");
    Ok((value, trace))
}

fn sum_rec(n: u64, depth: usize, trace: &mut ExecutionTrace) -> u128 {
    if n <= 1 {
        trace.record(depth, n as usize, n, EventKind::Base);
        return u128::from(n);
    }
    trace.record(depth, n as usize, n, EventKind::Compute);
    sum_rec(n - 1, depth + 1, trace) + u128::from(n)
}

/// One unrolling step: T(n) = T(n-k) + (n-k+1) + … + n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct ExpansionStep {
    /// Original size
    pub n: u64,
    /// Number of unrollings applied
    pub k: u64,
    /// Sum of the peeled terms (n-k+1) + … + n
    pub peeled_sum: u128,
}

impl ExpansionStep {
    /// Argument of the remaining recursive term, n - k.
    pub fn remaining(&self) -> u64 {
        self.n - self.k
    }

    /// Numeric value of the right-hand side; equals T(n) at every step.
    pub fn value(&self) -> u128 {
        closed_form(self.remaining()) + self.peeled_sum
    }
}

impl fmt::Display for ExpansionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T({}) = T({})", self.n, self.remaining())?;
        let first = self.remaining() + 1;
        match self.k {
            0 => Ok(()),
            1..=4 => {
                for term in first..=self.n {
                    write!(f, " + {term}")?;
                }
                Ok(())
            }
            _ => write!(f, " + {} + … + {}", first, self.n),
        }
    }
}

/// The first `steps` unrollings of T(n), stopping at T(1).
pub fn expansion(n: u64, steps: u64) -> Vec<ExpansionStep> {
    let last = steps.min(n.saturating_sub(1));
    (1..=last)
        .map(|k| ExpansionStep {
            n,
            k,
            peeled_sum: closed_form(n) - closed_form(n - k),
        })
        .collect()
}

/// Recursive value compared with the closed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TelescopingCheck {
    /// Size checked
    pub n: u64,
    /// T(n) by recursion
    pub recursive: u128,
    /// n(n+1)/2
    pub closed_form: u128,
}

impl TelescopingCheck {
    /// Whether recursion and closed form agree.
    pub fn matches(&self) -> bool {
        self.recursive == self.closed_form
    }
}

/// Check the closed form against genuine recursion for each size.
pub fn verify(sizes: &[u64]) -> Result<Vec<TelescopingCheck>, TelescopingError> {
    sizes
        .iter()
        .map(|&n| {
            let (recursive, _) = recursive_sum(n)?;
            Ok(TelescopingCheck {
                n,
                recursive,
                closed_form: closed_form(n),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursive_matches_closed_form() {
        let checks = verify(&[0, 1, 5, 10, 15, 20]).unwrap();
        assert!(checks.iter().all(TelescopingCheck::matches));
        assert_eq!(checks[3].closed_form, 55);
    }

    #[test]
    fn test_trace_total_equals_value() {
        let (value, trace) = recursive_sum(12).unwrap();
        assert_eq!(u128::from(trace.total_work()), value);
        assert_eq!(trace.calls(), 12);
        assert_eq!(trace.max_depth(), Some(11));
    }

    #[test]
    fn test_expansion_lines() {
        let steps = expansion(10, 3);
        let lines: Vec<String> = steps.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "T(10) = T(9) + 10",
                "T(10) = T(8) + 9 + 10",
                "T(10) = T(7) + 8 + 9 + 10",
            ]
        );
        assert!(steps.iter().all(|s| s.value() == 55));
    }

    #[test]
    fn test_expansion_bottoms_out_at_one() {
        let steps = expansion(6, 100);
        let last = steps.last().unwrap();
        assert_eq!(last.remaining(), 1);
        assert_eq!(last.to_string(), "T(6) = T(1) + 2 + … + 6");
    }

    #[test]
    fn test_depth_limit() {
        assert!(matches!(
            recursive_sum(MAX_RECURSION_DEPTH + 1),
            Err(TelescopingError::TooDeep { .. })
        ));
    }
}
