//! Recurrence description `T(n) = a·T(n/b) + f(n)`

use std::fmt;

use super::AnalysisError;

/// Immutable description of a divide-and-conquer recurrence.
///
/// Sizes are treated as continuous: level `i` has subproblems of size
/// `n / b^i`, never re-floored. The work function must therefore accept
/// fractional sizes.
#[derive(Clone)]
pub struct RecurrenceSpec<F> {
    /// Number of recursive subproblems per call (`a >= 1`).
    pub a: u64,

    /// Size reduction factor per level (`b > 1`).
    pub b: f64,

    /// Initial problem size (`n >= 1`).
    pub n: u64,

    /// Non-recursive work of one call at a given size.
    pub work: F,
}

impl<F> RecurrenceSpec<F>
where
    F: Fn(f64) -> f64,
{
    /// Describe `T(n) = a·T(n/b) + work(n)`. Validation happens at analysis time.
    pub fn new(a: u64, b: f64, n: u64, work: F) -> Self {
        Self { a, b, n, work }
    }

    /// Check the domain constraints `a >= 1`, `b > 1`, `n >= 1`.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.a < 1 {
            return Err(AnalysisError::invalid("branching factor a must be >= 1"));
        }
        if !self.b.is_finite() || self.b <= 1.0 {
            return Err(AnalysisError::invalid(format!(
                "size reduction factor b must be a finite number > 1 (got {})",
                self.b
            )));
        }
        if self.n < 1 {
            return Err(AnalysisError::invalid("problem size n must be >= 1"));
        }
        Ok(())
    }

    /// Subproblem size at `level`: `n / b^level`.
    #[inline]
    pub fn size_at(&self, level: u32) -> f64 {
        self.n as f64 / self.b.powf(f64::from(level))
    }

    /// `b` as an integer, if it is a whole number that fits in `u64`.
    pub fn integral_b(&self) -> Option<u64> {
        let whole = self.b.is_finite() && self.b.fract() == 0.0 && self.b >= 0.0;
        // u64::MAX as f64 rounds up to 2^64, which itself does not fit
        (whole && self.b < u64::MAX as f64).then(|| self.b as u64)
    }

    /// Evaluate the outside work at `size`.
    #[inline]
    pub fn work_at(&self, size: f64) -> f64 {
        (self.work)(size)
    }

    /// Replace the problem size, keeping `a`, `b` and the work function.
    pub fn with_n(self, n: u64) -> Self {
        Self { n, ..self }
    }
}

impl<F> fmt::Debug for RecurrenceSpec<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecurrenceSpec")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("n", &self.n)
            .finish_non_exhaustive()
    }
}

impl<F> fmt::Display for RecurrenceSpec<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T({}) = {}·T(n/{}) + f(n)", self.n, self.a, self.b)
    }
}
