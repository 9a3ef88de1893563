//! Substitution-method checks
//!
//! A guess `T(n) <= c·g(n)` is checked numerically against the exact
//! floor recursion on a finite domain. Passing on the domain is evidence,
//! not proof; the proof sketches are hand-written text.

mod exact;

pub use exact::SubstitutionKind;

use thiserror::Error;
use tracing::debug;

/// Largest exponent k accepted for the domain 2^1..2^k (or 1..=2^k).
pub const MAX_EXPONENT: u32 = 20;

/// Errors raised while checking a guess.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubstitutionError {
    /// Constant c must be finite and positive.
    #[error("constant c must be a finite number > 0 (got {0})")]
    InvalidConstant(f64),

    /// Domain exponent outside 1..=MAX_EXPONENT.
    #[error("domain exponent {k} outside 1..={max}")]
    ExponentOutOfRange {
        /// Requested exponent
        k: u32,
        /// Largest accepted exponent
        max: u32,
    },

    /// Name does not match any known recurrence.
    #[error("unknown recurrence '{0}'")]
    UnknownRecurrence(String),
}

/// Exact value against the guessed bound at one size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BoundCheck {
    /// Size checked
    pub n: u64,
    /// T(n) by exact recursion
    pub actual: f64,
    /// c·g(n)
    pub bound: f64,
}

impl BoundCheck {
    /// Whether T(n) <= c·g(n).
    pub fn holds(&self) -> bool {
        self.actual <= self.bound
    }
}

/// Sizes a guess is checked on: powers of two 2..=2^k for divide-and-conquer
/// recurrences, every integer 1..=2^k otherwise.
pub fn domain(kind: SubstitutionKind, k: u32) -> Result<Vec<u64>, SubstitutionError> {
    if k == 0 || k > MAX_EXPONENT {
        return Err(SubstitutionError::ExponentOutOfRange {
            k,
            max: MAX_EXPONENT,
        });
    }
    let sizes = if kind.divide_and_conquer() {
        (1..=k).map(|i| 1u64 << i).collect()
    } else {
        (1..=(1u64 << k)).collect()
    };
    Ok(sizes)
}

/// Check `T(n) <= c·g(n)` on the domain for exponent `k`.
pub fn check(kind: SubstitutionKind, c: f64, k: u32) -> Result<Vec<BoundCheck>, SubstitutionError> {
    if !c.is_finite() || c <= 0.0 {
        return Err(SubstitutionError::InvalidConstant(c));
    }
    let checks: Vec<BoundCheck> = domain(kind, k)?
        .into_iter()
        .map(|n| BoundCheck {
            n,
            actual: kind.exact(n),
            bound: c * kind.guess(n),
        })
        .collect();

    let failures = checks.iter().filter(|check| !check.holds()).count();
    debug!(recurrence = kind.name(), c, k, failures, "substitution guess checked");
    Ok(checks)
}

/// Smallest c for which the guess holds on the whole domain: max T(n)/g(n).
pub fn tightest_constant(kind: SubstitutionKind, k: u32) -> Result<f64, SubstitutionError> {
    let ratio = domain(kind, k)?
        .into_iter()
        .map(|n| kind.exact(n) / kind.guess(n))
        .fold(0.0_f64, f64::max);
    Ok(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_guess_holds_with_two() {
        let checks = check(SubstitutionKind::MergeSort, 2.0, 6).unwrap();
        let sizes: Vec<u64> = checks.iter().map(|c| c.n).collect();
        assert_eq!(sizes, vec![2, 4, 8, 16, 32, 64]);
        assert!(checks.iter().all(BoundCheck::holds));
        assert_eq!(checks[0].actual, 4.0);
        assert_eq!(checks[0].bound, 4.0);
    }

    #[test]
    fn test_merge_sort_guess_fails_below_one() {
        let checks = check(SubstitutionKind::MergeSort, 0.9, 6).unwrap();
        assert!(checks.iter().any(|c| !c.holds()));
    }

    #[test]
    fn test_linear_domain_is_dense() {
        assert_eq!(
            domain(SubstitutionKind::Linear, 3).unwrap(),
            vec![1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(matches!(
            check(SubstitutionKind::Linear, 0.0, 3),
            Err(SubstitutionError::InvalidConstant(_))
        ));
        assert!(matches!(
            check(SubstitutionKind::Linear, f64::NAN, 3),
            Err(SubstitutionError::InvalidConstant(_))
        ));
        assert!(matches!(
            domain(SubstitutionKind::MergeSort, 0),
            Err(SubstitutionError::ExponentOutOfRange { .. })
        ));
        assert!(matches!(
            domain(SubstitutionKind::MergeSort, MAX_EXPONENT + 1),
            Err(SubstitutionError::ExponentOutOfRange { .. })
        ));
    }

    #[test]
    fn test_tightest_constants() {
        assert_eq!(tightest_constant(SubstitutionKind::MergeSort, 10).unwrap(), 2.0);
        assert_eq!(tightest_constant(SubstitutionKind::Linear, 5).unwrap(), 1.0);
        let quad = tightest_constant(SubstitutionKind::HalvingQuadratic, 12).unwrap();
        assert!(quad < 4.0 / 3.0 && quad > 1.3);
    }
}
