//! Exact floor recursions and their guessed bounds
//!
//! Base case T(n) = 1 for n <= 1; every division is integer n / 2.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, Recurrence, WorkShape};

use super::SubstitutionError;

/// Recurrences with a guessed closed-form bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum SubstitutionKind {
    /// T(n) = 2T(n/2) + n, guess n log n
    MergeSort,
    /// T(n) = T(n/2) + n², guess n²
    HalvingQuadratic,
    /// T(n) = 2T(n/2) + n log n, guess n log² n
    MergeSortNLogN,
    /// T(n) = T(n-1) + 1, guess n
    Linear,
}

impl SubstitutionKind {
    /// Every supported recurrence.
    pub const ALL: [SubstitutionKind; 4] = [
        SubstitutionKind::MergeSort,
        SubstitutionKind::HalvingQuadratic,
        SubstitutionKind::MergeSortNLogN,
        SubstitutionKind::Linear,
    ];

    /// Short identifier used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SubstitutionKind::MergeSort => "merge-sort",
            SubstitutionKind::HalvingQuadratic => "halving-quadratic",
            SubstitutionKind::MergeSortNLogN => "merge-sort-nlogn",
            SubstitutionKind::Linear => "linear",
        }
    }

    /// Recurrence in textbook form.
    pub fn label(&self) -> &'static str {
        match self {
            SubstitutionKind::MergeSort => "T(n) = 2T(n/2) + n",
            SubstitutionKind::HalvingQuadratic => "T(n) = T(n/2) + n²",
            SubstitutionKind::MergeSortNLogN => "T(n) = 2T(n/2) + n log n",
            SubstitutionKind::Linear => "T(n) = T(n-1) + 1",
        }
    }

    /// The guessed g(n).
    pub fn guess_label(&self) -> &'static str {
        match self {
            SubstitutionKind::MergeSort => "n log n",
            SubstitutionKind::HalvingQuadratic => "n²",
            SubstitutionKind::MergeSortNLogN => "n log² n",
            SubstitutionKind::Linear => "n",
        }
    }

    /// A constant for which the guess holds on every domain checked.
    pub fn suggested_c(&self) -> f64 {
        match self {
            SubstitutionKind::MergeSort => 2.0,
            SubstitutionKind::HalvingQuadratic => 1.5,
            SubstitutionKind::MergeSortNLogN => 2.0,
            SubstitutionKind::Linear => 1.0,
        }
    }

    /// Whether the recurrence divides its input (domain is powers of two).
    pub fn divide_and_conquer(&self) -> bool {
        !matches!(self, SubstitutionKind::Linear)
    }

    /// Idealized a·T(n/b) + f(n) form, if the recurrence has one.
    pub fn recurrence(&self) -> Option<Recurrence> {
        match self {
            SubstitutionKind::MergeSort => Some(catalog::MERGE_SORT),
            SubstitutionKind::HalvingQuadratic => Some(Recurrence {
                name: "halving-quadratic",
                a: 1,
                b: 2.0,
                shape: WorkShape::Quadratic,
            }),
            SubstitutionKind::MergeSortNLogN => Some(Recurrence {
                name: "merge-sort-nlogn",
                a: 2,
                b: 2.0,
                shape: WorkShape::NLogN,
            }),
            SubstitutionKind::Linear => None,
        }
    }

    /// Hand-written proof sketch.
    pub fn proof(&self) -> &'static [&'static str] {
        match self {
            SubstitutionKind::MergeSort => &[
                "Guess: T(n) ≤ c·n·log₂ n",
                "Assume T(k) ≤ c·k·log₂ k for all k < n",
                "T(n) ≤ 2·c·(n/2)·log₂(n/2) + n",
                "     = c·n·(log₂ n − 1) + n",
                "     = c·n·log₂ n − (c − 1)·n",
                "     ≤ c·n·log₂ n when c ≥ 1",
            ],
            SubstitutionKind::HalvingQuadratic => &[
                "Guess: T(n) ≤ c·n²",
                "T(n) ≤ c·(n/2)² + n² = (c/4)·n² + n²",
                "     ≤ c·n² when c ≥ 4/3",
            ],
            SubstitutionKind::MergeSortNLogN => &[
                "First guess T(n) ≤ c·n·log₂ n:",
                "T(n) ≤ 2·c·(n/2)·log₂(n/2) + n·log₂ n = (c + 1)·n·log₂ n − c·n",
                "which is not ≤ c·n·log₂ n, so the guess fails",
                "Revised guess: T(n) ≤ c·n·(log₂ n)²",
                "T(n) ≤ c·n·(log₂ n − 1)² + n·log₂ n",
                "     = c·n·log₂² n − (2c − 1)·n·log₂ n + c·n",
                "     ≤ c·n·log₂² n when c ≥ 1 and n ≥ 2",
            ],
            SubstitutionKind::Linear => &[
                "Guess: T(n) ≤ c·n",
                "T(n) ≤ c·(n − 1) + 1 = c·n − (c − 1)",
                "     ≤ c·n when c ≥ 1",
            ],
        }
    }

    /// Exact T(n) with floor division and T(n) = 1 for n <= 1.
    ///
    /// The halving kinds recurse. `Linear` returns max(n, 1), the value
    /// T(n) = T(n - 1) + 1 unrolls to, so dense domains stay linear time.
    pub fn exact(&self, n: u64) -> f64 {
        match self {
            SubstitutionKind::Linear => n.max(1) as f64,
            _ if n <= 1 => 1.0,
            SubstitutionKind::MergeSort => 2.0 * self.exact(n / 2) + n as f64,
            SubstitutionKind::HalvingQuadratic => self.exact(n / 2) + (n as f64) * (n as f64),
            SubstitutionKind::MergeSortNLogN => {
                2.0 * self.exact(n / 2) + n as f64 * (n.max(2) as f64).log2()
            }
        }
    }

    /// g(n), with g(n) = 1 for n <= 1 where log n would vanish.
    pub fn guess(&self, n: u64) -> f64 {
        let x = n as f64;
        match self {
            SubstitutionKind::MergeSort if n > 1 => x * x.log2(),
            SubstitutionKind::MergeSortNLogN if n > 1 => x * x.log2().powi(2),
            SubstitutionKind::MergeSort | SubstitutionKind::MergeSortNLogN => 1.0,
            SubstitutionKind::HalvingQuadratic => x * x,
            SubstitutionKind::Linear => x,
        }
    }
}

impl fmt::Display for SubstitutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  (guess: {})", self.label(), self.guess_label())
    }
}

impl FromStr for SubstitutionKind {
    type Err = SubstitutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubstitutionKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SubstitutionError::UnknownRecurrence(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_values() {
        assert_eq!(SubstitutionKind::MergeSort.exact(1), 1.0);
        assert_eq!(SubstitutionKind::MergeSort.exact(8), 32.0);
        assert_eq!(SubstitutionKind::MergeSort.exact(5), 2.0 * 4.0 + 5.0);
        assert_eq!(SubstitutionKind::HalvingQuadratic.exact(4), 21.0);
        assert_eq!(SubstitutionKind::MergeSortNLogN.exact(2), 4.0);
        assert_eq!(SubstitutionKind::Linear.exact(0), 1.0);
        assert_eq!(SubstitutionKind::Linear.exact(9), 9.0);
    }

    #[test]
    fn test_linear_matches_unrolled_recurrence() {
        let mut t = 1.0;
        assert_eq!(SubstitutionKind::Linear.exact(0), t);
        assert_eq!(SubstitutionKind::Linear.exact(1), t);
        for n in 2..=200 {
            t += 1.0;
            assert_eq!(SubstitutionKind::Linear.exact(n), t, "n = {n}");
        }
    }

    #[test]
    fn test_guess_values() {
        assert_eq!(SubstitutionKind::MergeSort.guess(8), 24.0);
        assert_eq!(SubstitutionKind::MergeSortNLogN.guess(8), 72.0);
        assert_eq!(SubstitutionKind::MergeSortNLogN.guess(1), 1.0);
    }

    #[test]
    fn test_parse_round_trips_names() {
        for kind in SubstitutionKind::ALL {
            assert_eq!(kind.name().parse::<SubstitutionKind>().unwrap(), kind);
        }
        assert!("fibonacci".parse::<SubstitutionKind>().is_err());
    }

    #[test]
    fn test_every_kind_has_a_proof() {
        assert!(SubstitutionKind::ALL.iter().all(|k| !k.proof().is_empty()));
        assert!(SubstitutionKind::Linear.recurrence().is_none());
    }
}
