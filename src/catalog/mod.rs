//! Named work shapes and textbook recurrences
//!
//! Each entry is a thin adapter: it supplies (a, b, f) and turns into a
//! [`RecurrenceSpec`] for a chosen n.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::analyzer::RecurrenceSpec;

/// Errors raised while looking up catalog entries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Shape string not one of `1`, `n`, `nlogn`, `n^2`, `n^3`.
    #[error("unknown work shape '{0}' (expected one of 1, n, nlogn, n^2, n^3)")]
    UnknownShape(String),

    /// No built-in recurrence with this name.
    #[error("unknown recurrence '{0}'")]
    UnknownRecurrence(String),
}

/// Closed-form outside work f(n).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum WorkShape {
    /// f(n) = 1
    Constant,
    /// f(n) = n
    Linear,
    /// f(n) = n log₂ n (log clamped to log₂ 2 below n = 2)
    NLogN,
    /// f(n) = n²
    Quadratic,
    /// f(n) = n³
    Cubic,
}

impl WorkShape {
    /// Every shape, cheapest first.
    pub const ALL: [WorkShape; 5] = [
        WorkShape::Constant,
        WorkShape::Linear,
        WorkShape::NLogN,
        WorkShape::Quadratic,
        WorkShape::Cubic,
    ];

    /// Evaluate at a (possibly fractional) size.
    pub fn eval(self, size: f64) -> f64 {
        (self.as_fn())(size)
    }

    /// Plain function pointer, usable as a `RecurrenceSpec` work function.
    pub fn as_fn(self) -> fn(f64) -> f64 {
        match self {
            WorkShape::Constant => constant,
            WorkShape::Linear => linear,
            WorkShape::NLogN => n_log_n,
            WorkShape::Quadratic => quadratic,
            WorkShape::Cubic => cubic,
        }
    }
}

fn constant(_: f64) -> f64 {
    1.0
}

fn linear(size: f64) -> f64 {
    size
}

fn n_log_n(size: f64) -> f64 {
    size * size.max(2.0).log2()
}

fn quadratic(size: f64) -> f64 {
    size * size
}

fn cubic(size: f64) -> f64 {
    size * size * size
}

impl fmt::Display for WorkShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkShape::Constant => "1",
            WorkShape::Linear => "n",
            WorkShape::NLogN => "n log n",
            WorkShape::Quadratic => "n²",
            WorkShape::Cubic => "n³",
        };
        f.write_str(label)
    }
}

impl FromStr for WorkShape {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "1" | "const" | "constant" => Ok(WorkShape::Constant),
            "n" | "linear" => Ok(WorkShape::Linear),
            "nlogn" | "n*logn" => Ok(WorkShape::NLogN),
            "n^2" | "n2" | "n²" | "quadratic" => Ok(WorkShape::Quadratic),
            "n^3" | "n3" | "n³" | "cubic" => Ok(WorkShape::Cubic),
            _ => Err(CatalogError::UnknownShape(s.to_string())),
        }
    }
}

/// A divide-and-conquer recurrence `T(n) = a·T(n/b) + shape(n)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Recurrence {
    /// Short identifier used on the command line
    pub name: &'static str,
    /// Subproblems per call
    pub a: u64,
    /// Size reduction factor
    pub b: f64,
    /// Outside work
    pub shape: WorkShape,
}

impl Recurrence {
    /// Build an unnamed recurrence.
    pub fn custom(a: u64, b: f64, shape: WorkShape) -> Self {
        Self {
            name: "custom",
            a,
            b,
            shape,
        }
    }

    /// Concrete analyzer input for size `n`.
    pub fn spec(&self, n: u64) -> RecurrenceSpec<fn(f64) -> f64> {
        RecurrenceSpec::new(self.a, self.b, n, self.shape.as_fn())
    }

    /// `T(n) = aT(n/b) + f(n)` in textbook form.
    pub fn label(&self) -> String {
        let recursive = if self.a == 1 {
            format!("T(n/{})", self.b)
        } else {
            format!("{}T(n/{})", self.a, self.b)
        };
        format!("T(n) = {} + {}", recursive, self.shape)
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.label(), self.name)
    }
}

/// Binary search: T(n) = T(n/2) + 1.
pub const BINARY_SEARCH: Recurrence = Recurrence {
    name: "binary-search",
    a: 1,
    b: 2.0,
    shape: WorkShape::Constant,
};

/// Merge sort: T(n) = 2T(n/2) + n.
pub const MERGE_SORT: Recurrence = Recurrence {
    name: "merge-sort",
    a: 2,
    b: 2.0,
    shape: WorkShape::Linear,
};

/// Binary tree sum / tournament max: T(n) = 2T(n/2) + 1.
pub const TREE_SUM: Recurrence = Recurrence {
    name: "tree-sum",
    a: 2,
    b: 2.0,
    shape: WorkShape::Constant,
};

/// Four-way split with linear combine: T(n) = 4T(n/2) + n.
pub const LEAF_HEAVY: Recurrence = Recurrence {
    name: "four-way",
    a: 4,
    b: 2.0,
    shape: WorkShape::Linear,
};

/// Quadratic combine: T(n) = 2T(n/2) + n².
pub const TOP_HEAVY: Recurrence = Recurrence {
    name: "quadratic-combine",
    a: 2,
    b: 2.0,
    shape: WorkShape::Quadratic,
};

/// Strassen-style: T(n) = 7T(n/2) + n².
pub const STRASSEN: Recurrence = Recurrence {
    name: "strassen",
    a: 7,
    b: 2.0,
    shape: WorkShape::Quadratic,
};

/// All built-in recurrences.
pub const BUILTIN: [Recurrence; 6] = [
    BINARY_SEARCH,
    MERGE_SORT,
    TREE_SUM,
    LEAF_HEAVY,
    TOP_HEAVY,
    STRASSEN,
];

/// Look up a built-in recurrence by name.
pub fn lookup(name: &str) -> Result<Recurrence, CatalogError> {
    BUILTIN
        .iter()
        .copied()
        .find(|r| r.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CatalogError::UnknownRecurrence(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_parsing() {
        assert_eq!("n log n".parse::<WorkShape>().unwrap(), WorkShape::NLogN);
        assert_eq!("N^2".parse::<WorkShape>().unwrap(), WorkShape::Quadratic);
        assert_eq!("1".parse::<WorkShape>().unwrap(), WorkShape::Constant);
        assert!(matches!(
            "n!".parse::<WorkShape>(),
            Err(CatalogError::UnknownShape(_))
        ));
    }

    #[test]
    fn test_eval_values() {
        assert_eq!(WorkShape::Constant.eval(123.0), 1.0);
        assert_eq!(WorkShape::Linear.eval(0.5), 0.5);
        assert_eq!(WorkShape::NLogN.eval(8.0), 24.0);
        assert_eq!(WorkShape::NLogN.eval(1.0), 1.0);
        assert_eq!(WorkShape::Quadratic.eval(3.0), 9.0);
        assert_eq!(WorkShape::Cubic.eval(4.0), 64.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MERGE_SORT.label(), "T(n) = 2T(n/2) + n");
        assert_eq!(BINARY_SEARCH.label(), "T(n) = T(n/2) + 1");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("Strassen").unwrap(), STRASSEN);
        assert!(lookup("quicksort").is_err());
    }
}
