//! Numeric Master-Method estimator
//!
//! Compares f(n) against the watershed n^(log_b a) at one sample size.
//! The ratio thresholds are a rough stand-in for "polynomially smaller /
//! same order / polynomially larger"; a ratio near a threshold says little
//! about the true asymptotic case.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Errors raised while estimating a Master-Method case.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MasterError {
    /// `a`, `b` or the configuration is out of range.
    #[error("invalid master-method input: {0}")]
    InvalidInput(String),

    /// f(sample) / sample^e could not be computed as a finite number.
    #[error("ratio f(n)/n^{exponent:.3} is not finite at n = {sample_n}")]
    NonFiniteRatio {
        /// Sample size used
        sample_n: u64,
        /// Critical exponent log_b a
        exponent: f64,
    },
}

/// Thresholds for the numeric case estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterConfig {
    /// Size at which f(n) and n^(log_b a) are compared
    pub sample_n: u64,
    /// Ratios strictly below this are Case 1
    pub lower_ratio: f64,
    /// Ratios strictly above this are Case 3
    pub upper_ratio: f64,
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            sample_n: 1000,
            lower_ratio: 0.5,
            upper_ratio: 2.0,
        }
    }
}

impl MasterConfig {
    /// Compare at a different sample size.
    pub fn with_sample_n(mut self, sample_n: u64) -> Self {
        self.sample_n = sample_n;
        self
    }

    /// Use a different Case 2 band `[lower, upper]`.
    pub fn with_band(mut self, lower_ratio: f64, upper_ratio: f64) -> Self {
        self.lower_ratio = lower_ratio;
        self.upper_ratio = upper_ratio;
        self
    }

    fn validate(&self) -> Result<(), MasterError> {
        if self.sample_n < 2 {
            return Err(MasterError::InvalidInput(
                "sample size must be >= 2".to_string(),
            ));
        }
        let band_ok = self.lower_ratio.is_finite()
            && self.upper_ratio.is_finite()
            && self.lower_ratio > 0.0
            && self.lower_ratio <= self.upper_ratio;
        if !band_ok {
            return Err(MasterError::InvalidInput(format!(
                "ratio band [{}, {}] must satisfy 0 < lower <= upper",
                self.lower_ratio, self.upper_ratio
            )));
        }
        Ok(())
    }
}

/// The three Master-Method cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum MasterCase {
    /// Case 1: f(n) polynomially smaller than n^(log_b a); leaves dominate.
    SubproblemsDominate,
    /// Case 2: same order; every level contributes equally.
    Balanced,
    /// Case 3: f(n) polynomially larger; the root dominates.
    OutsideWorkDominates,
}

impl MasterCase {
    /// Case number as taught (1, 2 or 3).
    pub fn number(&self) -> u8 {
        match self {
            MasterCase::SubproblemsDominate => 1,
            MasterCase::Balanced => 2,
            MasterCase::OutsideWorkDominates => 3,
        }
    }
}

impl fmt::Display for MasterCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MasterCase::SubproblemsDominate => "subproblems dominate",
            MasterCase::Balanced => "balanced (tie)",
            MasterCase::OutsideWorkDominates => "outside work dominates",
        };
        write!(f, "case {}: {}", self.number(), text)
    }
}

/// Outcome of [`estimate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct MasterEstimate {
    /// Estimated case
    pub case: MasterCase,
    /// log_b a
    pub critical_exponent: f64,
    /// Size the comparison was made at
    pub sample_n: u64,
    /// f(sample_n)
    pub outside_work: f64,
    /// sample_n^(log_b a)
    pub watershed: f64,
    /// outside_work / watershed
    pub ratio: f64,
}

impl MasterEstimate {
    /// Asymptotic solution in the usual notation; `f_label` names f(n).
    pub fn solution(&self, f_label: &str) -> String {
        let e = self.critical_exponent;
        match self.case {
            MasterCase::SubproblemsDominate => format!("Θ(n^{e:.3})"),
            MasterCase::Balanced => format!("Θ(n^{e:.3} · log n)"),
            MasterCase::OutsideWorkDominates => format!("Θ({f_label})"),
        }
    }
}

/// Critical exponent log_b a of `T(n) = a·T(n/b) + f(n)`.
pub fn critical_exponent(a: u64, b: f64) -> Result<f64, MasterError> {
    if a < 1 {
        return Err(MasterError::InvalidInput("a must be >= 1".to_string()));
    }
    if !b.is_finite() || b <= 1.0 {
        return Err(MasterError::InvalidInput(format!(
            "b must be a finite number > 1 (got {b})"
        )));
    }
    Ok((a as f64).ln() / b.ln())
}

/// Estimate the Master-Method case by comparing `f(sample_n)` to
/// `sample_n^(log_b a)`.
pub fn estimate<F>(a: u64, b: f64, work: F, config: &MasterConfig) -> Result<MasterEstimate, MasterError>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    let exponent = critical_exponent(a, b)?;

    let n = config.sample_n as f64;
    let outside_work = work(n);
    let watershed = n.powf(exponent);
    let ratio = outside_work / watershed;
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(MasterError::NonFiniteRatio {
            sample_n: config.sample_n,
            exponent,
        });
    }

    let case = if ratio < config.lower_ratio {
        MasterCase::SubproblemsDominate
    } else if ratio <= config.upper_ratio {
        MasterCase::Balanced
    } else {
        MasterCase::OutsideWorkDominates
    };

    debug!(a, b, exponent, ratio, case = %case, "master method estimate");

    Ok(MasterEstimate {
        case,
        critical_exponent: exponent,
        sample_n: config.sample_n,
        outside_work,
        watershed,
        ratio,
    })
}
