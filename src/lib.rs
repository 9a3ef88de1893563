//! # Recursion-tree work analysis
//!
//! Tools for reasoning about divide-and-conquer recurrences
//! `T(n) = a·T(n/b) + f(n)`.
//!
//! ## Components
//!
//! 1. **Analyzer**: idealized recursion tree, per-level work, total and
//!    dominant regime (`analyzer`)
//! 2. **Master Method**: numeric case estimate at a sample size (`master`)
//! 3. **Traces**: genuine recursive algorithms that log the work of every
//!    call (`trace`)
//! 4. **Telescoping and substitution**: closed forms checked against exact
//!    recursion (`telescoping`, `substitution`)
//!
//! The analyzer is a model: it uses continuous sizes n / b^i, so for sizes
//! that are not powers of b its totals differ from an exact trace.
//!
//! ## Usage Example
//!
//! ```
//! use recurrence_lab::{analyze, DominantRegime, RecurrenceSpec};
//!
//! let spec = RecurrenceSpec::new(2, 2.0, 1024, |size| size);
//! let result = analyze(&spec)?;
//! assert_eq!(result.levels.len(), 11);
//! assert_eq!(result.total_work, 11.0 * 1024.0);
//! assert_eq!(result.dominant_regime, DominantRegime::Balanced);
//! # Ok::<(), recurrence_lab::AnalysisError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod analyzer; // Idealized recursion tree
pub mod catalog; // Named recurrences and work shapes
pub mod master; // Master-Method estimate
pub mod report; // Plain-text tables
pub mod substitution; // Guess-and-check bounds
pub mod telescoping; // T(n) = T(n-1) + n
pub mod trace; // Genuine recursion traces

pub use analyzer::{
    analyze, AnalysisError, AnalysisResult, DominantRegime, LevelReport, RecurrenceSpec,
    DOMINANCE_THRESHOLD,
};
pub use catalog::{CatalogError, Recurrence, WorkShape};
pub use master::{MasterCase, MasterConfig, MasterError, MasterEstimate};
pub use report::ReportConfig;
pub use trace::{ExecutionTrace, ProducerRegistry, TraceProducer};

/// Analyze a recurrence and estimate its Master-Method case in one call.
///
/// The estimate uses the recurrence's own work shape at `config.sample_n`.
///
/// # Errors
///
/// Analysis errors are reported first; a valid recurrence can still fail
/// the estimate if its ratio is not finite.
pub fn analyze_with_estimate(
    recurrence: &Recurrence,
    n: u64,
    config: &MasterConfig,
) -> Result<(AnalysisResult, MasterEstimate), AnalyzeEstimateError> {
    let result = analyze(&recurrence.spec(n))?;
    let estimate = master::estimate(recurrence.a, recurrence.b, recurrence.shape.as_fn(), config)?;
    Ok((result, estimate))
}

/// Error from [`analyze_with_estimate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AnalyzeEstimateError {
    /// Recursion-tree analysis failed
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Master-Method estimate failed
    #[error(transparent)]
    Master(#[from] MasterError),
}
