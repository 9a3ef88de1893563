//! Plain-text tables
//!
//! Formatting only: every number shown comes straight from the result it
//! is given.

use std::fmt;

use crate::analyzer::AnalysisResult;
use crate::master::MasterEstimate;
use crate::substitution::{BoundCheck, SubstitutionKind};
use crate::telescoping::{ExpansionStep, TelescopingCheck};
use crate::trace::ExecutionTrace;

/// Table layout options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Width of the longest bar, in characters
    pub bar_width: usize,
    /// Rows printed before the table is truncated
    pub max_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bar_width: 30,
            max_rows: 64,
        }
    }
}

impl ReportConfig {
    /// Set the longest bar width.
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Set the row limit (at least one row is always shown).
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows.max(1);
        self
    }
}

/// Bar of `█` proportional to `value / max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 && value > 0.0 {
        ((value / max) * width as f64).round() as usize
    } else {
        0
    };
    "█".repeat(filled.min(width))
}

fn separator(f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(width))
}

/// Per-level table of an idealized analysis.
#[derive(Debug)]
pub struct LevelTable<'a> {
    result: &'a AnalysisResult,
    config: &'a ReportConfig,
}

impl<'a> LevelTable<'a> {
    /// Table over `result`.
    pub fn new(result: &'a AnalysisResult, config: &'a ReportConfig) -> Self {
        Self { result, config }
    }
}

impl fmt::Display for LevelTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self
            .result
            .levels
            .iter()
            .map(|l| l.level_work)
            .fold(0.0_f64, f64::max);

        writeln!(
            f,
            "{:>5} | {:>12} | {:>12} | {:>14} | {:>16} |",
            "Level", "Nodes", "Size", "Work/node", "Level work"
        )?;
        separator(f, 72)?;
        for level in self.result.levels.iter().take(self.config.max_rows) {
            writeln!(
                f,
                "{:>5} | {:>12} | {:>12.2} | {:>14.2} | {:>16.2} | {}",
                level.level,
                level.node_count,
                level.size_per_node,
                level.work_per_node,
                level.level_work,
                bar(level.level_work, max, self.config.bar_width)
            )?;
        }
        let hidden = self.result.levels.len().saturating_sub(self.config.max_rows);
        if hidden > 0 {
            writeln!(f, "  ... {hidden} more levels")?;
        }
        separator(f, 72)?;
        writeln!(f, "Total work: {:.2}", self.result.total_work)?;
        writeln!(
            f,
            "Root work:  {:.2}   Leaf work: {:.2}",
            self.result.root_work(),
            self.result.leaf_work()
        )?;
        writeln!(
            f,
            "Regime:     {} ({})",
            self.result.dominant_regime,
            self.result.dominant_regime.description()
        )
    }
}

/// Per-depth table of a genuine execution trace.
#[derive(Debug)]
pub struct TraceTable<'a> {
    trace: &'a ExecutionTrace,
    config: &'a ReportConfig,
}

impl<'a> TraceTable<'a> {
    /// Table over `trace`.
    pub fn new(trace: &'a ExecutionTrace, config: &'a ReportConfig) -> Self {
        Self { trace, config }
    }
}

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depths = self.trace.by_depth();
        let max = depths.iter().map(|d| d.total_work).max().unwrap_or(0) as f64;

        writeln!(
            f,
            "{:>5} | {:>8} | {:>12} | {:>10} |",
            "Depth", "Calls", "Total work", "Work/call"
        )?;
        separator(f, 50)?;
        for depth in depths.iter().take(self.config.max_rows) {
            writeln!(
                f,
                "{:>5} | {:>8} | {:>12} | {:>10.1} | {}",
                depth.depth,
                depth.calls,
                depth.total_work,
                depth.work_per_call(),
                bar(depth.total_work as f64, max, self.config.bar_width)
            )?;
        }
        let hidden = depths.len().saturating_sub(self.config.max_rows);
        if hidden > 0 {
            writeln!(f, "  ... {hidden} more depths")?;
        }
        separator(f, 50)?;
        writeln!(
            f,
            "Calls: {}   Total work: {}",
            self.trace.calls(),
            self.trace.total_work()
        )
    }
}

/// Summary of a Master-Method estimate.
#[derive(Debug)]
pub struct MasterSummary<'a> {
    estimate: &'a MasterEstimate,
    f_label: &'a str,
}

impl<'a> MasterSummary<'a> {
    /// Summary of `estimate`, naming f(n) as `f_label`.
    pub fn new(estimate: &'a MasterEstimate, f_label: &'a str) -> Self {
        Self { estimate, f_label }
    }
}

impl fmt::Display for MasterSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.estimate;
        writeln!(f, "log_b(a)      = {:.3}", e.critical_exponent)?;
        writeln!(f, "At n = {}:", e.sample_n)?;
        writeln!(f, "  f(n)        = {:.2}", e.outside_work)?;
        writeln!(f, "  n^(log_b a) = {:.2}", e.watershed)?;
        writeln!(f, "  ratio       = {:.6}", e.ratio)?;
        writeln!(f, "Estimate: {}", e.case)?;
        writeln!(f, "Solution: T(n) = {}", e.solution(self.f_label))
    }
}

/// Table of substitution checks, with the proof sketch.
#[derive(Debug)]
pub struct BoundTable<'a> {
    kind: SubstitutionKind,
    c: f64,
    checks: &'a [BoundCheck],
}

impl<'a> BoundTable<'a> {
    /// Table for `checks` of `kind` at constant `c`.
    pub fn new(kind: SubstitutionKind, c: f64, checks: &'a [BoundCheck]) -> Self {
        Self { kind, c, checks }
    }
}

impl fmt::Display for BoundTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        for line in self.kind.proof() {
            writeln!(f, "  {line}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>8} | {:>16} | {:>16} | ok",
            "n",
            "T(n)",
            format!("{}·{}", self.c, self.kind.guess_label())
        )?;
        separator(f, 52)?;
        for check in self.checks {
            writeln!(
                f,
                "{:>8} | {:>16.1} | {:>16.1} | {}",
                check.n,
                check.actual,
                check.bound,
                if check.holds() { "✓" } else { "✗" }
            )?;
        }
        let failures = self.checks.iter().filter(|c| !c.holds()).count();
        separator(f, 52)?;
        if failures == 0 {
            writeln!(f, "Guess holds on all {} sizes", self.checks.len())
        } else {
            writeln!(f, "Guess fails on {} of {} sizes", failures, self.checks.len())
        }
    }
}

/// Unrolling steps followed by recursion-vs-closed-form checks.
#[derive(Debug)]
pub struct TelescopingTable<'a> {
    steps: &'a [ExpansionStep],
    checks: &'a [TelescopingCheck],
}

impl<'a> TelescopingTable<'a> {
    /// Table over `steps` and `checks`.
    pub fn new(steps: &'a [ExpansionStep], checks: &'a [TelescopingCheck]) -> Self {
        Self { steps, checks }
    }
}

impl fmt::Display for TelescopingTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recurrence: T(n) = T(n-1) + n, T(1) = 1")?;
        for step in self.steps {
            writeln!(f, "  {step}")?;
        }
        writeln!(f)?;
        for check in self.checks {
            writeln!(
                f,
                "n={:>4}: T(n)={:>8}, n(n+1)/2={:>8} {}",
                check.n,
                check.recursive,
                check.closed_form,
                if check.matches() { "✓" } else { "✗" }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, RecurrenceSpec};

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(10.0, 10.0, 4), "████");
        assert_eq!(bar(5.0, 10.0, 4), "██");
        assert_eq!(bar(0.0, 10.0, 4), "");
        assert_eq!(bar(1.0, 0.0, 4), "");
    }

    #[test]
    fn test_level_table_mentions_totals_and_regime() {
        let result = analyze(&RecurrenceSpec::new(2, 2.0, 64, |s| s)).unwrap();
        let config = ReportConfig::default();
        let text = LevelTable::new(&result, &config).to_string();
        assert!(text.contains("Total work: 448.00"));
        assert!(text.contains("Regime:     balanced"));
        assert_eq!(text.lines().filter(|l| l.contains('█')).count(), 7);
    }

    #[test]
    fn test_level_table_truncates() {
        let result = analyze(&RecurrenceSpec::new(1, 2.0, 1024, |_| 1.0)).unwrap();
        let config = ReportConfig::default().with_max_rows(3);
        let text = LevelTable::new(&result, &config).to_string();
        assert!(text.contains("... 8 more levels"));
    }
}
