use crate::analyzer::{analyze, AnalysisError, AnalysisResult};
use crate::catalog::{self, Recurrence, WorkShape};

use super::algorithms;
use super::ExecutionTrace;

/// A recursive algorithm that traces its own work and knows the idealized
/// recurrence it illustrates.
pub trait TraceProducer: Send + Sync + 'static {
    /// Unique producer name.
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Idealized recurrence `T(n) = a·T(n/b) + f(n)` this algorithm follows.
    fn recurrence(&self) -> Recurrence;

    /// Run the algorithm on `input` and return its trace.
    fn run(&self, input: &[i64]) -> ExecutionTrace;

    /// Problem size the run corresponds to (defaults to the input length).
    fn problem_size(&self, input: &[i64]) -> u64 {
        input.len() as u64
    }

    /// Idealized analysis at the same problem size, for side-by-side reports.
    fn idealized(&self, input: &[i64]) -> Result<AnalysisResult, AnalysisError> {
        let n = self.problem_size(input).max(1);
        analyze(&self.recurrence().spec(n))
    }
}

fn named(name: &'static str, template: Recurrence) -> Recurrence {
    Recurrence { name, ..template }
}

/// Merge sort; balanced tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSort;

impl TraceProducer for MergeSort {
    fn name(&self) -> &'static str {
        "merge-sort"
    }

    fn description(&self) -> &'static str {
        "merge sort with linear split and merge work"
    }

    fn recurrence(&self) -> Recurrence {
        catalog::MERGE_SORT
    }

    fn run(&self, input: &[i64]) -> ExecutionTrace {
        algorithms::merge_sort(input).1
    }
}

/// Halving sum; leaf-heavy tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSum;

impl TraceProducer for TreeSum {
    fn name(&self) -> &'static str {
        "tree-sum"
    }

    fn description(&self) -> &'static str {
        "sum by halving with constant work per node"
    }

    fn recurrence(&self) -> Recurrence {
        catalog::TREE_SUM
    }

    fn run(&self, input: &[i64]) -> ExecutionTrace {
        algorithms::binary_tree_sum(input).1
    }
}

/// Tournament maximum; leaf-heavy tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct TournamentMax;

impl TraceProducer for TournamentMax {
    fn name(&self) -> &'static str {
        "tournament-max"
    }

    fn description(&self) -> &'static str {
        "maximum by pairwise matches, one comparison per node"
    }

    fn recurrence(&self) -> Recurrence {
        named(self.name(), catalog::TREE_SUM)
    }

    fn run(&self, input: &[i64]) -> ExecutionTrace {
        algorithms::tournament_max(input).1
    }
}

/// Median partitioning with a linear scan; balanced tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct PartitionStatistics;

impl TraceProducer for PartitionStatistics {
    fn name(&self) -> &'static str {
        "partition-statistics"
    }

    fn description(&self) -> &'static str {
        "median scan then partition into lower and upper halves"
    }

    fn recurrence(&self) -> Recurrence {
        named(self.name(), catalog::MERGE_SORT)
    }

    fn run(&self, input: &[i64]) -> ExecutionTrace {
        algorithms::partition_statistics(input)
    }
}

/// n³ combine cost with two half-size calls; root-heavy tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct MatrixMultiply;

impl TraceProducer for MatrixMultiply {
    fn name(&self) -> &'static str {
        "matrix-multiply"
    }

    fn description(&self) -> &'static str {
        "cost model: n³ matrix work per call, two calls on n/2"
    }

    fn recurrence(&self) -> Recurrence {
        named(self.name(), Recurrence::custom(2, 2.0, WorkShape::Cubic))
    }

    fn run(&self, input: &[i64]) -> ExecutionTrace {
        algorithms::matrix_multiply_cost(input.len())
    }
}

/// Quadratic pair checks at every node; root-heavy tree.
///
/// With non-negative input the default target (-1) is never hit, so the
/// whole tree is searched.
#[derive(Debug, Clone, Copy)]
pub struct PairSearch {
    /// Sum being searched for
    pub target: i64,
}

impl Default for PairSearch {
    fn default() -> Self {
        Self { target: -1 }
    }
}

impl TraceProducer for PairSearch {
    fn name(&self) -> &'static str {
        "pair-search"
    }

    fn description(&self) -> &'static str {
        "check all pairs for a target sum, then recurse into both halves"
    }

    fn recurrence(&self) -> Recurrence {
        named(self.name(), catalog::TOP_HEAVY)
    }

    fn run(&self, input: &[i64]) -> ExecutionTrace {
        algorithms::pair_search(input, self.target).1
    }
}
