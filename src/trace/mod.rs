//! Traces of genuine recursive algorithms
//!
//! Each algorithm really recurses and records the work of every call.
//! Per-depth totals can be set beside the idealized analysis of the
//! recurrence the algorithm illustrates; the two differ whenever integer
//! splits are uneven.

pub mod algorithms;
mod events;
mod producer;
mod registry;

pub use events::{DepthSummary, EventKind, ExecutionTrace, TraceEvent};
pub use producer::{
    MatrixMultiply, MergeSort, PairSearch, PartitionStatistics, TournamentMax, TraceProducer,
    TreeSum,
};
pub use registry::{ProducerInfo, ProducerRegistry};

/// Deterministic demo input: `n` distinct values in descending order.
pub fn descending_input(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}
