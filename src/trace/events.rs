//! Execution traces of genuine recursive calls

use std::collections::BTreeMap;
use std::fmt;

/// What a recorded step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum EventKind {
    /// Base case reached
    Base,
    /// Input divided before recursing
    Split,
    /// Local work done before recursing (scan, pair checks, matrix ops)
    Compute,
    /// Search hit; the call returns without recursing
    Found,
    /// Results of two children combined in O(1)
    Combine,
    /// Two sorted halves merged
    Merge,
}

impl EventKind {
    /// Whether this is the first event recorded by a call.
    ///
    /// Every call records exactly one opening event; `Combine` and `Merge`
    /// follow the children of a call that already opened with `Split`.
    pub fn opens_call(&self) -> bool {
        matches!(
            self,
            EventKind::Base | EventKind::Split | EventKind::Compute | EventKind::Found
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Base => "base",
            EventKind::Split => "split",
            EventKind::Compute => "compute",
            EventKind::Found => "found",
            EventKind::Combine => "combine",
            EventKind::Merge => "merge",
        };
        f.write_str(name)
    }
}

/// One recorded step of a recursive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TraceEvent {
    /// Recursion depth (0 = initial call)
    pub depth: usize,
    /// Input size of the call
    pub size: usize,
    /// Work units charged to this step
    pub work: u64,
    /// What happened
    pub kind: EventKind,
}

/// Aggregated work at one recursion depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct DepthSummary {
    /// Recursion depth
    pub depth: usize,
    /// Calls made at this depth
    pub calls: usize,
    /// Work summed over every event at this depth
    pub total_work: u64,
}

impl DepthSummary {
    /// Average work per call at this depth.
    pub fn work_per_call(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.total_work as f64 / self.calls as f64
        }
    }
}

/// Ordered log of the steps taken by one recursive run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct ExecutionTrace {
    events: Vec<TraceEvent>,
}

impl ExecutionTrace {
    /// Empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn record(&mut self, depth: usize, size: usize, work: u64, kind: EventKind) {
        self.events.push(TraceEvent {
            depth,
            size,
            work,
            kind,
        });
    }

    /// Steps in the order they happened.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of recursive calls made (including the initial one).
    pub fn calls(&self) -> usize {
        self.events.iter().filter(|e| e.kind.opens_call()).count()
    }

    /// Sum of all work, saturating at `u64::MAX`.
    pub fn total_work(&self) -> u64 {
        self.events
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.work))
    }

    /// Deepest recursion depth reached.
    pub fn max_depth(&self) -> Option<usize> {
        self.events.iter().map(|e| e.depth).max()
    }

    /// Work grouped by depth, shallowest first.
    pub fn by_depth(&self) -> Vec<DepthSummary> {
        let mut grouped: BTreeMap<usize, DepthSummary> = BTreeMap::new();
        for event in &self.events {
            let entry = grouped.entry(event.depth).or_insert(DepthSummary {
                depth: event.depth,
                calls: 0,
                total_work: 0,
            });
            if event.kind.opens_call() {
                entry.calls += 1;
            }
            entry.total_work = entry.total_work.saturating_add(event.work);
        }
        grouped.into_values().collect()
    }
}
