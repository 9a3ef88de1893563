//! Toy divide-and-conquer algorithms that record their own work
//!
//! Splits are exact integer splits: a call of size n recurses on n/2 and
//! n - n/2 elements, so level totals drift from the idealized n/b^i model
//! whenever n is not a power of two.

use tracing::debug;

use super::{EventKind, ExecutionTrace};

/// Merge sort, charging n to each split and each merge.
///
/// Recurrence `T(n) = 2T(n/2) + n`.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> (Vec<T>, ExecutionTrace) {
    let mut trace = ExecutionTrace::new();
    let sorted = merge_sort_rec(items, 0, &mut trace);
    debug!(n = items.len(), work = trace.total_work(), "merge sort traced");
    (sorted, trace)
}

fn merge_sort_rec<T: Ord + Clone>(items: &[T], depth: usize, trace: &mut ExecutionTrace) -> Vec<T> {
    let n = items.len();
    if n <= 1 {
        trace.record(depth, n, n as u64, EventKind::Base);
        return items.to_vec();
    }

    trace.record(depth, n, n as u64, EventKind::Split);
    let mid = n / 2;
    let left = merge_sort_rec(&items[..mid], depth + 1, trace);
    let right = merge_sort_rec(&items[mid..], depth + 1, trace);

    let mut merged = Vec::with_capacity(n);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    trace.record(depth, n, merged.len() as u64, EventKind::Merge);
    merged
}

/// Sum by halving, with constant work per split, combine and base case.
///
/// Recurrence `T(n) = 2T(n/2) + 1`.
pub fn binary_tree_sum(values: &[i64]) -> (i128, ExecutionTrace) {
    let mut trace = ExecutionTrace::new();
    let sum = tree_sum_rec(values, 0, &mut trace);
    debug!(n = values.len(), work = trace.total_work(), "tree sum traced");
    (sum, trace)
}

fn tree_sum_rec(values: &[i64], depth: usize, trace: &mut ExecutionTrace) -> i128 {
    let n = values.len();
    if n <= 1 {
        trace.record(depth, n, 1, EventKind::Base);
        return values.first().map_or(0, |&v| i128::from(v));
    }

    trace.record(depth, n, 1, EventKind::Split);
    let mid = n / 2;
    let left = tree_sum_rec(&values[..mid], depth + 1, trace);
    let right = tree_sum_rec(&values[mid..], depth + 1, trace);
    trace.record(depth, n, 1, EventKind::Combine);
    left + right
}

/// Tournament-style maximum, one comparison per match.
///
/// Recurrence `T(n) = 2T(n/2) + 1`. Returns `None` for empty input.
pub fn tournament_max<T: Ord + Copy>(values: &[T]) -> (Option<T>, ExecutionTrace) {
    let mut trace = ExecutionTrace::new();
    let max = tournament_rec(values, 0, &mut trace);
    debug!(n = values.len(), work = trace.total_work(), "tournament traced");
    (max, trace)
}

fn tournament_rec<T: Ord + Copy>(values: &[T], depth: usize, trace: &mut ExecutionTrace) -> Option<T> {
    let n = values.len();
    if n <= 1 {
        trace.record(depth, n, 1, EventKind::Base);
        return values.first().copied();
    }

    trace.record(depth, n, 1, EventKind::Split);
    let mid = n / 2;
    let left = tournament_rec(&values[..mid], depth + 1, trace);
    let right = tournament_rec(&values[mid..], depth + 1, trace);
    trace.record(depth, n, 1, EventKind::Combine);
    left.max(right)
}

/// Linear scan for the median, then partition around it.
///
/// Recurrence `T(n) = 2T(n/2) + n` for distinct values. A partition that
/// leaves every element on one side is not recursed into, so runs of equal
/// values terminate.
pub fn partition_statistics(values: &[i64]) -> ExecutionTrace {
    let mut trace = ExecutionTrace::new();
    partition_rec(values, 0, &mut trace);
    debug!(n = values.len(), work = trace.total_work(), "partition statistics traced");
    trace
}

fn partition_rec(values: &[i64], depth: usize, trace: &mut ExecutionTrace) {
    let n = values.len();
    if n <= 1 {
        trace.record(depth, n, 1, EventKind::Base);
        return;
    }

    trace.record(depth, n, n as u64, EventKind::Compute);
    let median = median(values);
    let (left, right): (Vec<i64>, Vec<i64>) =
        values.iter().partition(|&&v| (v as f64) < median);

    if !left.is_empty() {
        partition_rec(&left, depth + 1, trace);
    }
    if !right.is_empty() && right.len() < n {
        partition_rec(&right, depth + 1, trace);
    }
}

fn median(values: &[i64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Cost model of a recursive matrix routine that does n³ work per call and
/// recurses twice on n/2.
///
/// Recurrence `T(n) = 2T(n/2) + n³`; only the cost is simulated.
pub fn matrix_multiply_cost(n: usize) -> ExecutionTrace {
    let mut trace = ExecutionTrace::new();
    matrix_rec(n, 0, &mut trace);
    debug!(n, work = trace.total_work(), "matrix cost traced");
    trace
}

fn matrix_rec(n: usize, depth: usize, trace: &mut ExecutionTrace) {
    if n <= 1 {
        trace.record(depth, n, 1, EventKind::Base);
        return;
    }

    let work = (n as u64).saturating_pow(3);
    trace.record(depth, n, work, EventKind::Compute);
    matrix_rec(n / 2, depth + 1, trace);
    matrix_rec(n / 2, depth + 1, trace);
}

/// Check every pair at each node for one summing to `target`, then recurse
/// into both halves. Stops at the first hit.
///
/// Recurrence `T(n) = 2T(n/2) + n²` when nothing is found.
pub fn pair_search(values: &[i64], target: i64) -> (bool, ExecutionTrace) {
    let mut trace = ExecutionTrace::new();
    let found = pair_search_rec(values, target, 0, &mut trace);
    debug!(n = values.len(), target, found, work = trace.total_work(), "pair search traced");
    (found, trace)
}

fn pair_search_rec(values: &[i64], target: i64, depth: usize, trace: &mut ExecutionTrace) -> bool {
    let n = values.len();
    if n <= 1 {
        trace.record(depth, n, 1, EventKind::Base);
        return false;
    }

    let mut checked = 0u64;
    for i in 0..n {
        for j in (i + 1)..n {
            checked += 1;
            if i128::from(values[i]) + i128::from(values[j]) == i128::from(target) {
                trace.record(depth, n, checked, EventKind::Found);
                return true;
            }
        }
    }
    trace.record(depth, n, checked, EventKind::Compute);

    let mid = n / 2;
    pair_search_rec(&values[..mid], target, depth + 1, trace)
        || pair_search_rec(&values[mid..], target, depth + 1, trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_sorts_and_levels_are_linear() {
        let input: Vec<i64> = (0..16).rev().collect();
        let (sorted, trace) = merge_sort(&input);
        assert_eq!(sorted, (0..16).collect::<Vec<_>>());

        let depths = trace.by_depth();
        assert_eq!(depths.len(), 5);
        // Internal levels: split n + merge n per call
        for summary in &depths[..4] {
            assert_eq!(summary.total_work, 32);
        }
        // Leaves: 16 calls of size 1
        assert_eq!(depths[4].calls, 16);
        assert_eq!(depths[4].total_work, 16);
    }

    #[test]
    fn test_merge_sort_odd_split() {
        let (sorted, trace) = merge_sort(&[3, 1, 2]);
        assert_eq!(sorted, vec![1, 2, 3]);
        // root(3) -> [1] and [2] -> [1] [1]
        assert_eq!(trace.calls(), 5);
        assert_eq!(trace.max_depth(), Some(2));
    }

    #[test]
    fn test_tree_sum() {
        let values: Vec<i64> = (1..=8).collect();
        let (sum, trace) = binary_tree_sum(&values);
        assert_eq!(sum, 36);
        // 7 internal nodes * 2 + 8 leaves
        assert_eq!(trace.total_work(), 22);
        assert_eq!(trace.calls(), 15);
    }

    #[test]
    fn test_tree_sum_empty() {
        let (sum, trace) = binary_tree_sum(&[]);
        assert_eq!(sum, 0);
        assert_eq!(trace.calls(), 1);
    }

    #[test]
    fn test_tournament_max() {
        let (max, _) = tournament_max(&[4, 9, 2, 7, 9, 1]);
        assert_eq!(max, Some(9));
        let (none, _) = tournament_max::<i32>(&[]);
        assert_eq!(none, None);
    }

    #[test]
    fn test_partition_terminates_on_equal_values() {
        let trace = partition_statistics(&[5; 10]);
        assert_eq!(trace.calls(), 1);
        assert_eq!(trace.total_work(), 10);
    }

    #[test]
    fn test_partition_distinct_values() {
        let values: Vec<i64> = (1..=8).collect();
        let trace = partition_statistics(&values);
        // Three levels of halving scans, then eight unit leaves
        assert_eq!(trace.total_work(), 8 + 8 + 8 + 8);
        assert_eq!(trace.calls(), 15);
        assert_eq!(trace.max_depth(), Some(3));
    }

    #[test]
    fn test_matrix_cost_levels() {
        let trace = matrix_multiply_cost(8);
        let depths = trace.by_depth();
        let works: Vec<u64> = depths.iter().map(|d| d.total_work).collect();
        assert_eq!(works, vec![512, 128, 32, 8]);
    }

    #[test]
    fn test_pair_search_hit_and_miss() {
        let (found, trace) = pair_search(&[1, 2, 3, 4], 7);
        assert!(found);
        assert_eq!(trace.calls(), 1);
        assert_eq!(trace.events()[0].kind, EventKind::Found);

        let (missing, trace) = pair_search(&[1, 2, 3, 4], -1);
        assert!(!missing);
        // root: 6 pairs, two halves: 1 pair each, four leaves
        assert_eq!(trace.total_work(), 6 + 2 + 4);
    }
}
