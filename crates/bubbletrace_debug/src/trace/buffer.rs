//! Recorded trace container.
//!
//! A [`Trace`] is produced once per run and never modified afterwards.

use std::fmt;

use bubbletrace_foundation::{Snapshot, SourceLine};

// =============================================================================
// Trace
// =============================================================================

/// Ordered, immutable sequence of snapshots from one bubble sort run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    /// The snapshots, in execution order.
    snapshots: Vec<Snapshot>,
}

impl Trace {
    /// Creates a trace from recorded snapshots.
    #[must_use]
    pub fn new(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    /// Creates a trace with no snapshots.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if the trace has no snapshots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Gets the snapshot at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Gets the first snapshot (the input as given).
    #[must_use]
    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    /// Gets the last snapshot (the sorted result).
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Returns the index of the last snapshot, if any.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.snapshots.len().checked_sub(1)
    }

    /// Returns an iterator over snapshots in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Returns the snapshots as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Returns the snapshots in `[start, end)` clamped to the trace.
    #[must_use]
    pub fn window(&self, start: usize, end: usize) -> &[Snapshot] {
        let end = end.min(self.snapshots.len());
        let start = start.min(end);
        &self.snapshots[start..end]
    }

    /// Returns the index of the first snapshot at `line`.
    #[must_use]
    pub fn position_of(&self, line: SourceLine) -> Option<usize> {
        self.snapshots
            .iter()
            .position(|s| s.source_line() == Some(line))
    }

    /// Counts what happened during the run.
    #[must_use]
    pub fn summary(&self) -> TraceSummary {
        let count = |line: SourceLine| {
            self.snapshots
                .iter()
                .filter(|s| s.source_line() == Some(line))
                .count()
        };

        TraceSummary {
            snapshots: self.snapshots.len(),
            elements: self.first().map_or(0, |s| s.values().len()),
            comparisons: count(SourceLine::InnerTest),
            swaps: count(SourceLine::Swap),
            passes: count(SourceLine::OuterTest),
        }
    }
}

impl FromIterator<Snapshot> for Trace {
    fn from_iter<I: IntoIterator<Item = Snapshot>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Trace Summary
// =============================================================================

/// Counts describing one recorded run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceSummary {
    /// Number of snapshots.
    pub snapshots: usize,
    /// Number of elements sorted.
    pub elements: usize,
    /// Number of adjacent comparisons.
    pub comparisons: usize,
    /// Number of swaps.
    pub swaps: usize,
    /// Number of outer-loop passes.
    pub passes: usize,
}

impl fmt::Display for TraceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames: {} elements, {} passes, {} comparisons, {} swaps",
            self.snapshots, self.elements, self.passes, self.comparisons, self.swaps
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::record;

    #[test]
    fn empty_trace() {
        let trace = Trace::empty();
        assert!(trace.is_empty());
        assert_eq!(trace.len(), 0);
        assert!(trace.first().is_none());
        assert!(trace.last_index().is_none());
        assert_eq!(trace.summary(), TraceSummary::default());
    }

    #[test]
    fn collects_from_iterator() {
        let trace: Trace = (0..3).map(|v| Snapshot::new(vec![v])).collect();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.get(1).unwrap().values(), &[1]);
        assert_eq!(trace.last_index(), Some(2));
    }

    #[test]
    fn window_clamps() {
        let trace: Trace = (0..5).map(|v| Snapshot::new(vec![v])).collect();
        assert_eq!(trace.window(1, 3).len(), 2);
        assert_eq!(trace.window(3, 99).len(), 2);
        assert!(trace.window(7, 9).is_empty());
        assert!(trace.window(4, 2).is_empty());
    }

    #[test]
    fn summary_counts_reversed_input() {
        let summary = record(&[3, 2, 1]).summary();
        assert_eq!(summary.elements, 3);
        // 2 + 1 comparisons, then a final pass over a bound of one
        assert_eq!(summary.comparisons, 3);
        assert_eq!(summary.swaps, 3);
        assert_eq!(summary.passes, 3);
    }

    #[test]
    fn summary_counts_sorted_input() {
        let summary = record(&[1, 2, 3, 4]).summary();
        assert_eq!(summary.comparisons, 3);
        assert_eq!(summary.swaps, 0);
        assert_eq!(summary.passes, 1);
    }

    #[test]
    fn position_of_first_swap() {
        let trace = record(&[2, 1]);
        assert_eq!(trace.position_of(SourceLine::Swap), Some(7));
        assert_eq!(record(&[1, 2]).position_of(SourceLine::Swap), None);
    }

    #[test]
    fn summary_display() {
        let summary = TraceSummary {
            snapshots: 40,
            elements: 3,
            comparisons: 3,
            swaps: 2,
            passes: 2,
        };
        let display = summary.to_string();
        assert!(display.contains("40 frames"));
        assert!(display.contains("2 swaps"));
        assert!(display.contains("3 comparisons"));
    }
}
