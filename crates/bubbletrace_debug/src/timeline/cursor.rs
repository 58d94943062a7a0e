//! Clamped cursor navigation.

use bubbletrace_foundation::Snapshot;

use crate::trace::Trace;

// =============================================================================
// Playback
// =============================================================================

/// Result of a navigation: the snapshot to display and the index to adopt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playback<'t> {
    /// The snapshot at `index`, or `None` if the trace is empty.
    pub snapshot: Option<&'t Snapshot>,
    /// The clamped index. Callers must store this as the new cursor value.
    pub index: usize,
}

impl Playback<'_> {
    /// Returns true if there is nothing to display.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.snapshot.is_none()
    }
}

/// Clamps a signed index into `[0, len - 1]`, or 0 for an empty trace.
#[must_use]
pub fn clamp_index(index: isize, len: usize) -> usize {
    match len.checked_sub(1) {
        None => 0,
        Some(last) => usize::try_from(index).map_or(0, |i| i.min(last)),
    }
}

/// Jumps to `index`, clamped to the trace bounds.
#[must_use]
pub fn goto(trace: &Trace, index: isize) -> Playback<'_> {
    let index = clamp_index(index, trace.len());
    Playback {
        snapshot: trace.get(index),
        index,
    }
}

/// Moves `delta` snapshots from `index`, clamped to the trace bounds.
#[must_use]
pub fn step(trace: &Trace, index: usize, delta: isize) -> Playback<'_> {
    let from = isize::try_from(index).unwrap_or(isize::MAX);
    goto(trace, from.saturating_add(delta))
}

// =============================================================================
// Cursor
// =============================================================================

/// Current playback position within a trace.
///
/// The cursor does not own the trace; it is paired with one by the session
/// and reset whenever a new trace is recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    /// Creates a cursor at index 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Returns the current index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Moves back to index 0.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Returns the snapshot under the cursor.
    #[must_use]
    pub fn current<'t>(&self, trace: &'t Trace) -> Option<&'t Snapshot> {
        goto(trace, isize::try_from(self.index).unwrap_or(isize::MAX)).snapshot
    }

    /// Returns true if the cursor is on the last snapshot (or the trace is empty).
    #[must_use]
    pub fn is_at_end(&self, trace: &Trace) -> bool {
        trace.last_index().is_none_or(|last| self.index >= last)
    }

    fn adopt<'t>(&mut self, playback: Playback<'t>) -> Option<&'t Snapshot> {
        self.index = playback.index;
        playback.snapshot
    }

    /// Jumps to `index` and adopts the clamped position.
    pub fn goto<'t>(&mut self, trace: &'t Trace, index: isize) -> Option<&'t Snapshot> {
        self.adopt(goto(trace, index))
    }

    /// Moves by `delta` and adopts the clamped position.
    pub fn step<'t>(&mut self, trace: &'t Trace, delta: isize) -> Option<&'t Snapshot> {
        self.adopt(step(trace, self.index, delta))
    }

    /// Moves one snapshot forward.
    pub fn next<'t>(&mut self, trace: &'t Trace) -> Option<&'t Snapshot> {
        self.step(trace, 1)
    }

    /// Moves one snapshot back.
    pub fn prev<'t>(&mut self, trace: &'t Trace) -> Option<&'t Snapshot> {
        self.step(trace, -1)
    }

    /// Jumps to the first snapshot.
    pub fn first<'t>(&mut self, trace: &'t Trace) -> Option<&'t Snapshot> {
        self.goto(trace, 0)
    }

    /// Jumps to the last snapshot.
    pub fn last<'t>(&mut self, trace: &'t Trace) -> Option<&'t Snapshot> {
        self.goto(trace, isize::MAX)
    }
}

// =============================================================================
// Tests
// =============================================================================
