//! Trace recording for Bubbletrace.
//!
//! The recorder runs bubble sort as an instrumented interpreter: every step
//! of the algorithm is tagged with a [`SourceLine`] and emits one
//! [`Snapshot`]. The snapshots are available lazily through [`Steps`] or
//! collected eagerly into a [`Trace`].
//!
//! # Example
//!
//! ```
//! use bubbletrace_debug::record_text;
//!
//! let trace = record_text("3, 1, 2");
//! assert_eq!(trace.first().unwrap().values(), &[3, 1, 2]);
//! assert_eq!(trace.last().unwrap().values(), &[1, 2, 3]);
//! ```

pub mod buffer;
pub mod format;
pub mod input;

pub use buffer::{Trace, TraceSummary};
pub use format::{HumanFormatter, TraceFormatter};
pub use input::parse_input;

use bubbletrace_foundation::{Snapshot, SourceLine};
use tracing::debug;

use crate::config::PlaybackConfig;

/// Inputs are truncated to this many elements before recording.
pub const MAX_INPUT_LEN: usize = 20;

// =============================================================================
// Recorder
// =============================================================================

/// Records bubble sort traces.
#[derive(Clone, Copy, Debug)]
pub struct Recorder {
    max_input_len: usize,
}

impl Recorder {
    /// Creates a recorder with the default input cap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_input_len: MAX_INPUT_LEN,
        }
    }

    /// Creates a recorder using the input cap from `config`.
    #[must_use]
    pub const fn from_config(config: &PlaybackConfig) -> Self {
        Self {
            max_input_len: config.max_input_len,
        }
    }

    /// Returns a lazy iterator over the snapshots of one run.
    ///
    /// Re-invoking this on the same input restarts the run.
    #[must_use]
    pub fn steps(&self, input: &[i64]) -> Steps {
        let len = input.len().min(self.max_input_len);
        Steps::new(input[..len].to_vec())
    }

    /// Records the full trace of one run.
    #[must_use]
    pub fn record(&self, input: &[i64]) -> Trace {
        if input.len() > self.max_input_len {
            debug!(
                len = input.len(),
                max = self.max_input_len,
                "truncating input"
            );
        }

        let trace: Trace = self.steps(input).collect();
        debug!(snapshots = trace.len(), "recorded trace");
        trace
    }

    /// Parses comma-separated text and records its trace.
    ///
    /// Unparseable or empty text yields an empty trace.
    #[must_use]
    pub fn record_text(&self, text: &str) -> Trace {
        match parse_input(text) {
            Ok(values) => self.record(&values),
            Err(err) => {
                debug!(error = %err, "unusable input, recording empty trace");
                Trace::empty()
            }
        }
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

/// Records the trace of `input` with the default input cap.
#[must_use]
pub fn record(input: &[i64]) -> Trace {
    Recorder::new().record(input)
}

/// Parses `text` and records its trace with the default input cap.
#[must_use]
pub fn record_text(text: &str) -> Trace {
    Recorder::new().record_text(text)
}

// =============================================================================
// Steps
// =============================================================================

/// Lazy, instrumented bubble sort.
///
/// Each call to `next` executes the statement at the current program counter
/// and yields the snapshot taken there.
#[derive(Clone, Debug)]
pub struct Steps {
    values: Vec<i64>,
    bound: usize,
    index: usize,
    swapped: bool,
    pc: Option<SourceLine>,
}

impl Steps {
    fn new(values: Vec<i64>) -> Self {
        let pc = if values.is_empty() {
            None
        } else {
            Some(SourceLine::LengthInit)
        };

        Self {
            bound: values.len(),
            values,
            index: 0,
            swapped: false,
            pc,
        }
    }

    fn snapshot(&self, line: SourceLine) -> Snapshot {
        Snapshot::new(self.values.clone()).at(line)
    }

    fn pair_snapshot(&self, line: SourceLine) -> Snapshot {
        self.snapshot(line).with_pair((self.index - 1, self.index))
    }

    /// Where control goes after the inner index changes.
    fn inner_test(&self) -> SourceLine {
        if self.index < self.bound {
            SourceLine::InnerTest
        } else {
            SourceLine::BoundShrink
        }
    }

    /// Where control goes when the outer loop condition is evaluated.
    fn outer_test(&self) -> Option<SourceLine> {
        self.swapped.then_some(SourceLine::OuterTest)
    }
}

impl Iterator for Steps {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let line = self.pc?;

        let (snapshot, next) = match line {
            SourceLine::LengthInit => (self.snapshot(line), Some(SourceLine::FlagInit)),
            SourceLine::FlagInit => {
                self.swapped = true;
                (self.snapshot(line), self.outer_test())
            }
            SourceLine::OuterTest => (self.snapshot(line), Some(SourceLine::FlagReset)),
            SourceLine::FlagReset => {
                self.swapped = false;
                (self.snapshot(line), Some(SourceLine::IndexInit))
            }
            SourceLine::IndexInit => {
                self.index = 1;
                (self.snapshot(line), Some(self.inner_test()))
            }
            SourceLine::InnerTest => {
                let next = if self.values[self.index - 1] > self.values[self.index] {
                    SourceLine::Compare
                } else {
                    SourceLine::IndexAdvance
                };
                (self.pair_snapshot(line), Some(next))
            }
            SourceLine::Compare => (self.pair_snapshot(line), Some(SourceLine::Swap)),
            SourceLine::Swap => {
                self.values.swap(self.index - 1, self.index);
                (
                    self.pair_snapshot(line).swapping(),
                    Some(SourceLine::FlagSet),
                )
            }
            SourceLine::FlagSet => {
                self.swapped = true;
                (self.snapshot(line), Some(SourceLine::IndexAdvance))
            }
            SourceLine::IndexAdvance => {
                self.index += 1;
                (self.snapshot(line), Some(self.inner_test()))
            }
            SourceLine::BoundShrink => {
                self.bound = self.bound.saturating_sub(1);
                (self.snapshot(line), self.outer_test())
            }
        };

        self.pc = next;
        Some(snapshot)
    }
}

impl std::iter::FusedIterator for Steps {}

// =============================================================================
// Tests
// =============================================================================
