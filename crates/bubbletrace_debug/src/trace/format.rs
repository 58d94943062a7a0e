//! Trace output formatters.
//!
//! Provides a one-line human-readable description of each snapshot, used for
//! frame headers and the REPL's trace log.

use std::fmt::Write;

use bubbletrace_foundation::{Snapshot, SourceLine};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting snapshots at a trace position.
pub trait TraceFormatter {
    /// Formats a single snapshot at `index`.
    fn format(&self, index: usize, snapshot: &Snapshot) -> String;

    /// Formats consecutive snapshots starting at `start`.
    fn format_many(&self, start: usize, snapshots: &[Snapshot]) -> String {
        snapshots
            .iter()
            .enumerate()
            .map(|(offset, s)| self.format(start + offset, s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats snapshots in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include the frame index.
    pub show_index: bool,
    /// Whether to include the array values.
    pub show_values: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show frame indices.
    #[must_use]
    pub fn with_index(mut self) -> Self {
        self.show_index = true;
        self
    }

    /// Builder method to show array values.
    #[must_use]
    pub fn with_values(mut self) -> Self {
        self.show_values = true;
        self
    }

    /// Describes what the algorithm is doing at `snapshot`.
    #[must_use]
    pub fn describe(snapshot: &Snapshot) -> String {
        let Some(line) = snapshot.source_line() else {
            return "idle".to_string();
        };

        let values = snapshot.values();
        let pair = snapshot.highlighted_pair();
        match (line, pair) {
            (SourceLine::InnerTest, Some(p)) => format!(
                "check a[{}]={} vs a[{}]={}",
                p.left, values[p.left], p.right, values[p.right]
            ),
            (SourceLine::Compare, Some(p)) => format!(
                "a[{}]={} > a[{}]={}, swap",
                p.left, values[p.left], p.right, values[p.right]
            ),
            (SourceLine::Swap, Some(p)) => format!("swapped positions {} and {}", p.left, p.right),
            (SourceLine::LengthInit, _) => format!("n = {}", values.len()),
            (SourceLine::FlagInit | SourceLine::FlagSet, _) => "swapped = true".to_string(),
            (SourceLine::FlagReset, _) => "swapped = false".to_string(),
            (SourceLine::OuterTest, _) => "start pass".to_string(),
            (SourceLine::IndexInit, _) => "i = 1".to_string(),
            (SourceLine::IndexAdvance, _) => "i += 1".to_string(),
            (SourceLine::BoundShrink, _) => "n -= 1".to_string(),
            (SourceLine::InnerTest | SourceLine::Compare | SourceLine::Swap, None) => {
                line.name().to_string()
            }
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, index: usize, snapshot: &Snapshot) -> String {
        let mut out = String::new();

        if self.show_index {
            let _ = write!(out, "[{index:04}] ");
        }

        match snapshot.source_line() {
            Some(line) => {
                let _ = write!(out, "L{:02} ", line.line_number());
            }
            None => out.push_str("L-- "),
        }

        out.push_str(&Self::describe(snapshot));

        if self.show_values {
            let _ = write!(out, "  {:?}", snapshot.values());
        }

        out
    }
}

// =============================================================================
// Tests
// =============================================================================
