//! Snapshot types.
//!
//! A [`Snapshot`] captures the full array state at one instrumented point of a
//! bubble sort run, together with the visual annotation needed to draw it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Source Line
// =============================================================================

/// Symbolic program counter: which pseudocode line a snapshot was taken at.
///
/// Every variant maps to a fixed 1-based line of the 13-line listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SourceLine {
    /// `n = len(a)`, before the outer loop.
    LengthInit,
    /// `swapped = True`.
    FlagInit,
    /// `while swapped:` passed.
    OuterTest,
    /// `swapped = False` at the top of a pass.
    FlagReset,
    /// `i = 1`.
    IndexInit,
    /// `while i < n:` passed, with the pair about to be compared.
    InnerTest,
    /// `if a[i-1] > a[i]:` taken.
    Compare,
    /// The pair has just been exchanged.
    Swap,
    /// `swapped = True` inside the pass.
    FlagSet,
    /// `i += 1`.
    IndexAdvance,
    /// `n -= 1` after a pass.
    BoundShrink,
}

impl SourceLine {
    /// All markers in listing order.
    pub const ALL: [Self; 11] = [
        Self::LengthInit,
        Self::FlagInit,
        Self::OuterTest,
        Self::FlagReset,
        Self::IndexInit,
        Self::InnerTest,
        Self::Compare,
        Self::Swap,
        Self::FlagSet,
        Self::IndexAdvance,
        Self::BoundShrink,
    ];

    /// Returns the 1-based listing line this marker points at.
    #[must_use]
    pub const fn line_number(self) -> usize {
        match self {
            Self::LengthInit => 3,
            Self::FlagInit => 4,
            Self::OuterTest => 5,
            Self::FlagReset => 6,
            Self::IndexInit => 7,
            Self::InnerTest => 8,
            Self::Compare => 9,
            Self::Swap => 10,
            Self::FlagSet => 11,
            Self::IndexAdvance => 12,
            Self::BoundShrink => 13,
        }
    }

    /// Looks up the marker for a 1-based listing line.
    #[must_use]
    pub fn from_line_number(line: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.line_number() == line)
    }

    /// Returns a short kebab-case name for the marker.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LengthInit => "length-init",
            Self::FlagInit => "flag-init",
            Self::OuterTest => "outer-test",
            Self::FlagReset => "flag-reset",
            Self::IndexInit => "index-init",
            Self::InnerTest => "inner-test",
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::FlagSet => "flag-set",
            Self::IndexAdvance => "index-advance",
            Self::BoundShrink => "bound-shrink",
        }
    }
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.name(), self.line_number())
    }
}

// =============================================================================
// Compared Pair
// =============================================================================

/// The two adjacent positions being compared or swapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparedPair {
    /// Left position (`i - 1`).
    pub left: usize,
    /// Right position (`i`).
    pub right: usize,
}

impl ComparedPair {
    /// Creates a new pair.
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Returns true if `index` is one of the two positions.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.left == index || self.right == index
    }
}

impl From<(usize, usize)> for ComparedPair {
    fn from((left, right): (usize, usize)) -> Self {
        Self::new(left, right)
    }
}

impl fmt::Display for ComparedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// The array state and annotation at one instant of a bubble sort run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    values: Vec<i64>,
    highlighted_pair: Option<ComparedPair>,
    is_swap: bool,
    source_line: Option<SourceLine>,
}

impl Snapshot {
    /// Creates an unannotated snapshot of `values`.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            highlighted_pair: None,
            is_swap: false,
            source_line: None,
        }
    }

    /// Builder method to tag the snapshot with a source line.
    #[must_use]
    pub fn at(mut self, line: SourceLine) -> Self {
        self.source_line = Some(line);
        self
    }

    /// Builder method to highlight a compared pair.
    #[must_use]
    pub fn with_pair(mut self, pair: impl Into<ComparedPair>) -> Self {
        self.highlighted_pair = Some(pair.into());
        self
    }

    /// Builder method to mark the snapshot as showing a swap.
    #[must_use]
    pub fn swapping(mut self) -> Self {
        self.is_swap = true;
        self
    }

    /// Returns the array values.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Returns the highlighted pair, if any.
    #[must_use]
    pub const fn highlighted_pair(&self) -> Option<ComparedPair> {
        self.highlighted_pair
    }

    /// Returns true if this snapshot shows a completed swap.
    #[must_use]
    pub const fn is_swap(&self) -> bool {
        self.is_swap
    }

    /// Returns the source line marker, if any.
    #[must_use]
    pub const fn source_line(&self) -> Option<SourceLine> {
        self.source_line
    }

    /// Returns true if the values are in ascending order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

// =============================================================================
// Tests
// =============================================================================
