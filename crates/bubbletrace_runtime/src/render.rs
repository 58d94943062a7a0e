//! Bar chart rendering for snapshots.
//!
//! Every frame uses the same vertical scale (`0..=y_max`) and the same number
//! of rows, so stepping through a trace never makes the chart jump. Values
//! outside the scale are clipped visually; their labels still show the real
//! value, and columns widen to fit the longest label in the snapshot.

use bubbletrace_debug::{HumanFormatter, Playback};
use bubbletrace_foundation::{ComparedPair, Snapshot};

use crate::listing::Listing;

/// Minimum characters per bar column (bar glyphs plus one gap).
const COL_WIDTH: usize = 4;

const BAR: &str = "███";
const TITLE: &str = "Bubble Sort Visualization";

const BAR_COLOR: &str = "\x1b[36m";
const PAIR_COLOR: &str = "\x1b[38;5;208m";
const ARROW_COLOR: &str = "\x1b[1;31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

// =============================================================================
// Render Configuration
// =============================================================================

/// Configuration for frame rendering.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Rows used by the tallest possible bar.
    pub height: usize,
    /// Value drawn at full height.
    pub y_max: i64,
    /// Whether to emit ANSI colors.
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            height: 12,
            y_max: 100,
            color: true,
        }
    }
}

impl RenderConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a colorless configuration (for pipes and tests).
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Builder method to set the chart height.
    #[must_use]
    pub const fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Builder method to set the full-scale value.
    #[must_use]
    pub const fn with_y_max(mut self, y_max: i64) -> Self {
        self.y_max = y_max;
        self
    }

    /// Builder method to enable/disable ANSI colors.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Draws snapshots as bar charts with the pseudocode listing below.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Creates a renderer with the given configuration.
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Number of lines [`Renderer::chart`] always produces.
    #[must_use]
    pub const fn chart_lines(&self) -> usize {
        // label headroom + bars, baseline, indices, two arrow rows
        self.config.height + 5
    }

    /// Returns the listing renderer matching this configuration.
    #[must_use]
    pub const fn listing(&self) -> Listing {
        Listing::new().with_color(self.config.color)
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.config.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Rows filled by a bar for `value`, rounded and clipped to the scale.
    #[must_use]
    pub fn bar_height(&self, value: i64) -> usize {
        let y_max = self.config.y_max.max(1);
        let rows = i64::try_from(self.config.height).unwrap_or(i64::MAX);
        let clipped = value.clamp(0, y_max);
        let scaled = clipped.saturating_mul(rows).saturating_add(y_max / 2) / y_max;
        usize::try_from(scaled).map_or(0, |h| h.min(self.config.height))
    }

    /// Renders the bar chart for one snapshot.
    #[must_use]
    pub fn chart(&self, snapshot: &Snapshot) -> Vec<String> {
        let values = snapshot.values();
        let pair = snapshot.highlighted_pair();
        let height = self.config.height;
        let width = column_width(values);
        let bar_cell = format!("{BAR:<width$}");
        let heights: Vec<usize> = values.iter().map(|&v| self.bar_height(v)).collect();

        let mut lines = Vec::with_capacity(self.chart_lines());

        for row in 0..=height {
            let mut line = String::new();
            for (col, (&value, &bar)) in values.iter().zip(&heights).enumerate() {
                let color = if pair.is_some_and(|p| p.contains(col)) {
                    PAIR_COLOR
                } else {
                    BAR_COLOR
                };

                if row + bar > height {
                    line.push_str(&self.paint(&bar_cell, color));
                } else if row + bar == height {
                    line.push_str(&format!("{value:^width$}"));
                } else {
                    line.push_str(&" ".repeat(width));
                }
            }
            lines.push(line.trim_end().to_string());
        }

        lines.push(self.paint(&"─".repeat(values.len() * width), DIM));
        lines.push(
            (0..values.len())
                .map(|i| format!("{i:^width$}"))
                .collect::<String>()
                .trim_end()
                .to_string(),
        );

        match pair.filter(|_| snapshot.is_swap()) {
            Some(pair) => {
                let [upper, lower] = swap_arrow(pair, values.len(), width);
                lines.push(self.paint(&upper, ARROW_COLOR));
                lines.push(self.paint(&lower, ARROW_COLOR));
            }
            None => {
                lines.push(String::new());
                lines.push(String::new());
            }
        }

        lines
    }

    /// Renders a full frame: header, chart, description, and listing.
    #[must_use]
    pub fn frame(&self, playback: Playback<'_>, total: usize) -> String {
        let listing = self.listing();

        let Some(snapshot) = playback.snapshot else {
            let mut out = self.paint(TITLE, "\x1b[1m");
            out.push_str("\n\nNo frames to show. Enter numbers with `gen 5, 3, 8`.\n\n");
            out.push_str(&listing.render(None));
            return out;
        };

        let mut out = format!(
            "{}   frame {}/{}\n\n",
            self.paint(TITLE, "\x1b[1m"),
            playback.index + 1,
            total
        );

        for line in self.chart(snapshot) {
            out.push_str(&line);
            out.push('\n');
        }

        out.push_str(&format!("▶ {}\n\n", HumanFormatter::describe(snapshot)));
        out.push_str(&listing.render(snapshot.source_line()));
        out
    }
}

/// Column width that fits every value label with at least one space of gap.
fn column_width(values: &[i64]) -> usize {
    values
        .iter()
        .map(|v| v.to_string().len() + 1)
        .max()
        .unwrap_or(0)
        .max(COL_WIDTH)
}

/// Builds the two rows of a curved arrow from the right bar of `pair` to the left one.
fn swap_arrow(pair: ComparedPair, columns: usize, col_width: usize) -> [String; 2] {
    let width = columns * col_width;
    let left = pair.left.min(pair.right) * col_width + 1;
    let right = pair.left.max(pair.right) * col_width + 1;

    let mut upper = vec![' '; width.max(right + 1)];
    let mut lower = upper.clone();

    upper[left] = '▲';
    upper[right] = '│';
    lower[left] = '╰';
    for cell in &mut lower[left + 1..right] {
        *cell = '─';
    }
    lower[right] = '╯';

    let upper: String = upper.into_iter().collect();
    let mut lower: String = lower.into_iter().collect();
    lower.truncate(lower.trim_end().len());
    lower.push_str(" swap");

    [upper.trim_end().to_string(), lower]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletrace_debug::{Trace, goto, record};
    use bubbletrace_foundation::SourceLine;

    fn plain() -> Renderer {
        Renderer::new(RenderConfig::plain().with_height(10))
    }

    #[test]
    fn bar_height_scales_and_clips() {
        let renderer = plain();
        assert_eq!(renderer.bar_height(0), 0);
        assert_eq!(renderer.bar_height(50), 5);
        assert_eq!(renderer.bar_height(100), 10);
        assert_eq!(renderer.bar_height(250), 10);
        assert_eq!(renderer.bar_height(-20), 0);
        assert_eq!(renderer.bar_height(4), 0);
        assert_eq!(renderer.bar_height(5), 1);
    }

    #[test]
    fn chart_has_fixed_line_count() {
        let renderer = plain();
        let trace = record(&[90, 10, 55, 0]);
        for snapshot in &trace {
            assert_eq!(renderer.chart(snapshot).len(), renderer.chart_lines());
        }
    }

    #[test]
    fn labels_sit_above_bars() {
        let renderer = plain();
        let chart = renderer.chart(&Snapshot::new(vec![100, 50]));
        // Full-height bar: label on the headroom row.
        assert_eq!(chart[0].trim(), "100");
        assert!(chart[1].starts_with("███"));
        // Half-height bar: label five rows above the baseline.
        assert!(chart[5].contains("50"));
        assert!(chart[6].ends_with("███"));
    }

    #[test]
    fn zero_value_label_on_baseline_row() {
        let renderer = plain();
        let chart = renderer.chart(&Snapshot::new(vec![0]));
        assert_eq!(chart[10].trim(), "0");
    }

    #[test]
    fn wide_labels_are_not_cut() {
        let renderer = plain();
        let chart = renderer.chart(&Snapshot::new(vec![12345, -1000, 7]));
        let text = chart.join("\n");
        assert!(text.contains("12345"), "label for 12345 missing");
        assert!(text.contains("-1000"), "label for -1000 missing");
        assert_eq!(chart.len(), renderer.chart_lines());

        // Six-character columns keep bars and indices aligned.
        assert_eq!(chart[0], "12345");
        assert_eq!(chart[9], format!("███{}7", " ".repeat(11)));
        assert_eq!(chart[10], "███   -1000 ███");
        assert_eq!(chart[12], "  0     1     2");
    }

    #[test]
    fn wide_columns_move_the_swap_arrow() {
        let renderer = plain();
        let swapped = Snapshot::new(vec![-1000, 12345])
            .at(SourceLine::Swap)
            .with_pair((0, 1))
            .swapping();
        let chart = renderer.chart(&swapped);
        assert_eq!(chart[13], " ▲     │");
        assert_eq!(chart[14], " ╰─────╯ swap");
    }

    #[test]
    fn index_row_lists_positions() {
        let renderer = plain();
        let chart = renderer.chart(&Snapshot::new(vec![1, 2, 3]));
        assert_eq!(chart[12], " 0   1   2");
    }

    #[test]
    fn arrow_only_on_swap() {
        let renderer = plain();
        let compare = Snapshot::new(vec![30, 20])
            .at(SourceLine::Compare)
            .with_pair((0, 1));
        let chart = renderer.chart(&compare);
        assert!(chart[13].is_empty());
        assert!(chart[14].is_empty());

        let swapped = Snapshot::new(vec![20, 30])
            .at(SourceLine::Swap)
            .with_pair((0, 1))
            .swapping();
        let chart = renderer.chart(&swapped);
        assert_eq!(chart[13], " ▲   │");
        assert_eq!(chart[14], " ╰───╯ swap");
    }

    #[test]
    fn pair_is_colored_distinctly() {
        let renderer = Renderer::new(RenderConfig::new().with_height(4));
        let snap = Snapshot::new(vec![100, 100, 100]).with_pair((1, 2));
        let chart = renderer.chart(&snap);
        let row = &chart[1];
        assert_eq!(row.matches(PAIR_COLOR).count(), 2);
        assert_eq!(row.matches(BAR_COLOR).count(), 1);
    }

    #[test]
    fn frame_header_and_listing() {
        let renderer = plain();
        let trace = record(&[3, 1, 2]);
        let frame = renderer.frame(goto(&trace, 0), trace.len());
        assert!(frame.starts_with(&format!("{TITLE}   frame 1/{}", trace.len())));
        assert!(frame.contains("▶ n = 3"));
        assert!(frame.contains("n = len(a)  # <--- RUNNING"));
    }

    #[test]
    fn frame_for_empty_trace() {
        let renderer = plain();
        let trace = Trace::empty();
        let frame = renderer.frame(goto(&trace, 0), 0);
        assert!(frame.contains("No frames to show"));
        assert!(!frame.contains("RUNNING"));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn strip(text: &str) -> String {
            let mut out = String::new();
            let mut in_escape = false;
            for c in text.chars() {
                match c {
                    '\x1b' => in_escape = true,
                    'm' if in_escape => in_escape = false,
                    _ if in_escape => {}
                    _ => out.push(c),
                }
            }
            out
        }

        proptest! {
            #[test]
            fn chart_shape_and_labels(
                values in prop::collection::vec(any::<i64>(), 1..=20),
                color in any::<bool>(),
            ) {
                let renderer = Renderer::new(RenderConfig::new().with_height(8).with_color(color));
                let chart = renderer.chart(&Snapshot::new(values.clone()));
                prop_assert_eq!(chart.len(), renderer.chart_lines());

                let text = strip(&chart.join("\n"));
                for value in &values {
                    prop_assert!(text.contains(&value.to_string()), "label {} missing", value);
                }
            }
        }
    }
}
