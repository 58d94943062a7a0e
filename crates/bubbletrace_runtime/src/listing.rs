//! The pseudocode listing shown next to each frame.

use bubbletrace_foundation::SourceLine;

/// The 13-line bubble sort listing. Line numbers are 1-based.
pub const CODE_LINES: [&str; 13] = [
    "def bubble_sort(a):",
    "    \"\"\"Sort list in ascending order.\"\"\"",
    "    n = len(a)",
    "    swapped = True",
    "    while swapped:",
    "        swapped = False",
    "        i = 1",
    "        while i < n:",
    "            if a[i-1] > a[i]:",
    "                a[i-1], a[i] = a[i], a[i-1]",
    "                swapped = True",
    "            i += 1",
    "        n -= 1",
];

/// Suffix appended to the executing line.
pub const RUNNING_MARKER: &str = "  # <--- RUNNING";

/// Renders the listing with the executing line marked.
#[derive(Clone, Copy, Debug, Default)]
pub struct Listing {
    color: bool,
    numbered: bool,
}

impl Listing {
    /// Creates a plain, unnumbered listing renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: false,
            numbered: false,
        }
    }

    /// Builder method to enable ANSI colors.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder method to prefix line numbers.
    #[must_use]
    pub const fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }

    /// Returns the listing with `active` annotated; `None` returns it unannotated.
    #[must_use]
    pub fn render(&self, active: Option<SourceLine>) -> String {
        let active = active.map(SourceLine::line_number);

        CODE_LINES
            .iter()
            .enumerate()
            .map(|(idx, content)| {
                let line_num = idx + 1;
                let prefix = if self.numbered {
                    format!("{line_num:>2} ")
                } else {
                    String::new()
                };

                if Some(line_num) != active {
                    return format!("{prefix}{content}");
                }

                if self.color {
                    format!("\x1b[1;32m{prefix}{content}\x1b[0m\x1b[33m{RUNNING_MARKER}\x1b[0m")
                } else {
                    format!("{prefix}{content}{RUNNING_MARKER}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
