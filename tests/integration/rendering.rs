//! Rendering tests
//!
//! Renders recorded traces and checks what a viewer would see.

use bubbletrace_debug::{goto, record, record_text};
use bubbletrace_runtime::{Listing, RenderConfig, Renderer};
use bubbletrace_runtime::listing::{CODE_LINES, RUNNING_MARKER};

fn plain() -> Renderer {
    Renderer::new(RenderConfig::plain())
}

#[test]
fn every_frame_marks_its_line() {
    let trace = record(&[5, 2, 8, 1]);
    let renderer = plain();
    for (i, snapshot) in trace.iter().enumerate() {
        let frame = renderer.frame(goto(&trace, isize::try_from(i).unwrap()), trace.len());
        let line = snapshot.source_line().unwrap().line_number();
        let expected = format!("{}{RUNNING_MARKER}", CODE_LINES[line - 1]);
        assert!(frame.contains(&expected), "frame {i} should mark line {line}");
        assert_eq!(frame.matches(RUNNING_MARKER).count(), 1);
    }
}

#[test]
fn frames_have_constant_height() {
    let trace = record_text("100, 0, 55, 3");
    let renderer = plain();
    let heights: Vec<usize> = (0..trace.len())
        .map(|i| {
            renderer
                .frame(goto(&trace, isize::try_from(i).unwrap()), trace.len())
                .lines()
                .count()
        })
        .collect();
    assert!(heights.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn swap_frames_draw_an_arrow() {
    let trace = record_text("2,1");
    let renderer = plain();
    for (i, snapshot) in trace.iter().enumerate() {
        let frame = renderer.frame(goto(&trace, isize::try_from(i).unwrap()), trace.len());
        assert_eq!(frame.contains("╯ swap"), snapshot.is_swap(), "frame {i}");
    }
}

#[test]
fn plain_output_has_no_escapes() {
    let trace = record_text("3,1,2");
    let frame = plain().frame(goto(&trace, 6), trace.len());
    assert!(!frame.contains('\x1b'));
}

#[test]
fn listing_without_line_is_plain() {
    assert_eq!(Listing::new().render(None), CODE_LINES.join("\n"));
}
