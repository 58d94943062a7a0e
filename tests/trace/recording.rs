//! Recording tests
//!
//! Tests text input through to recorded snapshots.

use bubbletrace_debug::{Recorder, parse_input, record, record_text};
use bubbletrace_foundation::{ComparedPair, ErrorKind, SourceLine};

// =============================================================================
// Text Input
// =============================================================================

#[test]
fn sample_input_sorts() {
    let trace = record_text("3,1,2");
    assert_eq!(trace.first().unwrap().values(), &[3, 1, 2]);
    assert_eq!(trace.last().unwrap().values(), &[1, 2, 3]);
}

#[test]
fn full_width_commas_and_spaces() {
    let trace = record_text(" 3 ，1,, 2 ,");
    assert_eq!(trace.first().unwrap().values(), &[3, 1, 2]);
}

#[test]
fn unusable_text_gives_empty_trace() {
    assert!(record_text("abc").is_empty());
    assert!(record_text("").is_empty());
    assert!(record_text(" , ,").is_empty());
}

#[test]
fn parse_errors_are_classified() {
    let err = parse_input("1, x").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidNumber { ref token } if token == "x"));
    assert!(err.is_unusable_input());

    let err = parse_input("").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyInput));
}

// =============================================================================
// Snapshot Ordering
// =============================================================================

#[test]
fn swap_of_first_pair_precedes_sorted_state() {
    let trace = record_text("3,1,2");
    let swap = trace
        .iter()
        .position(|s| s.is_swap() && s.highlighted_pair() == Some(ComparedPair::new(0, 1)))
        .unwrap();
    let sorted = trace.iter().position(|s| s.values() == [1, 2, 3]).unwrap();
    assert!(swap <= sorted);
    assert_eq!(trace.get(swap).unwrap().values(), &[1, 3, 2]);
}

#[test]
fn sorted_input_compares_without_swapping() {
    let trace = record_text("1,2,3");
    assert!(trace.iter().any(|s| s.source_line() == Some(SourceLine::InnerTest)));
    assert!(trace.iter().all(|s| !s.is_swap()));
    assert!(trace.position_of(SourceLine::Swap).is_none());
}

#[test]
fn sorted_input_keeps_quadratic_shape() {
    // One pass over a sorted list: n - 1 comparisons.
    let summary = record(&[1, 2, 3, 4, 5]).summary();
    assert_eq!(summary.comparisons, 4);
    assert_eq!(summary.swaps, 0);
    assert_eq!(summary.passes, 1);
}

#[test]
fn reversed_input_statistics() {
    let summary = record(&[4, 3, 2, 1]).summary();
    assert_eq!(summary.elements, 4);
    assert_eq!(summary.swaps, 6);
    assert_eq!(summary.comparisons, 3 + 2 + 1);
}

#[test]
fn first_snapshot_starts_at_length_init() {
    let trace = record(&[9, 4]);
    assert_eq!(
        trace.first().unwrap().source_line(),
        Some(SourceLine::LengthInit)
    );
    assert_eq!(
        trace.last().unwrap().source_line(),
        Some(SourceLine::BoundShrink)
    );
}

#[test]
fn duplicates_are_not_swapped() {
    let trace = record(&[2, 2, 2]);
    assert_eq!(trace.summary().swaps, 0);
}

#[test]
fn lazy_steps_match_eager_trace() {
    let recorder = Recorder::new();
    let eager = recorder.record(&[5, 1, 4, 2, 8]);
    let lazy: Vec<_> = recorder.steps(&[5, 1, 4, 2, 8]).collect();
    assert_eq!(eager.as_slice(), lazy.as_slice());
}
