//! Cursor navigation tests
//!
//! Tests goto/step clamping and the Cursor wrapper.

use bubbletrace_debug::{Cursor, Trace, goto, record, record_text, step};
use proptest::prelude::*;

// =============================================================================
// Clamping
// =============================================================================

#[test]
fn stepping_past_end_repeats_last() {
    let trace = record_text("3,1,2");
    let last = trace.len() - 1;
    let mut index = 0;
    for _ in 0..trace.len() + 5 {
        index = step(&trace, index, 1).index;
    }
    let playback = step(&trace, index, 1);
    assert_eq!(playback.index, last);
    assert_eq!(playback.snapshot, trace.last());
}

#[test]
fn stepping_before_start_repeats_first() {
    let trace = record_text("3,1,2");
    let playback = step(&trace, 0, -3);
    assert_eq!(playback.index, 0);
    assert_eq!(playback.snapshot, trace.first());
}

#[test]
fn empty_trace_has_no_snapshot() {
    for trace in [record_text("abc"), record_text(""), Trace::empty()] {
        assert!(goto(&trace, 0).is_empty());
        assert!(step(&trace, 0, 1).is_empty());
        assert!(step(&trace, 4, -1).is_empty());
        assert_eq!(goto(&trace, 7).index, 0);
    }
}

#[test]
fn cursor_walks_whole_trace() {
    let trace = record(&[4, 1, 3]);
    let mut cursor = Cursor::new();
    let mut seen = vec![cursor.current(&trace).cloned().unwrap()];
    while !cursor.is_at_end(&trace) {
        seen.push(cursor.next(&trace).cloned().unwrap());
    }
    assert_eq!(seen.as_slice(), trace.as_slice());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn goto_valid_index_is_identity(values in prop::collection::vec(0i64..100, 1..8), pick in any::<prop::sample::Index>()) {
        let trace = record(&values);
        let i = pick.index(trace.len());
        let playback = goto(&trace, isize::try_from(i).unwrap());
        prop_assert_eq!(playback.index, i);
        prop_assert_eq!(playback.snapshot, trace.get(i));
    }

    #[test]
    fn step_forward_then_back_returns(values in prop::collection::vec(0i64..100, 2..8), pick in any::<prop::sample::Index>()) {
        let trace = record(&values);
        // interior indices only: 0 < i < len - 1
        let i = 1 + pick.index(trace.len() - 2);
        let forward = step(&trace, i, 1);
        let back = step(&trace, forward.index, -1);
        prop_assert_eq!(back.index, i);
        prop_assert_eq!(back.snapshot, trace.get(i));
    }

    #[test]
    fn any_index_is_clamped(values in prop::collection::vec(0i64..100, 0..6), index in any::<isize>()) {
        let trace = record(&values);
        let playback = goto(&trace, index);
        match trace.last_index() {
            None => prop_assert!(playback.is_empty()),
            Some(last) => {
                prop_assert!(playback.index <= last);
                prop_assert!(playback.snapshot.is_some());
            }
        }
    }
}
