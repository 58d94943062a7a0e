//! Property tests for recorded traces

use bubbletrace_debug::{MAX_INPUT_LEN, record, record_text};
use bubbletrace_foundation::SourceLine;
use proptest::prelude::*;

fn input() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 0..=MAX_INPUT_LEN)
}

proptest! {
    #[test]
    fn first_is_input_and_last_is_sorted(values in input()) {
        let trace = record(&values);
        if values.is_empty() {
            prop_assert!(trace.is_empty());
        } else {
            let mut sorted = values.clone();
            sorted.sort_unstable();
            prop_assert_eq!(trace.first().unwrap().values(), values.as_slice());
            prop_assert_eq!(trace.last().unwrap().values(), sorted.as_slice());
        }
    }

    #[test]
    fn long_inputs_are_truncated(values in prop::collection::vec(any::<i64>(), MAX_INPUT_LEN..40)) {
        let trace = record(&values);
        prop_assert_eq!(trace.first().unwrap().values(), &values[..MAX_INPUT_LEN]);
    }

    #[test]
    fn every_snapshot_keeps_the_multiset(values in input()) {
        let mut expected = values.clone();
        expected.sort_unstable();
        for snapshot in &record(&values) {
            let mut seen = snapshot.values().to_vec();
            seen.sort_unstable();
            prop_assert_eq!(&seen, &expected);
        }
    }

    #[test]
    fn swaps_are_adjacent_and_in_bounds(values in input()) {
        for snapshot in &record(&values) {
            if let Some(pair) = snapshot.highlighted_pair() {
                prop_assert_eq!(pair.left + 1, pair.right);
                prop_assert!(pair.right < snapshot.values().len());
            }
            if snapshot.is_swap() {
                prop_assert_eq!(snapshot.source_line(), Some(SourceLine::Swap));
                let pair = snapshot.highlighted_pair().unwrap();
                prop_assert!(snapshot.values()[pair.left] < snapshot.values()[pair.right]);
            }
        }
    }

    #[test]
    fn text_and_values_agree(values in input()) {
        let text = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        prop_assert_eq!(record_text(&text), record(&values));
    }
}
