//! Session flow tests
//!
//! Drives a session the way the REPL does: generate, navigate, auto-play,
//! regenerate.

use std::time::Duration;

use bubbletrace_debug::{PlaybackConfig, SpeedLevel};
use bubbletrace_foundation::Result;
use bubbletrace_runtime::{
    DEFAULT_INPUT, Player, RenderConfig, Renderer, Session, StopReason, TickOutcome, Ticker,
};

/// Ticker that never waits and never pauses.
struct Immediate;

impl Ticker for Immediate {
    fn wait(&mut self, _delay: Duration) -> Result<TickOutcome> {
        Ok(TickOutcome::Elapsed)
    }
}

#[test]
fn generate_navigate_regenerate() {
    let mut session = Session::new();
    assert_eq!(session.input(), DEFAULT_INPUT);

    let first = session.generate();
    assert_eq!(first.index, 0);
    let len = session.trace().len();

    session.goto(10);
    session.next();
    assert_eq!(session.cursor().index(), 11);

    // A new trace supersedes the old one and rewinds the cursor.
    session.generate_from("2, 1");
    assert_ne!(session.trace().len(), len);
    assert_eq!(session.cursor().index(), 0);
    assert_eq!(session.current().snapshot.unwrap().values(), &[2, 1]);
}

#[test]
fn autoplay_uses_the_same_path_as_next() {
    let mut manual = Session::new().with_input("4,2,3,1");
    manual.generate();
    let mut expected = Vec::new();
    while !manual.is_at_end() {
        expected.push(manual.next().snapshot.cloned().unwrap());
    }

    let mut auto = Session::new().with_input("4,2,3,1");
    auto.generate();
    let renderer = Renderer::new(RenderConfig::plain());
    let mut ticker = Immediate;
    let mut out = Vec::new();
    let report = Player::new(&mut ticker, &renderer)
        .with_clear_screen(false)
        .play(&mut auto, &mut out, None)
        .unwrap();

    assert_eq!(report.reason, StopReason::End);
    assert_eq!(report.frames, expected.len());
    assert_eq!(auto.current().snapshot, manual.current().snapshot);
}

#[test]
fn unusable_input_degrades() {
    let mut session = Session::new();
    for text in ["abc", "", "1,,x"] {
        let playback = session.generate_from(text);
        assert!(playback.is_empty());
        assert!(session.next().is_empty());
        assert!(session.prev().is_empty());
        assert!(session.goto(3).is_empty());
    }
}

#[test]
fn configured_cap_applies_to_random_and_recording() {
    let config = PlaybackConfig::new()
        .with_max_input_len(5)
        .with_speed(SpeedLevel::MAX);
    let mut session = Session::with_config(config).with_seed(11);
    session.randomize_input();
    assert_eq!(session.input().split(',').count(), 5);

    session.generate_from("9,8,7,6,5,4,3");
    assert_eq!(session.trace().first().unwrap().values(), &[9, 8, 7, 6, 5]);
}
