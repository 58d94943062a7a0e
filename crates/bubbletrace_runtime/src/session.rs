//! Session state for the REPL.
//!
//! A session owns the current input text, the trace recorded from it, and the
//! cursor into that trace. Recording a new trace supersedes the old one and
//! resets the cursor to the first frame.

use bubbletrace_debug::{Cursor, Playback, PlaybackConfig, Recorder, SpeedLevel, Trace, goto};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Input shown when a session starts.
pub const DEFAULT_INPUT: &str =
    "50, 6, 30, 12, 88, 7, 25, 4, 99, 10, 45, 67, 2, 8, 15, 77, 33, 1, 9, 20";

/// Values produced by [`Session::randomize_input`] fall in this range.
pub const RANDOM_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// Session state for one interactive user.
pub struct Session {
    /// Text the next `generate` records from.
    input: String,

    /// The trace recorded by the last `generate`.
    trace: Trace,

    /// Playback position within `trace`.
    cursor: Cursor,

    /// Playback settings.
    config: PlaybackConfig,

    /// Whether auto-play is running.
    playing: bool,

    /// Generator for random inputs.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a session with default settings and an entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PlaybackConfig::default())
    }

    /// Creates a session with the given playback settings.
    #[must_use]
    pub fn with_config(config: PlaybackConfig) -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            trace: Trace::empty(),
            cursor: Cursor::new(),
            config,
            playing: false,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Builder method to seed the random input generator.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Builder method to set the input text.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// Returns the input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input text without recording.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Fills the input with random values and returns the new text.
    ///
    /// Produces as many values as the input cap allows.
    pub fn randomize_input(&mut self) -> &str {
        let count = self.config.max_input_len;
        let values: Vec<String> = (0..count)
            .map(|_| self.rng.gen_range(RANDOM_RANGE).to_string())
            .collect();
        self.input = values.join(",");
        debug!(count, "randomized input");
        &self.input
    }

    /// Records a new trace from the current input and rewinds to its first frame.
    ///
    /// Unusable input records an empty trace.
    pub fn generate(&mut self) -> Playback<'_> {
        let recorder = Recorder::from_config(&self.config);
        self.trace = recorder.record_text(&self.input);
        self.cursor.reset();
        self.playing = false;

        info!(frames = self.trace.len(), "generated trace");
        goto(&self.trace, 0)
    }

    /// Replaces the input with `text`, then records it.
    pub fn generate_from(&mut self, text: impl Into<String>) -> Playback<'_> {
        self.input = text.into();
        self.generate()
    }

    /// Returns the current trace.
    #[must_use]
    pub const fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Returns the cursor.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> Playback<'_> {
        let index = isize::try_from(self.cursor.index()).unwrap_or(isize::MAX);
        goto(&self.trace, index)
    }

    /// Jumps to `index` (clamped).
    pub fn goto(&mut self, index: isize) -> Playback<'_> {
        self.cursor.goto(&self.trace, index);
        self.current()
    }

    /// Moves `delta` frames (clamped).
    pub fn step(&mut self, delta: isize) -> Playback<'_> {
        self.cursor.step(&self.trace, delta);
        self.current()
    }

    /// Moves to the next frame.
    pub fn next(&mut self) -> Playback<'_> {
        self.step(1)
    }

    /// Moves to the previous frame.
    pub fn prev(&mut self) -> Playback<'_> {
        self.step(-1)
    }

    /// Jumps to the first frame.
    pub fn first(&mut self) -> Playback<'_> {
        self.goto(0)
    }

    /// Jumps to the last frame.
    pub fn last(&mut self) -> Playback<'_> {
        self.goto(isize::MAX)
    }

    /// Advances one auto-play tick.
    ///
    /// Uses the same path as [`Session::next`]. When the cursor reaches the
    /// last frame and `stop_at_end` is set, auto-play is switched off.
    pub fn tick(&mut self) -> Playback<'_> {
        self.cursor.next(&self.trace);

        if self.config.stop_at_end && self.cursor.is_at_end(&self.trace) {
            debug!(index = self.cursor.index(), "auto-play reached last frame");
            self.playing = false;
        }

        self.current()
    }

    /// Returns true if the cursor is on the last frame (or there are none).
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end(&self.trace)
    }

    /// Returns whether auto-play is running.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Starts auto-play. Returns false if there is nothing to play.
    pub fn play(&mut self) -> bool {
        self.playing = !self.trace.is_empty();
        self.playing
    }

    /// Stops auto-play.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Returns the auto-play speed.
    #[must_use]
    pub const fn speed(&self) -> SpeedLevel {
        self.config.speed
    }

    /// Sets the auto-play speed.
    pub fn set_speed(&mut self, speed: SpeedLevel) {
        debug!(level = speed.get(), "speed changed");
        self.config.speed = speed;
    }

    /// Returns the playback settings.
    #[must_use]
    pub const fn config(&self) -> &PlaybackConfig {
        &self.config
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
