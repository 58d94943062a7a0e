//! Configuration for recording and playback.

use std::fmt;
use std::time::Duration;

use crate::trace::MAX_INPUT_LEN;

// =============================================================================
// Speed Level
// =============================================================================

/// Auto-play speed on a 1 (slowest) to 10 (fastest) scale.
///
/// The tick delay falls linearly from 1.5 s at level 1 to 0.2 s at level 10
/// in nine equal steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    /// Slowest level.
    pub const MIN: Self = Self(1);
    /// Fastest level.
    pub const MAX: Self = Self(10);
    /// Level used when nothing else is configured.
    pub const NORMAL: Self = Self(5);

    /// Delay at the slowest level, in seconds.
    pub const SLOWEST_DELAY_SECS: f64 = 1.5;
    /// Delay at the fastest level, in seconds.
    pub const FASTEST_DELAY_SECS: f64 = 0.2;

    /// Creates a speed level, clamping into `1..=10`.
    #[must_use]
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Creates a speed level, or `None` if `level` is outside `1..=10`.
    #[must_use]
    pub fn checked(level: i64) -> Option<Self> {
        u8::try_from(level)
            .ok()
            .filter(|l| (Self::MIN.0..=Self::MAX.0).contains(l))
            .map(Self)
    }

    /// Returns the raw level.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the tick delay in seconds.
    #[must_use]
    pub fn delay_secs(self) -> f64 {
        let step = (Self::SLOWEST_DELAY_SECS - Self::FASTEST_DELAY_SECS)
            / f64::from(Self::MAX.0 - Self::MIN.0);
        Self::SLOWEST_DELAY_SECS - f64::from(self.0 - Self::MIN.0) * step
    }

    /// Returns the tick delay.
    #[must_use]
    pub fn delay(self) -> Duration {
        Duration::from_secs_f64(self.delay_secs())
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {} ({:.2}s)", self.0, self.delay_secs())
    }
}

// =============================================================================
// Playback Configuration
// =============================================================================

/// Configuration for recording and auto-play.
#[derive(Clone, Debug)]
pub struct PlaybackConfig {
    /// Auto-play speed.
    pub speed: SpeedLevel,

    /// Inputs longer than this are truncated before recording.
    pub max_input_len: usize,

    /// Whether auto-play stops by itself on the last frame.
    pub stop_at_end: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: SpeedLevel::NORMAL,
            max_input_len: MAX_INPUT_LEN,
            stop_at_end: true,
        }
    }
}

impl PlaybackConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that plays at the fastest speed.
    #[must_use]
    pub fn fastest() -> Self {
        Self {
            speed: SpeedLevel::MAX,
            ..Self::default()
        }
    }

    /// Creates a configuration that plays at the slowest speed.
    #[must_use]
    pub fn slowest() -> Self {
        Self {
            speed: SpeedLevel::MIN,
            ..Self::default()
        }
    }

    /// Builder method to set the speed level.
    #[must_use]
    pub const fn with_speed(mut self, speed: SpeedLevel) -> Self {
        self.speed = speed;
        self
    }

    /// Builder method to set the input length cap.
    #[must_use]
    pub const fn with_max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len;
        self
    }

    /// Builder method to control whether auto-play stops at the last frame.
    #[must_use]
    pub const fn with_stop_at_end(mut self, stop: bool) -> Self {
        self.stop_at_end = stop;
        self
    }
}
