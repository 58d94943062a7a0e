//! Auto-play.
//!
//! The player advances the session one frame per tick and redraws. The wait
//! between ticks is delegated to a [`Ticker`], so the terminal key polling
//! can be replaced in tests.

use std::io::Write;
use std::time::{Duration, Instant};

use bubbletrace_debug::SpeedLevel;
use bubbletrace_foundation::{Error, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;
use tracing::{debug, info};

use crate::render::Renderer;
use crate::session::Session;

/// Clears the screen and homes the cursor.
pub const CLEAR: &str = "\x1b[2J\x1b[H";

// =============================================================================
// Ticker
// =============================================================================

/// What happened while waiting for the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The delay elapsed without input.
    Elapsed,
    /// The user asked to pause.
    Pause,
    /// The user asked for one speed level faster.
    Faster,
    /// The user asked for one speed level slower.
    Slower,
}

/// Waits between auto-play frames.
pub trait Ticker {
    /// Waits up to `delay`, returning early on user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source fails.
    fn wait(&mut self, delay: Duration) -> Result<TickOutcome>;
}

/// Ticker that polls the terminal for key presses.
///
/// Raw mode is enabled only while polling so a single key press is seen
/// without waiting for Enter.
#[derive(Debug, Default)]
pub struct TerminalTicker;

impl TerminalTicker {
    /// Creates a terminal ticker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Leaves raw mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|e| Error::terminal(e.to_string()))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Maps a terminal event to a playback request.
///
/// Only key presses count; resizes and key releases return `None`.
fn key_outcome(event: &Event) -> Option<TickOutcome> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(match key.code {
            KeyCode::Char('+' | '=') => TickOutcome::Faster,
            KeyCode::Char('-' | '_') => TickOutcome::Slower,
            _ => TickOutcome::Pause,
        }),
        _ => None,
    }
}

impl Ticker for TerminalTicker {
    fn wait(&mut self, delay: Duration) -> Result<TickOutcome> {
        let _raw = RawModeGuard::enable()?;
        let deadline = Instant::now() + delay;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero()
                || !event::poll(remaining).map_err(|e| Error::terminal(e.to_string()))?
            {
                return Ok(TickOutcome::Elapsed);
            }

            let event = event::read().map_err(|e| Error::terminal(e.to_string()))?;
            if let Some(outcome) = key_outcome(&event) {
                return Ok(outcome);
            }
            // Ignored events keep waiting out the rest of the delay.
        }
    }
}

// =============================================================================
// Player
// =============================================================================

/// Why auto-play ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The last frame was reached.
    End,
    /// The user paused.
    Paused,
    /// The requested number of frames was shown.
    FrameLimit,
    /// There was no trace to play.
    Empty,
}

/// Summary of one auto-play run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayReport {
    /// Frames advanced.
    pub frames: usize,
    /// Why playback stopped.
    pub reason: StopReason,
}

/// Drives auto-play for a session.
pub struct Player<'a, T: Ticker> {
    ticker: &'a mut T,
    renderer: &'a Renderer,
    clear_screen: bool,
}

impl<'a, T: Ticker> Player<'a, T> {
    /// Creates a player that waits with `ticker` and draws with `renderer`.
    pub fn new(ticker: &'a mut T, renderer: &'a Renderer) -> Self {
        Self {
            ticker,
            renderer,
            clear_screen: true,
        }
    }

    /// Builder method to control whether each frame clears the screen.
    #[must_use]
    pub const fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    fn draw(&self, session: &Session, out: &mut dyn Write) -> Result<()> {
        if self.clear_screen {
            write!(out, "{CLEAR}")?;
        }
        let frame = self.renderer.frame(session.current(), session.trace().len());
        writeln!(out, "{frame}")?;
        writeln!(out, "[playing at {}; any key pauses, +/- change speed]", session.speed())?;
        out.flush()?;
        Ok(())
    }

    /// Plays until the end of the trace, a pause, or `max_frames` advances.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output or waiting on the ticker fails.
    pub fn play(
        &mut self,
        session: &mut Session,
        out: &mut dyn Write,
        max_frames: Option<usize>,
    ) -> Result<PlayReport> {
        if !session.play() {
            return Ok(PlayReport {
                frames: 0,
                reason: StopReason::Empty,
            });
        }

        info!(speed = session.speed().get(), "auto-play started");
        let mut frames = 0;

        let reason = loop {
            if !session.is_playing() || (session.is_at_end() && session.config().stop_at_end) {
                break StopReason::End;
            }
            if max_frames.is_some_and(|max| frames >= max) {
                break StopReason::FrameLimit;
            }

            match self.ticker.wait(session.speed().delay())? {
                TickOutcome::Elapsed => {
                    session.tick();
                    frames += 1;
                    self.draw(session, out)?;
                }
                TickOutcome::Pause => break StopReason::Paused,
                TickOutcome::Faster => {
                    let level = session.speed().get().saturating_add(1);
                    session.set_speed(SpeedLevel::new(level));
                }
                TickOutcome::Slower => {
                    let level = session.speed().get().saturating_sub(1);
                    session.set_speed(SpeedLevel::new(level));
                }
            }
        };

        session.pause();
        debug!(frames, ?reason, "auto-play stopped");
        Ok(PlayReport { frames, reason })
    }
}

// =============================================================================
// Tests
// =============================================================================
