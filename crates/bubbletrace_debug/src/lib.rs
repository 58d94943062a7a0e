//! Trace recording and playback for Bubbletrace.
//!
//! This crate provides:
//! - [`Recorder`] - Runs an instrumented bubble sort and records a [`Trace`]
//! - [`Cursor`] - Clamped navigation over a recorded trace
//! - [`PlaybackConfig`] - Speed level and input limits

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod timeline;
pub mod trace;

pub use config::{PlaybackConfig, SpeedLevel};
pub use timeline::{Cursor, Playback, goto, step};
pub use trace::{
    HumanFormatter, MAX_INPUT_LEN, Recorder, Steps, Trace, TraceFormatter, TraceSummary,
    parse_input, record, record_text,
};
