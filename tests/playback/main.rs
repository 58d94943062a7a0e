//! Integration tests for playback
//!
//! Tests clamped cursor navigation and speed level delays.

mod cursor;
mod speed;
