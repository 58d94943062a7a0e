//! Integration tests for trace recording
//!
//! Tests the recorder end to end: text input, snapshot ordering, and the
//! properties every trace must hold.

mod properties;
mod recording;
