//! Bubbletrace - Step-through bubble sort visualizer
//!
//! This crate re-exports all layers of the Bubbletrace system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: bubbletrace_runtime    — Rendering, listing, session, REPL, CLI, JSON export
//! Layer 1: bubbletrace_debug      — Trace recorder, input parsing, trace buffer, playback cursor
//! Layer 0: bubbletrace_foundation — Core types (Snapshot, SourceLine, Error)
//! ```

pub use bubbletrace_debug as debug;
pub use bubbletrace_foundation as foundation;
pub use bubbletrace_runtime as runtime;
