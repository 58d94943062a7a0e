//! Cross-layer integration tests for Bubbletrace
//!
//! Tests that verify correct interaction between the recorder, the session,
//! and the renderer.

mod rendering;
mod session_flow;
