//! Playback over a recorded trace.
//!
//! Navigation is index based and always clamped to the trace bounds: stepping
//! past either end stays on the first or last snapshot, never wraps, and
//! never fails.
//!
//! # Example
//!
//! ```
//! use bubbletrace_debug::{Cursor, record_text};
//!
//! let trace = record_text("3,1,2");
//! let mut cursor = Cursor::new();
//! cursor.next(&trace);
//! assert_eq!(cursor.index(), 1);
//! cursor.goto(&trace, 10_000);
//! assert_eq!(cursor.index(), trace.len() - 1);
//! ```

pub mod cursor;

pub use cursor::{Cursor, Playback, clamp_index, goto, step};
