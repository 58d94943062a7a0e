//! Terminal front end for Bubbletrace.
//!
//! This crate provides:
//! - [`Renderer`] - Fixed-scale bar chart frames for snapshots
//! - [`Listing`] - The pseudocode listing with the executing line marked
//! - [`Session`] - Trace and cursor owned by one interactive session
//! - [`Player`] - Auto-play driven by a [`Ticker`]
//! - [`Repl`] - Interactive command loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod editor;
pub mod export;
pub mod highlight;
pub mod listing;
pub mod player;
pub mod render;
pub mod repl;
pub mod session;

pub use command::Command;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use listing::Listing;
pub use player::{PlayReport, Player, StopReason, TerminalTicker, TickOutcome, Ticker};
pub use render::{RenderConfig, Renderer};
pub use repl::Repl;
pub use session::{DEFAULT_INPUT, Session};
