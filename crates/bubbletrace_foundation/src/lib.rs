//! Core types and errors for Bubbletrace.
//!
//! This crate provides:
//! - [`Snapshot`] - One instant of a bubble sort run: array state plus annotation
//! - [`SourceLine`] - Symbolic program counter into the pseudocode listing
//! - [`Error`] - Categorized error type shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod snapshot;

pub use error::{Error, ErrorKind, Result};
pub use snapshot::{ComparedPair, Snapshot, SourceLine};
