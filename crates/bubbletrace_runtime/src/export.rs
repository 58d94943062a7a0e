//! JSON export of recorded traces.
//!
//! Each frame is written as the snapshot's fields plus its position in the
//! trace and the 1-based listing line it highlights.

use std::io::Write;

use bubbletrace_debug::Trace;
use bubbletrace_foundation::{Error, ErrorKind, Result, Snapshot};
use serde::Serialize;

/// One exported frame.
#[derive(Debug, Serialize)]
struct Frame<'a> {
    index: usize,
    line_number: Option<usize>,
    #[serde(flatten)]
    snapshot: &'a Snapshot,
}

fn frames(trace: &Trace) -> Vec<Frame<'_>> {
    trace
        .iter()
        .enumerate()
        .map(|(index, snapshot)| Frame {
            index,
            line_number: snapshot.source_line().map(|l| l.line_number()),
            snapshot,
        })
        .collect()
}

fn serialization_error(e: &serde_json::Error) -> Error {
    Error::new(ErrorKind::SerializationError(e.to_string()))
}

/// Serializes a trace to a JSON array, one object per frame.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(trace: &Trace) -> Result<String> {
    serde_json::to_string(&frames(trace)).map_err(|e| serialization_error(&e))
}

/// Serializes a trace to indented JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty(trace: &Trace) -> Result<String> {
    serde_json::to_string_pretty(&frames(trace)).map_err(|e| serialization_error(&e))
}

/// Writes a trace as indented JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(trace: &Trace, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &frames(trace)).map_err(|e| serialization_error(&e))?;
    writeln!(out)?;
    Ok(())
}
