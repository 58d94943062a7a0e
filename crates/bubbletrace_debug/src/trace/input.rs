//! Parsing of free-text input lists.

use std::num::IntErrorKind;

use bubbletrace_foundation::{Error, ErrorKind, Result};

/// Full-width comma accepted as a separator.
const FULLWIDTH_COMMA: char = '\u{FF0C}';

/// Parses a comma-separated list of integers.
///
/// Tokens are trimmed and empty tokens skipped, so `"1,,2, "` is `[1, 2]`.
/// The full-width comma `，` separates tokens like `,` does.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidNumber`] for the first token that is not an
/// integer, [`ErrorKind::NumberOutOfRange`] for one that overflows `i64`, and
/// [`ErrorKind::EmptyInput`] if no tokens remain.
pub fn parse_input(text: &str) -> Result<Vec<i64>> {
    let values = text
        .split([',', FULLWIDTH_COMMA])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        return Err(Error::new(ErrorKind::EmptyInput));
    }

    Ok(values)
}

fn parse_token(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::number_out_of_range(token),
        _ => Error::invalid_number(token),
    })
}
